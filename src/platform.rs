use crate::versions::Version;
use std::env::consts;

/// Operating system and architecture as the Go distribution names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: &'static str,
    pub arch: &'static str,
}

impl Platform {
    pub fn current() -> Self {
        Self {
            os: Self::os_name(consts::OS),
            arch: Self::arch_name(consts::ARCH),
        }
    }

    fn os_name(os: &'static str) -> &'static str {
        match os {
            "macos" => "darwin",
            other => other,
        }
    }

    fn arch_name(arch: &'static str) -> &'static str {
        match arch {
            "x86_64" => "amd64",
            "aarch64" => "arm64",
            "x86" => "386",
            "arm" => "armv6l",
            "powerpc64" => "ppc64",
            other => other,
        }
    }

    pub fn archive_url(&self, template: &str, version: &Version) -> String {
        template
            .replace("%version%", version.as_str())
            .replace("%os%", self.os)
            .replace("%arch%", self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ARCHIVE_URL;
    use crate::versions::Versions;

    #[test]
    fn maps_rust_names_to_go_names() {
        assert_eq!(Platform::os_name("macos"), "darwin");
        assert_eq!(Platform::os_name("linux"), "linux");
        assert_eq!(Platform::arch_name("x86_64"), "amd64");
        assert_eq!(Platform::arch_name("aarch64"), "arm64");
        assert_eq!(Platform::arch_name("x86"), "386");
        assert_eq!(Platform::arch_name("riscv64"), "riscv64");
    }

    #[test]
    fn substitutes_every_token() {
        let platform = Platform {
            os: "linux",
            arch: "amd64",
        };
        let version = Versions::match_token("go1.21.0").unwrap();

        assert_eq!(
            platform.archive_url(ARCHIVE_URL, &version),
            "https://dl.google.com/go/go1.21.0.linux-amd64.zip"
        );
    }
}
