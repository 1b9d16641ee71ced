use crate::errors::ParseError;
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

lazy_static! {
    static ref VERSION_PATTERN: Regex =
        Regex::new(r"^(?:v|go)?([1-9][0-9]*\.[0-9]+\.[0-9]+)$").expect("version pattern is valid");
}

/// A `MAJOR.MINOR.PATCH` toolchain version, kept exactly as it was written so that
/// it always names the same installation directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    canonical: String,
}

/// Orders two digit strings by numeric value without a width limit.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Version {
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical
            .split('.')
            .zip(other.canonical.split('.'))
            .map(|(a, b)| compare_numeric(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.canonical.cmp(&other.canonical))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub struct Versions;
impl Versions {
    pub fn match_token(token: &str) -> Option<Version> {
        let caps = VERSION_PATTERN.captures(token)?;

        Some(Version {
            canonical: caps.get(1)?.as_str().to_string(),
        })
    }

    /// Reads the version selector from the first argument.
    pub fn parse_version(args: &[String]) -> Result<Version, ParseError> {
        let token = args.first().ok_or(ParseError::VersionRequired)?;
        Self::match_token(token).ok_or_else(|| ParseError::InvalidVersion(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strips_optional_prefixes() {
        for token in ["1.21.0", "v1.21.0", "go1.21.0"] {
            let version = Versions::match_token(token).unwrap();
            assert_eq!(version.as_str(), "1.21.0", "token {token}");
        }
    }

    #[test]
    fn keeps_digits_as_written() {
        let version = Versions::match_token("1.02.3").unwrap();
        assert_eq!(version.to_string(), "1.02.3");
        assert!(Versions::match_token("10.0.12").is_some());
    }

    #[test]
    fn accepts_components_wider_than_u64() {
        let token = "1.99999999999999999999.0";
        assert!(VERSION_PATTERN.is_match(token));

        let version = Versions::match_token(token).map(|v| v.to_string());
        assert_eq!(version.as_deref(), Some(token));

        let version = Versions::match_token("go123456789012345678901234.0.1").unwrap();
        assert_eq!(version.as_str(), "123456789012345678901234.0.1");
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in [
            "0.1.0", "01.2.3", "1.2", "1.2.3.4", "1", "", "go", "v", "vgo1.2.3", "1.2.x", "-1.2.3",
            "1.2.3-rc1", "default", "install", "go1.21.0 ",
        ] {
            assert!(Versions::match_token(token).is_none(), "token {token:?}");
        }
    }

    #[test]
    fn parse_version_requires_an_argument() {
        assert!(matches!(
            Versions::parse_version(&[]),
            Err(ParseError::VersionRequired)
        ));
    }

    #[test]
    fn parse_version_reports_the_offending_token() {
        match Versions::parse_version(&args(&["instal", "1.21.0"])) {
            Err(ParseError::InvalidVersion(token)) => assert_eq!(token, "instal"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn parse_version_only_inspects_the_first_argument() {
        let version = Versions::parse_version(&args(&["go1.20.5", "build", "./..."])).unwrap();
        assert_eq!(version.as_str(), "1.20.5");
    }

    #[test]
    fn orders_numerically() {
        let mut versions: Vec<Version> = ["1.21.0", "1.99999999999999999999.0", "1.9.2", "1.10.0"]
            .iter()
            .filter_map(|t| Versions::match_token(t))
            .collect();
        versions.sort();

        let sorted: Vec<&str> = versions.iter().map(Version::as_str).collect();
        assert_eq!(sorted, ["1.9.2", "1.10.0", "1.21.0", "1.99999999999999999999.0"]);
    }
}
