pub const ARCHIVE_URL: &str = "https://dl.google.com/go/go%version%.%os%-%arch%.zip";

pub const BASE_PATH_ENV: &str = "GOVERSIONS_PATH";

pub const BASE_DIR_NAME: &str = ".goversions";

pub const DEFAULT_DIR_NAME: &str = "default";

pub const LOG_ENV: &str = "GOV_LOG";

#[cfg(windows)]
pub const TOOLCHAIN_BINARY: &str = "go/bin/go.exe";
#[cfg(not(windows))]
pub const TOOLCHAIN_BINARY: &str = "go/bin/go";
