use crate::constants::{ARCHIVE_URL, BASE_DIR_NAME, BASE_PATH_ENV};
use crate::errors::CommandError;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings resolved once at startup and handed to everything that touches the
/// installation directory or the network.
#[derive(Debug, Clone)]
pub struct Config {
    base_path: PathBuf,
    archive_url: String,
}

impl Config {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            archive_url: ARCHIVE_URL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, CommandError> {
        let base_path = match env::var_os(BASE_PATH_ENV) {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => Self::default_base_path()?,
        };

        let base_path = std::path::absolute(&base_path).map_err(|e| {
            CommandError::Config(format!("cannot resolve {}: {e}", base_path.display()))
        })?;
        debug!("Base path resolved to {}", base_path.display());

        Ok(Self::new(base_path))
    }

    #[cfg(windows)]
    fn default_base_path() -> Result<PathBuf, CommandError> {
        dirs::data_dir()
            .map(|p| p.join(BASE_DIR_NAME))
            .ok_or_else(|| CommandError::Config("could not find %APPDATA%".to_string()))
    }

    #[cfg(not(windows))]
    fn default_base_path() -> Result<PathBuf, CommandError> {
        dirs::home_dir()
            .map(|p| p.join(BASE_DIR_NAME))
            .ok_or_else(|| CommandError::Config("could not find home directory".to_string()))
    }

    #[cfg(test)]
    pub fn with_archive_url(mut self, template: impl Into<String>) -> Self {
        self.archive_url = template.into();
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn archive_url(&self) -> &str {
        &self.archive_url
    }
}
