use crate::archive;
use crate::config::Config;
use crate::constants::{DEFAULT_DIR_NAME, TOOLCHAIN_BINARY};
use crate::errors::CommandError;
use crate::http::ArchiveSource;
use crate::versions::{Version, Versions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Installed toolchains, one directory per version under the base path.
pub struct VersionStore {
    config: Config,
}

impl VersionStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn install_path(&self, version: &Version) -> PathBuf {
        self.config.base_path().join(version.as_str())
    }

    pub fn default_path(&self) -> PathBuf {
        self.config.base_path().join(DEFAULT_DIR_NAME)
    }

    pub fn binary_path(&self, version: &Version) -> PathBuf {
        self.install_path(version).join(TOOLCHAIN_BINARY)
    }

    async fn exists(path: &Path) -> Result<bool, CommandError> {
        fs::try_exists(path)
            .await
            .map_err(|e| CommandError::io(path, e))
    }

    pub async fn install(
        &self,
        version: &Version,
        use_default: bool,
        source: &dyn ArchiveSource,
    ) -> Result<PathBuf, CommandError> {
        let dist_dir = if use_default {
            self.default_path()
        } else {
            self.install_path(version)
        };

        println!("Target directory: {}", dist_dir.display());

        if Self::exists(&dist_dir).await? {
            if !use_default {
                println!("Directory {} already exists!", dist_dir.display());
                return Err(CommandError::AlreadyExists(dist_dir));
            }

            info!("Replacing {}", dist_dir.display());
            fs::remove_dir_all(&dist_dir)
                .await
                .map_err(|e| CommandError::io(&dist_dir, e))?;
        }

        fs::create_dir_all(&dist_dir)
            .await
            .map_err(|e| CommandError::io(&dist_dir, e))?;

        println!("Downloading archive...");
        let archive = source.fetch(version).await?;

        println!("Unzipping archive...");
        archive::extract_zip(&archive, &dist_dir)?;

        if let Err(e) = archive.close() {
            warn!("Failed to remove temporary archive: {e}");
        }

        println!("Done!");
        Ok(dist_dir)
    }

    pub async fn uninstall(&self, version: &Version) -> Result<(), CommandError> {
        let path = self.install_path(version);

        if !Self::exists(&path).await? {
            println!("go{version} is not installed!");
            return Err(CommandError::NotInstalled(version.to_string()));
        }

        fs::remove_dir_all(&path)
            .await
            .map_err(|e| CommandError::io(&path, e))?;
        debug!("Removed {}", path.display());

        Ok(())
    }

    /// Versions whose directory name matches the version pattern, or `None` when the
    /// base path does not exist yet.
    pub async fn list(&self) -> Result<Option<Vec<Version>>, CommandError> {
        let base = self.config.base_path();

        let mut entries = match fs::read_dir(base).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CommandError::io(base, e)),
        };

        let mut versions = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CommandError::io(base, e))?
        {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };

            match Versions::match_token(name) {
                Some(version) => versions.push(version),
                None => debug!("Skipping {name}"),
            }
        }

        versions.sort();
        Ok(Some(versions))
    }
}
