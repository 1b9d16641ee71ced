use crate::command_handler::CommandHandler;
use crate::errors::{CommandError, ParseError};
use crate::store::VersionStore;
use crate::versions::{Version, Versions};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// `gov <version> [args...]`: runs that version's `go` binary with stdio inherited.
#[derive(Default)]
pub struct RunHandler {
    version: Option<Version>,
    args: Vec<String>,
}

#[async_trait]
impl CommandHandler for RunHandler {
    fn parse(&mut self, args: &[String]) -> Result<(), ParseError> {
        self.version = Some(Versions::parse_version(args)?);
        self.args = args[1..].to_vec();
        Ok(())
    }

    async fn execute(&self, store: &VersionStore) -> Result<(), CommandError> {
        let version = self.version.as_ref().ok_or(ParseError::VersionRequired)?;
        let binary = store.binary_path(version);
        debug!("Running {} {:?}", binary.display(), self.args);

        let status = Command::new(&binary)
            .args(&self.args)
            .status()
            .await
            .map_err(|source| CommandError::FailedToSpawn {
                path: binary.clone(),
                source,
            })?;

        if status.success() {
            return Ok(());
        }

        // Killed by a signal: no code to forward.
        Err(CommandError::ChildExit(status.code().unwrap_or(1)))
    }
}
