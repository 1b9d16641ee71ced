use crate::command_handler::CommandHandler;
use crate::errors::{CommandError, ParseError};
use crate::store::VersionStore;
use crate::versions::{Version, Versions};
use async_trait::async_trait;

#[derive(Default)]
pub struct UninstallHandler {
    version: Option<Version>,
}

#[async_trait]
impl CommandHandler for UninstallHandler {
    fn parse(&mut self, args: &[String]) -> Result<(), ParseError> {
        self.version = Some(Versions::parse_version(args)?);
        Ok(())
    }

    async fn execute(&self, store: &VersionStore) -> Result<(), CommandError> {
        let version = self.version.as_ref().ok_or(ParseError::VersionRequired)?;
        store.uninstall(version).await
    }
}
