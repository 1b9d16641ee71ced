use crate::command_handler::CommandHandler;
use crate::errors::{CommandError, ParseError};
use crate::http::ArchiveSource;
use crate::store::VersionStore;
use crate::versions::{Version, Versions};
use async_trait::async_trait;

pub struct InstallHandler<S> {
    source: S,
    version: Option<Version>,
    use_default: bool,
}

impl<S: ArchiveSource> InstallHandler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            version: None,
            use_default: false,
        }
    }
}

#[async_trait]
impl<S: ArchiveSource> CommandHandler for InstallHandler<S> {
    fn parse(&mut self, args: &[String]) -> Result<(), ParseError> {
        self.version = Some(Versions::parse_version(args)?);

        let mut unknown = Vec::new();
        for arg in &args[1..] {
            match arg.as_str() {
                "--default" => self.use_default = true,
                _ => unknown.push(arg.to_string()),
            }
        }

        if !unknown.is_empty() {
            return Err(ParseError::UnknownArguments(unknown));
        }

        Ok(())
    }

    async fn execute(&self, store: &VersionStore) -> Result<(), CommandError> {
        let version = self.version.as_ref().ok_or(ParseError::VersionRequired)?;

        store.install(version, self.use_default, &self.source).await?;
        Ok(())
    }
}
