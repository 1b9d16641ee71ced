use crate::command_handler::CommandHandler;
use crate::errors::{CommandError, ParseError};
use crate::store::VersionStore;
use async_trait::async_trait;

const HELP_MESSAGE: &str = "\
Gov is the GO Version manager.

It makes easy to install and uninstall Go versions.
But nothing touches anything else, GOPATH, GOROOT, or the Go binaries that already installed.

Usage:

\tgov install (version) [--default]  # Installs a specific Go version.
\t                                   # The directories that installed are as follows:
\t                                   #     Linux:   ~/.goversions/[version]/
\t                                   #     Windows: %APPDATA%\\.goversions\\[version]\\
\t                                   # ... or $GOVERSIONS_PATH(%GOVERSIONS_PATH% on Windows).
\t                                   # With --default, installs into [base]/default instead,
\t                                   # replacing whatever is there. That directory is not
\t                                   # shown by ls and is not removed by uninstall.
\tgov uninstall (version)            # Uninstall version.
\tgov ls                             # List the installed versions.
\tgov (version) [command]            # Run the command with specific version of Go binary.
\tgov help                           # Print this message

Set GOV_LOG=debug to see diagnostic output.
";

pub struct HelpHandler;

#[async_trait]
impl CommandHandler for HelpHandler {
    fn parse(&mut self, _args: &[String]) -> Result<(), ParseError> {
        Ok(())
    }

    async fn execute(&self, _store: &VersionStore) -> Result<(), CommandError> {
        print!("{HELP_MESSAGE}");
        Err(CommandError::Helped)
    }
}
