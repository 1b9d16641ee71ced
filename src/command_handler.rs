use crate::config::Config;
use crate::errors::{CommandError, ParseError};
use crate::handlers::{HelpHandler, InstallHandler, ListHandler, RunHandler, UninstallHandler};
use crate::http::HttpDownloader;
use crate::store::VersionStore;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait CommandHandler: Send + Sync {
    fn parse(&mut self, args: &[String]) -> Result<(), ParseError>;
    async fn execute(&self, store: &VersionStore) -> Result<(), CommandError>;
}

/// Routes `args` (without the program name) to a subcommand. Anything that is not a
/// known subcommand is treated as `<version> [command...]`.
pub async fn handle_args(args: Vec<String>, config: Config) -> Result<(), CommandError> {
    let store = VersionStore::new(config.clone());

    let Some((command, rest)) = args.split_first() else {
        return HelpHandler.execute(&store).await;
    };

    let is_run = !matches!(command.as_str(), "install" | "uninstall" | "ls" | "help");
    let mut command_handler: Box<dyn CommandHandler> = match command.as_str() {
        "install" => Box::new(InstallHandler::new(HttpDownloader::new(&config))),
        "uninstall" => Box::<UninstallHandler>::default(),
        "ls" => Box::new(ListHandler),
        "help" => Box::new(HelpHandler),
        _ => Box::<RunHandler>::default(),
    };
    let command_args = if is_run { &args[..] } else { rest };

    if let Err(err) = command_handler.parse(command_args) {
        if is_run {
            debug!("Not a version selector: {err}");
            println!("Unknown command: {command}");
            return Err(CommandError::UnknownCommand(command.to_string()));
        }
        return Err(err.into());
    }

    command_handler.execute(&store).await
}

/// Prints whatever the failing stage has not printed yet.
pub fn report(err: &CommandError) {
    match err {
        CommandError::Helped
        | CommandError::ChildExit(_)
        | CommandError::UnknownCommand(_)
        | CommandError::AlreadyExists(_)
        | CommandError::NotInstalled(_) => {}
        err if err.is_expected() => println!("{err}"),
        err => eprintln!("error: {err}"),
    }
}
