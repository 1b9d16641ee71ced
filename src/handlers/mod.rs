mod help;
mod install;
mod list;
mod run;
mod uninstall;

pub use help::HelpHandler;
pub use install::InstallHandler;
pub use list::ListHandler;
pub use run::RunHandler;
pub use uninstall::UninstallHandler;
