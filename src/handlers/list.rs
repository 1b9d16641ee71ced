use crate::command_handler::CommandHandler;
use crate::errors::{CommandError, ParseError};
use crate::store::VersionStore;
use async_trait::async_trait;

pub struct ListHandler;

#[async_trait]
impl CommandHandler for ListHandler {
    fn parse(&mut self, _args: &[String]) -> Result<(), ParseError> {
        Ok(())
    }

    async fn execute(&self, store: &VersionStore) -> Result<(), CommandError> {
        match store.list().await? {
            Some(versions) => {
                for version in versions {
                    println!("{version}");
                }
            }
            None => println!("No version is installed."),
        }

        Ok(())
    }
}
