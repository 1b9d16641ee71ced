mod archive;
mod command_handler;
mod config;
mod constants;
mod errors;
mod handlers;
mod http;
mod platform;
mod store;
mod versions;

use crate::config::Config;
use crate::constants::LOG_ENV;
use std::{env, process};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let result = match Config::from_env() {
        Ok(config) => command_handler::handle_args(env::args().skip(1).collect(), config).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        command_handler::report(&err);
        process::exit(err.exit_code());
    }
}
