use std::io;
use std::path::Path;

use clap::Parser;

mod api;
mod cli;
mod core;
mod generators;
mod models;

use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();

    // Command-line flags win over the environment
    if let Some(address) = args.address {
        config.web_address = address;
    }
    if let Some(port) = args.port {
        config.web_port = port;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    log::debug!("Loaded config: {:?}", config);

    api::start_server(config).await
}
