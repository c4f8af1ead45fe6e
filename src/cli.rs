// src/cli.rs
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "WEB_ADDRESS")]
    pub address: Option<String>,

    /// Port for the HTTP server
    #[arg(long, short, env = "WEB_PORT")]
    pub port: Option<u16>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<LevelFilter>,
}
