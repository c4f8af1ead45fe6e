// src/core/config.rs
use std::env;

use log::LevelFilter;

// Runtime configuration for the utility service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub default_password_length: usize,
    pub default_password_quantity: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Password Generation
            default_password_length: 20,
            default_password_quantity: 5,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Ok(val) = env::var("DEFAULT_PASSWORD_QUANTITY") {
            if let Ok(quantity) = val.parse() {
                config.default_password_quantity = quantity;
            }
        }

        // Logging
        if let Ok(val) = env::var("LOG_LEVEL") {
            match val.parse() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("Unknown log level '{}', using Info", val),
            }
        }

        config
    }
}
