// src/core/config.rs
use std::env;

use log::LevelFilter;

use crate::models::{GenerationOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

// Configuration for the generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        let options = GenerationOptions::default();
        Self {
            default_length: options.length,
            default_include_uppercase: options.include_uppercase,
            default_include_lowercase: options.include_lowercase,
            default_include_numbers: options.include_numbers,
            default_include_symbols: options.include_symbols,

            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse::<usize>() {
                if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
                    config.default_length = length;
                } else {
                    log::warn!(
                        "DEFAULT_PASSWORD_LENGTH {} is outside {}-{}, keeping {}",
                        length,
                        MIN_PASSWORD_LENGTH,
                        MAX_PASSWORD_LENGTH,
                        config.default_length
                    );
                }
            }
        }

        if let Ok(val) = env::var("DEFAULT_INCLUDE_UPPERCASE") {
            if let Ok(include) = val.parse() {
                config.default_include_uppercase = include;
            }
        }

        if let Ok(val) = env::var("DEFAULT_INCLUDE_LOWERCASE") {
            if let Ok(include) = val.parse() {
                config.default_include_lowercase = include;
            }
        }

        if let Ok(val) = env::var("DEFAULT_INCLUDE_NUMBERS") {
            if let Ok(include) = val.parse() {
                config.default_include_numbers = include;
            }
        }

        if let Ok(val) = env::var("DEFAULT_INCLUDE_SYMBOLS") {
            if let Ok(include) = val.parse() {
                config.default_include_symbols = include;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    // The initial option state for a new session
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.default_length,
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
        }
    }
}
