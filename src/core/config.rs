// src/core/config.rs
use std::env;
use std::path::PathBuf;

// Bounds enforced by the interactive prompts
pub const MAX_PASSWORD_LENGTH: usize = crate::generators::charset::MAX_LENGTH;
pub const MAX_PASSWORD_COUNT: usize = 100;

// Read by env_logger before the rest of the configuration
pub const LOG_LEVEL_ENV: &str = "PWGEN_LOG_LEVEL";

// Configuration for the generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_length: usize,
    pub default_count: usize,

    // Diceware
    pub default_words: usize,
    pub default_separator: String,

    // Export
    pub default_output_file: PathBuf,

    // Reproducible runs
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_length: 12,
            default_count: 1,

            // Diceware
            default_words: 5,
            default_separator: "-".to_string(),

            // Export
            default_output_file: PathBuf::from("passwords.txt"),

            seed: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("PWGEN_DEFAULT_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_length = length,
                Err(_) => log::warn!("Ignoring invalid PWGEN_DEFAULT_LENGTH '{}'", val),
            }
        }

        if let Some(val) = lookup("PWGEN_DEFAULT_COUNT") {
            match val.parse() {
                Ok(count) => config.default_count = count,
                Err(_) => log::warn!("Ignoring invalid PWGEN_DEFAULT_COUNT '{}'", val),
            }
        }

        // Diceware
        if let Some(val) = lookup("PWGEN_DEFAULT_WORDS") {
            match val.parse() {
                Ok(words) => config.default_words = words,
                Err(_) => log::warn!("Ignoring invalid PWGEN_DEFAULT_WORDS '{}'", val),
            }
        }

        if let Some(separator) = lookup("PWGEN_DEFAULT_SEPARATOR") {
            config.default_separator = separator;
        }

        // Export
        if let Some(file) = lookup("PWGEN_OUTPUT_FILE") {
            if !file.trim().is_empty() {
                config.default_output_file = PathBuf::from(file);
            }
        }

        if let Some(val) = lookup("PWGEN_SEED") {
            match val.parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => log::warn!("Ignoring invalid PWGEN_SEED '{}'", val),
            }
        }

        config
    }
}
