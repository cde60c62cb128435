// src/generators/mod.rs
use std::io;
use thiserror::Error;

pub mod charset;
pub mod diceware;
pub mod password;
pub mod wordlist;

pub use password::PasswordGenerator;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoFailure(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
