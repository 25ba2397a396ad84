//! Error handling for the perfil CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for perfil CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("Parsing error in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Rendering error: {message}")]
    Rendering { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    pub fn parse<F: Into<String>, M: Into<String>>(file: F, message: M) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn rendering<S: Into<String>>(message: S) -> Self {
        Self::Rendering {
            message: message.into(),
        }
    }
}
