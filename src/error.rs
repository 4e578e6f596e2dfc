use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read archive {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Mail(#[from] MailError),
}

#[derive(Debug, Error)]
pub(crate) enum MailError {
    #[error("Environment variable {name} is not set")]
    MissingVar { name: &'static str },

    #[error("Environment variable {name} has invalid value \"{value}\"")]
    InvalidVar { name: &'static str, value: String },

    #[error("Invalid email address \"{input}\": {source}")]
    Address {
        input: String,
        source: lettre::address::AddressError,
    },

    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("Failed to send mail: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
