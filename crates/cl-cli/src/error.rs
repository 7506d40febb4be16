use cl_config::ConfigError;
use cl_db::DbError;
use cl_scm::ScmError;
use cl_users::ResolveError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("User cache error: {0}")]
    Cache(#[from] DbError),

    #[error("Platform client error: {0}")]
    Scm(#[from] ScmError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
