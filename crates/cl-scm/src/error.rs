use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors returned by a git hosting platform
#[derive(Error, Debug)]
pub enum ScmError {
    #[error("User not found: {login} {location}")]
    NotFound {
        login: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid platform URL {url}: {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ScmError {
    #[track_caller]
    pub fn not_found(login: impl Into<String>) -> Self {
        ScmError::NotFound {
            login: login.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        ScmError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(url: impl Into<String>, message: impl ToString) -> Self {
        ScmError::InvalidUrl {
            url: url.into(),
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ScmError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ScmError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<reqwest::Error> for ScmError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ScmError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ScmError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ScmError::from_json(err)
    }
}

/// Whether `err` means the platform has no such user, as opposed to the
/// lookup itself failing.
pub fn is_scm_not_found(err: &ScmError) -> bool {
    match err {
        ScmError::NotFound { .. } => true,
        ScmError::Api { status, .. } => *status == 404,
        _ => false,
    }
}

pub type Result<T> = std::result::Result<T, ScmError>;
