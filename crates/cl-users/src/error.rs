use cl_core::CanonicalUser;
use cl_db::DbError;
use cl_scm::ScmError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    /// Writing a locally built record failed. The record is still usable
    /// and travels with the error.
    #[error("failed to cache User: {source} {location}")]
    CacheUser {
        user: Box<CanonicalUser>,
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    /// Writing a record built from the platform failed. No record is kept.
    #[error("failed to create User: {source} {location}")]
    CreateUser {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("failed to find user {login}: {source} {location}")]
    FindUser {
        login: String,
        #[source]
        source: ScmError,
        location: ErrorLocation,
    },
}

impl ResolveError {
    #[track_caller]
    pub fn cache_user(user: CanonicalUser, source: DbError) -> Self {
        Self::CacheUser {
            user: Box::new(user),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn create_user(source: DbError) -> Self {
        Self::CreateUser {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn find_user(login: impl Into<String>, source: ScmError) -> Self {
        Self::FindUser {
            login: login.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Record that was resolved even though persisting it failed.
    pub fn partial_user(&self) -> Option<&CanonicalUser> {
        match self {
            Self::CacheUser { user, .. } => Some(user.as_ref()),
            Self::CreateUser { .. } | Self::FindUser { .. } => None,
        }
    }

    pub fn into_partial_user(self) -> Option<CanonicalUser> {
        match self {
            Self::CacheUser { user, .. } => Some(*user),
            Self::CreateUser { .. } | Self::FindUser { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
