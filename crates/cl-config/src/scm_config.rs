use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SCM_SERVER_URL, DEFAULT_SCM_TIMEOUT_SECS,
    MAX_SCM_TIMEOUT_SECS, MIN_SCM_TIMEOUT_SECS,
};

use cl_core::Driver;

use std::time::Duration;

use serde::Deserialize;

/// Git hosting platform the resolver queries for logins.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScmConfig {
    pub driver: Driver,
    /// API root for GitHub, server root for GitLab/Gitea/Gogs
    pub server_url: String,
    /// Access token. Never logged.
    pub token: Option<String>,
    /// Deadline for each platform request
    pub timeout_secs: u64,
}

impl Default for ScmConfig {
    fn default() -> Self {
        Self {
            driver: Driver::default(),
            server_url: String::from(DEFAULT_SCM_SERVER_URL),
            token: None,
            timeout_secs: DEFAULT_SCM_TIMEOUT_SECS,
        }
    }
}

impl ScmConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err(ConfigError::scm(format!(
                "scm.server_url must be an http(s) URL, got '{}'",
                self.server_url
            )));
        }

        if self.timeout_secs < MIN_SCM_TIMEOUT_SECS || self.timeout_secs > MAX_SCM_TIMEOUT_SECS {
            return Err(ConfigError::scm(format!(
                "scm.timeout_secs must be {}-{}, got {}",
                MIN_SCM_TIMEOUT_SECS, MAX_SCM_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
