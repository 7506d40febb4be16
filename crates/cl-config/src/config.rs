use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, CacheConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, ScmConfig,
};

use cl_core::git_provider_key;

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub scm: ScmConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
    /// Directory the config was resolved from; relative paths hang off it
    #[serde(skip)]
    dir: PathBuf,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Use `dir_override` if given, else CL_CONFIG_DIR env var, else ./.changelog/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply CL_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load(dir_override: Option<&Path>) -> ConfigErrorResult<Self> {
        let dir = Self::config_dir(dir_override)?;
        let config_path = dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.dir = dir;
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: `dir_override` > CL_CONFIG_DIR env var > ./.changelog/ (relative to cwd)
    pub fn config_dir(dir_override: Option<&Path>) -> ConfigErrorResult<PathBuf> {
        if let Some(dir) = dir_override {
            return Ok(dir.to_path_buf());
        }

        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.scm.validate()?;
        self.cache.validate()?;

        if let Some(ref file) = self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file must not be empty"));
        }

        Ok(())
    }

    /// Directory this config was loaded from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to the user cache database, under the config directory.
    pub fn cache_path(&self) -> PathBuf {
        self.dir.join(&self.cache.path)
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  scm: {} at {} (token: {}, timeout {}s)",
            self.scm.driver,
            self.scm.server_url,
            if self.scm.token().is_some() {
                "set"
            } else {
                "none"
            },
            self.scm.timeout_secs
        );
        info!("  provider key: {}", git_provider_key(self.scm.driver));
        info!("  cache: {}", self.cache.path);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Scm
        Self::apply_env_parse("CL_SCM_DRIVER", &mut self.scm.driver);
        Self::apply_env_string("CL_SCM_SERVER_URL", &mut self.scm.server_url);
        Self::apply_env_option_string("CL_SCM_TOKEN", &mut self.scm.token);
        Self::apply_env_parse("CL_SCM_TIMEOUT_SECS", &mut self.scm.timeout_secs);

        // Cache
        Self::apply_env_string("CL_CACHE_PATH", &mut self.cache.path);

        // Logging
        Self::apply_env_parse("CL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CL_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
