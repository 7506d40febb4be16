mod cache_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod scm_config;

#[cfg(test)]
mod tests;

pub use cache_config::CacheConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use scm_config::ScmConfig;

pub const CONFIG_DIR_ENV: &str = "CL_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".changelog";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_SCM_SERVER_URL: &str = "https://api.github.com";
const DEFAULT_SCM_TIMEOUT_SECS: u64 = 30;
const MIN_SCM_TIMEOUT_SECS: u64 = 1;
const MAX_SCM_TIMEOUT_SECS: u64 = 300;

const DEFAULT_CACHE_FILENAME: &str = "users.db";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
