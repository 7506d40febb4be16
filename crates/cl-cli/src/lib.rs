//! cl-cli library
//!
//! Command parsing, logger setup and command execution for the
//! `changelog-users` binary.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::{build_resolver, execute};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
