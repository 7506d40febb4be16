//! changelog-users - resolve changelog contributors
//!
//! # Examples
//!
//! ```bash
//! # Resolve a GitHub login
//! changelog-users login octocat --pretty
//!
//! # Resolve a commit signature
//! changelog-users signature --name "Jane Doe" --email jane@example.com
//!
//! # Inspect the cache
//! changelog-users show octocat
//! ```

use cl_cli::{Cli, build_resolver, execute, logger};
use cl_config::Config;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    match run(cli).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load(cli.config_dir.as_deref())?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            std::fs::create_dir_all(config.dir())?;
            Some(config.dir().join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting changelog-users v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let (resolver, cache) = build_resolver(&config).await?;
    let value = execute(cli.command, &resolver, cache.as_ref()).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}
