use crate::error::{CliError, Result as CliResult};

use std::fmt::Display;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, Output};
use log::debug;

/// Initialize logger with fern
///
/// Stdout carries the command's JSON output, so console logging goes to
/// stderr.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
#[track_caller]
pub fn initialize(
    log_level: cl_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliResult<()> {
    let level_filter = log_level.0;

    let (output, colors): (Output, Option<ColoredLevelConfig>) = match log_file {
        Some(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| {
                    CliError::logger(format!(
                        "Failed to open log file {}: {}",
                        log_path.display(),
                        e
                    ))
                })?;
            (file.into(), None)
        }
        None => (std::io::stderr().into(), colored.then(level_colors)),
    };

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let level: Box<dyn Display> = match colors {
                Some(ref colors) => Box::new(colors.color(record.level())),
                None => Box::new(record.level()),
            };
            out.finish(format_args!(
                "{}",
                format_line(
                    humantime::format_rfc3339(SystemTime::now()),
                    level,
                    message,
                    record.file(),
                    record.line(),
                )
            ))
        })
        .chain(output)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => debug!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => debug!("Logger initialized: level={:?}, stderr", level_filter),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[{date} - {level}] {message} [{file}:{line}]`
pub(crate) fn format_line(
    date: impl Display,
    level: impl Display,
    message: impl Display,
    file: Option<&str>,
    line: Option<u32>,
) -> String {
    format!(
        "[{date} - {level}] {message} [{file}:{line}]",
        file = file.unwrap_or("unknown"),
        line = line.unwrap_or(0),
    )
}
