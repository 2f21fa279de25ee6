//! Logger initialization.
//!
//! Diagnostics go to stderr through `env_logger`, either as colored text or as
//! one JSON object per line. Stdout is reserved for the response summary.

use std::io::{self, Write};

use colored::Colorize;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependency modules that are chatty at debug level, with the level they are capped at.
const QUIET_MODULES: &[(&str, LevelFilter)] = &[
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("reqwest", LevelFilter::Info),
    ("rustls", LevelFilter::Warn),
];

/// Installs the global logger.
///
/// `RUST_LOG` is read first, then `level` is applied on top of it, both
/// globally and for this crate. Dependency modules listed in `QUIET_MODULES`
/// stay capped so `--log-level debug` shows what the executor does without
/// the transport's internals.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// http_inspect --log-level debug --log-format json example.com 2>trace.jsonl
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .target(env_logger::Target::Stderr)
        .filter_level(level);
    for (module, cap) in QUIET_MODULES {
        builder.filter_module(module, (*cap).min(level));
    }
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init()?;
    Ok(())
}

fn write_plain(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let level = record.level().to_string();
    let level = match record.level() {
        Level::Error => level.red(),
        Level::Warn => level.yellow(),
        Level::Info => level.green(),
        Level::Debug => level.blue(),
        Level::Trace => level.purple(),
    };
    writeln!(buf, "{} [{}] {}", record.target().cyan(), level, record.args())
}

fn write_json(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let line = serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_modules_never_exceed_info() {
        for (module, cap) in QUIET_MODULES {
            assert!(*cap <= LevelFilter::Info, "{module} is capped too high");
        }
    }

    #[test]
    fn test_second_logger_is_rejected() {
        // Only one logger can be installed per process; whichever call wins,
        // a later one must report LoggerError instead of panicking.
        let _ = init_logger_with(LevelFilter::Debug, LogFormat::Json);

        let result = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        match result {
            Err(InitializationError::LoggerError(_)) => {}
            Ok(()) => panic!("A second logger should not be installed"),
        }
    }
}
