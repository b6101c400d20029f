// Rust guideline compliant 2026-10-12

//! JSON log output for the demo server.

use clap::ValueEnum;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Log verbosity accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Installs the global JSON subscriber.
///
/// Writes to `log_file` through a non-blocking appender when given, else to
/// stdout. Hold the returned guard until shutdown so buffered lines are
/// flushed.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(level: LogLevel, log_file: Option<&Path>) -> io::Result<Option<WorkerGuard>> {
    let (writer, guard) = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(io::stdout), None),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::from(level))
        .with_target(false)
        .json()
        .with_writer(writer)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("global subscriber already installed");
    }
    Ok(guard)
}
