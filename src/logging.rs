//! Logging setup
//!
//! `log` records are filtered by `RUST_LOG` and written as timestamped lines,
//! either to stderr or, while the TUI owns the terminal, to a file.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LogLevel::Trace,
            Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    /// Appended to; parent directories are created.
    File(PathBuf),
}

struct DashboardLogger {
    threshold: LogLevel,
    out: Mutex<Box<dyn Write + Send>>,
}

fn format_line(timestamp: &str, level: Level, target: &str, msg: &str) -> String {
    format!("{} {:<5} [{}] {}", timestamp, level, target, msg)
}

impl Log for DashboardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        should_log(metadata.level().into(), self.threshold)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            &Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

/// Installs the process-wide logger. Call once, before anything logs.
pub fn init_logging(sink: LogSink) -> Result<(), io::Error> {
    let threshold = get_rust_log_level();
    let out: Box<dyn Write + Send> = match sink {
        LogSink::Stderr => Box::new(io::stderr()),
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            Box::new(OpenOptions::new().create(true).append(true).open(path)?)
        }
    };

    log::set_boxed_logger(Box::new(DashboardLogger {
        threshold,
        out: Mutex::new(out),
    }))
    .map_err(|e| io::Error::other(e.to_string()))?;
    log::set_max_level(threshold.into());
    Ok(())
}
