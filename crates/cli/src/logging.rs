//! Tracing setup for `datepick`: warnings on stderr, and an optional log
//! file that records widget transitions at a finer level.

use datepicker_core::config::LoggingConfig;
use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

pub fn init(cfg: &LoggingConfig) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(filter(level_or(&cfg.level, LevelFilter::WARN)));

    let file_layer = cfg.file.as_deref().map(|path| {
        let level = cfg.file_level.as_deref().unwrap_or(&cfg.level);
        fmt::layer()
            .with_writer(open_log(path))
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(filter(level_or(level, LevelFilter::DEBUG)))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

/// Flush the file writer before the process exits.
pub fn shutdown() {
    if let Ok(mut g) = LOG_GUARD.lock() {
        g.take();
    }
}

/// `RUST_LOG` still overrides the configured level.
fn filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn open_log(path: &Path) -> NonBlocking {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Failed to create log directory {}: {e}", parent.display());
            std::process::exit(1);
        }
    }
    let file = File::create(path).unwrap_or_else(|e| {
        eprintln!("Failed to create log file {}: {e}", path.display());
        std::process::exit(1);
    });

    let (writer, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }
    writer
}

fn level_or(name: &str, fallback: LevelFilter) -> LevelFilter {
    parse_level(name).unwrap_or(fallback)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}
