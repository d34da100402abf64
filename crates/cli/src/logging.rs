//! Diagnostics go to stderr so stdout stays clean for piping results.

use std::fs::File;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;

use docsearch_core::config::types::ResolvedConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Held until exit so the file writer flushes its buffer.
static FILE_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install the stderr layer and, when `logging.file` is set, a file layer.
///
/// `RUST_LOG` directives are honored on top of the configured levels.
pub fn init(cfg: &ResolvedConfig) {
    let logging = &cfg.logging;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_filter(level_filter(&logging.level, LevelFilter::WARN));

    let file_layer = logging.file.as_deref().map(|path| {
        let level = logging.file_level.as_deref().unwrap_or(&logging.level);
        fmt::layer()
            .with_writer(open_log_file(path))
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(level_filter(level, LevelFilter::DEBUG))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

fn level_filter(level: &str, fallback: LevelFilter) -> EnvFilter {
    let level = parse_level(level).unwrap_or(fallback);
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn open_log_file(path: &Path) -> NonBlocking {
    let file = File::create(path).unwrap_or_else(|e| {
        eprintln!("Failed to create log file {}: {}", path.display(), e);
        std::process::exit(1);
    });
    let (writer, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut slot) = FILE_GUARD.lock() {
        *slot = Some(guard);
    }
    writer
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
