//! File logging for the CLI.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary, which calls [`init_logging`] when `--log-file` is given.

use std::ffi::OsStr;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_NAME: &str = "chromastate.log";

/// Send `chromastate` events at `level` and above to `log_path`.
///
/// The file is appended to, never rotated. Keep the returned guard alive
/// until exit; buffered events are written when it drops. An unparsable
/// `level` falls back to `info`.
pub fn init_logging(log_path: &Path, level: &str) -> WorkerGuard {
    let dir = log_path.parent().unwrap_or(Path::new("."));
    let file = log_path.file_name().unwrap_or(OsStr::new(DEFAULT_LOG_NAME));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));

    let filter = EnvFilter::try_new(format!("chromastate={level}"))
        .unwrap_or_else(|_| EnvFilter::new("chromastate=info"));

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    // Span timings only in debug builds; `to_state` is instrumented there too.
    #[cfg(debug_assertions)]
    let layer = layer.with_span_events(fmt::format::FmtSpan::ENTER | fmt::format::FmtSpan::CLOSE);

    tracing_subscriber::registry().with(filter).with(layer).init();

    guard
}
