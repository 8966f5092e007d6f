//! Test utilities for logspy tests

use logspy::{CaptureConfig, Format, LogSink};
use std::io::Write;
use tracing::subscriber::DefaultGuard;

/// Write a single line into the sink, the way a line-oriented logger would:
/// the message and its terminator land in one write call.
pub fn log_line(sink: &LogSink, message: &str) {
    let mut writer = sink.writer();
    writer
        .write_all(format!("{message}\n").as_bytes())
        .expect("Failed to write to sink");
}

/// Route this thread's tracing output into a fresh sink with plain formatting.
pub fn capture_plain() -> (LogSink, DefaultGuard) {
    capture_with(CaptureConfig::default())
}

/// Route this thread's tracing output into a fresh sink with JSON formatting.
pub fn capture_json() -> (LogSink, DefaultGuard) {
    capture_with(CaptureConfig {
        format: Format::Json,
        ..CaptureConfig::default()
    })
}

pub fn capture_with(config: CaptureConfig) -> (LogSink, DefaultGuard) {
    let sink = LogSink::new();
    let guard = logspy::install(&sink, &config).expect("Failed to install capture subscriber");
    (sink, guard)
}
