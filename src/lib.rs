//! logspy - Capture log output in memory for test assertions
//!
//! A [`LogSink`] is a shared, growable byte buffer. Point a logging facility at it
//! (it implements both [`std::io::Write`] via [`LogSink::writer`] and
//! [`tracing_subscriber::fmt::MakeWriter`]), then read back what was written as raw
//! text, as trimmed non-empty lines, or as a stream of JSON objects.
//!
//! ```
//! use logspy::{CaptureConfig, Format, LogSink};
//!
//! let sink = LogSink::new();
//! let config = CaptureConfig { format: Format::Json, ..CaptureConfig::default() };
//! let _guard = logspy::install(&sink, &config)?;
//!
//! tracing::info!(user = "ada", "logged in");
//!
//! let objects = sink.json_objects()?;
//! assert_eq!(objects[0]["fields"]["message"], "logged in");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod sink;
pub mod subscriber;

pub use config::{CaptureConfig, Format};
pub use decode::JsonObject;
pub use error::{DecodeError, DecodeErrorKind, InstallError};
pub use sink::{LogSink, SinkWriter, global};
pub use subscriber::{install, install_global, subscriber};
