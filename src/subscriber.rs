//! Routing tracing output into a [`LogSink`]
//!
//! These helpers build a `tracing_subscriber` fmt subscriber whose writer is a
//! sink, then install it for the current thread or for the whole process.

use crate::config::{CaptureConfig, Format};
use crate::error::InstallError;
use crate::sink::LogSink;
use tracing::Subscriber;
use tracing::debug;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Builds a subscriber that formats events per `config` and writes them into `sink`.
pub fn subscriber(
    sink: &LogSink,
    config: &CaptureConfig,
) -> Result<impl Subscriber + Send + Sync + use<>, InstallError> {
    let filter = EnvFilter::try_new(&config.directives)?;

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(sink.clone(), config)))
}

/// Routes tracing output of the current thread into `sink` until the guard is dropped.
pub fn install(sink: &LogSink, config: &CaptureConfig) -> Result<DefaultGuard, InstallError> {
    let subscriber = subscriber(sink, config)?;

    // Emitted before the switch, so it goes to the previous dispatcher and not the sink.
    debug!(
        directives = %config.directives,
        format = ?config.format,
        "Routing tracing output of the current thread into log sink"
    );

    Ok(tracing::subscriber::set_default(subscriber))
}

/// Routes tracing output of the whole process into `sink`.
///
/// Fails with [`InstallError::AlreadyInstalled`] if a global subscriber exists.
pub fn install_global(sink: &LogSink, config: &CaptureConfig) -> Result<(), InstallError> {
    let subscriber = subscriber(sink, config)?;

    debug!(
        directives = %config.directives,
        format = ?config.format,
        "Routing tracing output of the process into log sink"
    );

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn fmt_layer<S>(sink: LogSink, config: &CaptureConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let layer = fmt::layer()
        .with_writer(sink)
        .with_ansi(false)
        .with_target(config.with_target)
        .with_level(config.with_level);

    // `without_time` and `json` change the layer's type, hence one arm per combination.
    match (config.format, config.with_time) {
        (Format::Plain, true) => layer.boxed(),
        (Format::Plain, false) => layer.without_time().boxed(),
        (Format::Json, true) => layer.json().boxed(),
        (Format::Json, false) => layer.json().without_time().boxed(),
    }
}
