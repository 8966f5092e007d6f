/// Output format of the tracing events written into a sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Human-readable lines, e.g. `INFO logged in user="ada"`.
    #[default]
    Plain,
    /// One JSON object per line, decodable with [`LogSink::json_objects`](crate::LogSink::json_objects).
    Json,
}

/// Configuration for routing tracing output into a sink
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Filter directives in `EnvFilter` syntax, e.g. `"info,my_crate=debug"`.
    pub directives: String,

    pub format: Format,

    /// Whether to prefix events with a timestamp.
    /// Off by default so captured text is stable enough to assert on.
    pub with_time: bool,

    /// Whether to include the event target (usually the module path).
    pub with_target: bool,

    /// Whether to include the event level.
    pub with_level: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            directives: "trace".to_string(),
            format: Format::Plain,
            with_time: false,
            with_target: false,
            with_level: true,
        }
    }
}
