//! Error types

use crate::decode::JsonObject;
use std::fmt;
use thiserror::Error;

/// What went wrong while decoding a captured entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Text that is not valid JSON, e.g. a plain log line.
    Syntax,
    /// The content ended in the middle of a JSON value.
    Eof,
    /// A valid JSON value that is not an object (number, array, string, ...).
    NotAnObject,
}

/// Failure to decode the captured content as a stream of JSON objects.
///
/// Decoding stops at the first entry that cannot be decoded. Everything decoded
/// before that point is kept and available through [`DecodeError::decoded`].
#[derive(Error, Debug)]
#[error("{description} at line {line} column {column}")]
pub struct DecodeError {
    kind: DecodeErrorKind,
    description: String,
    line: usize,
    column: usize,
    offending: Option<char>,
    decoded: Vec<JsonObject>,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn new(
        source: serde_json::Error,
        offending: Option<char>,
        at_value_start: bool,
        decoded: Vec<JsonObject>,
    ) -> Self {
        let kind = match source.classify() {
            serde_json::error::Category::Eof => DecodeErrorKind::Eof,
            serde_json::error::Category::Data => DecodeErrorKind::NotAnObject,
            serde_json::error::Category::Syntax | serde_json::error::Category::Io => {
                DecodeErrorKind::Syntax
            }
        };
        let description = describe(kind, offending, at_value_start, &source);

        Self {
            kind,
            description,
            line: source.line(),
            column: source.column(),
            offending,
            decoded,
            source,
        }
    }

    /// Which kind of failure stopped decoding.
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// 1-based line of the failure within the captured content.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column (in bytes) of the failure within its line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The character the decoder stopped at, if the failure points at one.
    pub fn offending_char(&self) -> Option<char> {
        self.offending
    }

    /// Objects decoded before the failure, in capture order.
    pub fn decoded(&self) -> &[JsonObject] {
        &self.decoded
    }

    /// Consumes the error, returning the objects decoded before the failure.
    pub fn into_decoded(self) -> Vec<JsonObject> {
        self.decoded
    }
}

fn describe(
    kind: DecodeErrorKind,
    offending: Option<char>,
    at_value_start: bool,
    source: &serde_json::Error,
) -> String {
    match (kind, offending) {
        (DecodeErrorKind::Eof, _) => "unexpected end of JSON input".to_string(),
        (DecodeErrorKind::NotAnObject, _) => {
            format!("entry is not a JSON object ({})", Reason(source))
        }
        (DecodeErrorKind::Syntax, Some(c)) if at_value_start => {
            format!("invalid character {c:?} looking for beginning of value")
        }
        (DecodeErrorKind::Syntax, Some(c)) => {
            format!("invalid character {c:?} in JSON value ({})", Reason(source))
        }
        (DecodeErrorKind::Syntax, None) => Reason(source).to_string(),
    }
}

/// Renders a serde_json error without its trailing " at line N column M".
struct Reason<'a>(&'a serde_json::Error);

impl fmt::Display for Reason<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = self.0.to_string();
        let suffix = format!(" at line {} column {}", self.0.line(), self.0.column());
        f.write_str(full.strip_suffix(&suffix).unwrap_or(&full))
    }
}

/// Failure to route tracing output into a [`LogSink`](crate::LogSink).
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Invalid filter directives: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("A global tracing subscriber is already installed")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}
