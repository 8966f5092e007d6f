//! Streaming decode of captured text into JSON objects
//!
//! Captured content is treated as back-to-back JSON values, the way a JSON log
//! formatter writes them: usually one compact object per line, but pretty-printed
//! objects spanning several lines decode just the same. No enclosing array or
//! separators are needed beyond ordinary JSON tokenization.

use crate::error::DecodeError;
use serde_json::error::Category;

/// A decoded log entry: string keys mapped to arbitrary JSON values.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Decodes `content` into the sequence of JSON objects it contains.
///
/// Decoding is greedy from the start and stops at the first entry that is not a
/// JSON object. The returned error carries every object decoded before it.
/// Other JSON values, `null` included, are rejected as
/// [`DecodeErrorKind::NotAnObject`](crate::DecodeErrorKind::NotAnObject).
pub fn decode_objects(content: &str) -> Result<Vec<JsonObject>, DecodeError> {
    let mut stream = serde_json::Deserializer::from_str(content).into_iter::<JsonObject>();
    let mut objects = Vec::new();

    loop {
        match stream.next() {
            None => return Ok(objects),
            Some(Ok(object)) => objects.push(object),
            Some(Err(source)) => {
                // After a failure the stream offset still points at the start of the bad value.
                let value_start = stream.byte_offset();
                let failed_at = match source.classify() {
                    // The whole value is rejected, so the failure is where it starts.
                    Category::Data => Some(value_start),
                    Category::Eof => None,
                    Category::Syntax | Category::Io => {
                        offset_of(content, source.line(), source.column())
                    }
                };
                let offending = failed_at
                    .and_then(|offset| content.get(offset..))
                    .and_then(|rest| rest.chars().next());

                return Err(DecodeError::new(
                    source,
                    offending,
                    failed_at == Some(value_start),
                    objects,
                ));
            }
        }
    }
}

/// Byte offset of a 1-based line/column position, as reported by serde_json.
fn offset_of(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 || column == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();

    Some(line_start + column - 1)
}
