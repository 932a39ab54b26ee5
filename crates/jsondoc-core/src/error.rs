//! Error types for document construction, parsing, and typed access.

use thiserror::Error;

use crate::value::Kind;

/// Errors that can occur while building, inspecting, or parsing a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// An operation required a specific value kind and the receiver's
    /// actual kind differs (e.g. indexing a non-array, reading a bool out
    /// of a string). Callers that expect mismatches as a normal occurrence
    /// should branch on [`Value::kind`](crate::Value::kind) first.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    /// Array index access beyond the current length.
    #[error("array index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Malformed input during parsing. Carries the byte offset where the
    /// parser stopped; [`line_col`] converts an offset back into a
    /// 1-based line/column pair for reporting.
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },
}

/// Convenience alias used throughout jsondoc-core.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Convert a byte offset in `text` into a 1-based `(line, column)` pair.
///
/// Offsets past the end of the text clamp to the last position, so an
/// end-of-input error still reports a usable location.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(text.len());
    let mut line = 1;
    let mut col = 1;
    for &b in &text.as_bytes()[..offset] {
        if b == b'\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::line_col;

    #[test]
    fn line_col_single_line() {
        assert_eq!(line_col("{\"a\":1}", 0), (1, 1));
        assert_eq!(line_col("{\"a\":1}", 5), (1, 6));
    }

    #[test]
    fn line_col_after_newlines() {
        let text = "{\n\"a\":x";
        assert_eq!(line_col(text, 6), (2, 5));
    }

    #[test]
    fn line_col_clamps_past_end() {
        assert_eq!(line_col("[]", 100), (1, 3));
    }
}
