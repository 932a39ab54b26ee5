//! Recursive-descent JSON parser producing a [`Value`] tree.
//!
//! The parser walks the input with a single forward byte cursor: no
//! backtracking, no lookahead beyond the current byte. Each value position
//! dispatches on the first significant byte: `{` object, `[` array, `"`
//! string, `t`/`f`/`n` literal, anything else a number.
//!
//! # Key design decisions
//!
//! - **Whitespace policy**: every byte in `0x01..=0x20` (ASCII controls
//!   plus space) is insignificant between tokens. Space and the usual
//!   `\t`/`\n`/`\r` are all covered by the one range check.
//! - **Strings decode the standard JSON escapes** (`\"` `\\` `\/` `\b`
//!   `\f` `\n` `\r` `\t` `\uXXXX`, surrogate pairs included), so arbitrary
//!   third-party JSON round-trips through the document model.
//! - **Numbers never wrap silently**: digits that do not fit the target
//!   width are a syntax error, not a truncated value.
//! - **No partial trees**: on any failure the caller receives only the
//!   error; the partially built value is dropped.

use std::collections::BTreeMap;

use crate::error::{JsonError, Result};
use crate::value::Value;

/// Parse JSON text into a [`Value`] tree.
///
/// The document must be exactly one top-level object or array consuming
/// the entire input; a bare scalar at top level is rejected. Empty (or
/// all-whitespace) input is the degenerate success: an absent document,
/// returned as [`Value::Invalid`], which serializes back to `{}`.
///
/// ```
/// use jsondoc_core::parse;
///
/// let doc = parse(r#"{"a":1,"b":[true,false,null]}"#)?;
/// assert_eq!(doc.get("a").unwrap().as_uint()?, 1);
/// assert_eq!(doc.get("b").unwrap().len()?, 3);
/// # Ok::<(), jsondoc_core::JsonError>(())
/// ```
pub fn parse(text: &str) -> Result<Value> {
    Parser::new(text).parse_document()
}

/// Forward-only cursor over the input. `bytes` and `text` view the same
/// buffer; byte positions produced by the scanning loops always fall on
/// character boundaries, so `text` can be sliced with them directly.
struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn parse_document(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let value = match self.peek() {
            None => return Ok(Value::Invalid),
            Some(b'{') => {
                self.pos += 1;
                self.parse_object()?
            }
            Some(b'[') => {
                self.pos += 1;
                self.parse_array()?
            }
            Some(_) => return Err(self.unexpected("expected '{' or '[' at document root")),
        };
        self.skip_whitespace();
        if self.pos != self.bytes.len() {
            return Err(self.unexpected("expected end of input after document"));
        }
        Ok(value)
    }

    /// Dispatch on the first significant byte of a value position.
    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.unexpected("expected value")),
            Some(b'{') => {
                self.pos += 1;
                self.parse_object()
            }
            Some(b'[') => {
                self.pos += 1;
                self.parse_array()
            }
            Some(b'"') => {
                self.pos += 1;
                Ok(Value::String(self.parse_string_body()?))
            }
            Some(b't') => {
                self.expect_literal("true")?;
                Ok(Value::Bool(true))
            }
            Some(b'f') => {
                self.expect_literal("false")?;
                Ok(Value::Bool(false))
            }
            Some(b'n') => {
                self.expect_literal("null")?;
                Ok(Value::Null)
            }
            Some(_) => self.parse_number(),
        }
    }

    /// Object body, after the opening `{` has been consumed. Duplicate
    /// keys overwrite the earlier member (sorted-map insert).
    fn parse_object(&mut self) -> Result<Value> {
        let mut map = BTreeMap::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(map));
        }
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.unexpected("expected '\"' to begin object key"));
            }
            self.pos += 1;
            let key = self.parse_string_body()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.unexpected("expected ':' after object key"));
            }
            self.pos += 1;
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(map));
                }
                _ => return Err(self.unexpected("expected ',' or '}' in object")),
            }
        }
    }

    /// Array body, after the opening `[` has been consumed. A comma must
    /// be followed by a value, so `[1,2,]` fails at the `]`.
    fn parse_array(&mut self) -> Result<Value> {
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.unexpected("expected ',' or ']' in array")),
            }
        }
    }

    /// String body, after the opening quote has been consumed. Plain runs
    /// are copied in one slice; escapes are decoded as they appear.
    fn parse_string_body(&mut self) -> Result<String> {
        let open = self.pos.saturating_sub(1);
        let mut out = String::new();
        loop {
            match self.peek() {
                None => return Err(self.syntax(open, "unterminated string")),
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    self.pos += 1;
                    self.parse_escape(&mut out)?;
                }
                Some(_) => {
                    let run_start = self.pos;
                    while let Some(&b) = self.bytes.get(self.pos) {
                        if b == b'"' || b == b'\\' {
                            break;
                        }
                        self.pos += 1;
                    }
                    // Run boundaries are ASCII delimiters, hence char
                    // boundaries in the source text.
                    out.push_str(&self.text[run_start..self.pos]);
                }
            }
        }
    }

    /// One escape sequence, after the backslash has been consumed.
    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        let esc_at = self.pos.saturating_sub(1);
        let Some(b) = self.peek() else {
            return Err(self.syntax(esc_at, "unterminated escape sequence"));
        };
        self.pos += 1;
        match b {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000c}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                let unit = self.parse_hex4()?;
                let c = if (0xD800..=0xDBFF).contains(&unit) {
                    // High surrogate: a low surrogate escape must follow.
                    if self.peek() != Some(b'\\') || self.bytes.get(self.pos + 1) != Some(&b'u') {
                        return Err(self.syntax(esc_at, "unpaired high surrogate in \\u escape"));
                    }
                    self.pos += 2;
                    let low = self.parse_hex4()?;
                    if !(0xDC00..=0xDFFF).contains(&low) {
                        return Err(self.syntax(esc_at, "invalid low surrogate in \\u escape"));
                    }
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else if (0xDC00..=0xDFFF).contains(&unit) {
                    return Err(self.syntax(esc_at, "unpaired low surrogate in \\u escape"));
                } else {
                    unit
                };
                let decoded = char::from_u32(c)
                    .ok_or_else(|| self.syntax(esc_at, "\\u escape is not a valid code point"))?;
                out.push(decoded);
            }
            other => {
                return Err(self.syntax(
                    esc_at,
                    format!("unknown escape '\\{}'", other as char),
                ))
            }
        }
        Ok(())
    }

    /// Exactly four hex digits of a `\u` escape.
    fn parse_hex4(&mut self) -> Result<u32> {
        let start = self.pos;
        let mut v = 0u32;
        for _ in 0..4 {
            let Some(&b) = self.bytes.get(self.pos) else {
                return Err(self.syntax(start, "truncated \\u escape"));
            };
            let digit = (b as char)
                .to_digit(16)
                .ok_or_else(|| self.syntax(self.pos, "expected 4 hex digits in \\u escape"))?;
            v = v * 16 + digit;
            self.pos += 1;
        }
        Ok(v)
    }

    /// Number literal: optional leading `-`, digits, at most one `.`.
    /// No exponent syntax. Classification: any dot → double; leading `-`
    /// → signed; otherwise unsigned. Conversion failure (overflow, lone
    /// `-`) is a syntax error rather than a wrapped value.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        match self.peek() {
            Some(b'-') | Some(b'0'..=b'9') => {}
            _ => return Err(self.unexpected("expected value")),
        }
        let negative = self.peek() == Some(b'-');
        if negative {
            self.pos += 1;
        }
        let mut seen_dot = false;
        while let Some(&b) = self.bytes.get(self.pos) {
            match b {
                b'0'..=b'9' => self.pos += 1,
                b'.' => {
                    if seen_dot {
                        return Err(self.syntax(self.pos, "unexpected second '.' in number"));
                    }
                    seen_dot = true;
                    self.pos += 1;
                }
                _ => break,
            }
        }
        let literal = &self.text[start..self.pos];
        if seen_dot {
            let v: f64 = literal
                .parse()
                .map_err(|_| self.syntax(start, format!("invalid number literal '{literal}'")))?;
            Ok(Value::Double(v))
        } else if negative {
            let v: i64 = literal.parse().map_err(|_| {
                self.syntax(
                    start,
                    format!("number '{literal}' does not fit a signed 64-bit integer"),
                )
            })?;
            Ok(Value::Int(v))
        } else {
            let v: u64 = literal.parse().map_err(|_| {
                self.syntax(
                    start,
                    format!("number '{literal}' does not fit an unsigned 64-bit integer"),
                )
            })?;
            Ok(Value::UInt(v))
        }
    }

    fn expect_literal(&mut self, literal: &str) -> Result<()> {
        let end = self.pos + literal.len();
        if self.bytes.get(self.pos..end) == Some(literal.as_bytes()) {
            self.pos = end;
            Ok(())
        } else {
            Err(self.unexpected(&format!("expected '{literal}'")))
        }
    }

    /// Insignificant separators: ASCII controls and space.
    fn skip_whitespace(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if !matches!(b, 0x01..=0x20) {
                break;
            }
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Syntax error at the cursor, naming what was found there.
    fn unexpected(&self, expected: &str) -> JsonError {
        let message = match self.bytes.get(self.pos) {
            Some(&b) if b.is_ascii_graphic() => format!("{expected}, found '{}'", b as char),
            Some(&b) => format!("{expected}, found byte 0x{b:02x}"),
            None => format!("{expected}, found end of input"),
        };
        JsonError::Syntax {
            offset: self.pos,
            message,
        }
    }

    fn syntax(&self, offset: usize, message: impl Into<String>) -> JsonError {
        JsonError::Syntax {
            offset,
            message: message.into(),
        }
    }
}
