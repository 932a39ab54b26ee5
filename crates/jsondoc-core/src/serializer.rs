//! Canonical JSON text emission.
//!
//! The serializer is a pure recursive walk over a [`Value`] tree, pushing
//! text into a single output buffer. Output is always compact: one line,
//! no insignificant whitespace, no pretty-printing. Object members are
//! emitted in sorted key order (the backing map's iteration order), so
//! the same tree always produces the same text.

use crate::value::Value;

/// Serialize a [`Value`] tree into canonical compact JSON text.
///
/// - integers in plain decimal, sign only when negative
/// - doubles in fixed notation with exactly six fraction digits, never
///   scientific; non-finite doubles have no JSON form and emit `null`
/// - strings quoted, with `"`, `\`, and control characters escaped
/// - an undetermined value emits `{}`, the canonical absent document
///
/// ```
/// use jsondoc_core::{serialize, Value};
///
/// let mut doc = Value::new();
/// doc.entry("pi")?.assign(3.14f64)?;
/// doc.entry("n")?.assign(-42i64)?;
/// assert_eq!(serialize(&doc), r#"{"n":-42,"pi":3.140000}"#);
/// # Ok::<(), jsondoc_core::JsonError>(())
/// ```
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Invalid => out.push_str("{}"),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(v) => out.push_str(&v.to_string()),
        Value::UInt(v) => out.push_str(&v.to_string()),
        Value::Double(v) => write_double(*v, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            let mut first = true;
            for (key, item) in map {
                if !first {
                    out.push(',');
                }
                first = false;
                write_string(key, out);
                out.push(':');
                write_value(item, out);
            }
            out.push('}');
        }
    }
}

/// Fixed six-fraction-digit notation, matching the width the parser's
/// double classification round-trips.
fn write_double(v: f64, out: &mut String) {
    if v.is_finite() {
        out.push_str(&format!("{v:.6}"));
    } else {
        out.push_str("null");
    }
}

/// Quoted string with the short escapes where they exist and `\u00XX`
/// for the remaining control characters. Non-ASCII passes through as
/// raw UTF-8.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
