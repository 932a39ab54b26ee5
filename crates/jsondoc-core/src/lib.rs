//! # jsondoc-core
//!
//! A self-contained JSON document model: an in-memory [`Value`] tree, a
//! recursive-descent [`parse`] that turns JSON text into that tree, and a
//! [`serialize`] that emits canonical compact text. Meant to be embedded
//! in larger programs as the one way to build, inspect, and emit JSON,
//! with no external JSON library involved.
//!
//! ## Quick start
//!
//! ```rust
//! use jsondoc_core::{parse, Value};
//!
//! // Build a document through the mutation API...
//! let mut doc = Value::new();
//! doc.entry("name")?.assign("Alice")?;
//! doc.entry("scores")?.push(95u32)?;
//! doc.entry("scores")?.push(87u32)?;
//! assert_eq!(doc.to_text(), r#"{"name":"Alice","scores":[95,87]}"#);
//!
//! // ...and round-trip it through text.
//! let back = parse(&doc.to_text())?;
//! assert_eq!(back, doc);
//! # Ok::<(), jsondoc_core::JsonError>(())
//! ```
//!
//! Object members serialize in sorted key order, so output is
//! deterministic regardless of construction order.
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tree and its mutation/accessor API
//! - [`parser`] — JSON text → `Value`
//! - [`serializer`] — `Value` → canonical JSON text
//! - [`error`] — error types for parse and typed-access failures

pub mod error;
pub mod parser;
pub mod serializer;
pub mod value;

pub use error::{JsonError, Result};
pub use parser::parse;
pub use serializer::serialize;
pub use value::{Kind, Value};
