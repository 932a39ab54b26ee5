//! The JSON document value tree.
//!
//! [`Value`] is a tagged, recursively nested representation of a JSON
//! datum: null, bool, signed or unsigned integer, double, string, array,
//! or object. A value owns all values reachable through it, so the
//! ownership graph is always a tree: dropping a root drops the whole
//! document, and moving a value transfers its subtree.
//!
//! # Promotion
//!
//! A freshly created value is [`Value::Invalid`]: a transient "not yet
//! determined" state distinct from `Null`. Its kind is fixed the first
//! time it is used: [`entry`](Value::entry) promotes it to an object,
//! [`push`](Value::push) to an array, [`assign`](Value::assign) to a
//! scalar. Once a value is an array or object, scalar assignment is a
//! [`TypeMismatch`](crate::JsonError::TypeMismatch); the explicit
//! [`set_null`](Value::set_null) / [`set_array`](Value::set_array) /
//! [`set_object`](Value::set_object) resets are the only way to re-kind
//! a container.
//!
//! # Object ordering
//!
//! Objects are backed by a sorted map, so member iteration (and therefore
//! serialization) is in key order, not insertion order. Output is
//! deterministic regardless of construction order.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{JsonError, Result};
use crate::serializer;

/// The discriminant tag of a [`Value`], for inspection and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Not yet determined (freshly created, or the absent document).
    Invalid,
    /// JSON `null`.
    Null,
    /// JSON `true` / `false`.
    Bool,
    /// Signed 64-bit integer.
    Int,
    /// Unsigned 64-bit integer.
    UInt,
    /// Double-precision float.
    Double,
    /// UTF-8 string.
    String,
    /// Dense, zero-based sequence of values.
    Array,
    /// String-keyed map of values, ordered by key.
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Invalid => "invalid",
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::UInt => "uint",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A JSON document value. See the [module docs](self) for the promotion
/// and ordering rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Not yet determined. Serializes as `{}` (the absent document).
    #[default]
    Invalid,
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    /// Members ordered by key for deterministic serialization.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Create an empty value in the undetermined state.
    pub fn new() -> Self {
        Value::Invalid
    }

    /// The discriminant tag currently active.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Invalid => Kind::Invalid,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::UInt(_) => Kind::UInt,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Mutable access to the object member `key`, inserting an undetermined
    /// child if the key is absent.
    ///
    /// An undetermined receiver promotes to an empty object first; any
    /// other non-object receiver is a `TypeMismatch`. Inserting an existing
    /// key returns the existing child, so `entry(k)?.assign(v)?` twice
    /// leaves exactly one member for `k` holding the second value.
    pub fn entry(&mut self, key: &str) -> Result<&mut Value> {
        if let Value::Invalid = self {
            *self = Value::Object(BTreeMap::new());
        }
        match self {
            Value::Object(map) => Ok(map.entry(key.to_string()).or_insert(Value::Invalid)),
            other => Err(JsonError::TypeMismatch {
                expected: Kind::Object,
                found: other.kind(),
            }),
        }
    }

    /// Shared access to the object member `key`. Returns `None` on a
    /// missing key or a non-object receiver; never promotes.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Shared access to the array element at `index`.
    ///
    /// Requires an array receiver. An undetermined value does NOT promote
    /// here; only [`push`](Value::push) or [`set_array`](Value::set_array)
    /// make arrays.
    pub fn at(&self, index: usize) -> Result<&Value> {
        match self {
            Value::Array(items) => items.get(index).ok_or(JsonError::IndexOutOfRange {
                index,
                len: items.len(),
            }),
            other => Err(JsonError::TypeMismatch {
                expected: Kind::Array,
                found: other.kind(),
            }),
        }
    }

    /// Mutable access to the array element at `index`. Same receiver rules
    /// as [`at`](Value::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        match self {
            Value::Array(items) => {
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or(JsonError::IndexOutOfRange { index, len })
            }
            other => Err(JsonError::TypeMismatch {
                expected: Kind::Array,
                found: other.kind(),
            }),
        }
    }

    /// Append a value to the array, promoting an undetermined receiver to
    /// an empty array first. Accepts scalars, strings, or whole `Value`
    /// subtrees (appended by move).
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        if let Value::Invalid = self {
            *self = Value::Array(Vec::new());
        }
        match self {
            Value::Array(items) => {
                items.push(value.into());
                Ok(())
            }
            other => Err(JsonError::TypeMismatch {
                expected: Kind::Array,
                found: other.kind(),
            }),
        }
    }

    /// Set the receiver to the given scalar or string value.
    ///
    /// Any previous scalar payload is discarded. A receiver already fixed
    /// to array or object refuses with `TypeMismatch`; re-kinding a
    /// container goes through [`set_null`](Value::set_null) /
    /// [`set_array`](Value::set_array) / [`set_object`](Value::set_object).
    pub fn assign(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        match self {
            Value::Array(_) | Value::Object(_) => Err(JsonError::TypeMismatch {
                expected: value.kind(),
                found: self.kind(),
            }),
            _ => {
                *self = value;
                Ok(())
            }
        }
    }

    /// Reset to `null`, releasing any previous payload.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    /// Reset to an empty array, releasing any previous payload.
    pub fn set_array(&mut self) {
        *self = Value::Array(Vec::new());
    }

    /// Reset to an empty object, releasing any previous payload.
    pub fn set_object(&mut self) {
        *self = Value::Object(BTreeMap::new());
    }

    /// Read a signed integer. A `UInt` payload is cross-read when it fits
    /// `i64`; a magnitude that would reinterpret as negative refuses.
    pub fn as_int(&self) -> Result<i64> {
        match *self {
            Value::Int(v) => Ok(v),
            Value::UInt(v) => i64::try_from(v).map_err(|_| JsonError::TypeMismatch {
                expected: Kind::Int,
                found: Kind::UInt,
            }),
            ref other => Err(JsonError::TypeMismatch {
                expected: Kind::Int,
                found: other.kind(),
            }),
        }
    }

    /// Read an unsigned integer. An `Int` payload is cross-read when it is
    /// non-negative.
    pub fn as_uint(&self) -> Result<u64> {
        match *self {
            Value::UInt(v) => Ok(v),
            Value::Int(v) => u64::try_from(v).map_err(|_| JsonError::TypeMismatch {
                expected: Kind::UInt,
                found: Kind::Int,
            }),
            ref other => Err(JsonError::TypeMismatch {
                expected: Kind::UInt,
                found: other.kind(),
            }),
        }
    }

    /// Read a double. No cross-reads: an integer payload refuses.
    pub fn as_double(&self) -> Result<f64> {
        match *self {
            Value::Double(v) => Ok(v),
            ref other => Err(JsonError::TypeMismatch {
                expected: Kind::Double,
                found: other.kind(),
            }),
        }
    }

    /// Read a bool.
    pub fn as_bool(&self) -> Result<bool> {
        match *self {
            Value::Bool(v) => Ok(v),
            ref other => Err(JsonError::TypeMismatch {
                expected: Kind::Bool,
                found: other.kind(),
            }),
        }
    }

    /// Read a string slice.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(JsonError::TypeMismatch {
                expected: Kind::String,
                found: other.kind(),
            }),
        }
    }

    /// Element count of an array receiver. Objects do not have a length;
    /// any non-array receiver is a `TypeMismatch`.
    pub fn len(&self) -> Result<usize> {
        match self {
            Value::Array(items) => Ok(items.len()),
            other => Err(JsonError::TypeMismatch {
                expected: Kind::Array,
                found: other.kind(),
            }),
        }
    }

    /// Canonical compact JSON text of this value.
    /// See [`serialize`](crate::serialize) for the exact output rules.
    pub fn to_text(&self) -> String {
        serializer::serialize(self)
    }
}

/// Renders the same canonical text as [`Value::to_text`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// Closed conversion set: each concrete scalar type maps to exactly one
// kind, so classification happens at compile time in the caller's
// `push`/`assign` call.

macro_rules! value_from_signed {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(i64::from(v))
            }
        }
    )*};
}

macro_rules! value_from_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::UInt(u64::from(v))
            }
        }
    )*};
}

value_from_signed!(i8, i16, i32, i64);
value_from_unsigned!(u8, u16, u32, u64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Double(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}
