//! [`Native`] — the encoder's input value graph.
//!
//! The encoder does not require callers to materialize a [`JsonValue`]
//! tree first: `Native` describes every host shape the serializer knows how
//! to dispatch on, including unordered collections, date/time values, and
//! objects that opt into serialization through [`ExportMapping`].

use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::value::JsonValue;

/// The export capability: a type that can supply its own mapping
/// representation for serialization.
///
/// The encoder consults this hook exactly once per otherwise-unsupported
/// value; it never inspects arbitrary attributes. The returned value is
/// expected to be a [`Native::Map`], but any encodable value is accepted
/// and encoded recursively.
pub trait ExportMapping {
    fn export(&self) -> Native;
}

/// A native value the encoder can serialize.
///
/// Dispatch priority follows the variant order below; anything the encoder
/// cannot map to JSON is represented as [`Native::Opaque`] and fails with a
/// usage error naming the kind.
#[derive(Clone)]
pub enum Native {
    Null,
    Bool(bool),
    Int(i64),
    #[cfg(feature = "bigint")]
    BigInt(num_bigint::BigInt),
    Float(f64),
    Str(String),
    /// Raw UTF-8 text supplied as bytes. Equivalent to [`Native::Str`] when
    /// the bytes are valid UTF-8; invalid sequences are an overflow error.
    Bytes(Vec<u8>),
    /// Ordered sequence; encoded as a JSON array in iteration order.
    List(Vec<Native>),
    /// Unordered collection; encoded as a JSON array in whatever order the
    /// host collection yielded its elements.
    Set(Vec<Native>),
    /// Key-value mapping; keys are coerced to strings.
    Map(Vec<(Native, Native)>),
    /// Instant in time; encoded as integer seconds since the Unix epoch.
    DateTime(DateTime<Utc>),
    /// Calendar date; encoded as midnight UTC on that date.
    Date(NaiveDate),
    /// A value exposing the export capability.
    Export(Rc<dyn ExportMapping>),
    /// A host value with no JSON mapping (function, class, opaque instance,
    /// fixed-type numeric buffer, ...). Always an encode failure; the
    /// payload names the kind for the error message.
    Opaque(&'static str),
}

impl fmt::Debug for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Native::Null => f.write_str("Null"),
            Native::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Native::Int(i) => f.debug_tuple("Int").field(i).finish(),
            #[cfg(feature = "bigint")]
            Native::BigInt(b) => f.debug_tuple("BigInt").field(b).finish(),
            Native::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Native::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Native::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Native::List(v) => f.debug_tuple("List").field(v).finish(),
            Native::Set(v) => f.debug_tuple("Set").field(v).finish(),
            Native::Map(v) => f.debug_tuple("Map").field(v).finish(),
            Native::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
            Native::Date(d) => f.debug_tuple("Date").field(d).finish(),
            Native::Export(_) => f.write_str("Export(..)"),
            Native::Opaque(kind) => f.debug_tuple("Opaque").field(kind).finish(),
        }
    }
}

impl From<&JsonValue> for Native {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Native::Null,
            JsonValue::Bool(b) => Native::Bool(*b),
            JsonValue::Int(i) => Native::Int(*i),
            #[cfg(feature = "bigint")]
            JsonValue::BigInt(b) => Native::BigInt(b.clone()),
            JsonValue::Float(f) => Native::Float(*f),
            JsonValue::Str(s) => Native::Str(s.clone()),
            JsonValue::Array(items) => Native::List(items.iter().map(Native::from).collect()),
            JsonValue::Object(pairs) => Native::Map(
                pairs
                    .iter()
                    .map(|(k, v)| (Native::Str(k.clone()), Native::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Native {
    fn from(b: bool) -> Self {
        Native::Bool(b)
    }
}

impl From<i64> for Native {
    fn from(i: i64) -> Self {
        Native::Int(i)
    }
}

impl From<f64> for Native {
    fn from(f: f64) -> Self {
        Native::Float(f)
    }
}

impl From<&str> for Native {
    fn from(s: &str) -> Self {
        Native::Str(s.to_owned())
    }
}

impl From<String> for Native {
    fn from(s: String) -> Self {
        Native::Str(s)
    }
}

impl From<Vec<Native>> for Native {
    fn from(items: Vec<Native>) -> Self {
        Native::List(items)
    }
}
