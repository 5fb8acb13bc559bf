//! [`JsonValue`] — the tagged in-memory form of any JSON datum.

use std::ops::Index;

use crate::error::Error;

/// Decoded JSON value.
///
/// This is the decoder's output and the canonical form the encoder can
/// serialize back. Objects keep insertion order; key order carries no
/// semantic weight beyond round-trip stability. Duplicate keys never occur
/// in a built tree — [`JsonValue::object_insert`] makes the last write win.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    /// Signed 64-bit integer, covering the full range including `i64::MIN`.
    Int(i64),
    /// Arbitrary-precision integer; only constructed when the `bigint`
    /// feature is enabled and the per-call `big_integer_mode` option allows.
    #[cfg(feature = "bigint")]
    BigInt(num_bigint::BigInt),
    /// Finite double; never NaN or ±Infinity.
    Float(f64),
    Str(String),
    Array(Vec<JsonValue>),
    Object(Vec<(String, JsonValue)>),
}

impl JsonValue {
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Float(f) => Some(*f),
            JsonValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Object field lookup by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(pairs) => {
                pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Number of elements (array) or fields (object).
    pub fn len(&self) -> Option<usize> {
        match self {
            JsonValue::Array(items) => Some(items.len()),
            JsonValue::Object(pairs) => Some(pairs.len()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|n| n == 0)
    }

    /// Inserts into an object pair list with last-write-wins semantics:
    /// an existing key is overwritten in place, a new key is appended.
    pub fn object_insert(pairs: &mut Vec<(String, JsonValue)>, key: String, value: JsonValue) {
        if let Some(slot) = pairs.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            pairs.push((key, value));
        }
    }
}

impl Index<&str> for JsonValue {
    type Output = JsonValue;

    /// Panics if `self` is not an object or the key is absent. Intended for
    /// tests and quick scripts; use [`JsonValue::get`] for fallible access.
    fn index(&self, key: &str) -> &JsonValue {
        self.get(key)
            .unwrap_or_else(|| panic!("no field `{key}` in JSON object"))
    }
}

impl Index<usize> for JsonValue {
    type Output = JsonValue;

    fn index(&self, index: usize) -> &JsonValue {
        match self {
            JsonValue::Array(items) => &items[index],
            _ => panic!("not a JSON array"),
        }
    }
}

impl PartialEq<i64> for JsonValue {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, JsonValue::Int(i) if i == other)
    }
}

impl PartialEq<f64> for JsonValue {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, JsonValue::Float(f) if f == other)
    }
}

impl PartialEq<bool> for JsonValue {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, JsonValue::Bool(b) if b == other)
    }
}

impl PartialEq<&str> for JsonValue {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, JsonValue::Str(s) if s == other)
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int(i)
                } else {
                    #[cfg(feature = "bigint")]
                    if let Some(u) = n.as_u64() {
                        return JsonValue::BigInt(num_bigint::BigInt::from(u));
                    }
                    JsonValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => JsonValue::Str(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut pairs = Vec::with_capacity(map.len());
                for (k, v) in map {
                    JsonValue::object_insert(&mut pairs, k, JsonValue::from(v));
                }
                JsonValue::Object(pairs)
            }
        }
    }
}

impl TryFrom<&JsonValue> for serde_json::Value {
    type Error = Error;

    /// Fails with [`Error::IntegerOverflow`] when a big integer does not fit
    /// the `serde_json` number model.
    fn try_from(value: &JsonValue) -> Result<Self, Error> {
        Ok(match value {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(*b),
            JsonValue::Int(i) => serde_json::Value::from(*i),
            #[cfg(feature = "bigint")]
            JsonValue::BigInt(b) => {
                if let Ok(i) = i64::try_from(b) {
                    serde_json::Value::from(i)
                } else if let Ok(u) = u64::try_from(b) {
                    serde_json::Value::from(u)
                } else {
                    return Err(Error::IntegerOverflow);
                }
            }
            JsonValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or(Error::NonFiniteDouble)?,
            JsonValue::Str(s) => serde_json::Value::String(s.clone()),
            JsonValue::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            JsonValue::Object(pairs) => {
                let mut map = serde_json::Map::with_capacity(pairs.len());
                for (k, v) in pairs {
                    map.insert(k.clone(), serde_json::Value::try_from(v)?);
                }
                serde_json::Value::Object(map)
            }
        })
    }
}
