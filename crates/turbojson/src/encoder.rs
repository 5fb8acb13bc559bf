//! Type-dispatching JSON encoder.
//!
//! Walks a [`Native`] value graph and writes JSON text through the shared
//! [`Writer`], using the escape engine for strings and the numeric
//! formatter for numbers. Dispatch is by capability in a fixed priority
//! order; anything without a JSON mapping is a usage error, never a silent
//! coercion. Container recursion is bounded by the same depth limit as the
//! decoder, so a cyclic export graph fails with
//! [`Error::DepthLimitExceeded`] instead of overflowing the stack.

use chrono::NaiveTime;
use turbojson_buffers::Writer;

use crate::constants::MAX_DEPTH;
use crate::error::{Error, Result};
use crate::escape;
use crate::native::Native;
use crate::num;
use crate::options::EncodeOptions;
use crate::value::JsonValue;

/// JSON text encoder.
///
/// Owns a reusable output buffer; `encode` rewinds it on entry (including
/// after a failed call), so buffers are scoped to one call and nothing
/// leaks across repeated failures.
pub struct JsonEncoder {
    pub writer: Writer,
    pub options: EncodeOptions,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::with_options(EncodeOptions::default())
    }

    pub fn with_options(options: EncodeOptions) -> Self {
        Self {
            writer: Writer::new(),
            options,
        }
    }

    /// Encodes a native value graph and returns the JSON bytes.
    pub fn encode(&mut self, value: &Native) -> Result<Vec<u8>> {
        self.writer.reset();
        self.write_native(value, 0)?;
        Ok(self.writer.flush())
    }

    /// Encodes a native value graph and returns the JSON text.
    pub fn encode_to_string(&mut self, value: &Native) -> Result<String> {
        String::from_utf8(self.encode(value)?).map_err(|_| Error::InvalidRawUtf8)
    }

    /// Encodes a decoded [`JsonValue`] tree.
    pub fn encode_value(&mut self, value: &JsonValue) -> Result<Vec<u8>> {
        self.writer.reset();
        self.write_value(value, 0)?;
        Ok(self.writer.flush())
    }

    /// Encodes a `serde_json::Value` (interop convenience).
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>> {
        self.writer.reset();
        self.write_json(value, 0)?;
        Ok(self.writer.flush())
    }

    fn write_native(&mut self, value: &Native, depth: usize) -> Result<()> {
        match value {
            Native::Null => self.writer.buf(b"null"),
            Native::Bool(true) => self.writer.buf(b"true"),
            Native::Bool(false) => self.writer.buf(b"false"),
            Native::Int(i) => num::write_i64(&mut self.writer, *i),
            #[cfg(feature = "bigint")]
            Native::BigInt(b) => {
                if !self.options.big_integer_mode {
                    return Err(Error::IntegerOverflow);
                }
                num::write_bigint(&mut self.writer, b);
            }
            Native::Float(f) => {
                num::write_f64(&mut self.writer, *f, self.options.double_precision)?
            }
            Native::Str(s) => self.write_str(s),
            Native::Bytes(bytes) => escape::write_escaped_bytes(
                &mut self.writer,
                bytes,
                self.options.ensure_ascii,
                self.options.encode_html_chars,
            )?,
            Native::List(items) | Native::Set(items) => {
                self.enter(depth)?;
                self.writer.u8(b'[');
                for (n, item) in items.iter().enumerate() {
                    if n > 0 {
                        self.writer.u8(b',');
                    }
                    self.write_native(item, depth + 1)?;
                }
                self.writer.u8(b']');
            }
            Native::Map(pairs) => {
                self.enter(depth)?;
                self.writer.u8(b'{');
                for (n, (key, item)) in pairs.iter().enumerate() {
                    if n > 0 {
                        self.writer.u8(b',');
                    }
                    self.write_key(key)?;
                    self.writer.u8(b':');
                    self.write_native(item, depth + 1)?;
                }
                self.writer.u8(b'}');
            }
            Native::DateTime(dt) => num::write_i64(&mut self.writer, dt.timestamp()),
            Native::Date(date) => {
                // A date-only value is midnight UTC on that date.
                let midnight = date.and_time(NaiveTime::MIN).and_utc();
                num::write_i64(&mut self.writer, midnight.timestamp());
            }
            Native::Export(exporter) => {
                // The one capability check: ask the value for its mapping
                // representation and encode that instead. The guard runs
                // here too, so an export chain that never passes through a
                // container still cannot recurse unbounded.
                self.enter(depth)?;
                let exported = exporter.export();
                self.write_native(&exported, depth + 1)?;
            }
            Native::Opaque(kind) => return Err(Error::UnsupportedType(kind)),
        }
        Ok(())
    }

    /// Coerces a map key to a JSON string. Strings pass through; numeric,
    /// boolean, and null keys take their scalar spelling in quotes; other
    /// key shapes have no string form and are a usage error.
    fn write_key(&mut self, key: &Native) -> Result<()> {
        match key {
            Native::Str(s) => self.write_str(s),
            Native::Bytes(bytes) => escape::write_escaped_bytes(
                &mut self.writer,
                bytes,
                self.options.ensure_ascii,
                self.options.encode_html_chars,
            )?,
            Native::Int(i) => {
                self.writer.u8(b'"');
                num::write_i64(&mut self.writer, *i);
                self.writer.u8(b'"');
            }
            #[cfg(feature = "bigint")]
            Native::BigInt(b) => {
                self.writer.u8(b'"');
                num::write_bigint(&mut self.writer, b);
                self.writer.u8(b'"');
            }
            Native::Float(f) => {
                self.writer.u8(b'"');
                num::write_f64(&mut self.writer, *f, self.options.double_precision)?;
                self.writer.u8(b'"');
            }
            Native::Bool(true) => self.writer.buf(b"\"true\""),
            Native::Bool(false) => self.writer.buf(b"\"false\""),
            Native::Null => self.writer.buf(b"\"null\""),
            Native::List(_) | Native::Set(_) => return Err(Error::UnsupportedKey("sequence")),
            Native::Map(_) => return Err(Error::UnsupportedKey("mapping")),
            Native::DateTime(_) | Native::Date(_) => {
                return Err(Error::UnsupportedKey("datetime"))
            }
            Native::Export(_) => return Err(Error::UnsupportedKey("export")),
            Native::Opaque(kind) => return Err(Error::UnsupportedKey(kind)),
        }
        Ok(())
    }

    fn write_value(&mut self, value: &JsonValue, depth: usize) -> Result<()> {
        match value {
            JsonValue::Null => self.writer.buf(b"null"),
            JsonValue::Bool(true) => self.writer.buf(b"true"),
            JsonValue::Bool(false) => self.writer.buf(b"false"),
            JsonValue::Int(i) => num::write_i64(&mut self.writer, *i),
            #[cfg(feature = "bigint")]
            JsonValue::BigInt(b) => {
                if !self.options.big_integer_mode {
                    return Err(Error::IntegerOverflow);
                }
                num::write_bigint(&mut self.writer, b);
            }
            JsonValue::Float(f) => {
                num::write_f64(&mut self.writer, *f, self.options.double_precision)?
            }
            JsonValue::Str(s) => self.write_str(s),
            JsonValue::Array(items) => {
                self.enter(depth)?;
                self.writer.u8(b'[');
                for (n, item) in items.iter().enumerate() {
                    if n > 0 {
                        self.writer.u8(b',');
                    }
                    self.write_value(item, depth + 1)?;
                }
                self.writer.u8(b']');
            }
            JsonValue::Object(pairs) => {
                self.enter(depth)?;
                self.writer.u8(b'{');
                for (n, (key, item)) in pairs.iter().enumerate() {
                    if n > 0 {
                        self.writer.u8(b',');
                    }
                    self.write_str(key);
                    self.writer.u8(b':');
                    self.write_value(item, depth + 1)?;
                }
                self.writer.u8(b'}');
            }
        }
        Ok(())
    }

    fn write_json(&mut self, value: &serde_json::Value, depth: usize) -> Result<()> {
        match value {
            serde_json::Value::Null => self.writer.buf(b"null"),
            serde_json::Value::Bool(b) => self.writer.buf(if *b { b"true" } else { b"false" }),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    num::write_i64(&mut self.writer, i);
                } else if let Some(u) = n.as_u64() {
                    self.write_u64(u)?;
                } else if let Some(f) = n.as_f64() {
                    num::write_f64(&mut self.writer, f, self.options.double_precision)?;
                } else {
                    return Err(Error::UnsupportedType("number"));
                }
            }
            serde_json::Value::String(s) => self.write_str(s),
            serde_json::Value::Array(items) => {
                self.enter(depth)?;
                self.writer.u8(b'[');
                for (n, item) in items.iter().enumerate() {
                    if n > 0 {
                        self.writer.u8(b',');
                    }
                    self.write_json(item, depth + 1)?;
                }
                self.writer.u8(b']');
            }
            serde_json::Value::Object(map) => {
                self.enter(depth)?;
                self.writer.u8(b'{');
                for (n, (key, item)) in map.iter().enumerate() {
                    if n > 0 {
                        self.writer.u8(b',');
                    }
                    self.write_str(key);
                    self.writer.u8(b':');
                    self.write_json(item, depth + 1)?;
                }
                self.writer.u8(b'}');
            }
        }
        Ok(())
    }

    #[cfg(feature = "bigint")]
    fn write_u64(&mut self, value: u64) -> Result<()> {
        if !self.options.big_integer_mode {
            return Err(Error::IntegerOverflow);
        }
        num::write_bigint(&mut self.writer, &num_bigint::BigInt::from(value));
        Ok(())
    }

    #[cfg(not(feature = "bigint"))]
    fn write_u64(&mut self, _value: u64) -> Result<()> {
        Err(Error::IntegerOverflow)
    }

    fn write_str(&mut self, text: &str) {
        escape::write_escaped(
            &mut self.writer,
            text,
            self.options.ensure_ascii,
            self.options.encode_html_chars,
        );
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth >= MAX_DEPTH {
            return Err(Error::DepthLimitExceeded);
        }
        Ok(())
    }
}
