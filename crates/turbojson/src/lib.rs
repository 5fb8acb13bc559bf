//! High-throughput JSON encoder/decoder.
//!
//! turbojson converts between native in-memory values and JSON text,
//! optimized for speed over a general-purpose JSON library while keeping
//! strict RFC 4627 validity and configurable numeric fidelity.
//!
//! # Overview
//!
//! - [`JsonEncoder`] — type-dispatching serializer over a [`Native`] value
//!   graph (or a decoded [`JsonValue`] tree, or a `serde_json::Value`).
//! - [`JsonDecoder`] — strict recursive-descent parser producing a
//!   [`JsonValue`] tree, depth-bounded at [`MAX_DEPTH`].
//! - [`encode`] / [`decode`] — one-shot convenience entry points.
//! - [`io::dump`] / [`io::load`] — stream adapters over `std::io`.
//!
//! # Example
//!
//! ```
//! use turbojson::{decode, encode, DecodeOptions, EncodeOptions, Native};
//!
//! let text = encode(
//!     &Native::List(vec![Native::Int(1), Native::from("two")]),
//!     &EncodeOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(text, r#"[1,"two"]"#);
//!
//! let value = decode(&text, &DecodeOptions::default()).unwrap();
//! assert_eq!(value[0], 1i64);
//! ```
//!
//! # Numeric fidelity
//!
//! Doubles are written with a configurable number of fractional digits
//! (`double_precision`, snapped into `[0, 15]`) and parsed with a fast
//! approximate conversion by default or a correctly-rounded one under
//! `precise_float`. Integers outside the signed 64-bit range are carried
//! as arbitrary-precision values when the `bigint` feature is enabled
//! ([`BIGINT_SUPPORTED`]); otherwise they are an error, never a silent
//! wrap.

mod constants;
mod decoder;
mod encoder;
mod error;
mod escape;
mod native;
mod num;
mod options;
mod value;

pub mod io;

pub use constants::{BIGINT_SUPPORTED, DEFAULT_DOUBLE_PRECISION, MAX_DEPTH, MAX_DOUBLE_PRECISION, VERSION};
pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;
pub use error::{Error, ErrorKind, Result};
pub use native::{ExportMapping, Native};
pub use options::{DecodeOptions, EncodeOptions};
pub use value::JsonValue;

/// Encodes a native value graph to JSON text.
pub fn encode(value: &Native, options: &EncodeOptions) -> Result<String> {
    JsonEncoder::with_options(options.clone()).encode_to_string(value)
}

/// Decodes a JSON document.
pub fn decode(text: &str, options: &DecodeOptions) -> Result<JsonValue> {
    JsonDecoder::with_options(options.clone()).decode_str(text)
}

/// Decodes a JSON document supplied as raw bytes.
pub fn decode_bytes(data: &[u8], options: &DecodeOptions) -> Result<JsonValue> {
    JsonDecoder::with_options(options.clone()).decode(data)
}
