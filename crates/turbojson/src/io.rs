//! Stream adapters.
//!
//! Thin wrappers around the core codec: [`dump`] encodes a value and writes
//! the text to a byte sink, [`load`] reads a whole source and decodes it.
//! The required write/read-all capability is the `std::io` trait bound; the
//! adapters perform the only blocking I/O in the crate — the engine itself
//! always works on in-memory buffers.

use std::io::{Read, Write};

use crate::decoder::JsonDecoder;
use crate::encoder::JsonEncoder;
use crate::error::{Error, Result};
use crate::native::Native;
use crate::options::{DecodeOptions, EncodeOptions};
use crate::value::JsonValue;

/// Encodes `value` and writes the JSON text to `sink`.
pub fn dump<W: Write>(value: &Native, sink: &mut W, options: &EncodeOptions) -> Result<()> {
    let mut encoder = JsonEncoder::with_options(options.clone());
    let bytes = encoder.encode(value)?;
    sink.write_all(&bytes)
        .map_err(|e| Error::Io(e.to_string()))
}

/// Reads the full contents of `source` and decodes them as one document.
pub fn load<R: Read>(source: &mut R, options: &DecodeOptions) -> Result<JsonValue> {
    let mut buf = Vec::new();
    source
        .read_to_end(&mut buf)
        .map_err(|e| Error::Io(e.to_string()))?;
    JsonDecoder::with_options(options.clone()).decode(&buf)
}
