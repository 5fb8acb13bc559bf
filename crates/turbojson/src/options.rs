//! Encode/decode options.
//!
//! Both option sets exist in two forms: the typed structs used from Rust,
//! and a dynamic `from_value` surface that validates options supplied as a
//! decoded JSON object (for embedders passing options through from a host
//! environment). The dynamic surface is where wrong-typed option values
//! turn into usage errors.

use crate::constants::{DEFAULT_DOUBLE_PRECISION, MAX_DOUBLE_PRECISION};
use crate::error::{Error, Result};
use crate::value::JsonValue;

/// Snaps an out-of-range precision request to the maximum.
///
/// Over- and under-shooting both land on [`MAX_DOUBLE_PRECISION`]: `20`
/// behaves as `15` and so does `-1`. This mirrors the original codec and is
/// deliberate — an out-of-range request is not an error.
fn snap_precision(precision: i64) -> u8 {
    if (0..=MAX_DOUBLE_PRECISION as i64).contains(&precision) {
        precision as u8
    } else {
        MAX_DOUBLE_PRECISION
    }
}

/// Options accepted by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Fractional digits written for doubles, in `[0, 15]`.
    pub double_precision: u8,
    /// When set, non-ASCII code points are written as `\uXXXX` escapes.
    pub ensure_ascii: bool,
    /// When set, `<`, `>` and `&` are written as `\u00XX` escapes.
    pub encode_html_chars: bool,
    /// Whether integers outside the 64-bit range may be written. Only
    /// effective in builds with the `bigint` feature.
    pub big_integer_mode: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            double_precision: DEFAULT_DOUBLE_PRECISION,
            ensure_ascii: true,
            encode_html_chars: false,
            big_integer_mode: true,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the double precision, snapping out-of-range values to the max.
    ///
    /// At precision `0` doubles render with no fractional part at all
    /// (`1.0` becomes `"1"`); at every other precision an integer-valued
    /// double keeps one fractional digit (`1.0` stays `"1.0"`).
    pub fn double_precision(mut self, precision: i64) -> Self {
        self.double_precision = snap_precision(precision);
        self
    }

    pub fn ensure_ascii(mut self, yes: bool) -> Self {
        self.ensure_ascii = yes;
        self
    }

    pub fn encode_html_chars(mut self, yes: bool) -> Self {
        self.encode_html_chars = yes;
        self
    }

    pub fn big_integer_mode(mut self, yes: bool) -> Self {
        self.big_integer_mode = yes;
        self
    }

    /// Builds options from a decoded JSON object.
    ///
    /// `double_precision` must be an integer (a string, float, or null
    /// there is a usage error, not a coercion); the boolean options must be
    /// booleans. Unknown keys are rejected.
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        let pairs = match value {
            JsonValue::Object(pairs) => pairs,
            _ => return Err(Error::InvalidOptionType("options")),
        };
        let mut options = Self::default();
        for (key, val) in pairs {
            match key.as_str() {
                "double_precision" => match val {
                    JsonValue::Int(i) => options.double_precision = snap_precision(*i),
                    _ => return Err(Error::InvalidOptionType("double_precision")),
                },
                "ensure_ascii" => options.ensure_ascii = expect_bool(val, "ensure_ascii")?,
                "encode_html_chars" => {
                    options.encode_html_chars = expect_bool(val, "encode_html_chars")?
                }
                "big_integer_mode" => {
                    options.big_integer_mode = expect_bool(val, "big_integer_mode")?
                }
                other => return Err(Error::UnknownOption(other.to_owned())),
            }
        }
        Ok(options)
    }
}

/// Options accepted by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Use the correctly-rounded string-to-double conversion instead of the
    /// fast approximate one.
    pub precise_float: bool,
    /// Whether integer literals outside the 64-bit range may produce big
    /// integers. Only effective in builds with the `bigint` feature.
    pub big_integer_mode: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            precise_float: false,
            big_integer_mode: true,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precise_float(mut self, yes: bool) -> Self {
        self.precise_float = yes;
        self
    }

    pub fn big_integer_mode(mut self, yes: bool) -> Self {
        self.big_integer_mode = yes;
        self
    }

    /// Builds options from a decoded JSON object; see
    /// [`EncodeOptions::from_value`] for the validation rules.
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        let pairs = match value {
            JsonValue::Object(pairs) => pairs,
            _ => return Err(Error::InvalidOptionType("options")),
        };
        let mut options = Self::default();
        for (key, val) in pairs {
            match key.as_str() {
                "precise_float" => options.precise_float = expect_bool(val, "precise_float")?,
                "big_integer_mode" => {
                    options.big_integer_mode = expect_bool(val, "big_integer_mode")?
                }
                other => return Err(Error::UnknownOption(other.to_owned())),
            }
        }
        Ok(options)
    }
}

fn expect_bool(value: &JsonValue, name: &'static str) -> Result<bool> {
    value.as_bool().ok_or(Error::InvalidOptionType(name))
}
