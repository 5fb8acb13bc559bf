//! Numeric formatter and parser.
//!
//! Integers are written as plain decimal literals; doubles under a
//! configurable fractional-digit precision with trailing zeros trimmed
//! (but never past the first fractional digit, so `1.0` stays `1.0`;
//! precision `0` writes no fractional part at all).
//! Parsing dispatches integer-shaped literals to 64-bit accumulation, the
//! big-integer path, or the double path depending on shape and range.

use turbojson_buffers::Writer;

use crate::error::{Error, Result};
use crate::options::DecodeOptions;
use crate::value::JsonValue;

/// Magnitudes at or above this render in exponent form; positional
/// rendering out here would emit dozens of meaningless digits.
const POSITIONAL_MAX: f64 = 1e16;
/// Nonzero magnitudes below this render in exponent form.
const POSITIONAL_MIN: f64 = 1e-15;

/// Digit-count threshold between the fixed-width big-integer accumulator
/// and the heap-allocated parse. Observable results are identical; only
/// the allocation behavior differs.
#[cfg(feature = "bigint")]
const BIGINT_FAST_DIGITS: usize = 38;

/// Writes a signed 64-bit integer as a plain decimal literal.
pub fn write_i64(w: &mut Writer, value: i64) {
    let mut digits = [0u8; 20];
    let mut magnitude = value.unsigned_abs();
    let mut i = digits.len();
    loop {
        i -= 1;
        digits[i] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        w.u8(b'-');
    }
    w.buf(&digits[i..]);
}

/// Writes an arbitrary-precision integer as a plain decimal literal.
#[cfg(feature = "bigint")]
pub fn write_bigint(w: &mut Writer, value: &num_bigint::BigInt) {
    w.utf8(&value.to_str_radix(10));
}

/// Writes a finite double with the given number of fractional digits.
///
/// NaN and ±Infinity are rejected before any formatting is attempted.
/// Trailing zeros are trimmed but the first fractional digit is kept, so
/// `1.0` stays `"1.0"`; at precision `0` no fractional part is written at
/// all and `1.0` renders as `"1"`.
pub fn write_f64(w: &mut Writer, value: f64, precision: u8) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NonFiniteDouble);
    }
    let magnitude = value.abs();
    if magnitude >= POSITIONAL_MAX || (magnitude > 0.0 && magnitude < POSITIONAL_MIN) {
        w.utf8(&format!("{value:e}"));
        return Ok(());
    }
    let mut text = format!("{value:.*}", precision as usize);
    if precision > 0 {
        while text.ends_with('0') && !text.ends_with(".0") {
            text.pop();
        }
    }
    w.utf8(&text);
    Ok(())
}

/// Parses a number literal starting at `start` (`-` or a digit).
///
/// Returns the value and the index just past the literal. Integer-shaped
/// literals produce [`JsonValue::Int`] when in range, otherwise take the
/// big-integer path (or fail when it is unavailable). Fractional or
/// exponent literals produce [`JsonValue::Float`].
pub fn parse_number(
    data: &[u8],
    start: usize,
    options: &DecodeOptions,
) -> Result<(JsonValue, usize)> {
    let len = data.len();
    let mut i = start;
    let negative = data[i] == b'-';
    if negative {
        i += 1;
    }
    let int_start = i;
    if i >= len || !data[i].is_ascii_digit() {
        return Err(Error::InvalidNumber(start));
    }
    if data[i] == b'0' {
        i += 1;
        if i < len && data[i].is_ascii_digit() {
            // RFC 4627: no leading zeros.
            return Err(Error::InvalidNumber(start));
        }
    } else {
        while i < len && data[i].is_ascii_digit() {
            i += 1;
        }
    }
    let int_end = i;

    let mut integral = true;
    if i < len && data[i] == b'.' {
        integral = false;
        i += 1;
        let frac_start = i;
        while i < len && data[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return Err(Error::InvalidNumber(start));
        }
    }
    if i < len && (data[i] == b'e' || data[i] == b'E') {
        integral = false;
        i += 1;
        if i < len && (data[i] == b'+' || data[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < len && data[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return Err(Error::InvalidNumber(start));
        }
    }

    if integral {
        let value = parse_integral(&data[int_start..int_end], negative, start, options)?;
        return Ok((value, i));
    }

    let value = if options.precise_float {
        parse_double_precise(&data[start..i], start)?
    } else {
        parse_double_fast(&data[start..i], start)?
    };
    Ok((JsonValue::Float(value), i))
}

/// 64-bit accumulation with an explicit wide check: magnitudes between
/// 2^31 and 2^32-1 and the boundary value -2^63 must come out exact, so
/// the accumulator is a u64 throughout regardless of digit count.
fn parse_integral(
    digits: &[u8],
    negative: bool,
    at: usize,
    options: &DecodeOptions,
) -> Result<JsonValue> {
    if digits.len() <= 19 {
        let mut magnitude: u64 = 0;
        for &b in digits {
            magnitude = magnitude * 10 + (b - b'0') as u64;
        }
        if negative {
            if magnitude <= i64::MAX as u64 {
                return Ok(JsonValue::Int(-(magnitude as i64)));
            }
            if magnitude == i64::MAX as u64 + 1 {
                return Ok(JsonValue::Int(i64::MIN));
            }
        } else if magnitude <= i64::MAX as u64 {
            return Ok(JsonValue::Int(magnitude as i64));
        }
    }
    parse_out_of_range(digits, negative, at, options)
}

#[cfg(feature = "bigint")]
fn parse_out_of_range(
    digits: &[u8],
    negative: bool,
    at: usize,
    options: &DecodeOptions,
) -> Result<JsonValue> {
    use num_bigint::BigInt;

    if !options.big_integer_mode {
        return Err(Error::NumberOutOfRange(at));
    }
    let value = if digits.len() < BIGINT_FAST_DIGITS {
        let mut magnitude: i128 = 0;
        for &b in digits {
            magnitude = magnitude * 10 + (b - b'0') as i128;
        }
        BigInt::from(magnitude)
    } else {
        BigInt::parse_bytes(digits, 10).ok_or(Error::InvalidNumber(at))?
    };
    Ok(JsonValue::BigInt(if negative { -value } else { value }))
}

#[cfg(not(feature = "bigint"))]
fn parse_out_of_range(
    _digits: &[u8],
    _negative: bool,
    at: usize,
    _options: &DecodeOptions,
) -> Result<JsonValue> {
    Err(Error::NumberOutOfRange(at))
}

/// Correctly-rounded conversion; trades speed for exactness.
fn parse_double_precise(literal: &[u8], at: usize) -> Result<f64> {
    let text = std::str::from_utf8(literal).map_err(|_| Error::InvalidNumber(at))?;
    let value: f64 = text.parse().map_err(|_| Error::InvalidNumber(at))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NumberOutOfRange(at))
    }
}

/// Fast approximate conversion: one u64 mantissa accumulation and one
/// power-of-ten multiply. Can be one ulp off the correctly-rounded result;
/// that is the documented trade of the default mode.
fn parse_double_fast(literal: &[u8], at: usize) -> Result<f64> {
    let mut i = 0;
    let negative = literal[0] == b'-';
    if negative {
        i = 1;
    }
    let mut mantissa: u64 = 0;
    let mut mantissa_digits = 0u32;
    let mut dec_exp: i32 = 0;
    while i < literal.len() && literal[i].is_ascii_digit() {
        if mantissa_digits < 19 {
            mantissa = mantissa * 10 + (literal[i] - b'0') as u64;
            mantissa_digits += 1;
        } else {
            dec_exp += 1;
        }
        i += 1;
    }
    if i < literal.len() && literal[i] == b'.' {
        i += 1;
        while i < literal.len() && literal[i].is_ascii_digit() {
            if mantissa_digits < 19 {
                mantissa = mantissa * 10 + (literal[i] - b'0') as u64;
                mantissa_digits += 1;
                dec_exp -= 1;
            }
            i += 1;
        }
    }
    if i < literal.len() && (literal[i] == b'e' || literal[i] == b'E') {
        i += 1;
        let exp_negative = literal[i] == b'-';
        if literal[i] == b'+' || literal[i] == b'-' {
            i += 1;
        }
        let mut exp: i32 = 0;
        while i < literal.len() && literal[i].is_ascii_digit() {
            exp = (exp * 10 + (literal[i] - b'0') as i32).min(100_000);
            i += 1;
        }
        dec_exp += if exp_negative { -exp } else { exp };
    }
    let mut value = mantissa as f64;
    if dec_exp != 0 {
        value *= 10f64.powi(dec_exp);
    }
    if !value.is_finite() {
        return Err(Error::NumberOutOfRange(at));
    }
    Ok(if negative { -value } else { value })
}
