//! Escape engine: JSON string literals to and from UTF-8 text.
//!
//! Encoding is defined over Unicode code points, so a `&str` and the same
//! text supplied as raw UTF-8 bytes produce identical output. The escape
//! rules, in priority order: `\\`, `\/`, `\"`, the short escapes for
//! backspace/formfeed/newline/CR/tab, `\u00XX` for the remaining control
//! characters, and — when HTML-safe output is requested — `\u003c`,
//! `\u003e`, `\u0026` for `<`, `>`, `&`. Non-ASCII code points are either
//! passed through as raw UTF-8 or escaped as `\uXXXX` (astral code points
//! as a UTF-16 surrogate pair) depending on `ensure_ascii`.

use turbojson_buffers::Writer;

use crate::error::{Error, Result};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Worst-case output bytes per input byte: a control character in a
/// one-byte code point expands to `\u00XX`.
const MAX_EXPANSION: usize = 6;

/// Writes `text` as a quoted JSON string literal.
pub fn write_escaped(w: &mut Writer, text: &str, ensure_ascii: bool, encode_html_chars: bool) {
    w.ensure_capacity(text.len() * MAX_EXPANSION + 2);
    w.u8(b'"');
    for ch in text.chars() {
        write_char(w, ch, ensure_ascii, encode_html_chars);
    }
    w.u8(b'"');
}

/// Writes raw UTF-8 bytes as a quoted JSON string literal.
///
/// Invalid byte sequences (overlong forms included — `from_utf8` rejects
/// them) are an overflow error, matching the behavior for raw text input.
pub fn write_escaped_bytes(
    w: &mut Writer,
    bytes: &[u8],
    ensure_ascii: bool,
    encode_html_chars: bool,
) -> Result<()> {
    let text = std::str::from_utf8(bytes).map_err(|_| Error::InvalidRawUtf8)?;
    write_escaped(w, text, ensure_ascii, encode_html_chars);
    Ok(())
}

#[inline]
fn write_char(w: &mut Writer, ch: char, ensure_ascii: bool, encode_html_chars: bool) {
    match ch {
        '\\' => w.u8x2(b'\\', b'\\'),
        '/' => w.u8x2(b'\\', b'/'),
        '"' => w.u8x2(b'\\', b'"'),
        '\u{8}' => w.u8x2(b'\\', b'b'),
        '\u{c}' => w.u8x2(b'\\', b'f'),
        '\n' => w.u8x2(b'\\', b'n'),
        '\r' => w.u8x2(b'\\', b'r'),
        '\t' => w.u8x2(b'\\', b't'),
        _ if (ch as u32) < 0x20 => write_unit_escape(w, ch as u16),
        '<' | '>' | '&' if encode_html_chars => write_unit_escape(w, ch as u16),
        _ if ch.is_ascii() => w.u8(ch as u8),
        _ if !ensure_ascii => {
            let mut utf8 = [0u8; 4];
            w.buf(ch.encode_utf8(&mut utf8).as_bytes());
        }
        _ => {
            let cp = ch as u32;
            if cp <= 0xffff {
                write_unit_escape(w, cp as u16);
            } else {
                // Astral plane: UTF-16 surrogate pair, two escapes.
                let v = cp - 0x1_0000;
                write_unit_escape(w, 0xd800 + (v >> 10) as u16);
                write_unit_escape(w, 0xdc00 + (v & 0x3ff) as u16);
            }
        }
    }
}

#[inline]
fn write_unit_escape(w: &mut Writer, unit: u16) {
    w.ensure_capacity(6);
    let x = w.x;
    w.uint8[x] = b'\\';
    w.uint8[x + 1] = b'u';
    w.uint8[x + 2] = HEX[(unit >> 12) as usize & 0xf];
    w.uint8[x + 3] = HEX[(unit >> 8) as usize & 0xf];
    w.uint8[x + 4] = HEX[(unit >> 4) as usize & 0xf];
    w.uint8[x + 5] = HEX[unit as usize & 0xf];
    w.x = x + 6;
}

/// Decodes a string literal's contents.
///
/// `x` must point just past the opening `"`. Returns the decoded text and
/// the index just past the closing `"`. Rejects unterminated literals,
/// truncated or unknown escapes, unpaired surrogates, raw control bytes,
/// and invalid UTF-8.
pub fn unescape(data: &[u8], x: usize) -> Result<(String, usize)> {
    let start = x;
    let mut out: Vec<u8> = Vec::new();
    let mut i = x;
    let len = data.len();
    loop {
        // Fast path: copy a run of plain bytes in one shot.
        let run = i;
        while i < len && data[i] != b'"' && data[i] != b'\\' && data[i] >= 0x20 {
            i += 1;
        }
        out.extend_from_slice(&data[run..i]);
        if i >= len {
            return Err(Error::UnterminatedString(start.saturating_sub(1)));
        }
        match data[i] {
            b'"' => {
                i += 1;
                break;
            }
            b'\\' => {
                i = unescape_sequence(data, i, &mut out)?;
            }
            // Raw control character inside a string literal.
            _ => return Err(Error::UnexpectedCharacter(i)),
        }
    }
    match String::from_utf8(out) {
        Ok(text) => Ok((text, i)),
        Err(_) => Err(Error::InvalidUtf8(start)),
    }
}

/// Decodes one escape sequence starting at the backslash; returns the index
/// just past it.
fn unescape_sequence(data: &[u8], at: usize, out: &mut Vec<u8>) -> Result<usize> {
    let len = data.len();
    if at + 1 >= len {
        return Err(Error::InvalidEscape(at));
    }
    let mut i = at + 2;
    match data[at + 1] {
        b'"' => out.push(b'"'),
        b'\\' => out.push(b'\\'),
        b'/' => out.push(b'/'),
        b'b' => out.push(0x08),
        b'f' => out.push(0x0c),
        b'n' => out.push(b'\n'),
        b'r' => out.push(b'\r'),
        b't' => out.push(b'\t'),
        b'u' => {
            let hi = read_hex4(data, i).ok_or(Error::InvalidEscape(at))?;
            i += 4;
            let cp = match hi {
                0xdc00..=0xdfff => return Err(Error::LoneSurrogate(at)),
                0xd800..=0xdbff => {
                    // High surrogate: the low half must follow immediately.
                    if i + 1 >= len || data[i] != b'\\' || data[i + 1] != b'u' {
                        return Err(Error::LoneSurrogate(at));
                    }
                    let lo = read_hex4(data, i + 2).ok_or(Error::InvalidEscape(i))?;
                    if !(0xdc00..=0xdfff).contains(&lo) {
                        return Err(Error::LoneSurrogate(i));
                    }
                    i += 6;
                    0x1_0000 + (((hi - 0xd800) as u32) << 10) + (lo - 0xdc00) as u32
                }
                _ => hi as u32,
            };
            let ch = char::from_u32(cp).ok_or(Error::InvalidEscape(at))?;
            let mut utf8 = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }
        _ => return Err(Error::InvalidEscape(at)),
    }
    Ok(i)
}

fn read_hex4(data: &[u8], at: usize) -> Option<u16> {
    if at + 4 > data.len() {
        return None;
    }
    let mut unit: u16 = 0;
    for &b in &data[at..at + 4] {
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => return None,
        };
        unit = (unit << 4) | digit as u16;
    }
    Some(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_to_string(text: &str, ensure_ascii: bool, html: bool) -> String {
        let mut w = Writer::new();
        write_escaped(&mut w, text, ensure_ascii, html);
        String::from_utf8(w.flush()).unwrap()
    }

    #[test]
    fn test_required_escapes() {
        assert_eq!(
            escape_to_string("A string \\ / \u{8} \u{c} \n \r \t", true, false),
            r#""A string \\ \/ \b \f \n \r \t""#
        );
    }

    #[test]
    fn test_html_escapes_take_priority_over_literals() {
        assert_eq!(
            escape_to_string("<img src='&amp;'/>", true, true),
            "\"\\u003cimg src='\\u0026amp;'\\/\\u003e\""
        );
        assert_eq!(
            escape_to_string("</script> &", true, false),
            r#""<\/script> &""#
        );
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(escape_to_string("\u{19}", true, false), "\"\\u0019\"");
        assert_eq!(escape_to_string("\u{0}", true, false), "\"\\u0000\"");
    }

    #[test]
    fn test_astral_surrogate_pair() {
        let cow = "\u{1f42e}";
        let escaped = escape_to_string(cow, true, false);
        assert_eq!(escaped, "\"\\ud83d\\udc2e\"");
        assert_eq!(escaped.len(), 12 + 2);
        let (text, _) = unescape(escaped.as_bytes(), 1).unwrap();
        assert_eq!(text, cow);
    }

    #[test]
    fn test_non_ascii_passthrough() {
        assert_eq!(escape_to_string("日ш", false, false), "\"日ш\"");
        assert_eq!(escape_to_string("日", true, false), "\"\\u65e5\"");
    }

    #[test]
    fn test_unescape_rejects_truncated_input() {
        assert!(matches!(
            unescape(b"\"TESTING", 1),
            Err(Error::UnterminatedString(_))
        ));
        assert!(matches!(
            unescape(b"\"TESTING\\\"", 1),
            Err(Error::UnterminatedString(_))
        ));
        assert!(matches!(
            unescape(b"\"abc\\u00", 1),
            Err(Error::InvalidEscape(_))
        ));
        assert!(matches!(
            unescape(b"\"\\ud83d\"", 1),
            Err(Error::LoneSurrogate(_))
        ));
        assert!(matches!(
            unescape(b"\"\\udc2e x\"", 1),
            Err(Error::LoneSurrogate(_))
        ));
    }

    #[test]
    fn test_bytes_input_matches_str_input() {
        let text = "Räksmörgås \u{1f42d}";
        let mut a = Writer::new();
        let mut b = Writer::new();
        write_escaped(&mut a, text, true, false);
        write_escaped_bytes(&mut b, text.as_bytes(), true, false).unwrap();
        assert_eq!(a.flush(), b.flush());
    }

    #[test]
    fn test_invalid_raw_bytes() {
        let mut w = Writer::new();
        assert_eq!(
            write_escaped_bytes(&mut w, b"\xfd\xbf\xbf\xbf\xbf\xbf", true, false),
            Err(Error::InvalidRawUtf8)
        );
    }
}
