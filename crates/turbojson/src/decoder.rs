//! Recursive-descent JSON decoder.
//!
//! Strict RFC 4627 parsing over a byte slice: no trailing, leading, or
//! lonely commas, no unquoted keys, no comments, nothing after the final
//! value but whitespace. Nesting is bounded by
//! [`MAX_DEPTH`](crate::MAX_DEPTH) so pathological input fails fast instead
//! of exhausting the call stack. On any failure the partially-built tree is
//! dropped on unwind; repeating a failing decode yields the identical error
//! with no residual state.

use crate::constants::MAX_DEPTH;
use crate::error::{Error, Result};
use crate::escape;
use crate::num;
use crate::options::DecodeOptions;
use crate::value::JsonValue;

/// JSON text decoder.
///
/// Holds only its options; all per-call state lives on the stack of the
/// call, so one decoder can be reused freely and instances are independent
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    pub options: DecodeOptions,
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Decodes a complete JSON document from bytes.
    pub fn decode(&mut self, data: &[u8]) -> Result<JsonValue> {
        let mut parser = Parser {
            data,
            x: 0,
            depth: 0,
            options: &self.options,
        };
        parser.skip_whitespace();
        let value = parser.parse_value()?;
        parser.skip_whitespace();
        if parser.x < parser.data.len() {
            return Err(Error::TrailingContent(parser.x));
        }
        Ok(value)
    }

    /// Decodes a complete JSON document from text.
    pub fn decode_str(&mut self, text: &str) -> Result<JsonValue> {
        self.decode(text.as_bytes())
    }
}

struct Parser<'a> {
    data: &'a [u8],
    x: usize,
    depth: usize,
    options: &'a DecodeOptions,
}

impl Parser<'_> {
    fn skip_whitespace(&mut self) {
        while let Some(&b) = self.data.get(self.x) {
            match b {
                b' ' | b'\t' | b'\r' | b'\n' => self.x += 1,
                _ => break,
            }
        }
    }

    fn parse_value(&mut self) -> Result<JsonValue> {
        let Some(&b) = self.data.get(self.x) else {
            return Err(Error::UnexpectedEnd(self.x));
        };
        match b {
            b'{' => self.parse_object(),
            b'[' => self.parse_array(),
            b'"' => self.parse_string(),
            b't' => self.parse_keyword(b"true", JsonValue::Bool(true)),
            b'f' => self.parse_keyword(b"false", JsonValue::Bool(false)),
            b'n' => self.parse_keyword(b"null", JsonValue::Null),
            b'-' | b'0'..=b'9' => self.parse_number(),
            b']' => Err(Error::UnmatchedBracket {
                close: ']',
                at: self.x,
            }),
            b'}' => Err(Error::UnmatchedBracket {
                close: '}',
                at: self.x,
            }),
            b',' | b':' => Err(Error::ExpectedValue(self.x)),
            _ => Err(Error::UnexpectedCharacter(self.x)),
        }
    }

    fn parse_keyword(&mut self, keyword: &[u8], value: JsonValue) -> Result<JsonValue> {
        let end = self.x + keyword.len();
        if self.data.len() < end || &self.data[self.x..end] != keyword {
            return Err(Error::BrokenLiteral(self.x));
        }
        self.x = end;
        Ok(value)
    }

    fn parse_string(&mut self) -> Result<JsonValue> {
        let (text, next) = escape::unescape(self.data, self.x + 1)?;
        self.x = next;
        Ok(JsonValue::Str(text))
    }

    fn parse_number(&mut self) -> Result<JsonValue> {
        let (value, next) = num::parse_number(self.data, self.x, self.options)?;
        self.x = next;
        Ok(value)
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::DepthLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_array(&mut self) -> Result<JsonValue> {
        self.enter()?;
        self.x += 1; // '['
        self.skip_whitespace();
        let mut items = Vec::new();
        match self.data.get(self.x) {
            Some(b']') => {
                self.x += 1;
                self.depth -= 1;
                return Ok(JsonValue::Array(items));
            }
            Some(b',') => return Err(self.comma_at_open()),
            Some(_) => {}
            None => return Err(Error::UnexpectedEnd(self.x)),
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.data.get(self.x) {
                Some(b']') => {
                    self.x += 1;
                    break;
                }
                Some(b',') => {
                    let comma = self.x;
                    self.x += 1;
                    self.skip_whitespace();
                    if matches!(self.data.get(self.x), Some(b']')) {
                        return Err(Error::TrailingComma(comma));
                    }
                }
                Some(_) => return Err(Error::UnexpectedCharacter(self.x)),
                None => return Err(Error::UnexpectedEnd(self.x)),
            }
        }
        self.depth -= 1;
        Ok(JsonValue::Array(items))
    }

    fn parse_object(&mut self) -> Result<JsonValue> {
        self.enter()?;
        self.x += 1; // '{'
        self.skip_whitespace();
        let mut pairs: Vec<(String, JsonValue)> = Vec::new();
        match self.data.get(self.x) {
            Some(b'}') => {
                self.x += 1;
                self.depth -= 1;
                return Ok(JsonValue::Object(pairs));
            }
            Some(b',') => return Err(self.comma_at_open()),
            Some(_) => {}
            None => return Err(Error::UnexpectedEnd(self.x)),
        }
        loop {
            if !matches!(self.data.get(self.x), Some(b'"')) {
                return Err(Error::ExpectedKey(self.x));
            }
            let (key, next) = escape::unescape(self.data, self.x + 1)?;
            self.x = next;
            self.skip_whitespace();
            if !matches!(self.data.get(self.x), Some(b':')) {
                return Err(Error::ExpectedColon(self.x));
            }
            self.x += 1;
            self.skip_whitespace();
            // A close bracket in value position means the pair has no value;
            // that is a missing value, not a bracket mismatch.
            if matches!(self.data.get(self.x), Some(b'}') | Some(b']')) {
                return Err(Error::ExpectedValue(self.x));
            }
            let value = self.parse_value()?;
            JsonValue::object_insert(&mut pairs, key, value);
            self.skip_whitespace();
            match self.data.get(self.x) {
                Some(b'}') => {
                    self.x += 1;
                    break;
                }
                Some(b',') => {
                    let comma = self.x;
                    self.x += 1;
                    self.skip_whitespace();
                    if matches!(self.data.get(self.x), Some(b'}')) {
                        return Err(Error::TrailingComma(comma));
                    }
                }
                Some(_) => return Err(Error::UnexpectedCharacter(self.x)),
                None => return Err(Error::UnexpectedEnd(self.x)),
            }
        }
        self.depth -= 1;
        Ok(JsonValue::Object(pairs))
    }

    /// A comma in first-element position: either the container holds only
    /// commas or it has a leading comma; the two are distinct errors.
    fn comma_at_open(&mut self) -> Error {
        let comma = self.x;
        self.x += 1;
        self.skip_whitespace();
        match self.data.get(self.x) {
            Some(b']') | Some(b'}') => Error::OnlyComma(comma),
            _ => Error::LeadingComma(comma),
        }
    }
}
