//! Codec error type.

use thiserror::Error;

/// The three error families surfaced to callers.
///
/// Every [`Error`] variant belongs to exactly one kind; see [`Error::kind`].
/// All kinds abort the current call entirely — nothing is retried and there
/// is no partial-result mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed JSON text on decode.
    Syntax,
    /// A value outside the representable numeric or byte range.
    Overflow,
    /// The API was called with an unsupported value or option.
    Usage,
}

/// Error returned by every fallible codec operation.
///
/// Decode errors carry the byte offset at which the problem was detected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    // ---- Syntax ----
    #[error("unexpected character at byte {0}")]
    UnexpectedCharacter(usize),
    #[error("broken keyword literal at byte {0}")]
    BrokenLiteral(usize),
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEnd(usize),
    #[error("unterminated string starting at byte {0}")]
    UnterminatedString(usize),
    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),
    #[error("unpaired UTF-16 surrogate at byte {0}")]
    LoneSurrogate(usize),
    #[error("invalid UTF-8 sequence at byte {0}")]
    InvalidUtf8(usize),
    #[error("invalid number literal at byte {0}")]
    InvalidNumber(usize),
    #[error("expected object key at byte {0}")]
    ExpectedKey(usize),
    #[error("expected `:` after object key at byte {0}")]
    ExpectedColon(usize),
    #[error("expected a value at byte {0}")]
    ExpectedValue(usize),
    #[error("leading comma at byte {0}")]
    LeadingComma(usize),
    #[error("trailing comma at byte {0}")]
    TrailingComma(usize),
    #[error("comma-only container at byte {0}")]
    OnlyComma(usize),
    #[error("unmatched `{close}` at byte {at}")]
    UnmatchedBracket { close: char, at: usize },
    #[error("trailing content at byte {0}")]
    TrailingContent(usize),
    #[error("maximum nesting depth exceeded")]
    DepthLimitExceeded,

    // ---- Overflow ----
    #[error("number out of range at byte {0}")]
    NumberOutOfRange(usize),
    #[error("cannot encode a non-finite double")]
    NonFiniteDouble,
    #[error("integer outside the supported range")]
    IntegerOverflow,
    #[error("invalid UTF-8 in raw string input")]
    InvalidRawUtf8,

    // ---- Usage ----
    #[error("invalid type for option `{0}`")]
    InvalidOptionType(&'static str),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("unsupported value of kind `{0}`")]
    UnsupportedType(&'static str),
    #[error("unsupported object key of kind `{0}`")]
    UnsupportedKey(&'static str),
    #[error("stream adapter I/O failure: {0}")]
    Io(String),
}

impl Error {
    /// The family this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        use Error::*;
        match self {
            UnexpectedCharacter(_)
            | BrokenLiteral(_)
            | UnexpectedEnd(_)
            | UnterminatedString(_)
            | InvalidEscape(_)
            | LoneSurrogate(_)
            | InvalidUtf8(_)
            | InvalidNumber(_)
            | ExpectedKey(_)
            | ExpectedColon(_)
            | ExpectedValue(_)
            | LeadingComma(_)
            | TrailingComma(_)
            | OnlyComma(_)
            | UnmatchedBracket { .. }
            | TrailingContent(_)
            | DepthLimitExceeded => ErrorKind::Syntax,
            NumberOutOfRange(_) | NonFiniteDouble | IntegerOverflow | InvalidRawUtf8 => {
                ErrorKind::Overflow
            }
            InvalidOptionType(_) | UnknownOption(_) | UnsupportedType(_) | UnsupportedKey(_)
            | Io(_) => ErrorKind::Usage,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
