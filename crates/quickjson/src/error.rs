//! Error kinds raised by the tokenizer, decoder, and encoder.
//!
//! See `SPEC_FULL.md` §7a: every fallible path threads a `Result` up through
//! the closure tree with `?` rather than unwinding, which is this crate's
//! re-architecture of the source codec's panic-then-recover error boundary.
//! The one exception is [`UnsupportedType`], a build-time programmer error
//! that still panics immediately from the factory, since it is detected once
//! before any decoder/encoder closure is ever invoked.
//!
//! [`UnsupportedType`]: https://docs.rs/quickjson (kept as a panic, not a variant)

use thiserror::Error;

use crate::token::TokenKind;

/// Failures raised while decoding a JSON byte buffer into a typed value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// The tokenizer saw a byte that cannot begin a token, or a keyword
    /// (`null`/`true`/`false`) was truncated or misspelled.
    #[error("invalid token, expected {expected}: {head}")]
    InvalidToken {
        expected: &'static str,
        /// First bytes of the offending input, for diagnostics.
        head: String,
    },

    /// A decoder for `target_type` needed one token kind but got another.
    #[error("unexpected token {actual}, expected one of [{expected}] while decoding {target_type}")]
    UnexpectedToken {
        expected: &'static str,
        actual: String,
        target_type: &'static str,
    },

    /// A `Literal` or duration string failed to parse as its target type.
    #[error("can't parse literal {token} for {target_type}: {cause}")]
    LiteralParseError {
        token: String,
        target_type: &'static str,
        cause: String,
    },

    /// A record decoder saw an object key with no matching field.
    #[error("unknown field {name:?} for {target_type}")]
    UnknownField {
        name: String,
        target_type: &'static str,
    },

    /// A fixed-size array decoder saw more elements than it has room for.
    #[error("expected array of length {expected} for {target_type}, got more elements")]
    ArrayLength {
        expected: usize,
        target_type: &'static str,
    },

    /// A bridged `AsJson`/`AsText`/`AsBinary` unmarshal delegate failed.
    #[error("can't unmarshal {target_type}: {cause}")]
    UnmarshalerError {
        target_type: &'static str,
        cause: String,
    },
}

/// Failures raised while encoding a typed value into JSON bytes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    /// A bridged `AsJson`/`AsText`/`AsBinary` marshal delegate failed.
    #[error("can't marshal {source_type}: {cause}")]
    MarshalerError {
        source_type: &'static str,
        cause: String,
    },
}

pub(crate) fn unexpected(
    expected: &'static str,
    actual: TokenKind,
    target_type: &'static str,
) -> DecodeError {
    DecodeError::UnexpectedToken {
        expected,
        actual: actual.name().to_string(),
        target_type,
    }
}
