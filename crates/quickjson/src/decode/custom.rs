//! Bridges to hand-written (un)marshaling logic.
//!
//! The source codec probes, at runtime, whether a value implements
//! `json.Unmarshaler` / `encoding.TextUnmarshaler` / `encoding.BinaryUnmarshaler`
//! and dispatches to it ahead of the default struct/slice/map handling. Rust
//! has no such runtime capability probing, so the choice is made explicit and
//! at compile time instead: wrap the field in [`AsJson`], [`AsText`], or
//! [`AsBinary`] and implement the matching marker trait on the inner type.

use base64::Engine;

use super::{Decodable, Decoder};
use crate::{error::DecodeError, token::TokenKind, tokenizer::Tokenizer};

/// A type that parses itself out of a raw JSON value (object, array, or
/// scalar — whatever its own grammar is).
pub trait JsonUnmarshal: Sized {
    /// `raw` is the verbatim bytes of the JSON value this occupies,
    /// unparsed.
    fn unmarshal_json(raw: &[u8]) -> Result<Self, String>;
}

/// A type that parses itself out of the unquoted text of a JSON string.
pub trait TextUnmarshal: Sized {
    fn unmarshal_text(text: &str) -> Result<Self, String>;
}

/// A type that parses itself out of raw bytes, carried as a base64-encoded
/// JSON string (matching how `encoding/json` handles `[]byte` and, by
/// extension, `encoding.BinaryUnmarshaler`).
pub trait BinaryUnmarshal: Sized {
    fn unmarshal_binary(data: &[u8]) -> Result<Self, String>;
}

/// Wraps `M: JsonUnmarshal` so it can be used as a record field, decoding via
/// [`JsonUnmarshal::unmarshal_json`] instead of `M`'s own `Decodable` impl
/// (which may not exist at all).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsJson<M>(pub M);

/// Wraps `M: TextUnmarshal`, decoding from a quoted JSON string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsText<M>(pub M);

/// Wraps `M: BinaryUnmarshal`, decoding from a base64-encoded JSON string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsBinary<M>(pub M);

impl<M: JsonUnmarshal + 'static> Decodable for AsJson<M> {
    fn build_decoder() -> Decoder<Self> {
        Decoder::new(|dest, tokens| {
            let raw = capture_value(tokens)?;
            dest.0 = M::unmarshal_json(&raw).map_err(|cause| DecodeError::UnmarshalerError {
                target_type: Self::type_name(),
                cause,
            })?;
            Ok(())
        })
    }
}

impl<M: TextUnmarshal + 'static> Decodable for AsText<M> {
    fn build_decoder() -> Decoder<Self> {
        Decoder::new(|dest, tokens| {
            let token = tokens.next()?;
            if token.kind != TokenKind::QuotedLiteral {
                return Err(crate::error::unexpected(
                    "quoted_literal",
                    token.kind,
                    Self::type_name(),
                ));
            }
            let text = token
                .unquote_str()
                .map_err(|e| DecodeError::LiteralParseError {
                    token: String::from_utf8_lossy(token.literal).into_owned(),
                    target_type: Self::type_name(),
                    cause: e.to_string(),
                })?;
            dest.0 = M::unmarshal_text(text).map_err(|cause| DecodeError::UnmarshalerError {
                target_type: Self::type_name(),
                cause,
            })?;
            Ok(())
        })
    }
}

impl<M: BinaryUnmarshal + 'static> Decodable for AsBinary<M> {
    fn build_decoder() -> Decoder<Self> {
        Decoder::new(|dest, tokens| {
            let token = tokens.next()?;
            if token.kind != TokenKind::QuotedLiteral {
                return Err(crate::error::unexpected(
                    "quoted_literal",
                    token.kind,
                    Self::type_name(),
                ));
            }
            let text = token
                .unquote_str()
                .map_err(|e| DecodeError::LiteralParseError {
                    token: String::from_utf8_lossy(token.literal).into_owned(),
                    target_type: Self::type_name(),
                    cause: e.to_string(),
                })?;
            let raw = base64::engine::general_purpose::STANDARD
                .decode(text)
                .map_err(|e| DecodeError::LiteralParseError {
                    token: text.to_string(),
                    target_type: Self::type_name(),
                    cause: e.to_string(),
                })?;
            dest.0 = M::unmarshal_binary(&raw).map_err(|cause| DecodeError::UnmarshalerError {
                target_type: Self::type_name(),
                cause,
            })?;
            Ok(())
        })
    }
}

/// Advance `tokens` past one complete JSON value (scalar, or balanced
/// object/array), returning its verbatim bytes for hand-off to a
/// [`JsonUnmarshal`] impl.
fn capture_value(tokens: &mut Tokenizer<'_>) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    capture_one(tokens, &mut out)?;
    Ok(out)
}

/// Copy exactly one JSON value's tokens into `out`, restoring the commas and
/// colons the tokenizer discards between siblings. Recurses into nested
/// arrays/objects.
fn capture_one(tokens: &mut Tokenizer<'_>, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    let token = tokens.next()?;
    match token.kind {
        TokenKind::Null => out.extend_from_slice(b"null"),
        TokenKind::True => out.extend_from_slice(b"true"),
        TokenKind::False => out.extend_from_slice(b"false"),
        TokenKind::Literal | TokenKind::QuotedLiteral => out.extend_from_slice(token.literal),
        TokenKind::ArrayStart => {
            out.push(b'[');
            let mut first = true;
            while tokens.peek()?.kind != TokenKind::ArrayEnd {
                if !first {
                    out.push(b',');
                }
                first = false;
                capture_one(tokens, out)?;
            }
            tokens.next()?;
            out.push(b']');
        }
        TokenKind::ObjectStart => {
            out.push(b'{');
            let mut first = true;
            while tokens.peek()?.kind != TokenKind::ObjectEnd {
                if !first {
                    out.push(b',');
                }
                first = false;
                capture_one(tokens, out)?; // key
                out.push(b':');
                capture_one(tokens, out)?; // value
            }
            tokens.next()?;
            out.push(b'}');
        }
        actual @ (TokenKind::ObjectEnd | TokenKind::ArrayEnd | TokenKind::Eof) => {
            return Err(crate::error::unexpected("value", actual, "AsJson"));
        }
    }
    Ok(())
}
