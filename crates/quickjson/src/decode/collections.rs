use std::collections::HashMap;

use super::{Decodable, Decoder};
use crate::{
    error::{unexpected, DecodeError},
    size_oracle::SizeOracle,
    token::TokenKind,
};

impl<T: Decodable + Default + 'static> Decodable for Vec<T> {
    fn build_decoder() -> Decoder<Self> {
        let mut element = T::build_decoder();
        let mut oracle = SizeOracle::new();
        Decoder::new(move |dest, tokens| {
            let start = tokens.next()?;
            if start.kind == TokenKind::Null {
                dest.clear();
                return Ok(());
            }
            if start.kind != TokenKind::ArrayStart {
                return Err(unexpected("[", start.kind, Self::type_name()));
            }
            dest.reserve(oracle.get().saturating_sub(dest.len()));
            let mut i = 0;
            loop {
                let peeked = tokens.peek()?;
                if peeked.kind == TokenKind::ArrayEnd {
                    tokens.next()?;
                    break;
                }
                if i < dest.len() {
                    element.decode(&mut dest[i], tokens)?;
                } else {
                    let mut item = T::default();
                    element.decode(&mut item, tokens)?;
                    dest.push(item);
                }
                i += 1;
            }
            // Existing elements past the new length are stale; drop them
            // rather than leaving them addressable through a shorter Vec.
            dest.truncate(i);
            oracle.add(dest.len());
            Ok(())
        })
    }
}

impl<T: Decodable + Default + 'static, const N: usize> Decodable for [T; N] {
    fn build_decoder() -> Decoder<Self> {
        let mut element = T::build_decoder();
        Decoder::new(move |dest, tokens| {
            let start = tokens.next()?;
            if start.kind != TokenKind::ArrayStart {
                return Err(unexpected("[", start.kind, Self::type_name()));
            }
            let mut i = 0;
            loop {
                let peeked = tokens.peek()?;
                if peeked.kind == TokenKind::ArrayEnd {
                    tokens.next()?;
                    break;
                }
                if i >= N {
                    return Err(DecodeError::ArrayLength {
                        expected: N,
                        target_type: Self::type_name(),
                    });
                }
                element.decode(&mut dest[i], tokens)?;
                i += 1;
            }
            Ok(())
        })
    }
}

impl<T: Decodable + Default + 'static> Decodable for HashMap<String, T> {
    fn build_decoder() -> Decoder<Self> {
        let mut value_decoder = T::build_decoder();
        let mut oracle = SizeOracle::new();
        Decoder::new(move |dest, tokens| {
            let start = tokens.next()?;
            if start.kind == TokenKind::Null {
                dest.clear();
                return Ok(());
            }
            if start.kind != TokenKind::ObjectStart {
                return Err(unexpected("{", start.kind, Self::type_name()));
            }
            dest.clear();
            dest.reserve(oracle.get());
            loop {
                let peeked = tokens.peek()?;
                if peeked.kind == TokenKind::ObjectEnd {
                    tokens.next()?;
                    break;
                }
                let key_tok = tokens.next()?;
                if key_tok.kind != TokenKind::QuotedLiteral {
                    return Err(unexpected("quoted_literal", key_tok.kind, Self::type_name()));
                }
                let key = key_tok
                    .unquote_str()
                    .map_err(|e| DecodeError::LiteralParseError {
                        token: String::from_utf8_lossy(key_tok.literal).into_owned(),
                        target_type: Self::type_name(),
                        cause: e.to_string(),
                    })?
                    .to_string();
                let mut value = T::default();
                value_decoder.decode(&mut value, tokens)?;
                dest.insert(key, value);
            }
            oracle.add(dest.len());
            Ok(())
        })
    }
}
