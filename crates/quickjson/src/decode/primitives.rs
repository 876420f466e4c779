use super::{Decodable, Decoder};
use crate::{
    error::{unexpected, DecodeError},
    token::TokenKind,
};

impl Decodable for () {
    fn build_decoder() -> Decoder<Self> {
        // Null type: consume one token and ignore it.
        Decoder::new(|_dest, tokens| {
            tokens.next()?;
            Ok(())
        })
    }
}

impl Decodable for bool {
    fn build_decoder() -> Decoder<Self> {
        Decoder::new(|dest, tokens| {
            let token = tokens.next()?;
            match token.kind {
                TokenKind::True => *dest = true,
                TokenKind::False => *dest = false,
                actual => return Err(unexpected("true, false", actual, Self::type_name())),
            }
            Ok(())
        })
    }
}

macro_rules! impl_signed_decodable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Decodable for $ty {
                fn build_decoder() -> Decoder<Self> {
                    Decoder::new(|dest, tokens| {
                        let token = tokens.next()?;
                        if token.kind != TokenKind::Literal {
                            return Err(unexpected("literal", token.kind, Self::type_name()));
                        }
                        let text = core::str::from_utf8(token.literal)
                            .map_err(|e| parse_error::<Self>(token.literal, &e))?;
                        let value: i64 = text
                            .parse()
                            .map_err(|e: core::num::ParseIntError| parse_error::<Self>(token.literal, &e))?;
                        // Width truncation for narrower destinations (see
                        // SPEC_FULL.md §9's "integer width truncation" open
                        // question, resolved toward truncation).
                        #[allow(clippy::cast_possible_truncation)]
                        { *dest = value as $ty; }
                        Ok(())
                    })
                }
            }
        )+
    };
}

macro_rules! impl_unsigned_decodable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Decodable for $ty {
                fn build_decoder() -> Decoder<Self> {
                    Decoder::new(|dest, tokens| {
                        let token = tokens.next()?;
                        if token.kind != TokenKind::Literal {
                            return Err(unexpected("literal", token.kind, Self::type_name()));
                        }
                        let text = core::str::from_utf8(token.literal)
                            .map_err(|e| parse_error::<Self>(token.literal, &e))?;
                        let value: u64 = text
                            .parse()
                            .map_err(|e: core::num::ParseIntError| parse_error::<Self>(token.literal, &e))?;
                        #[allow(clippy::cast_possible_truncation)]
                        { *dest = value as $ty; }
                        Ok(())
                    })
                }
            }
        )+
    };
}

fn parse_error<T: Decodable>(literal: &[u8], cause: &dyn core::fmt::Display) -> DecodeError {
    DecodeError::LiteralParseError {
        token: String::from_utf8_lossy(literal).into_owned(),
        target_type: T::type_name(),
        cause: cause.to_string(),
    }
}

impl_signed_decodable!(i8, i16, i32, i64, isize);
impl_unsigned_decodable!(u8, u16, u32, u64, usize);

impl Decodable for f32 {
    fn build_decoder() -> Decoder<Self> {
        Decoder::new(|dest, tokens| {
            let token = tokens.next()?;
            if token.kind != TokenKind::Literal {
                return Err(unexpected("literal", token.kind, Self::type_name()));
            }
            let text = core::str::from_utf8(token.literal)
                .map_err(|e| parse_error::<Self>(token.literal, &e))?;
            *dest = text
                .parse()
                .map_err(|e: core::num::ParseFloatError| parse_error::<Self>(token.literal, &e))?;
            Ok(())
        })
    }
}

impl Decodable for f64 {
    fn build_decoder() -> Decoder<Self> {
        Decoder::new(|dest, tokens| {
            let token = tokens.next()?;
            if token.kind != TokenKind::Literal {
                return Err(unexpected("literal", token.kind, Self::type_name()));
            }
            let text = core::str::from_utf8(token.literal)
                .map_err(|e| parse_error::<Self>(token.literal, &e))?;
            *dest = text
                .parse()
                .map_err(|e: core::num::ParseFloatError| parse_error::<Self>(token.literal, &e))?;
            Ok(())
        })
    }
}

impl Decodable for String {
    fn build_decoder() -> Decoder<Self> {
        Decoder::new(|dest, tokens| {
            let token = tokens.next()?;
            if token.kind != TokenKind::QuotedLiteral {
                return Err(unexpected("quoted_literal", token.kind, Self::type_name()));
            }
            // No `\`-unescaping, per the crate-level "string unescaping"
            // note: bytes are stored verbatim.
            let s = token
                .unquote_str()
                .map_err(|e| parse_error::<Self>(token.literal, &e))?;
            dest.clear();
            dest.push_str(s);
            Ok(())
        })
    }
}

impl<T: Decodable + Default + 'static> Decodable for Option<T> {
    fn build_decoder() -> Decoder<Self> {
        let mut child = T::build_decoder();
        Decoder::new(move |dest, tokens| {
            let peeked = tokens.peek()?;
            if peeked.kind == TokenKind::Null {
                tokens.next()?;
                *dest = None;
                return Ok(());
            }
            let mut inner = dest.take().unwrap_or_default();
            child.decode(&mut inner, tokens)?;
            *dest = Some(inner);
            Ok(())
        })
    }
}

impl<T: Decodable + 'static> Decodable for Box<T> {
    fn build_decoder() -> Decoder<Self> {
        let mut child = T::build_decoder();
        Decoder::new(move |dest, tokens| child.decode(dest.as_mut(), tokens))
    }
}
