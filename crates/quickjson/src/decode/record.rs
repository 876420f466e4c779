//! Building blocks `#[derive(JsonDecode)]` assembles into one decoder per
//! struct: a [`PropertyTable`] indexed by field name, wrapped in the
//! object-braces/unknown-field handling every record shares.

use super::Decoder;
use crate::{
    error::{unexpected, DecodeError},
    property_table::{PropertyEntry, PropertyTable},
    token::TokenKind,
    tokenizer::Tokenizer,
};

/// One field's name and decode closure, handed to [`RecordDecoder::field`]
/// by generated code.
pub struct FieldDecoder<T> {
    pub name: &'static str,
    pub decode: Box<dyn FnMut(&mut T, &mut Tokenizer<'_>) -> Result<(), DecodeError>>,
}

/// Assembles field decoders into the object-level decoder for a record type.
pub struct RecordDecoder<T> {
    properties: PropertyTable<T>,
    type_name: &'static str,
    strict: bool,
}

impl<T: 'static> RecordDecoder<T> {
    #[must_use]
    pub fn new(type_name: &'static str) -> Self {
        Self {
            properties: PropertyTable::new(),
            type_name,
            strict: false,
        }
    }

    /// Reject unknown object keys instead of skipping them. Off by default,
    /// matching the source codec's lenient handling of unrecognized fields.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldDecoder<T>) -> Self {
        self.properties.add(PropertyEntry {
            name: field.name,
            decode: field.decode,
        });
        self
    }

    #[must_use]
    pub fn build(mut self) -> Decoder<T> {
        Decoder::new(move |dest, tokens| {
            let start = tokens.next()?;
            if start.kind != TokenKind::ObjectStart {
                return Err(unexpected("{", start.kind, self.type_name));
            }
            loop {
                let peeked = tokens.peek()?;
                if peeked.kind == TokenKind::ObjectEnd {
                    tokens.next()?;
                    return Ok(());
                }
                let key_tok = tokens.next()?;
                if key_tok.kind != TokenKind::QuotedLiteral {
                    return Err(unexpected("quoted_literal", key_tok.kind, self.type_name));
                }
                let key = key_tok
                    .unquote_str()
                    .map_err(|e| DecodeError::LiteralParseError {
                        token: String::from_utf8_lossy(key_tok.literal).into_owned(),
                        target_type: self.type_name,
                        cause: e.to_string(),
                    })?;
                match self.properties.find(key) {
                    Some(entry) => (entry.decode)(dest, tokens)?,
                    None if self.strict => {
                        return Err(DecodeError::UnknownField {
                            name: key.to_string(),
                            target_type: self.type_name,
                        })
                    }
                    None => skip_value(tokens)?,
                }
            }
        })
    }
}

/// Advance `tokens` past one complete JSON value without retaining it.
fn skip_value(tokens: &mut Tokenizer<'_>) -> Result<(), DecodeError> {
    let mut depth: i64 = 0;
    loop {
        let token = tokens.next()?;
        match token.kind {
            TokenKind::ObjectStart | TokenKind::ArrayStart => depth += 1,
            TokenKind::ObjectEnd | TokenKind::ArrayEnd => depth -= 1,
            _ => {}
        }
        if depth <= 0 {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Person {
        name: String,
        age: i64,
    }

    fn person_decoder() -> Decoder<Person> {
        RecordDecoder::new("Person")
            .field(FieldDecoder {
                name: "name",
                decode: Box::new(|dest: &mut Person, tokens| {
                    let mut d = String::build_decoder();
                    d.decode(&mut dest.name, tokens)
                }),
            })
            .field(FieldDecoder {
                name: "age",
                decode: Box::new(|dest: &mut Person, tokens| {
                    let mut d = i64::build_decoder();
                    d.decode(&mut dest.age, tokens)
                }),
            })
            .build()
    }

    use crate::decode::Decodable;

    #[test]
    fn decodes_known_fields() {
        let mut d = person_decoder();
        let mut dest = Person::default();
        let mut tokens = Tokenizer::new(br#"{"name":"Ada","age":36}"#);
        d.decode(&mut dest, &mut tokens).unwrap();
        assert_eq!(
            dest,
            Person {
                name: "Ada".to_string(),
                age: 36
            }
        );
    }

    #[test]
    fn unknown_field_is_skipped_by_default() {
        let mut d = person_decoder();
        let mut dest = Person::default();
        let mut tokens = Tokenizer::new(br#"{"name":"Ada","extra":{"a":[1,2,3]},"age":36}"#);
        d.decode(&mut dest, &mut tokens).unwrap();
        assert_eq!(dest.age, 36);
    }

    #[test]
    fn strict_mode_rejects_unknown_field() {
        let mut decoder = RecordDecoder::new("Person")
            .strict(true)
            .field(FieldDecoder {
                name: "age",
                decode: Box::new(|dest: &mut Person, tokens| {
                    let mut d = i64::build_decoder();
                    d.decode(&mut dest.age, tokens)
                }),
            })
            .build();
        let mut dest = Person::default();
        let mut tokens = Tokenizer::new(br#"{"extra":1}"#);
        assert!(decoder.decode(&mut dest, &mut tokens).is_err());
    }
}
