//! Type-directed decoder factory.
//!
//! `Decodable::build_decoder` is the "given a static type, build a decoder"
//! factory of `SPEC_FULL.md` §4.5, realized in Rust as a trait rather than
//! runtime reflection (see §4.5's Rust re-architecture note). The returned
//! [`Decoder<T>`] wraps a boxed closure — the "decoder closure tree" — which
//! may itself close over child `Decoder<Field>` values and mutable
//! [`SizeOracle`](crate::size_oracle::SizeOracle) state, and is safe to call
//! many times against different destinations.

mod collections;
mod custom;
mod duration;
mod primitives;
mod record;

pub use custom::{AsBinary, AsJson, AsText, BinaryUnmarshal, JsonUnmarshal, TextUnmarshal};
pub use duration::JsonDuration;
pub use record::{FieldDecoder, RecordDecoder};

use crate::{error::DecodeError, tokenizer::Tokenizer};

type DecodeFn<T> = Box<dyn FnMut(&mut T, &mut Tokenizer<'_>) -> Result<(), DecodeError>>;

/// A specialized, reusable decoder for `T`, produced once by
/// [`Decodable::build_decoder`] and invoked many times.
pub struct Decoder<T>(DecodeFn<T>);

impl<T> Decoder<T> {
    pub fn new(f: impl FnMut(&mut T, &mut Tokenizer<'_>) -> Result<(), DecodeError> + 'static) -> Self {
        Self(Box::new(f))
    }

    pub fn decode(&mut self, dest: &mut T, tokens: &mut Tokenizer<'_>) -> Result<(), DecodeError> {
        (self.0)(dest, tokens)
    }
}

/// Implemented once per concrete type: primitives and collections by hand in
/// this module, records via `#[derive(JsonDecode)]`.
pub trait Decodable: Sized {
    /// Build a fresh, specialized decoder for `Self`.
    ///
    /// Called once per [`Codec`](crate::codec::Codec) construction; never
    /// call it per-document.
    fn build_decoder() -> Decoder<Self>;

    /// The type name used in error messages.
    fn type_name() -> &'static str {
        core::any::type_name::<Self>()
    }
}
