//! Type-directed encoder factory — the encode-side mirror of [`decode`](crate::decode).
//!
//! `Encodable::build_encoder` realizes `SPEC_FULL.md` §4.6's encoder factory
//! as a trait instead of runtime reflection, for the same reason as the
//! decode side. The returned [`Encoder<T>`] wraps a boxed closure over a
//! [`Tiler`](crate::tiler::Tiler) rather than a [`Tokenizer`](crate::tokenizer::Tokenizer).

mod collections;
mod custom;
mod duration;
mod primitives;
mod record;

pub use custom::{BinaryMarshal, JsonMarshal, TextMarshal};
pub use record::{FieldEncoder, RecordEncoder};

use crate::{error::EncodeError, tiler::Tiler};

type EncodeFn<T> = Box<dyn FnMut(&T, &mut Tiler) -> Result<(), EncodeError>>;

/// A specialized, reusable encoder for `T`, produced once by
/// [`Encodable::build_encoder`] and invoked many times.
pub struct Encoder<T>(EncodeFn<T>);

impl<T> Encoder<T> {
    pub fn new(f: impl FnMut(&T, &mut Tiler) -> Result<(), EncodeError> + 'static) -> Self {
        Self(Box::new(f))
    }

    pub fn encode(&mut self, src: &T, tiler: &mut Tiler) -> Result<(), EncodeError> {
        (self.0)(src, tiler)
    }
}

/// Implemented once per concrete type: primitives and collections by hand in
/// this module, records via `#[derive(JsonEncode)]`.
pub trait Encodable {
    /// Build a fresh, specialized encoder for `Self`.
    fn build_encoder() -> Encoder<Self>
    where
        Self: Sized;

    /// The type name used in error messages.
    fn type_name() -> &'static str
    where
        Self: Sized,
    {
        core::any::type_name::<Self>()
    }
}
