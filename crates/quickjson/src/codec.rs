//! The public, per-type entry point: build one [`Codec<T>`] and reuse it.
//!
//! Building a [`Codec`] walks `T`'s decoder/encoder factories once; every
//! `marshal`/`unmarshal` call after that only runs the prebuilt closure
//! tree, reusing its internal [`Tiler`] buffer and
//! [`SizeOracle`](crate::size_oracle::SizeOracle) state across calls.

use crate::{
    decode::{Decodable, Decoder},
    encode::{Encodable, Encoder},
    error::DecodeError,
    tiler::Tiler,
    tokenizer::Tokenizer,
};

/// A reusable decoder/encoder pair for one concrete type `T`.
pub struct Codec<T: Decodable + Encodable> {
    decoder: Decoder<T>,
    encoder: Encoder<T>,
    tiler: Tiler,
}

impl<T: Decodable + Encodable + Default> Codec<T> {
    /// Build a codec for `T`, walking its decode/encode factories once.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoder: T::build_decoder(),
            encoder: T::build_encoder(),
            tiler: Tiler::new(),
        }
    }

    /// Decode `input` into a fresh `T::default()`.
    pub fn unmarshal(&mut self, input: &[u8]) -> Result<T, DecodeError> {
        let mut dest = T::default();
        self.unmarshal_into(input, &mut dest)?;
        Ok(dest)
    }

    /// Decode `input` into an existing `T`, reusing its allocations where
    /// the decoder supports it (`Vec`/`String`/`HashMap` fields shrink and
    /// grow in place rather than reallocating from scratch).
    pub fn unmarshal_into(&mut self, input: &[u8], dest: &mut T) -> Result<(), DecodeError> {
        let mut tokens = Tokenizer::new(input);
        self.decoder.decode(dest, &mut tokens)?;
        Ok(())
    }

    /// Encode `value`, returning a byte slice borrowed from this codec's
    /// internal buffer. The buffer is cleared and reused by the next
    /// `marshal` call.
    pub fn marshal(&mut self, value: &T) -> Result<&[u8], crate::error::EncodeError> {
        self.tiler.clear();
        self.encoder.encode(value, &mut self.tiler)?;
        Ok(self.tiler.as_bytes())
    }

    /// [`Codec::marshal`], copied out into an owned buffer.
    pub fn marshal_to_vec(&mut self, value: &T) -> Result<Vec<u8>, crate::error::EncodeError> {
        self.marshal(value).map(<[u8]>::to_vec)
    }
}

impl<T: Decodable + Encodable + Default> Default for Codec<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Point {
        x: i64,
        y: i64,
    }

    impl Decodable for Point {
        fn build_decoder() -> Decoder<Self> {
            crate::decode::RecordDecoder::new("Point")
                .field(crate::decode::FieldDecoder {
                    name: "x",
                    decode: Box::new(|dest: &mut Point, tokens| {
                        i64::build_decoder().decode(&mut dest.x, tokens)
                    }),
                })
                .field(crate::decode::FieldDecoder {
                    name: "y",
                    decode: Box::new(|dest: &mut Point, tokens| {
                        i64::build_decoder().decode(&mut dest.y, tokens)
                    }),
                })
                .build()
        }
    }

    impl Encodable for Point {
        fn build_encoder() -> Encoder<Self> {
            crate::encode::RecordEncoder::new()
                .field(crate::encode::FieldEncoder {
                    name: "x",
                    encode: Box::new(|src: &Point, tiler| i64::build_encoder().encode(&src.x, tiler)),
                })
                .field(crate::encode::FieldEncoder {
                    name: "y",
                    encode: Box::new(|src: &Point, tiler| i64::build_encoder().encode(&src.y, tiler)),
                })
                .build()
        }
    }

    #[test]
    fn round_trips_through_marshal_and_unmarshal() {
        let mut codec = Codec::<Point>::new();
        let original = Point { x: 1, y: -2 };
        let bytes = codec.marshal_to_vec(&original).unwrap();
        let decoded = codec.unmarshal(&bytes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn unmarshal_into_reuses_destination() {
        let mut codec = Codec::<Point>::new();
        let mut dest = Point { x: 100, y: 200 };
        codec.unmarshal_into(br#"{"x":1,"y":2}"#, &mut dest).unwrap();
        assert_eq!(dest, Point { x: 1, y: 2 });
    }

    #[test]
    fn repeated_marshal_calls_reuse_the_tiler_buffer() {
        let mut codec = Codec::<Point>::new();
        let first = codec.marshal_to_vec(&Point { x: 1, y: 1 }).unwrap();
        let second = codec.marshal_to_vec(&Point { x: 2, y: 2 }).unwrap();
        assert_ne!(first, second);
        assert_eq!(second, br#"{"x":2,"y":2}"#);
    }
}
