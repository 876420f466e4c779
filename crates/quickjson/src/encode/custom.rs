//! Encode-side half of the [`crate::decode::custom`] bridge.

use base64::Engine;

use super::{Encodable, Encoder};
use crate::{
    decode::{AsBinary, AsJson, AsText},
    error::EncodeError,
};

/// A type that serializes itself directly to a JSON value.
pub trait JsonMarshal {
    /// Return the verbatim JSON bytes for `self` (object, array, or scalar).
    fn marshal_json(&self) -> Result<Vec<u8>, String>;
}

/// A type that serializes itself to text, carried as a JSON string.
pub trait TextMarshal {
    fn marshal_text(&self) -> Result<String, String>;
}

/// A type that serializes itself to bytes, carried as a base64-encoded JSON
/// string.
pub trait BinaryMarshal {
    fn marshal_binary(&self) -> Result<Vec<u8>, String>;
}

impl<M: JsonMarshal> Encodable for AsJson<M> {
    fn build_encoder() -> Encoder<Self> {
        Encoder::new(|v, tiler| {
            let raw = v.0.marshal_json().map_err(|cause| EncodeError::MarshalerError {
                source_type: core::any::type_name::<Self>(),
                cause,
            })?;
            tiler.put_raw(&raw);
            Ok(())
        })
    }
}

impl<M: TextMarshal> Encodable for AsText<M> {
    fn build_encoder() -> Encoder<Self> {
        Encoder::new(|v, tiler| {
            let text = v.0.marshal_text().map_err(|cause| EncodeError::MarshalerError {
                source_type: core::any::type_name::<Self>(),
                cause,
            })?;
            tiler.put_quoted_str(&text);
            Ok(())
        })
    }
}

impl<M: BinaryMarshal> Encodable for AsBinary<M> {
    fn build_encoder() -> Encoder<Self> {
        Encoder::new(|v, tiler| {
            let raw = v.0.marshal_binary().map_err(|cause| EncodeError::MarshalerError {
                source_type: core::any::type_name::<Self>(),
                cause,
            })?;
            let text = base64::engine::general_purpose::STANDARD.encode(raw);
            tiler.put_quoted_str(&text);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiler::Tiler;

    struct Point {
        x: i64,
        y: i64,
    }

    impl JsonMarshal for Point {
        fn marshal_json(&self) -> Result<Vec<u8>, String> {
            Ok(format!("[{},{}]", self.x, self.y).into_bytes())
        }
    }

    struct Upper(char);

    impl TextMarshal for Upper {
        fn marshal_text(&self) -> Result<String, String> {
            Ok(self.0.to_string())
        }
    }

    struct Blob(Vec<u8>);

    impl BinaryMarshal for Blob {
        fn marshal_binary(&self) -> Result<Vec<u8>, String> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn as_json_splices_raw_bytes() {
        let mut e = AsJson::<Point>::build_encoder();
        let mut tiler = Tiler::new();
        e.encode(&AsJson(Point { x: 1, y: 2 }), &mut tiler).unwrap();
        assert_eq!(tiler.as_bytes(), b"[1,2]");
    }

    #[test]
    fn as_text_quotes_marshaled_text() {
        let mut e = AsText::<Upper>::build_encoder();
        let mut tiler = Tiler::new();
        e.encode(&AsText(Upper('z')), &mut tiler).unwrap();
        assert_eq!(tiler.as_bytes(), br#""z""#);
    }

    #[test]
    fn as_binary_base64_encodes() {
        let mut e = AsBinary::<Blob>::build_encoder();
        let mut tiler = Tiler::new();
        e.encode(&AsBinary(Blob(b"hello".to_vec())), &mut tiler)
            .unwrap();
        assert_eq!(tiler.as_bytes(), br#""aGVsbG8=""#);
    }
}
