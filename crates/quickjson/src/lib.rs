//! A high-throughput, type-directed JSON codec.
//!
//! `quickjson` parses and writes JSON by building one specialized
//! decoder/encoder closure tree per Rust type, ahead of time, via the
//! [`Decodable`]/[`Encodable`] traits — rather than walking a generic
//! `serde`-style data model at every call. [`Codec::new`] builds the tree
//! once; [`Codec::unmarshal`]/[`Codec::marshal`] reuse it.
//!
//! ```ignore
//! // Requires the `derive` feature.
//! use quickjson::Codec;
//!
//! #[derive(Default, quickjson::JsonDecode, quickjson::JsonEncode)]
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! let mut codec = Codec::<Point>::new();
//! let point = codec.unmarshal(br#"{"x":1,"y":2}"#).unwrap();
//! assert_eq!(point.x, 1);
//! let bytes = codec.marshal_to_vec(&point).unwrap();
//! assert_eq!(bytes, br#"{"x":1,"y":2}"#);
//! ```
//!
//! # Strictness
//!
//! The tokenizer is lenient by design: it never validates that a document is
//! fully well-formed JSON, only that it can extract the tokens a decoder
//! asks for. An unterminated string token spans to the end of input rather
//! than erroring; a malformed keyword ("nul" instead of "null") does error,
//! since the jump table commits to a keyword lexer on the first byte.
//!
//! # String unescaping
//!
//! `String` fields are copied verbatim out of quoted literals — `\n`, `\"`,
//! `\uXXXX` escapes are not interpreted on decode, and are not produced on
//! encode beyond the minimal set ([`Tiler::put_quoted_str`]) needed for
//! valid JSON output. Round-tripping through this crate is exact for ASCII
//! text with no control characters or `"`/`\`.
//!
//! [`Tiler::put_quoted_str`]: tiler::Tiler::put_quoted_str

pub mod codec;
pub mod decode;
pub mod encode;
pub mod error;
pub mod property_table;
pub mod size_oracle;
pub mod tiler;
pub mod token;
pub mod tokenizer;

pub use codec::Codec;
pub use decode::{AsBinary, AsJson, AsText, BinaryUnmarshal, Decodable, JsonDuration, JsonUnmarshal, TextUnmarshal};
pub use encode::{BinaryMarshal, Encodable, JsonMarshal, TextMarshal};
pub use error::{DecodeError, EncodeError};

#[cfg(feature = "derive")]
pub use quickjson_derive::{JsonDecode, JsonEncode};
