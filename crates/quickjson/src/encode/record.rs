//! Building blocks `#[derive(JsonEncode)]` assembles into one encoder per
//! struct: an ordered list of field encoders, wrapped in the surrounding
//! object braces.

use super::Encoder;
use crate::{error::EncodeError, tiler::Tiler};

/// One field's name and encode closure, handed to [`RecordEncoder::field`]
/// by generated code. Fields are emitted in registration order.
pub struct FieldEncoder<T> {
    pub name: &'static str,
    pub encode: Box<dyn FnMut(&T, &mut Tiler) -> Result<(), EncodeError>>,
}

pub struct RecordEncoder<T> {
    fields: Vec<FieldEncoder<T>>,
}

impl<T> Default for RecordEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> RecordEncoder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    #[must_use]
    pub fn field(mut self, field: FieldEncoder<T>) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn build(mut self) -> Encoder<T> {
        Encoder::new(move |src, tiler| {
            tiler.begin_object();
            for field in &mut self.fields {
                tiler.put_key(field.name);
                (field.encode)(src, tiler)?;
            }
            tiler.end_object();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode::Encodable, tiler::Tiler};

    struct Person {
        name: String,
        age: i64,
    }

    fn person_encoder() -> Encoder<Person> {
        RecordEncoder::new()
            .field(FieldEncoder {
                name: "name",
                encode: Box::new(|src: &Person, tiler| {
                    let mut e = String::build_encoder();
                    e.encode(&src.name, tiler)
                }),
            })
            .field(FieldEncoder {
                name: "age",
                encode: Box::new(|src: &Person, tiler| {
                    let mut e = i64::build_encoder();
                    e.encode(&src.age, tiler)
                }),
            })
            .build()
    }

    #[test]
    fn fields_emit_in_registration_order() {
        let mut e = person_encoder();
        let mut tiler = Tiler::new();
        e.encode(
            &Person {
                name: "Ada".to_string(),
                age: 36,
            },
            &mut tiler,
        )
        .unwrap();
        assert_eq!(tiler.as_bytes(), br#"{"name":"Ada","age":36}"#);
    }
}
