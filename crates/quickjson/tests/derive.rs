#![allow(missing_docs)]
use quickjson::Codec;
use quickjson_derive::{JsonDecode, JsonEncode};

#[derive(Debug, Default, Clone, PartialEq, JsonDecode, JsonEncode)]
struct Point {
    x: i64,
    y: i64,
}

#[derive(Debug, Default, Clone, PartialEq, JsonDecode, JsonEncode)]
struct Named {
    #[json(rename = "displayName")]
    display_name: String,
    #[json(skip)]
    cache: i64,
    point: Point,
}

#[test]
fn derived_struct_round_trips() {
    let mut codec = Codec::<Point>::new();
    let original = Point { x: 3, y: -4 };
    let bytes = codec.marshal_to_vec(&original).unwrap();
    assert_eq!(bytes, br#"{"x":3,"y":-4}"#);
    let decoded = codec.unmarshal(&bytes).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn rename_and_skip_attributes_are_honored() {
    let mut codec = Codec::<Named>::new();
    let value = Named {
        display_name: "Ada".to_string(),
        cache: 999,
        point: Point { x: 1, y: 2 },
    };
    let bytes = codec.marshal_to_vec(&value).unwrap();
    assert_eq!(bytes, br#"{"displayName":"Ada","point":{"x":1,"y":2}}"#);

    let decoded = codec.unmarshal(&bytes).unwrap();
    assert_eq!(decoded.display_name, "Ada");
    assert_eq!(decoded.point, Point { x: 1, y: 2 });
    assert_eq!(decoded.cache, 0);
}
