use std::collections::HashMap;

use super::{Encodable, Encoder};

impl<T: Encodable + 'static> Encodable for Vec<T> {
    fn build_encoder() -> Encoder<Self> {
        let mut element = T::build_encoder();
        Encoder::new(move |v, tiler| {
            tiler.begin_array();
            for item in v {
                element.encode(item, tiler)?;
            }
            tiler.end_array();
            Ok(())
        })
    }
}

impl<T: Encodable + 'static, const N: usize> Encodable for [T; N] {
    fn build_encoder() -> Encoder<Self> {
        let mut element = T::build_encoder();
        Encoder::new(move |v, tiler| {
            tiler.begin_array();
            for item in v {
                element.encode(item, tiler)?;
            }
            tiler.end_array();
            Ok(())
        })
    }
}

/// Keys are sorted for deterministic output across runs — `HashMap`'s
/// iteration order is otherwise randomized per process.
impl<T: Encodable + 'static> Encodable for HashMap<String, T> {
    fn build_encoder() -> Encoder<Self> {
        let mut value_encoder = T::build_encoder();
        Encoder::new(move |v, tiler| {
            tiler.begin_object();
            let mut keys: Vec<&String> = v.keys().collect();
            keys.sort_unstable();
            for key in keys {
                tiler.put_key(key);
                value_encoder.encode(&v[key], tiler)?;
            }
            tiler.end_object();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiler::Tiler;

    #[test]
    fn encodes_vec_as_array() {
        let mut e = Vec::<i64>::build_encoder();
        let mut tiler = Tiler::new();
        e.encode(&vec![1, 2, 3], &mut tiler).unwrap();
        assert_eq!(tiler.as_bytes(), b"[1,2,3]");
    }

    #[test]
    fn encodes_fixed_array() {
        let mut e = <[i64; 2]>::build_encoder();
        let mut tiler = Tiler::new();
        e.encode(&[4, 5], &mut tiler).unwrap();
        assert_eq!(tiler.as_bytes(), b"[4,5]");
    }

    #[test]
    fn encodes_map_with_sorted_keys() {
        let mut e = HashMap::<String, i64>::build_encoder();
        let mut tiler = Tiler::new();
        let mut map = HashMap::new();
        map.insert("b".to_string(), 2);
        map.insert("a".to_string(), 1);
        e.encode(&map, &mut tiler).unwrap();
        assert_eq!(tiler.as_bytes(), br#"{"a":1,"b":2}"#);
    }
}
