use super::{Encodable, Encoder};

impl Encodable for () {
    fn build_encoder() -> Encoder<Self> {
        Encoder::new(|(), tiler| {
            tiler.put_null();
            Ok(())
        })
    }
}

impl Encodable for bool {
    fn build_encoder() -> Encoder<Self> {
        Encoder::new(|v, tiler| {
            tiler.put_bool(*v);
            Ok(())
        })
    }
}

macro_rules! impl_signed_encodable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Encodable for $ty {
                fn build_encoder() -> Encoder<Self> {
                    Encoder::new(|v, tiler| {
                        tiler.put_i64(i64::from(*v));
                        Ok(())
                    })
                }
            }
        )+
    };
}

macro_rules! impl_signed_encodable_wide {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Encodable for $ty {
                fn build_encoder() -> Encoder<Self> {
                    Encoder::new(|v, tiler| {
                        tiler.put_i64(*v as i64);
                        Ok(())
                    })
                }
            }
        )+
    };
}

macro_rules! impl_unsigned_encodable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Encodable for $ty {
                fn build_encoder() -> Encoder<Self> {
                    Encoder::new(|v, tiler| {
                        tiler.put_u64(u64::from(*v));
                        Ok(())
                    })
                }
            }
        )+
    };
}

macro_rules! impl_unsigned_encodable_wide {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Encodable for $ty {
                fn build_encoder() -> Encoder<Self> {
                    Encoder::new(|v, tiler| {
                        tiler.put_u64(*v as u64);
                        Ok(())
                    })
                }
            }
        )+
    };
}

impl_signed_encodable!(i8, i16, i32);
impl_signed_encodable_wide!(i64, isize);
impl_unsigned_encodable!(u8, u16, u32);
impl_unsigned_encodable_wide!(u64, usize);

impl Encodable for f32 {
    fn build_encoder() -> Encoder<Self> {
        Encoder::new(|v, tiler| {
            tiler.put_f32(*v);
            Ok(())
        })
    }
}

impl Encodable for f64 {
    fn build_encoder() -> Encoder<Self> {
        Encoder::new(|v, tiler| {
            tiler.put_f64(*v);
            Ok(())
        })
    }
}

impl Encodable for String {
    fn build_encoder() -> Encoder<Self> {
        Encoder::new(|v, tiler| {
            tiler.put_quoted_str(v);
            Ok(())
        })
    }
}

impl<T: Encodable + 'static> Encodable for Option<T> {
    fn build_encoder() -> Encoder<Self> {
        let mut inner = T::build_encoder();
        Encoder::new(move |v, tiler| match v {
            Some(value) => inner.encode(value, tiler),
            None => {
                tiler.put_null();
                Ok(())
            }
        })
    }
}

impl<T: Encodable + 'static> Encodable for Box<T> {
    fn build_encoder() -> Encoder<Self> {
        let mut inner = T::build_encoder();
        Encoder::new(move |v, tiler| inner.encode(v.as_ref(), tiler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiler::Tiler;

    #[test]
    fn primitives_encode() {
        let mut e = i64::build_encoder();
        let mut tiler = Tiler::new();
        e.encode(&42, &mut tiler).unwrap();
        assert_eq!(tiler.as_bytes(), b"42");
    }

    #[test]
    fn option_none_encodes_null() {
        let mut e = Option::<i64>::build_encoder();
        let mut tiler = Tiler::new();
        e.encode(&None, &mut tiler).unwrap();
        assert_eq!(tiler.as_bytes(), b"null");
    }

    #[test]
    fn option_some_delegates_to_inner() {
        let mut e = Option::<i64>::build_encoder();
        let mut tiler = Tiler::new();
        e.encode(&Some(7), &mut tiler).unwrap();
        assert_eq!(tiler.as_bytes(), b"7");
    }

    #[test]
    fn strings_round_trip_through_tiler() {
        let mut e = String::build_encoder();
        let mut tiler = Tiler::new();
        e.encode(&"hi".to_string(), &mut tiler).unwrap();
        assert_eq!(tiler.as_bytes(), br#""hi""#);
    }
}
