use super::{Encodable, Encoder};
use crate::decode::JsonDuration;

impl Encodable for JsonDuration {
    fn build_encoder() -> Encoder<Self> {
        Encoder::new(|v, tiler| {
            tiler.put_duration(v.as_nanos());
            Ok(())
        })
    }
}
