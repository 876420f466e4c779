//! Running predictor of collection cardinalities, used to pre-size slice and
//! map destinations on decode so repeated calls on the same [`Codec`] stop
//! reallocating once the oracle converges.
//!
//! [`Codec`]: crate::codec::Codec

/// Only every `SKIP`-th observation is admitted; the rest are discarded to
/// bound the bookkeeping cost and smooth out one-off outliers.
const SKIP: u32 = 25;

#[derive(Debug, Clone, Copy, Default)]
pub struct SizeOracle {
    sum: u64,
    count: u64,
    avg: u64,
    skip: u32,
}

impl SizeOracle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observed collection length.
    pub fn add(&mut self, n: usize) {
        self.skip = (self.skip + 1) % SKIP;
        if self.skip != 0 {
            return;
        }

        let n = n as u64;
        let (new_count, count_overflowed) = self.count.overflowing_add(1);
        let (new_sum, sum_overflowed) = self.sum.overflowing_add(n);
        if count_overflowed || sum_overflowed {
            self.count = 1;
            self.sum = n;
            self.avg = n;
            return;
        }

        self.count = new_count;
        self.sum = new_sum;
        self.avg = self.sum.div_ceil(self.count);
    }

    /// The current predicted size: `ceil(sum / count)` of observed samples,
    /// or `0` before the first observation.
    #[must_use]
    pub fn get(&self) -> usize {
        self.avg as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(SizeOracle::new().get(), 0);
    }

    #[test]
    fn converges_to_ceil_average_of_observed_samples() {
        let mut oracle = SizeOracle::new();
        // every SKIP-th add is observed; feed enough to get several samples.
        for round in 0..5 {
            for i in 0..SKIP {
                let n = if i == SKIP - 1 { 3 + round } else { 0 };
                oracle.add(n as usize);
            }
        }
        // only the last-of-each-round value (3, 4, 5, 6, 7) was observed;
        // ceil((3+4+5+6+7)/5) == 5.
        assert_eq!(oracle.get(), 5);
    }

    #[test]
    fn single_sample_is_returned_verbatim() {
        let mut oracle = SizeOracle::new();
        for i in 0..SKIP {
            oracle.add(if i == SKIP - 1 { 7 } else { 0 });
        }
        assert_eq!(oracle.get(), 7);
    }
}
