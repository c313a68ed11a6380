//! Tiny, fast LCG for demo data.
//! Avoids rand dependency

#[derive(Clone)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn seed_from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        Self(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0x5eed, |d| d.as_nanos() as u64),
        )
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform sample in `[0, 1]`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Uniform integer in `lo..=hi`.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn range(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        let span = u64::from(hi - lo) + 1;
        lo + (u64::from(self.next_u32()) % span) as u32
    }

    /// Uniformly chosen element of a non-empty slice.
    pub fn choose<'a, T>(&mut self, xs: &'a [T]) -> Option<&'a T> {
        if xs.is_empty() {
            return None;
        }
        let hi = u32::try_from(xs.len() - 1).unwrap_or(u32::MAX);
        xs.get(self.range(0, hi) as usize)
    }
}
