use crate::foundation::math::{Fnv1a64, mix64};

/// Seed for [`random`]. Integers are used as-is, strings are hashed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed(pub u64);

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value as u64)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Self(i64::from(value) as u64)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(value.as_bytes());
        Self(h.finish())
    }
}

/// Deterministic pseudo-random value in `[0, 1)` for `seed`.
///
/// No state is carried between calls: the same seed yields the same value in every process.
pub fn random(seed: impl Into<Seed>) -> f64 {
    Rng64::new(seed.into().0).next_f64_01()
}

/// Seeded SplitMix64 stream for callers that need several values from one seed.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        mix64(self.state)
    }

    /// 53 bits of precision in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/random.rs"]
mod tests;
