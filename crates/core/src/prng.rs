//! Deterministic PRNG based on the SplitMix64 algorithm.
//!
//! Provides a fast, seedable pseudo-random number generator for reproducible
//! particle fields. Same seed always produces the same sequence of values
//! across all platforms (pure integer arithmetic, no floating point in the
//! core algorithm). Unlike xorshift-family generators, SplitMix64 has no
//! all-zeros fixed point, so every seed — including 0 — is valid.

use serde::{Deserialize, Serialize};

/// SplitMix64 deterministic PRNG. Same seed always produces the same sequence.
///
/// The state advances by the golden-gamma increment each call and the output
/// is a finalizing mix of the new state, so consecutive outputs are
/// statistically independent even for adjacent seeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Golden-ratio increment; chosen so the state walks the full 2^64 cycle.
    const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Creates a new PRNG with the given seed. All seeds are valid.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns the next 64-bit value.
    ///
    /// Implements the standard SplitMix64 finalizer (Steele, Lea, Flood 2014).
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(Self::GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` divided by 2^53 for
    /// full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Test 1: Golden value --

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // Golden value for splitmix64(seed=42). If this test breaks, the
        // PRNG algorithm changed and all scenes using this seed are
        // invalidated.
        let mut rng = SplitMix64::new(42);
        assert_eq!(rng.next_u64(), 13_679_457_532_755_275_413);
        assert_eq!(rng.next_u64(), 2_949_826_092_126_892_291);
    }

    #[test]
    fn seed_zero_is_a_valid_seed() {
        let mut rng = SplitMix64::new(0);
        assert_eq!(rng.next_u64(), 16_294_208_416_658_607_535);
    }

    // -- Test 2: Determinism --

    #[test]
    fn two_instances_with_same_seed_produce_identical_sequences() {
        let mut rng_a = SplitMix64::new(42);
        let mut rng_b = SplitMix64::new(42);
        for i in 0..1000 {
            assert_eq!(
                rng_a.next_u64(),
                rng_b.next_u64(),
                "sequences diverged at index {i}"
            );
        }
    }

    #[test]
    fn adjacent_seeds_produce_distinct_sequences() {
        let mut rng_a = SplitMix64::new(7);
        let mut rng_b = SplitMix64::new(8);
        let distinct = (0..100).filter(|_| rng_a.next_u64() != rng_b.next_u64()).count();
        assert!(distinct > 90, "adjacent seeds too correlated: {distinct}/100 distinct");
    }

    // -- Test 3: next_f64 range --

    #[test]
    fn next_f64_always_in_unit_interval() {
        let mut rng = SplitMix64::new(12345);
        for i in 0..10_000 {
            let v = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&v),
                "next_f64() = {v} out of [0, 1) at iteration {i}"
            );
        }
    }

    // -- Test 4: next_range bounds --

    #[test]
    fn next_range_stays_within_specified_bounds() {
        let mut rng = SplitMix64::new(9999);
        for i in 0..10_000 {
            let v = rng.next_range(-0.25, 0.25);
            assert!(
                (-0.25..0.25).contains(&v),
                "next_range(-0.25, 0.25) = {v} out of bounds at iteration {i}"
            );
        }
    }

    // -- Serialization roundtrip --

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut rng = SplitMix64::new(42);
        // Advance state partway through a sequence
        for _ in 0..50 {
            rng.next_u64();
        }
        // Serialize mid-stream
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: SplitMix64 = serde_json::from_str(&json).unwrap();
        // Verify next 100 values match
        for i in 0..100 {
            assert_eq!(
                rng.next_u64(),
                restored.next_u64(),
                "sequences diverged after deserialization at index {i}"
            );
        }
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval_for_any_seed(seed: u64) {
                let mut rng = SplitMix64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!(
                        (0.0..1.0).contains(&v),
                        "next_f64() = {v} out of [0, 1) for seed {seed}"
                    );
                }
            }

            #[test]
            fn next_range_in_bounds_for_any_seed_and_range(
                seed: u64,
                min in -1e6_f64..1e6,
                max in -1e6_f64..1e6,
            ) {
                // Only test when min < max
                prop_assume!(min < max);
                let mut rng = SplitMix64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_range(min, max);
                    prop_assert!(
                        v >= min && v < max,
                        "next_range({min}, {max}) = {v} out of bounds for seed {seed}"
                    );
                }
            }

            #[test]
            fn next_f64_approximate_uniformity(seed: u64) {
                let mut rng = SplitMix64::new(seed);
                let mut buckets = [0u32; 10];
                for _ in 0..10_000 {
                    let v = rng.next_f64();
                    let idx = (v * 10.0).min(9.0) as usize;
                    buckets[idx] += 1;
                }
                // Each bucket should have at least 500 out of 10000 (expected ~1000).
                // This is a very loose bound to avoid flaky tests.
                for (i, &count) in buckets.iter().enumerate() {
                    prop_assert!(
                        count >= 500,
                        "bucket {i} has only {count} values (expected ~1000) for seed {seed}"
                    );
                }
            }
        }
    }
}
