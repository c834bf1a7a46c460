//! RNG module - random sources for item placement
//!
//! The game draws every random decision (spawn cell, item kind) through the
//! [`RandomSource`] trait so tests and replays can inject a deterministic
//! stream. [`SimpleRng`] is the default: a small LCG that produces the same
//! sequence for the same seed.

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Generate the next random u32, uniform over the full 32-bit range
    fn next_u32(&mut self) -> u32;

    /// Generate a value in `[0, max)`. `max` must be non-zero.
    ///
    /// Scales with a widening multiply instead of `%`, so the bias is at most
    /// `max / 2^32` per value.
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// LCG formula: (a * state + c) mod m
    /// Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state; seeding a new `SimpleRng` with it continues the stream.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // The low bits of a power-of-two LCG have short periods, so each
        // output is built from the high halves of two steps.
        let hi = self.step() >> 16;
        let lo = self.step() >> 16;
        (hi << 16) | lo
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let a: Vec<u32> = (0..8).map(|_| rng1.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| rng2.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        let first = rng.next_u32();
        let second = rng.next_u32();
        assert_ne!(first, second);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in [1u32, 2, 27, 37, 100] {
            for _ in 0..500 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_outputs_use_the_full_width() {
        let mut rng = SimpleRng::new(3);
        assert!((0..64).any(|_| rng.next_u32() > u32::from(u16::MAX)));
    }

    #[test]
    fn test_next_range_scales_without_modulo() {
        struct Max;
        impl RandomSource for Max {
            fn next_u32(&mut self) -> u32 {
                u32::MAX
            }
        }
        assert_eq!(Max.next_range(37), 36);
        assert_eq!(Max.next_range(1), 0);
    }

    #[test]
    fn test_next_range_is_close_to_uniform() {
        let mut rng = SimpleRng::new(2024);
        let mut counts = [0u32; 999];
        for _ in 0..999 * 200 {
            counts[rng.next_range(999) as usize] += 1;
        }
        // Expected 200 per bucket.
        assert!(counts.iter().all(|&c| (120..=280).contains(&c)), "{:?}", counts);
    }

    #[test]
    fn test_next_range_hits_every_value() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 37];
        for _ in 0..5000 {
            seen[rng.next_range(37) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
