//! RNG module - injectable random source for hand dealing
//!
//! The catalog never reaches for ambient randomness: every draw goes through a
//! [`RandomSource`] handed in by the caller. [`SimpleRng`] is the deterministic
//! default, so a seed fully determines every hand of a game.

/// Source of uniformly distributed random numbers
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift keeps the high bits, which are the well-mixed ones for an LCG.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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

    /// Rebuild an RNG from a value returned by [`SimpleRng::state`].
    ///
    /// Unlike [`SimpleRng::new`], a zero state is kept as is.
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current internal state; `SimpleRng::from_state(rng.state())` resumes the
    /// same sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
