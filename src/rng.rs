//! Seeded linear congruential generator.

use rand::RngCore;

use crate::seed::hash_seed;

#[cfg(feature = "std")]
fn floor(value: f64) -> f64 {
    value.floor()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn floor(value: f64) -> f64 {
    libm::floor(value)
}

/// A deterministic random stream over `[0, 1)`.
///
/// The state advances as `state = (state * 9301 + 49297) mod 233280` and
/// each draw returns `state / 233280`. The generator is tiny and weak on
/// purpose: the constants must stay exactly as they are so a deal computed
/// here matches one computed in the browser. It is not suitable for
/// anything that needs unpredictability.
///
/// Each instance owns its state, so independent streams never interfere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededLcg {
    state: u64,
}

impl SeededLcg {
    /// LCG multiplier.
    pub const MULTIPLIER: u64 = 9301;
    /// LCG increment.
    pub const INCREMENT: u64 = 49297;
    /// LCG modulus.
    pub const MODULUS: u64 = 233_280;

    /// Creates a generator whose initial state is `seed`.
    ///
    /// The seed may exceed the modulus; the first draw reduces it.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    /// Creates a generator from a text seed via [`hash_seed`].
    #[must_use]
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    /// Advances the state and returns a value in `[0, 1)`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "state is below the modulus, which f64 represents exactly"
    )]
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }

    /// Draws an index in `0..bound` as `floor(next_f64() * bound)`.
    ///
    /// Returns 0 without advancing when `bound` is 0.
    #[expect(
        clippy::cast_precision_loss,
        reason = "deck-sized bounds are far below f64's integer precision"
    )]
    pub fn index_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        floor(self.next_f64() * bound as f64) as usize
    }
}

impl RngCore for SeededLcg {
    fn next_u32(&mut self) -> u32 {
        floor(self.next_f64() * 4_294_967_296.0) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
