//! White noise generator implementation.

use crate::Signal;
use rand::Rng;

/// A white noise generator.
///
/// Each sample is drawn uniformly from [-1.0, 1.0], independent of its
/// neighbors. The generator is nondeterministic by default; inject a seeded
/// RNG via [`WhiteNoise::with_rng`] when a reproducible sequence is needed.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    /// Random number generator
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a new white noise generator with the default ThreadRng.
    ///
    /// # Examples
    ///
    /// ```
    /// use blipforge::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new();
    /// let sample = noise.next_sample();
    /// ```
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for WhiteNoise<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a new white noise generator with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random number generator to use
    ///
    /// # Examples
    ///
    /// ```
    /// use blipforge::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}
