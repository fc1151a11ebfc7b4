//! Core signal processing trait.

/// Common interface for all sample sources.
///
/// This trait defines the core functionality for anything that can generate
/// audio samples: oscillators, envelopes, noise generators.
///
/// The trait provides three operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
/// - One-shot buffer rendering via `render()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Collects the next `len` samples into a freshly allocated buffer.
    ///
    /// # Arguments
    ///
    /// * `len` - Number of samples to generate
    ///
    /// # Examples
    ///
    /// ```
    /// use blipforge::{Signal, SineOscillator};
    ///
    /// let mut osc = SineOscillator::<44100>::new(440.0);
    /// let buffer = osc.render(2205);
    /// assert_eq!(buffer.len(), 2205);
    /// ```
    fn render(&mut self, len: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; len];
        self.process(&mut buffer);
        buffer
    }
}
