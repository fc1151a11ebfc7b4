//! Sample-rate-aware signal trait.

use crate::Signal;

/// Common interface for signals generated at a fixed sample rate.
///
/// This trait extends `Signal` to carry the sample rate at the type level,
/// which ensures that components running at different rates cannot be
/// accidentally combined: an envelope can only be applied to a source whose
/// `SAMPLE_RATE` parameter matches its own.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
///
/// # Examples
///
/// ```
/// use blipforge::{AudioSignal, SineOscillator};
///
/// // Sample rate is in the type
/// let osc: SineOscillator<44100> = SineOscillator::new(440.0);
/// assert_eq!(osc.sample_rate(), 44100.0);
/// ```
pub trait AudioSignal<const SAMPLE_RATE: u32>: Signal {
    /// Gets the sample rate at which this audio is being generated.
    ///
    /// # Returns
    ///
    /// Sample rate in Hz (e.g., 44100.0 for CD quality)
    fn sample_rate(&self) -> f64 {
        SAMPLE_RATE as f64
    }
}
