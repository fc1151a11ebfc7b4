//! Sawtooth wave oscillator implementation.

use super::Oscillator;
use crate::{AudioSignal, Signal};

/// A sawtooth wave oscillator.
///
/// The waveform rises linearly from -0.5 to 0.5 over each period, then drops
/// back to -0.5. Note the half-amplitude ramp; peak volume comes from the
/// envelope applied afterwards.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
pub struct SawtoothOscillator<const SAMPLE_RATE: u32> {
    /// Current phase of the oscillator (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample (frequency / sample_rate)
    phase_increment: f64,
}

impl<const SAMPLE_RATE: u32> SawtoothOscillator<SAMPLE_RATE> {
    /// Creates a new sawtooth oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sawtooth wave in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use blipforge::{Signal, SawtoothOscillator};
    ///
    /// let mut osc = SawtoothOscillator::<44100>::new(523.0);
    /// let sample = osc.next_sample();
    /// ```
    pub fn new(frequency: f64) -> Self {
        let phase_increment = frequency / SAMPLE_RATE as f64;
        Self {
            phase: 0.0,
            phase_increment,
        }
    }
}

impl<const SAMPLE_RATE: u32> Signal for SawtoothOscillator<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let sample = self.phase - 0.5;

        self.phase += self.phase_increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for SawtoothOscillator<SAMPLE_RATE> {}

impl<const SAMPLE_RATE: u32> Oscillator for SawtoothOscillator<SAMPLE_RATE> {
    fn set_frequency(&mut self, frequency: f64) {
        self.phase_increment = frequency / SAMPLE_RATE as f64;
    }

    fn frequency(&self) -> f64 {
        self.phase_increment * SAMPLE_RATE as f64
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillator_creation() {
        let osc = SawtoothOscillator::<44100>::new(523.0);
        assert_eq!(osc.frequency(), 523.0);
    }

    #[test]
    fn test_starts_at_trough() {
        let mut osc = SawtoothOscillator::<44100>::new(523.0);
        assert_eq!(osc.next_sample(), -0.5);
    }

    #[test]
    fn test_sample_range() {
        let mut osc = SawtoothOscillator::<44100>::new(523.0);
        for _ in 0..2000 {
            let sample = osc.next_sample();
            assert!((-0.5..0.5).contains(&sample));
        }
    }

    #[test]
    fn test_monotonic_rise_within_period() {
        // 441 Hz gives a 100-sample period; samples rise strictly until the
        // wrap.
        let mut osc = SawtoothOscillator::<44100>::new(441.0);
        let samples = osc.render(100);
        for pair in samples.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_wraps_after_period() {
        let mut osc = SawtoothOscillator::<44100>::new(441.0);
        let samples = osc.render(101);
        assert!((samples[100] - samples[0]).abs() < 1e-9);
    }

    #[test]
    fn test_reset() {
        let mut osc = SawtoothOscillator::<44100>::new(523.0);
        for _ in 0..42 {
            osc.next_sample();
        }
        osc.reset();
        assert_eq!(osc.next_sample(), -0.5);
    }
}
