//! Single-tone synthesis: waveform, envelope, quantization.

use rand::Rng;

use crate::buffer::{StereoBuffer, sample_count};
use crate::envelopes::LinearEnvelope;
use crate::error::AudioError;
use crate::noise::WhiteNoise;
use crate::oscillators::Waveform;
use crate::signals::Signal;
use crate::SAMPLE_RATE;

/// Parameters for one synthesized tone.
///
/// A tone is a single pitched sound: an oscillator of the chosen shape, run
/// for the given duration, shaped by a linear attack/decay envelope, and
/// packed into a quantized stereo buffer. The defaults (10 ms attack, 100 ms
/// decay, volume 0.1, sine) are tuned for short UI blips; override them with
/// the `with_*` builders.
///
/// # Examples
///
/// ```
/// use blipforge::{ToneSpec, Waveform};
///
/// let blip = ToneSpec::new(440.0, 0.05).with_volume(0.05);
/// let buffer = blip.render().unwrap();
/// assert_eq!(buffer.frames(), 2205);
///
/// let hit = ToneSpec::new(150.0, 0.4)
///     .with_decay(0.4)
///     .with_volume(0.3)
///     .with_shape(Waveform::Square);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Frequency in Hz (must be positive; 0 is a rest and never reaches here)
    pub frequency: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Attack time in seconds
    pub attack: f64,
    /// Decay time in seconds
    pub decay: f64,
    /// Peak volume in (0.0, 1.0]
    pub volume: f64,
    /// Waveform shape
    pub shape: Waveform,
}

impl ToneSpec {
    /// Creates a tone spec with default attack, decay, volume, and shape.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency in Hz
    /// * `duration` - Duration in seconds
    pub fn new(frequency: f64, duration: f64) -> Self {
        Self {
            frequency,
            duration,
            attack: 0.01,
            decay: 0.1,
            volume: 0.1,
            shape: Waveform::Sine,
        }
    }

    /// Sets the attack time in seconds.
    pub fn with_attack(mut self, attack: f64) -> Self {
        self.attack = attack;
        self
    }

    /// Sets the decay time in seconds.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Sets the peak volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Sets the waveform shape.
    pub fn with_shape(mut self, shape: Waveform) -> Self {
        self.shape = shape;
        self
    }

    /// Renders the tone into a quantized stereo buffer.
    ///
    /// The buffer holds exactly `sample_count(duration)` frames.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::InvalidParameter`] if the frequency or duration
    /// is not positive.
    pub fn render(&self) -> Result<StereoBuffer, AudioError> {
        if self.frequency <= 0.0 {
            return Err(AudioError::InvalidParameter {
                name: "frequency",
                value: self.frequency,
            });
        }
        if self.duration <= 0.0 {
            return Err(AudioError::InvalidParameter {
                name: "duration",
                value: self.duration,
            });
        }

        let mut osc = self.shape.oscillator::<SAMPLE_RATE>(self.frequency);
        let envelope =
            LinearEnvelope::<SAMPLE_RATE>::new(self.attack, self.decay, self.duration, self.volume);
        let shaped = envelope.apply_to(&mut osc);
        Ok(StereoBuffer::from_mono(&shaped))
    }
}

/// Renders a burst of white noise from the ambient thread RNG.
///
/// Noise effects skip the envelope entirely; every sample is uniform in
/// [-volume, volume].
///
/// # Arguments
///
/// * `duration` - Duration in seconds
/// * `volume` - Amplitude scale in (0.0, 1.0]
///
/// # Errors
///
/// Returns [`AudioError::InvalidParameter`] if the duration is not positive.
///
/// # Examples
///
/// ```
/// use blipforge::noise_burst;
///
/// let burst = noise_burst(0.1, 0.15).unwrap();
/// assert_eq!(burst.frames(), 4410);
/// ```
pub fn noise_burst(duration: f64, volume: f64) -> Result<StereoBuffer, AudioError> {
    noise_burst_with(duration, volume, rand::thread_rng())
}

/// Renders a burst of white noise from a caller-supplied RNG.
///
/// The seedable variant exists so tests can assert exact sequences instead
/// of range checks.
///
/// # Arguments
///
/// * `duration` - Duration in seconds
/// * `volume` - Amplitude scale in (0.0, 1.0]
/// * `rng` - Random source for the noise samples
///
/// # Errors
///
/// Returns [`AudioError::InvalidParameter`] if the duration is not positive.
pub fn noise_burst_with<R: Rng>(
    duration: f64,
    volume: f64,
    rng: R,
) -> Result<StereoBuffer, AudioError> {
    if duration <= 0.0 {
        return Err(AudioError::InvalidParameter {
            name: "duration",
            value: duration,
        });
    }

    let mut noise = WhiteNoise::with_rng(rng);
    let mono: Vec<f64> = noise
        .render(sample_count(duration, SAMPLE_RATE))
        .iter()
        .map(|s| s * volume)
        .collect();
    Ok(StereoBuffer::from_mono(&mono))
}
