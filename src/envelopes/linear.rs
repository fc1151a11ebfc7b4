//! Linear attack/sustain/decay envelope generator.

use crate::buffer::sample_count;
use crate::{AudioSignal, Signal};

/// A finite amplitude envelope: linear attack ramp to the peak, constant
/// sustain, linear decay ramp back to zero.
///
/// The envelope's length always equals the requested duration in samples.
/// When attack and decay together exceed the duration, the segments are
/// clamped in a fixed order: the sustain is dropped first and the decay
/// recomputed from what remains; only if that still leaves no room does the
/// attack get cut to the full length. The order is load-bearing for short
/// sounds and must not be swapped.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
///
/// # Examples
///
/// ```
/// use blipforge::LinearEnvelope;
///
/// let env = LinearEnvelope::<44100>::new(0.01, 0.1, 0.5, 0.8);
/// assert_eq!(env.len(), 22050);
/// assert_eq!(env.attack_len(), 441);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearEnvelope<const SAMPLE_RATE: u32> {
    attack_len: usize,
    sustain_len: usize,
    decay_len: usize,
    peak: f64,
    /// Cursor for the Signal implementation
    position: usize,
}

impl<const SAMPLE_RATE: u32> LinearEnvelope<SAMPLE_RATE> {
    /// Creates a new envelope spanning `duration` seconds.
    ///
    /// # Arguments
    ///
    /// * `attack` - Attack time in seconds (0 or positive)
    /// * `decay` - Decay time in seconds (0 or positive)
    /// * `duration` - Total duration in seconds, which the envelope fills exactly
    /// * `peak` - Peak amplitude, typically in (0.0, 1.0]
    ///
    /// # Examples
    ///
    /// ```
    /// use blipforge::LinearEnvelope;
    ///
    /// // 10ms attack, 100ms decay, 50ms total: too short for both ramps,
    /// // so the decay is recomputed to fill what the attack leaves over.
    /// let env = LinearEnvelope::<44100>::new(0.01, 0.1, 0.05, 0.1);
    /// assert_eq!(env.sustain_len(), 0);
    /// assert_eq!(env.attack_len() + env.decay_len(), env.len());
    /// ```
    pub fn new(attack: f64, decay: f64, duration: f64, peak: f64) -> Self {
        let total = sample_count(duration, SAMPLE_RATE) as isize;
        let mut attack_len = sample_count(attack.max(0.0), SAMPLE_RATE) as isize;
        let mut decay_len = sample_count(decay.max(0.0), SAMPLE_RATE) as isize;
        let mut sustain_len = total - attack_len - decay_len;

        // Short sounds: drop the sustain, then the decay, before touching
        // the attack.
        if sustain_len < 0 {
            sustain_len = 0;
            decay_len = total - attack_len;
            if decay_len < 0 {
                decay_len = 0;
                attack_len = total;
            }
        }

        Self {
            attack_len: attack_len as usize,
            sustain_len: sustain_len as usize,
            decay_len: decay_len as usize,
            peak,
            position: 0,
        }
    }

    /// Total envelope length in samples.
    pub fn len(&self) -> usize {
        self.attack_len + self.sustain_len + self.decay_len
    }

    /// Returns true if the envelope spans zero samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the attack ramp in samples (after clamping).
    pub fn attack_len(&self) -> usize {
        self.attack_len
    }

    /// Length of the sustain plateau in samples (after clamping).
    pub fn sustain_len(&self) -> usize {
        self.sustain_len
    }

    /// Length of the decay ramp in samples (after clamping).
    pub fn decay_len(&self) -> usize {
        self.decay_len
    }

    /// Peak amplitude.
    pub fn peak(&self) -> f64 {
        self.peak
    }

    /// The amplitude at sample index `i`, or 0.0 past the end.
    ///
    /// Ramps interpolate with inclusive endpoints: a ramp of length `n > 1`
    /// places its start value at the first sample and its end value at the
    /// last; a single-sample ramp holds its start value.
    pub fn level(&self, i: usize) -> f64 {
        if i < self.attack_len {
            ramp_value(0.0, self.peak, self.attack_len, i)
        } else if i < self.attack_len + self.sustain_len {
            self.peak
        } else if i < self.len() {
            let k = i - self.attack_len - self.sustain_len;
            ramp_value(self.peak, 0.0, self.decay_len, k)
        } else {
            0.0
        }
    }

    /// Multiplies a waveform by this envelope, element-wise.
    ///
    /// If the two differ in length, both are truncated to the shorter; no
    /// padding, no error.
    ///
    /// # Arguments
    ///
    /// * `samples` - Raw waveform samples
    pub fn shape(&self, samples: &[f64]) -> Vec<f64> {
        samples
            .iter()
            .take(self.len())
            .enumerate()
            .map(|(i, &s)| s * self.level(i))
            .collect()
    }

    /// Renders `len()` samples from `source` and shapes them.
    ///
    /// The bound guarantees at compile time that the source runs at this
    /// envelope's sample rate.
    ///
    /// # Arguments
    ///
    /// * `source` - Any audio signal at the same sample rate
    ///
    /// # Examples
    ///
    /// ```
    /// use blipforge::{LinearEnvelope, SineOscillator};
    ///
    /// let mut osc = SineOscillator::<44100>::new(440.0);
    /// let env = LinearEnvelope::<44100>::new(0.01, 0.1, 0.05, 0.05);
    /// let shaped = env.apply_to(&mut osc);
    /// assert_eq!(shaped.len(), 2205);
    /// ```
    pub fn apply_to<S: AudioSignal<SAMPLE_RATE>>(&self, source: &mut S) -> Vec<f64> {
        let wave = source.render(self.len());
        self.shape(&wave)
    }
}

impl<const SAMPLE_RATE: u32> Signal for LinearEnvelope<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let sample = self.level(self.position);
        self.position += 1;
        sample
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for LinearEnvelope<SAMPLE_RATE> {}

/// Linear interpolation with inclusive endpoints over `len` samples.
fn ramp_value(from: f64, to: f64, len: usize, k: usize) -> f64 {
    if len <= 1 {
        from
    } else {
        from + (to - from) * k as f64 / (len - 1) as f64
    }
}
