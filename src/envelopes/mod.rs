//! Amplitude envelopes for shaping raw waveforms.

mod linear;

pub use linear::LinearEnvelope;
