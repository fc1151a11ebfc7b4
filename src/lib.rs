//! Blipforge - a procedural game-audio engine for Rust
//!
//! Every sound effect and music track is synthesized from scratch as a raw
//! 16-bit stereo sample buffer; nothing is loaded from disk. The
//! [`AudioRegistry`] builds the whole catalog once at startup and hands out
//! immutable handles that a host-owned [`Mixer`] plays back.

pub mod buffer;
pub mod envelopes;
pub mod error;
pub mod noise;
pub mod oscillators;
pub mod playback;
pub mod registry;
pub mod signals;
pub mod tone;
pub mod track;

mod catalog;

// Re-export commonly used types at the crate root
pub use buffer::{StereoBuffer, sample_count};
pub use envelopes::LinearEnvelope;
pub use error::AudioError;
pub use noise::WhiteNoise;
pub use oscillators::{
    Oscillator, SawtoothOscillator, SineOscillator, SquareOscillator, Waveform,
    WaveformOscillator,
};
pub use playback::{LoopCount, Mixer};
pub use registry::{AssetHandle, AudioAsset, AudioRegistry};
pub use signals::{AudioSignal, Signal};
pub use tone::{ToneSpec, noise_burst, noise_burst_with};
pub use track::NoteSequence;

#[cfg(feature = "notes")]
pub use blipforge_macros::{note, notes};

/// Sample rate shared by every generator in the engine, in Hz.
pub const SAMPLE_RATE: u32 = 44100;
