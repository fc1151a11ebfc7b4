//! The hand-authored catalog of effects and scene tracks.
//!
//! Frequencies are raw Hz values tuned by ear, not equal-tempered pitches;
//! changing one changes the game's sound. Every entry is synthesized from
//! scratch each run.

use crate::buffer::StereoBuffer;
use crate::error::AudioError;
use crate::oscillators::Waveform;
use crate::tone::{ToneSpec, noise_burst};
use crate::track::NoteSequence;

/// Builds every one-shot effect, in registration order.
pub(crate) fn effects() -> Result<Vec<(&'static str, StereoBuffer)>, AudioError> {
    Ok(vec![
        // Movement blip for menu navigation
        (
            "menu_move",
            ToneSpec::new(440.0, 0.05).with_volume(0.05).render()?,
        ),
        // Confirmation chime, one octave up
        (
            "menu_select",
            ToneSpec::new(880.0, 0.1).with_volume(0.08).render()?,
        ),
        // Static burst for glitch moments
        ("glitch", noise_burst(0.1, 0.15)?),
        // Projectile hit, hard square edge
        (
            "shot",
            ToneSpec::new(220.0, 0.2)
                .with_decay(0.2)
                .with_volume(0.2)
                .with_shape(Waveform::Square)
                .render()?,
        ),
        // Player damage, lower and longer
        (
            "impact",
            ToneSpec::new(150.0, 0.4)
                .with_decay(0.4)
                .with_volume(0.3)
                .with_shape(Waveform::Square)
                .render()?,
        ),
    ])
}

/// Builds every looping scene track, in registration order.
pub(crate) fn tracks() -> Result<Vec<(&'static str, StereoBuffer)>, AudioError> {
    Ok(vec![
        (
            "menu",
            NoteSequence::new(vec![261.0, 293.0, 329.0, 293.0], 0.4)
                .with_volume(0.1)
                .assemble()?,
        ),
        (
            "field",
            NoteSequence::new(vec![349.0, 0.0, 440.0, 0.0, 523.0, 0.0, 440.0, 0.0], 0.3)
                .with_volume(0.15)
                .assemble()?,
        ),
        (
            "throne",
            NoteSequence::new(vec![130.0, 130.0, 146.0, 130.0, 0.0, 110.0, 110.0, 0.0], 0.25)
                .with_volume(0.2)
                .with_shape(Waveform::Square)
                .assemble()?,
        ),
        (
            "carnival",
            NoteSequence::new(
                vec![392.0, 370.0, 349.0, 330.0, 311.0, 293.0, 277.0, 261.0],
                0.08,
            )
            .with_volume(0.15)
            .assemble()?,
        ),
        (
            "city",
            NoteSequence::new(vec![523.0, 0.0, 523.0, 0.0, 523.0, 659.0, 0.0, 440.0], 0.18)
                .with_volume(0.15)
                .with_shape(Waveform::Sawtooth)
                .assemble()?,
        ),
        (
            "palace",
            NoteSequence::new(vec![659.0, 0.0, 659.0, 0.0, 622.0, 0.0, 659.0, 0.0], 0.2)
                .with_volume(0.2)
                .with_shape(Waveform::Square)
                .assemble()?,
        ),
        (
            "bazaar",
            NoteSequence::new(
                vec![880.0, 440.0, 990.0, 330.0, 1100.0, 220.0, 1200.0, 110.0],
                0.1,
            )
            .with_volume(0.2)
            .assemble()?,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_RATE;
    use crate::buffer::sample_count;

    #[test]
    fn test_effects_build_cleanly() {
        let effects = effects().unwrap();
        assert_eq!(effects.len(), 5);
        for (name, buffer) in &effects {
            assert!(!buffer.is_empty(), "effect '{}' is empty", name);
        }
    }

    #[test]
    fn test_tracks_build_cleanly() {
        let tracks = tracks().unwrap();
        assert_eq!(tracks.len(), 7);
        for (name, buffer) in &tracks {
            assert!(!buffer.is_empty(), "track '{}' is empty", name);
        }
    }

    #[test]
    fn test_effect_durations() {
        let effects = effects().unwrap();
        let frames: std::collections::HashMap<_, _> = effects
            .iter()
            .map(|(name, buffer)| (*name, buffer.frames()))
            .collect();

        assert_eq!(frames["menu_move"], sample_count(0.05, SAMPLE_RATE));
        assert_eq!(frames["menu_select"], sample_count(0.1, SAMPLE_RATE));
        assert_eq!(frames["glitch"], sample_count(0.1, SAMPLE_RATE));
        assert_eq!(frames["shot"], sample_count(0.2, SAMPLE_RATE));
        assert_eq!(frames["impact"], sample_count(0.4, SAMPLE_RATE));
    }

    #[test]
    fn test_track_lengths_are_slot_multiples() {
        let tracks = tracks().unwrap();
        for (name, slots, slot_duration) in [
            ("menu", 4, 0.4),
            ("field", 8, 0.3),
            ("throne", 8, 0.25),
            ("carnival", 8, 0.08),
            ("city", 8, 0.18),
            ("palace", 8, 0.2),
            ("bazaar", 8, 0.1),
        ] {
            let buffer = &tracks.iter().find(|(n, _)| *n == name).unwrap().1;
            assert_eq!(
                buffer.frames(),
                slots * sample_count(slot_duration, SAMPLE_RATE),
                "track '{}' has the wrong length",
                name
            );
        }
    }
}
