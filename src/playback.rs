//! Playback boundary toward the host's audio output.
//!
//! The engine only synthesizes buffers; getting them to a sound device is
//! the host's job. The host implements [`Mixer`] over whatever output stack
//! it uses and submits [`AssetHandle`]s to it. Submission is fire-and-forget:
//! the mixer runs independently of the game loop and may layer several
//! effects over one looping track.

use crate::registry::AssetHandle;

/// How many times a submitted asset should play.
///
/// The raw integer convention of the original engine is available through
/// `From<i32>`: zero plays once, a positive count adds that many repeats,
/// and any negative value loops until [`Mixer::stop_all`].
///
/// # Examples
///
/// ```
/// use blipforge::LoopCount;
///
/// assert_eq!(LoopCount::from(0), LoopCount::Times(1));
/// assert_eq!(LoopCount::from(3), LoopCount::Times(4));
/// assert_eq!(LoopCount::from(-1), LoopCount::Forever);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCount {
    /// Play the asset this many times in total (at least once)
    Times(u32),
    /// Loop until the mixer is told to stop
    Forever,
}

impl From<i32> for LoopCount {
    fn from(raw: i32) -> Self {
        if raw < 0 {
            LoopCount::Forever
        } else {
            LoopCount::Times(raw as u32 + 1)
        }
    }
}

/// Audio output owned by the host.
///
/// Playback is non-blocking from the caller's perspective; cancellation is
/// all-or-nothing via [`stop_all`](Mixer::stop_all). The engine itself has
/// nothing to cancel, since synthesis is synchronous and finished before any
/// handle exists.
pub trait Mixer {
    /// Submits an asset for playback.
    ///
    /// # Arguments
    ///
    /// * `asset` - Handle obtained from the registry
    /// * `loops` - How many times to play it
    fn play(&mut self, asset: AssetHandle, loops: LoopCount);

    /// Halts every currently playing asset immediately.
    fn stop_all(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AudioRegistry;

    #[test]
    fn test_loop_count_conversion() {
        assert_eq!(LoopCount::from(0), LoopCount::Times(1));
        assert_eq!(LoopCount::from(1), LoopCount::Times(2));
        assert_eq!(LoopCount::from(7), LoopCount::Times(8));
        assert_eq!(LoopCount::from(-1), LoopCount::Forever);
        assert_eq!(LoopCount::from(i32::MIN), LoopCount::Forever);
    }

    /// Records submissions instead of making sound.
    #[derive(Default)]
    struct RecordingMixer {
        playing: Vec<(AssetHandle, LoopCount)>,
    }

    impl Mixer for RecordingMixer {
        fn play(&mut self, asset: AssetHandle, loops: LoopCount) {
            self.playing.push((asset, loops));
        }

        fn stop_all(&mut self) {
            self.playing.clear();
        }
    }

    #[test]
    fn test_mixer_contract() {
        let mut registry = AudioRegistry::new();
        registry.initialize().unwrap();
        let mut mixer = RecordingMixer::default();

        // One looping track with two effects layered on top.
        mixer.play(registry.track("menu").unwrap(), LoopCount::Forever);
        mixer.play(registry.effect("menu_move").unwrap(), LoopCount::from(0));
        mixer.play(registry.effect("shot").unwrap(), LoopCount::from(0));
        assert_eq!(mixer.playing.len(), 3);

        mixer.stop_all();
        assert!(mixer.playing.is_empty());
    }
}
