//! Named, pre-generated audio assets.

use std::collections::HashMap;
use std::sync::Arc;

use crate::buffer::StereoBuffer;
use crate::catalog;
use crate::error::AudioError;

/// An immutable, pre-generated sample buffer with loop semantics.
///
/// Effects play once; tracks are meant to be looped by the host mixer until
/// stopped. Assets are only ever created by the registry and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAsset {
    buffer: StereoBuffer,
    looping: bool,
}

impl AudioAsset {
    /// Wraps a buffer as a one-shot effect.
    pub fn effect(buffer: StereoBuffer) -> Self {
        Self {
            buffer,
            looping: false,
        }
    }

    /// Wraps a buffer as a loopable track.
    pub fn track(buffer: StereoBuffer) -> Self {
        Self {
            buffer,
            looping: true,
        }
    }

    /// The asset's sample data.
    pub fn buffer(&self) -> &StereoBuffer {
        &self.buffer
    }

    /// Whether the asset is meant to loop.
    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

/// Shared, immutable reference to a registered asset.
///
/// Handles are cheap to clone; the host keeps them around and submits them
/// to its mixer without ever touching the underlying buffer.
pub type AssetHandle = Arc<AudioAsset>;

/// Table of named effects and tracks, built once at startup.
///
/// The registry is an owned object rather than process-global state: create
/// it, call [`initialize`](AudioRegistry::initialize) before the first
/// lookup, and pass it by reference to whatever needs lookups. Lookups after
/// initialization need no synchronization.
///
/// # Examples
///
/// ```
/// use blipforge::AudioRegistry;
///
/// let mut registry = AudioRegistry::new();
/// registry.initialize().unwrap();
///
/// let blip = registry.effect("menu_move").unwrap();
/// assert!(!blip.is_looping());
///
/// let theme = registry.track("menu").unwrap();
/// assert!(theme.is_looping());
/// ```
#[derive(Debug, Default)]
pub struct AudioRegistry {
    effects: HashMap<String, AssetHandle>,
    tracks: HashMap<String, AssetHandle>,
}

impl AudioRegistry {
    /// Creates an empty registry. Nothing can be looked up until
    /// [`initialize`](AudioRegistry::initialize) has run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesizes the full catalog of effects and tracks.
    ///
    /// Generation is synchronous and CPU-bound; the call blocks until every
    /// asset exists. Calling it again regenerates the catalog and replaces
    /// any prior content.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::InvalidParameter`] if a catalog entry is
    /// misconfigured; the registry is left as it was, never half-built.
    pub fn initialize(&mut self) -> Result<(), AudioError> {
        let effects = catalog::effects()?;
        let tracks = catalog::tracks()?;

        self.effects.clear();
        self.tracks.clear();
        for (name, buffer) in effects {
            self.effects
                .insert(name.to_string(), Arc::new(AudioAsset::effect(buffer)));
        }
        for (name, buffer) in tracks {
            self.tracks
                .insert(name.to_string(), Arc::new(AudioAsset::track(buffer)));
        }
        Ok(())
    }

    /// Looks up a one-shot effect by name.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::NotFound`] for unregistered names; there is no
    /// fallback sound.
    pub fn effect(&self, name: &str) -> Result<AssetHandle, AudioError> {
        self.effects
            .get(name)
            .cloned()
            .ok_or_else(|| AudioError::NotFound(name.to_string()))
    }

    /// Looks up a loopable track by name.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::NotFound`] for unregistered names.
    pub fn track(&self, name: &str) -> Result<AssetHandle, AudioError> {
        self.tracks
            .get(name)
            .cloned()
            .ok_or_else(|| AudioError::NotFound(name.to_string()))
    }

    /// Names of all registered effects, in no particular order.
    pub fn effect_names(&self) -> impl Iterator<Item = &str> {
        self.effects.keys().map(String::as_str)
    }

    /// Names of all registered tracks, in no particular order.
    pub fn track_names(&self) -> impl Iterator<Item = &str> {
        self.tracks.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_before_initialize_fails() {
        let registry = AudioRegistry::new();
        assert_eq!(
            registry.effect("menu_move"),
            Err(AudioError::NotFound("menu_move".to_string()))
        );
    }

    #[test]
    fn test_initialize_then_lookup() {
        let mut registry = AudioRegistry::new();
        registry.initialize().unwrap();

        let handle = registry.effect("menu_move").unwrap();
        assert!(!handle.is_looping());
        assert!(handle.buffer().frames() > 0);
    }

    #[test]
    fn test_unknown_names_not_found() {
        let mut registry = AudioRegistry::new();
        registry.initialize().unwrap();

        assert!(matches!(
            registry.effect("nonexistent"),
            Err(AudioError::NotFound(_))
        ));
        assert!(matches!(
            registry.track("nonexistent"),
            Err(AudioError::NotFound(_))
        ));
    }

    #[test]
    fn test_effects_and_tracks_are_separate_namespaces() {
        let mut registry = AudioRegistry::new();
        registry.initialize().unwrap();

        assert!(registry.effect("menu").is_err());
        assert!(registry.track("menu_move").is_err());
    }

    #[test]
    fn test_full_catalog_registered() {
        let mut registry = AudioRegistry::new();
        registry.initialize().unwrap();

        for name in ["menu_move", "menu_select", "glitch", "shot", "impact"] {
            assert!(registry.effect(name).is_ok(), "missing effect '{}'", name);
        }
        for name in [
            "menu", "field", "throne", "carnival", "city", "palace", "bazaar",
        ] {
            let handle = registry.track(name).unwrap();
            assert!(handle.is_looping(), "track '{}' must loop", name);
        }
    }

    #[test]
    fn test_reinitialize_replaces_content() {
        let mut registry = AudioRegistry::new();
        registry.initialize().unwrap();
        let before = registry.effect_names().count();

        registry.initialize().unwrap();
        assert_eq!(registry.effect_names().count(), before);
        assert!(registry.effect("menu_move").is_ok());
    }

    #[test]
    fn test_handles_outlive_reinitialization() {
        let mut registry = AudioRegistry::new();
        registry.initialize().unwrap();
        let held = registry.effect("shot").unwrap();
        let frames = held.buffer().frames();

        registry.initialize().unwrap();
        // The old handle still points at a complete, unchanged buffer.
        assert_eq!(held.buffer().frames(), frames);
    }

    #[test]
    fn test_handles_are_shared_not_copied() {
        let mut registry = AudioRegistry::new();
        registry.initialize().unwrap();

        let a = registry.track("menu").unwrap();
        let b = registry.track("menu").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
