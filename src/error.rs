//! Error type for synthesis and asset lookup.

use std::fmt;

/// Error type for audio generation and registry lookups.
///
/// Both variants are synchronous, non-fatal conditions the caller must
/// handle. An `InvalidParameter` raised while the catalog is being built
/// aborts [`AudioRegistry::initialize`](crate::AudioRegistry::initialize),
/// since the catalog is fixed and a bad entry is a programming error rather
/// than a runtime one.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioError {
    /// A generator was handed a value outside its domain, such as a
    /// non-positive frequency or duration.
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },
    /// An effect or track was looked up under a name that was never
    /// registered. There is no fallback to a default sound.
    NotFound(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::InvalidParameter { name, value } => {
                write!(f, "invalid {}: {}", name, value)
            }
            AudioError::NotFound(name) => write!(f, "no asset registered under '{}'", name),
        }
    }
}

impl std::error::Error for AudioError {}
