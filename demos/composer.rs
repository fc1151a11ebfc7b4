//! Hand-authors a short melody with the `notes!` macro and loops it.
//!
//! Run with: cargo run --example composer --features notes

mod common;

use anyhow::Result;
use blipforge::{AudioAsset, LoopCount, Mixer, NoteSequence, Waveform, notes};
use common::CpalMixer;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    let melody = NoteSequence::new(
        notes!["C4", "E4", "G4", "E4", "_", "A4", "G4", "_"],
        0.25,
    )
    .with_volume(0.12)
    .with_shape(Waveform::Square);

    let asset = Arc::new(AudioAsset::track(melody.assemble()?));
    let seconds = asset.buffer().frames() as f64 / blipforge::SAMPLE_RATE as f64;

    let mut mixer = CpalMixer::new()?;
    println!("Looping an eight-slot melody twice ({seconds:.2}s per pass)...");
    mixer.play(asset, LoopCount::Times(2));
    thread::sleep(Duration::from_secs_f64(seconds * 2.0 + 0.3));

    Ok(())
}
