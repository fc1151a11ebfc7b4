//! Plays every catalog asset in sequence: all five effects, then a few bars
//! of each scene track.
//!
//! Run with: cargo run --example jukebox

mod common;

use anyhow::Result;
use blipforge::{AudioRegistry, LoopCount, Mixer, SAMPLE_RATE};
use common::CpalMixer;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    let mut registry = AudioRegistry::new();
    registry.initialize()?;

    let mut mixer = CpalMixer::new()?;

    println!("Effects:");
    for name in ["menu_move", "menu_select", "glitch", "shot", "impact"] {
        let handle = registry.effect(name)?;
        let length = asset_duration(&handle);
        println!("  {name}");
        mixer.play(handle, LoopCount::from(0));
        thread::sleep(length + Duration::from_millis(200));
    }

    println!("Tracks (one loop each):");
    for name in [
        "menu", "field", "throne", "carnival", "city", "palace", "bazaar",
    ] {
        let handle = registry.track(name)?;
        let length = asset_duration(&handle);
        println!("  {name}");
        mixer.play(handle, LoopCount::Forever);
        thread::sleep(length);
        mixer.stop_all();
        thread::sleep(Duration::from_millis(300));
    }

    Ok(())
}

fn asset_duration(handle: &blipforge::AssetHandle) -> Duration {
    Duration::from_secs_f64(handle.buffer().frames() as f64 / SAMPLE_RATE as f64)
}
