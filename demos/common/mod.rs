//! Shared cpal-backed mixer for the demos.
//!
//! This is the "host" side of the engine's playback boundary: a small
//! software mixer that owns the output stream, layers any number of playing
//! assets, and implements `blipforge::Mixer` so the demos can drive it the
//! same way a game loop would.

use anyhow::Result;
use blipforge::{AssetHandle, LoopCount, Mixer};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use std::sync::{Arc, Mutex};

/// One currently playing asset.
struct Voice {
    asset: AssetHandle,
    /// Frame cursor into the asset's buffer
    position: usize,
    /// Plays left before the voice is dropped
    remaining: LoopCount,
}

/// A polyphonic mixer over the default cpal output device.
///
/// Voices are summed per frame and clamped; the stream keeps running even
/// when nothing is playing, so playback starts with no device latency.
pub struct CpalMixer {
    voices: Arc<Mutex<Vec<Voice>>>,
    _stream: cpal::Stream,
}

impl CpalMixer {
    /// Opens the default output device and starts the stream.
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| anyhow::anyhow!("No output device available"))?;

        let config = device.default_output_config()?;
        let voices: Arc<Mutex<Vec<Voice>>> = Arc::new(Mutex::new(Vec::new()));

        let stream = match config.sample_format() {
            SampleFormat::F32 => create_stream::<f32>(&device, &config.into(), voices.clone())?,
            SampleFormat::I16 => create_stream::<i16>(&device, &config.into(), voices.clone())?,
            SampleFormat::U16 => create_stream::<u16>(&device, &config.into(), voices.clone())?,
            sample_format => {
                return Err(anyhow::anyhow!(
                    "Unsupported sample format: {}",
                    sample_format
                ));
            }
        };

        Ok(Self {
            voices,
            _stream: stream,
        })
    }
}

impl Mixer for CpalMixer {
    fn play(&mut self, asset: AssetHandle, loops: LoopCount) {
        self.voices.lock().unwrap().push(Voice {
            asset,
            position: 0,
            remaining: loops,
        });
    }

    fn stop_all(&mut self) {
        self.voices.lock().unwrap().clear();
    }
}

/// Creates an output stream that mixes all active voices.
fn create_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    voices: Arc<Mutex<Vec<Voice>>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let mut voices = voices.lock().unwrap();
            for frame in data.chunks_mut(channels) {
                let value: T = T::from_sample(mix_frame(&mut voices));
                for sample in frame.iter_mut() {
                    *sample = value;
                }
            }
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

/// Sums one frame across every voice, advancing and retiring them.
///
/// Engine buffers carry identical channels, so mixing the left channel is
/// enough for any speaker layout.
fn mix_frame(voices: &mut Vec<Voice>) -> f64 {
    let mut sum = 0.0;
    voices.retain_mut(|voice| {
        let buffer = voice.asset.buffer();
        if buffer.is_empty() {
            return false;
        }

        let (left, _right) = buffer.frame(voice.position);
        sum += f64::from(left) / 32768.0;

        voice.position += 1;
        if voice.position < buffer.frames() {
            return true;
        }
        voice.position = 0;
        match voice.remaining {
            LoopCount::Forever => true,
            LoopCount::Times(n) if n > 1 => {
                voice.remaining = LoopCount::Times(n - 1);
                true
            }
            LoopCount::Times(_) => false,
        }
    });
    sum.clamp(-1.0, 1.0)
}
