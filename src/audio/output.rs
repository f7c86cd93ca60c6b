//! Audio output sinks
//!
//! [`CpalSink`] owns the cpal stream and the ring buffer feeding it. Cues
//! are pushed as mono f32 samples, expanded to the device channel count, and
//! drained by the host audio thread; pushes never block.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::{
    HeapRb,
    traits::{Consumer, Producer, Split},
};
use thiserror::Error;
use tracing::{debug, error};

/// Destination for rendered cues
///
/// Implementations receive mono f32 samples in the -1.0 to 1.0 range and
/// must return without blocking.
pub trait AudioSink {
    /// Output sample rate cues should be rendered at
    fn sample_rate(&self) -> u32;

    /// Queue samples for playback
    fn push(&mut self, samples: &[f32]);
}

/// Longest cue the ring buffer must hold, in seconds
///
/// Cues are pushed whole in a single call, so the buffer is sized for the
/// longest recipe rather than for per-frame streaming.
const MAX_CUE_SECONDS: usize = 2;

/// Errors creating the output stream
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("no audio output device available")]
    NoDevice,
    #[error("failed to query output config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream: {0}")]
    StartStream(#[from] cpal::PlayStreamError),
    #[error("unsupported sample format {0:?}")]
    UnsupportedFormat(cpal::SampleFormat),
}

/// cpal-backed sink: default output device with a heap ring buffer in between
pub struct CpalSink {
    /// Producer side of the ring buffer (cue pushes land here)
    producer: ringbuf::HeapProd<f32>,
    /// Kept alive for the duration; dropping it stops playback
    _stream: cpal::Stream,
    sample_rate: u32,
    channels: usize,
    /// Scratch for mono-to-interleaved expansion, reused across pushes
    expand_buffer: Vec<f32>,
}

impl CpalSink {
    /// Open the default output device and start the stream
    pub fn new() -> Result<CpalSink, OutputError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(OutputError::NoDevice)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels() as usize;

        let capacity = sample_rate as usize * channels * MAX_CUE_SECONDS;
        let ring = HeapRb::<f32>::new(capacity);
        let (producer, consumer) = ring.split();

        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => {
                build_stream::<f32>(&device, &config.into(), consumer, |s| s, 0.0)?
            }
            cpal::SampleFormat::I16 => build_stream::<i16>(
                &device,
                &config.into(),
                consumer,
                |s| (s * 32767.0).clamp(-32768.0, 32767.0) as i16,
                0,
            )?,
            cpal::SampleFormat::U16 => build_stream::<u16>(
                &device,
                &config.into(),
                consumer,
                |s| ((s * 32767.0 + 32768.0).clamp(0.0, 65535.0)) as u16,
                32768,
            )?,
            format => return Err(OutputError::UnsupportedFormat(format)),
        };

        stream.play()?;
        debug!(sample_rate, channels, "audio stream started");

        Ok(CpalSink {
            producer,
            _stream: stream,
            sample_rate,
            channels,
            expand_buffer: Vec::new(),
        })
    }
}

/// Build an output stream that drains the ring buffer, converting f32
/// samples to the device format and padding shortfalls with silence
fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mut consumer: ringbuf::HeapCons<f32>,
    convert: impl Fn(f32) -> T + Send + 'static,
    silence: T,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: cpal::SizedSample + Send + 'static,
{
    // Per-callback scratch, grown on demand
    let mut scratch: Vec<f32> = Vec::new();
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            if scratch.len() < data.len() {
                scratch.resize(data.len(), 0.0);
            }
            let popped = consumer.pop_slice(&mut scratch[..data.len()]);
            for (out, &sample) in data.iter_mut().zip(&scratch[..popped]) {
                *out = convert(sample);
            }
            for out in &mut data[popped..] {
                *out = silence;
            }
        },
        |err| error!("audio stream error: {err}"),
        None,
    )
}

impl AudioSink for CpalSink {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn push(&mut self, samples: &[f32]) {
        let frames: &[f32] = if self.channels == 1 {
            samples
        } else {
            self.expand_buffer.clear();
            self.expand_buffer.reserve(samples.len() * self.channels);
            for &sample in samples {
                for _ in 0..self.channels {
                    self.expand_buffer.push(sample);
                }
            }
            &self.expand_buffer
        };

        let pushed = self.producer.push_slice(frames);
        if pushed < frames.len() {
            // Buffer still draining a previous cue; drop the tail
            debug!(
                "audio buffer full: dropped {} samples",
                frames.len() - pushed
            );
        }
    }
}
