//! Procedural sound cues
//!
//! Each destruction kind maps to a fixed oscillator/filter/gain-ramp recipe,
//! rendered to PCM and queued on a lazily created output sink. Rendering is
//! synchronous and cheap; playback drains on the host audio thread.
//!
//! # Example
//! ```no_run
//! use wreck_fx::{DestructionKind, SoundPlayer};
//!
//! let mut player = SoundPlayer::new();
//! player.play(DestructionKind::Lightning, false);
//!
//! // Muted calls are no-ops and never create the output device
//! player.play(DestructionKind::Explosion, true);
//! ```

mod export;
mod filters;
mod oscillators;
mod output;
mod player;
mod ramp;
pub mod recipes;

pub use export::to_pcm_i16;
#[cfg(feature = "wav-export")]
pub use export::write_wav;
pub use filters::{DEFAULT_Q, band_pass, band_pass_swept, low_pass, low_pass_swept};
pub use oscillators::{Waveform, noise, oscillator, sweep, windowed_noise};
pub use output::{AudioSink, CpalSink, OutputError};
pub use player::{SinkFactory, SoundPlayer};
pub use ramp::{Curve, Ramp};
