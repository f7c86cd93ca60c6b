//! Cosmetic destruction effects for a game front-end
//!
//! Two leaf utilities sharing one enumeration of effect kinds:
//!
//! - [`effects`]: a static catalog mapping each destruction kind to its
//!   particle parameters, plus a uniform random picker over the kind set.
//! - [`audio`]: a short procedural sound cue per kind, rendered to PCM and
//!   played through a lazily created output sink.
//!
//! # Example
//! ```no_run
//! use wreck_fx::{SoundPlayer, pick_random};
//!
//! let kind = pick_random();
//! let config = kind.config();
//! println!("{} particles over {} ms", config.count, config.duration_ms);
//!
//! let mut player = SoundPlayer::new();
//! player.play(kind, false);
//! ```

pub mod audio;
pub mod effects;

pub use audio::SoundPlayer;
pub use effects::{DestructionKind, ParticleConfig, pick_random};
