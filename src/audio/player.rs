//! Playback front door
//!
//! [`SoundPlayer`] renders a cue and queues it on a lazily created sink. The
//! sink backend is injected at construction so hosts and tests can
//! substitute their own output; the default is the cpal device sink.

use tracing::{debug, warn};

use crate::effects::DestructionKind;

use super::output::{AudioSink, CpalSink, OutputError};
use super::recipes;

/// Creates the output sink on first use
pub type SinkFactory = Box<dyn FnMut() -> Result<Box<dyn AudioSink>, OutputError>>;

enum SinkSlot {
    /// No unmuted play yet; the factory has not run
    Idle,
    Ready(Box<dyn AudioSink>),
    /// Factory failed once; audio stays off, callers are unaffected
    Disabled,
}

/// Plays destruction cues through a lazily created output sink
///
/// The sink is created on the first unmuted play and reused for the process
/// lifetime; there is no teardown. Muted calls are no-ops and never touch
/// the backend. Playback itself proceeds on the host audio thread, so every
/// call returns immediately.
pub struct SoundPlayer {
    factory: SinkFactory,
    slot: SinkSlot,
}

impl SoundPlayer {
    /// Player backed by the default cpal output device
    pub fn new() -> SoundPlayer {
        SoundPlayer::with_backend(Box::new(|| {
            CpalSink::new().map(|sink| Box::new(sink) as Box<dyn AudioSink>)
        }))
    }

    /// Player with an injected sink factory
    ///
    /// The factory runs once, on the first unmuted play. If it fails, the
    /// failure is logged and the player silently stays muted thereafter.
    pub fn with_backend(factory: SinkFactory) -> SoundPlayer {
        SoundPlayer {
            factory,
            slot: SinkSlot::Idle,
        }
    }

    /// Play the cue for `kind`; no-op when `muted`
    pub fn play(&mut self, kind: DestructionKind, muted: bool) {
        if muted {
            return;
        }
        if let Some(sink) = self.sink() {
            let samples = recipes::render(kind, sink.sample_rate());
            sink.push(&samples);
        }
    }

    /// Play a cue by its lowercase name; unknown names are ignored
    ///
    /// An unknown name produces no sound and does not create the sink.
    pub fn play_named(&mut self, name: &str, muted: bool) {
        match DestructionKind::from_name(name) {
            Some(kind) => self.play(kind, muted),
            None => debug!(name, "ignoring unknown sound cue"),
        }
    }

    /// Play the victory fanfare; no-op when `muted`
    pub fn play_victory(&mut self, muted: bool) {
        if muted {
            return;
        }
        if let Some(sink) = self.sink() {
            let samples = recipes::victory(sink.sample_rate());
            sink.push(&samples);
        }
    }

    /// Create-if-absent access to the sink
    fn sink(&mut self) -> Option<&mut Box<dyn AudioSink>> {
        if matches!(self.slot, SinkSlot::Idle) {
            self.slot = match (self.factory)() {
                Ok(sink) => SinkSlot::Ready(sink),
                Err(err) => {
                    warn!("failed to create audio output: {err}. Audio disabled.");
                    SinkSlot::Disabled
                }
            };
        }
        match &mut self.slot {
            SinkSlot::Ready(sink) => Some(sink),
            _ => None,
        }
    }
}

impl Default for SoundPlayer {
    fn default() -> SoundPlayer {
        SoundPlayer::new()
    }
}
