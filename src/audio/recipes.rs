//! Sound cue recipes
//!
//! One fixed recipe per destruction kind, plus the victory fanfare. Each is
//! a literal oscillator/filter/gain-ramp sequence with a hard stop time.
//! Rendering is pure, so recipes can be auditioned and tested without an
//! output device.

use crate::effects::DestructionKind;

use super::filters::{DEFAULT_Q, band_pass_swept, low_pass_swept};
use super::oscillators::{Waveform, oscillator, sweep, windowed_noise};
use super::ramp::Ramp;

/// Render the cue for `kind` at `sample_rate`
///
/// Disintegration and blackhole share one recipe.
pub fn render(kind: DestructionKind, sample_rate: u32) -> Vec<f32> {
    match kind {
        DestructionKind::Explosion => explosion(sample_rate),
        DestructionKind::Incineration => incineration(sample_rate),
        DestructionKind::Disintegration | DestructionKind::Blackhole => {
            disintegration(sample_rate)
        }
        DestructionKind::Lightning => lightning(sample_rate),
        DestructionKind::Crushing => crushing(sample_rate),
    }
}

/// Deep sine drop, 80 to 20 Hz over half a second
pub fn explosion(sample_rate: u32) -> Vec<f32> {
    let mut samples = sweep(
        Waveform::Sine,
        &Ramp::at(80.0).exp_to(20.0, 0.5),
        0.5,
        sample_rate,
    );
    Ramp::at(0.8).exp_to(0.01, 0.5).apply(&mut samples, sample_rate);
    samples
}

/// Saw flare-up through an opening low-pass, dying out over a second
pub fn incineration(sample_rate: u32) -> Vec<f32> {
    let mut samples = sweep(
        Waveform::Saw,
        &Ramp::at(100.0).exp_to(2000.0, 0.2).exp_to(200.0, 0.8),
        1.0,
        sample_rate,
    );
    low_pass_swept(
        &mut samples,
        &Ramp::at(1000.0).exp_to(3000.0, 0.2),
        DEFAULT_Q,
        sample_rate,
    );
    Ramp::at(0.3).exp_to(0.01, 1.0).apply(&mut samples, sample_rate);
    samples
}

/// Band-swept noise swell, shared by disintegration and blackhole
pub fn disintegration(sample_rate: u32) -> Vec<f32> {
    let mut samples = windowed_noise(1.5, sample_rate, 1417);
    band_pass_swept(
        &mut samples,
        &Ramp::at(500.0).exp_to(2000.0, 1.5),
        DEFAULT_Q,
        sample_rate,
    );
    Ramp::at(0.01)
        .linear_to(0.4, 0.3)
        .linear_to(0.01, 1.5)
        .apply(&mut samples, sample_rate);
    samples
}

/// Square-wave crack, 2 kHz collapsing to 100 Hz in 150 ms
pub fn lightning(sample_rate: u32) -> Vec<f32> {
    let mut samples = sweep(
        Waveform::Square,
        &Ramp::at(2000.0).exp_to(100.0, 0.15),
        0.15,
        sample_rate,
    );
    Ramp::at(0.4).exp_to(0.01, 0.15).apply(&mut samples, sample_rate);
    samples
}

/// Triangle grind from 150 down to 30 Hz
pub fn crushing(sample_rate: u32) -> Vec<f32> {
    // Pitch bottoms out at 0.3 s; the tail rings at 30 Hz until the stop
    let mut samples = sweep(
        Waveform::Triangle,
        &Ramp::at(150.0).exp_to(30.0, 0.3),
        0.4,
        sample_rate,
    );
    Ramp::at(0.7).exp_to(0.01, 0.4).apply(&mut samples, sample_rate);
    samples
}

/// Rising three-note fanfare (C5 E5 G5), notes staggered 100 ms apart
pub fn victory(sample_rate: u32) -> Vec<f32> {
    const NOTES: [f32; 3] = [523.25, 659.25, 783.99];

    // Last note starts at 0.2 s and rings for 0.8 s
    let total = sample_rate as usize;
    let mut out = vec![0.0; total];

    for (i, &freq) in NOTES.iter().enumerate() {
        let mut note = oscillator(Waveform::Sine, freq, 0.8, sample_rate);
        Ramp::at(0.0)
            .linear_to(0.3, 0.05)
            .exp_to(0.01, 0.8)
            .apply(&mut note, sample_rate);

        let start = i * sample_rate as usize / 10;
        for (j, &sample) in note.iter().enumerate() {
            if let Some(slot) = out.get_mut(start + j) {
                *slot += sample;
            }
        }
    }

    out
}
