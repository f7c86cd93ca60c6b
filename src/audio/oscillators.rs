//! Waveform and noise generators

use std::f32::consts::PI;

use super::ramp::Ramp;

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure fundamental tone
    Sine,
    /// Hollow, retro sound (odd harmonics)
    Square,
    /// Bright, buzzy sound (all harmonics)
    Saw,
    /// Softer than square
    Triangle,
}

impl Waveform {
    /// Evaluate the waveform at a phase in radians
    fn eval(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => phase.sin(),
            Waveform::Square => {
                if phase.sin() >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Saw => 2.0 * (phase / (2.0 * PI)).fract() - 1.0,
            Waveform::Triangle => 4.0 * ((phase / (2.0 * PI)).fract() - 0.5).abs() - 1.0,
        }
    }
}

/// Generate a tone whose frequency follows a ramp
///
/// Phase is accumulated per sample so frequency changes stay click-free.
/// After the ramp's last point the final frequency holds for the remaining
/// duration.
///
/// # Returns
/// `duration * sample_rate` samples in the -1.0 to 1.0 range.
pub fn sweep(waveform: Waveform, frequency: &Ramp, duration: f32, sample_rate: u32) -> Vec<f32> {
    let num_samples = (duration * sample_rate as f32) as usize;
    let mut samples = Vec::with_capacity(num_samples);

    let mut phase = 0.0f32;
    for i in 0..num_samples {
        let t = i as f32 / sample_rate as f32;
        let freq = frequency.value_at(t);
        phase += 2.0 * PI * freq / sample_rate as f32;
        if phase > 2.0 * PI {
            phase -= 2.0 * PI;
        }
        samples.push(waveform.eval(phase));
    }

    samples
}

/// Generate a constant-frequency tone
pub fn oscillator(waveform: Waveform, frequency: f32, duration: f32, sample_rate: u32) -> Vec<f32> {
    sweep(waveform, &Ramp::at(frequency), duration, sample_rate)
}

/// Generate white noise from a seeded LCG
///
/// Seeded so renders are reproducible across runs.
pub fn noise(duration: f32, sample_rate: u32, seed: u64) -> Vec<f32> {
    let num_samples = (duration * sample_rate as f32) as usize;
    let mut samples = Vec::with_capacity(num_samples);

    // LCG parameters from Numerical Recipes
    let mut state = seed;
    for _ in 0..num_samples {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        samples.push((state as f32 / u64::MAX as f32) * 2.0 - 1.0);
    }

    samples
}

/// White noise shaped by a half-sine window at half amplitude
///
/// Swells in and back out over the buffer; the raw material for the
/// disintegration cue.
pub fn windowed_noise(duration: f32, sample_rate: u32, seed: u64) -> Vec<f32> {
    let mut samples = noise(duration, sample_rate, seed);
    let len = samples.len();
    for (i, sample) in samples.iter_mut().enumerate() {
        let t = i as f32 / len as f32;
        *sample *= (t * PI).sin() * 0.5;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SAMPLE_RATE: u32 = 44_100;

    #[test]
    fn test_sample_count() {
        let samples = oscillator(Waveform::Sine, 440.0, 0.5, TEST_SAMPLE_RATE);
        assert_eq!(samples.len(), (0.5 * TEST_SAMPLE_RATE as f32) as usize);
    }

    #[test]
    fn test_waveforms_in_range() {
        for waveform in [
            Waveform::Sine,
            Waveform::Square,
            Waveform::Saw,
            Waveform::Triangle,
        ] {
            let samples = oscillator(waveform, 440.0, 0.01, TEST_SAMPLE_RATE);
            assert!(!samples.is_empty());
            assert!(samples.iter().all(|&s| (-1.0..=1.0).contains(&s)));
        }
    }

    #[test]
    fn test_square_is_two_valued() {
        let samples = oscillator(Waveform::Square, 440.0, 0.01, TEST_SAMPLE_RATE);
        assert!(samples.iter().all(|&s| s == -1.0 || s == 1.0));
    }

    #[test]
    fn test_sweep_holds_final_frequency() {
        // Ramp ends at 0.1s; the remaining 0.1s keeps oscillating at 30 Hz
        let ramp = Ramp::at(150.0).exp_to(30.0, 0.1);
        let samples = sweep(Waveform::Triangle, &ramp, 0.2, TEST_SAMPLE_RATE);
        assert_eq!(samples.len(), (0.2 * TEST_SAMPLE_RATE as f32) as usize);
        assert!(samples.iter().all(|&s| (-1.0..=1.0).contains(&s)));
    }

    #[test]
    fn test_noise_is_reproducible() {
        let a = noise(0.01, TEST_SAMPLE_RATE, 42);
        let b = noise(0.01, TEST_SAMPLE_RATE, 42);
        assert_eq!(a, b);

        let c = noise(0.01, TEST_SAMPLE_RATE, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_windowed_noise_swells() {
        let samples = windowed_noise(0.5, TEST_SAMPLE_RATE, 42);
        let len = samples.len();

        // Half-sine window: silent edges, loudest middle, never above 0.5
        assert!(samples[0].abs() < 0.001);
        assert!(samples[len - 1].abs() < 0.001);
        assert!(samples.iter().all(|&s| s.abs() <= 0.5));

        let mid_peak = samples[len / 4..3 * len / 4]
            .iter()
            .map(|s| s.abs())
            .fold(0.0f32, f32::max);
        assert!(mid_peak > 0.25);
    }
}
