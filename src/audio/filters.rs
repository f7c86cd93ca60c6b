//! Biquad filters with ramp-driven cutoff sweeps

use std::f32::consts::PI;

use super::ramp::Ramp;

/// Butterworth Q, no resonance peak
pub const DEFAULT_Q: f32 = 0.707;

/// Direct-form biquad with persistent delay-line state
///
/// Coefficients can be retuned mid-stream without resetting the delay line,
/// which keeps cutoff sweeps continuous.
#[derive(Debug, Default)]
struct Biquad {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl Biquad {
    fn set_low_pass(&mut self, cutoff: f32, q: f32, sample_rate: u32) {
        let cutoff = cutoff.clamp(20.0, sample_rate as f32 * 0.49);
        let omega = 2.0 * PI * cutoff / sample_rate as f32;
        let (sin_omega, cos_omega) = omega.sin_cos();
        let alpha = sin_omega / (2.0 * q);
        let a0 = 1.0 + alpha;

        self.b0 = ((1.0 - cos_omega) / 2.0) / a0;
        self.b1 = (1.0 - cos_omega) / a0;
        self.b2 = self.b0;
        self.a1 = (-2.0 * cos_omega) / a0;
        self.a2 = (1.0 - alpha) / a0;
    }

    fn set_band_pass(&mut self, center: f32, q: f32, sample_rate: u32) {
        // Constant 0 dB peak gain variant
        let center = center.clamp(20.0, sample_rate as f32 * 0.49);
        let omega = 2.0 * PI * center / sample_rate as f32;
        let (sin_omega, cos_omega) = omega.sin_cos();
        let alpha = sin_omega / (2.0 * q);
        let a0 = 1.0 + alpha;

        self.b0 = alpha / a0;
        self.b1 = 0.0;
        self.b2 = -alpha / a0;
        self.a1 = (-2.0 * cos_omega) / a0;
        self.a2 = (1.0 - alpha) / a0;
    }

    fn process(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            let x0 = *sample;
            let y0 = self.b0 * x0 + self.b1 * self.x1 + self.b2 * self.x2
                - self.a1 * self.y1
                - self.a2 * self.y2;

            self.x2 = self.x1;
            self.x1 = x0;
            self.y2 = self.y1;
            self.y1 = y0;

            *sample = y0;
        }
    }
}

/// Coefficient-update interval for swept filters (10 ms)
fn chunk_len(sample_rate: u32) -> usize {
    (sample_rate as usize / 100).max(1)
}

/// Low-pass `samples` in place with the cutoff following a ramp
pub fn low_pass_swept(samples: &mut [f32], cutoff: &Ramp, q: f32, sample_rate: u32) {
    let chunk = chunk_len(sample_rate);
    let mut filter = Biquad::default();
    for (idx, block) in samples.chunks_mut(chunk).enumerate() {
        let t = (idx * chunk) as f32 / sample_rate as f32;
        filter.set_low_pass(cutoff.value_at(t), q, sample_rate);
        filter.process(block);
    }
}

/// Band-pass `samples` in place with the center following a ramp
pub fn band_pass_swept(samples: &mut [f32], center: &Ramp, q: f32, sample_rate: u32) {
    let chunk = chunk_len(sample_rate);
    let mut filter = Biquad::default();
    for (idx, block) in samples.chunks_mut(chunk).enumerate() {
        let t = (idx * chunk) as f32 / sample_rate as f32;
        filter.set_band_pass(center.value_at(t), q, sample_rate);
        filter.process(block);
    }
}

/// Low-pass `samples` in place at a fixed cutoff
pub fn low_pass(samples: &mut [f32], cutoff: f32, sample_rate: u32) {
    let mut filter = Biquad::default();
    filter.set_low_pass(cutoff, DEFAULT_Q, sample_rate);
    filter.process(samples);
}

/// Band-pass `samples` in place at a fixed center frequency
pub fn band_pass(samples: &mut [f32], center: f32, sample_rate: u32) {
    let mut filter = Biquad::default();
    filter.set_band_pass(center, DEFAULT_Q, sample_rate);
    filter.process(samples);
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SAMPLE_RATE: u32 = 44_100;

    fn two_tone() -> Vec<f32> {
        // 100 Hz + 5000 Hz
        (0..2000)
            .map(|i| {
                let t = i as f32 / TEST_SAMPLE_RATE as f32;
                (2.0 * PI * 100.0 * t).sin() + (2.0 * PI * 5000.0 * t).sin()
            })
            .collect()
    }

    fn energy(samples: &[f32]) -> f32 {
        samples.iter().map(|s| s * s).sum()
    }

    #[test]
    fn test_low_pass_removes_highs() {
        let mut samples = two_tone();
        let original = energy(&samples);

        low_pass(&mut samples, 500.0, TEST_SAMPLE_RATE);

        assert!(energy(&samples) < original);
    }

    #[test]
    fn test_band_pass_keeps_band() {
        // Band centered on the low tone keeps more energy than one
        // centered far from both tones
        let mut in_band = two_tone();
        band_pass(&mut in_band, 100.0, TEST_SAMPLE_RATE);

        let mut out_of_band = two_tone();
        band_pass(&mut out_of_band, 15_000.0, TEST_SAMPLE_RATE);

        assert!(energy(&in_band) > energy(&out_of_band));
    }

    #[test]
    fn test_swept_low_pass_opens_up() {
        // A cutoff opening from 200 Hz to 8 kHz passes more of a 5 kHz
        // tone at the end of the buffer than at the start
        let tone: Vec<f32> = (0..TEST_SAMPLE_RATE as usize)
            .map(|i| {
                let t = i as f32 / TEST_SAMPLE_RATE as f32;
                (2.0 * PI * 5000.0 * t).sin()
            })
            .collect();

        let mut samples = tone;
        low_pass_swept(
            &mut samples,
            &Ramp::at(200.0).exp_to(8000.0, 1.0),
            DEFAULT_Q,
            TEST_SAMPLE_RATE,
        );

        let quarter = samples.len() / 4;
        let head = energy(&samples[..quarter]);
        let tail = energy(&samples[samples.len() - quarter..]);
        assert!(tail > head * 2.0);
    }

    #[test]
    fn test_filters_handle_empty() {
        let mut samples: Vec<f32> = vec![];
        low_pass(&mut samples, 1000.0, TEST_SAMPLE_RATE);
        band_pass(&mut samples, 1000.0, TEST_SAMPLE_RATE);
        low_pass_swept(
            &mut samples,
            &Ramp::at(1000.0),
            DEFAULT_Q,
            TEST_SAMPLE_RATE,
        );
        assert!(samples.is_empty());
    }
}
