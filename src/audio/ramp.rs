//! Time/value automation ramps
//!
//! A [`Ramp`] is an explicit list of `(time, value)` points a parameter moves
//! through, with a linear or exponential glide into each point. Gain
//! envelopes and frequency sweeps are both expressed this way, so every cue
//! recipe reads as the sequence of ramp points that defines it.

/// How a ramp approaches a point from the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// Hold the previous value until the point's time, then jump
    Step,
    /// Straight-line glide
    Linear,
    /// Multiplicative glide; both endpoint values must be positive
    Exponential,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RampPoint {
    time: f32,
    value: f32,
    curve: Curve,
}

/// Piecewise automation curve over explicit time/value points
///
/// Built with [`Ramp::at`] followed by [`Ramp::linear_to`] /
/// [`Ramp::exp_to`]. Before the first point the first value holds; after the
/// last point the last value holds.
///
/// # Example
/// ```
/// use wreck_fx::audio::Ramp;
///
/// // 0.8 at t=0, decaying exponentially to 0.01 by t=0.5
/// let gain = Ramp::at(0.8).exp_to(0.01, 0.5);
/// assert!((gain.value_at(0.0) - 0.8).abs() < 1e-6);
/// assert!(gain.value_at(0.25) < 0.8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    /// Non-empty, times non-decreasing
    points: Vec<RampPoint>,
}

impl Ramp {
    /// Start the curve at `value` from time zero
    pub fn at(value: f32) -> Ramp {
        Ramp {
            points: vec![RampPoint {
                time: 0.0,
                value,
                curve: Curve::Step,
            }],
        }
    }

    /// Glide linearly to `value`, arriving at `time` seconds
    pub fn linear_to(mut self, value: f32, time: f32) -> Ramp {
        debug_assert!(time >= self.end_time());
        self.points.push(RampPoint {
            time,
            value,
            curve: Curve::Linear,
        });
        self
    }

    /// Glide exponentially to `value`, arriving at `time` seconds
    ///
    /// The previous point's value and `value` must both be positive.
    pub fn exp_to(mut self, value: f32, time: f32) -> Ramp {
        debug_assert!(value > 0.0);
        debug_assert!(self.points.last().is_some_and(|p| p.value > 0.0));
        debug_assert!(time >= self.end_time());
        self.points.push(RampPoint {
            time,
            value,
            curve: Curve::Exponential,
        });
        self
    }

    /// Time of the last point, in seconds
    pub fn end_time(&self) -> f32 {
        self.points.last().map_or(0.0, |p| p.time)
    }

    /// Sample the curve at `t` seconds
    pub fn value_at(&self, t: f32) -> f32 {
        let first = self.points[0];
        if t <= first.time {
            return first.value;
        }

        for pair in self.points.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if t < to.time {
                let span = to.time - from.time;
                if span <= f32::EPSILON {
                    return to.value;
                }
                let u = (t - from.time) / span;
                return match to.curve {
                    Curve::Step => from.value,
                    Curve::Linear => from.value + (to.value - from.value) * u,
                    Curve::Exponential => from.value * (to.value / from.value).powf(u),
                };
            }
        }

        self.points[self.points.len() - 1].value
    }

    /// Scale `samples` in place by the curve (gain-envelope use)
    pub fn apply(&self, samples: &mut [f32], sample_rate: u32) {
        for (i, sample) in samples.iter_mut().enumerate() {
            let t = i as f32 / sample_rate as f32;
            *sample *= self.value_at(t);
        }
    }
}
