//! Pad layer - slow, breathing atmosphere.
//!
//! # How It Works
//!
//! 1. Two sine partials at the mood's pad frequencies
//! 2. Each partial drifts by a fraction of a percent over the loop
//!    (integrated, so the drift never turns into vibrato)
//! 3. A slow sine "breathes" the amplitude between 40% and 100%
//!
//! Drift and breathing both complete whole cycles per loop, so the pad
//! lines up with itself at the loop seam.

use std::f32::consts::TAU;

use super::Clock;

const DRIFT_DEPTH: f32 = 0.003;
const BREATH_SECONDS: f32 = 4.0;

pub(crate) struct Pad {
    partials: [f32; 2],
    level: f32,
    breath_rate: f32,
    /// Per-channel phase offset of the upper partial, in cycles.
    phase_offset: f32,
}

impl Pad {
    pub(crate) fn new(partials: [f32; 2], level: f32, loop_seconds: f32, phase_offset: f32) -> Self {
        let breaths = (loop_seconds / BREATH_SECONDS).round().max(1.0);
        Self {
            partials,
            level,
            breath_rate: breaths / loop_seconds,
            phase_offset,
        }
    }

    pub(crate) fn sample(&self, clock: &Clock) -> f32 {
        let drift = |freq: f32| {
            // ∫ f·(1 + d·sin(2πt/L)) dt
            let span = clock.loop_seconds / TAU;
            freq * clock.t
                + freq * DRIFT_DEPTH * span * (1.0 - (TAU * clock.t / clock.loop_seconds).cos())
        };

        let low = (TAU * drift(self.partials[0])).sin();
        let high = (TAU * (drift(self.partials[1]) + self.phase_offset)).sin() * 0.6;
        let breathing = 0.7 + 0.3 * (TAU * self.breath_rate * clock.t).sin();

        (low + high) * breathing * self.level
    }
}
