//! Rhythm layer: kick, snare and hi-hats.
//!
//! # How It Works
//!
//! 1. Kick every two beats: a sine whose pitch glides from ~150 Hz down to
//!    50 Hz in a few tens of milliseconds, with an exponential decay
//! 2. Snare on the off beat (one beat after each kick): a short 180 Hz body
//!    plus white noise for the wires
//! 3. Hats at the mood's subdivision: very short noise bursts
//!
//! The whole layer scales with the style intensity, so low-energy moods
//! barely tick while combat pounds.

use std::f32::consts::TAU;

use crate::dsp::envelope::exp_decay;

use super::Clock;

const KICK_LEVEL: f32 = 0.8;
const SNARE_LEVEL: f32 = 0.35;
const HAT_LEVEL: f32 = 0.12;

pub(crate) struct Rhythm {
    intensity: f32,
    /// Seconds between hats, if the mood has them.
    hat_period: Option<f32>,
}

impl Rhythm {
    pub(crate) fn new(intensity: f32, beat_seconds: f32, hat_division: u32) -> Self {
        let hat_period = (hat_division > 0).then(|| beat_seconds / hat_division as f32);
        Self {
            intensity,
            hat_period,
        }
    }

    /// One sample of the rhythm layer. `noise` is a fresh white-noise draw.
    pub(crate) fn sample(&self, clock: &Clock, noise: f32) -> f32 {
        let bar_half = 2.0 * clock.beat;

        let kt = clock.t % bar_half;
        let kick = kick(kt) * KICK_LEVEL;

        let st = (clock.t - clock.beat).rem_euclid(bar_half);
        let snare = ((TAU * 180.0 * st).sin() * 0.5 + noise * 0.5)
            * exp_decay(st, 18.0)
            * SNARE_LEVEL;

        let hat = match self.hat_period {
            Some(period) => noise * exp_decay(clock.t % period, 90.0) * HAT_LEVEL,
            None => 0.0,
        };

        (kick + snare + hat) * self.intensity
    }
}

/// Pitch-dropping kick, `kt` seconds after the hit.
fn kick(kt: f32) -> f32 {
    // f(t) = 50 + 100·e^(-30t), integrated
    let phase = 50.0 * kt + 100.0 * (1.0 - (-30.0 * kt).exp()) / 30.0;
    (TAU * phase).sin() * exp_decay(kt, 8.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_at_zero_intensity() {
        let rhythm = Rhythm::new(0.0, 0.5, 4);
        for i in 0..1000 {
            let clock = Clock::at(i as f32 * 0.001, 0.5, 16.0);
            assert_eq!(rhythm.sample(&clock, 0.9), 0.0);
        }
    }

    #[test]
    fn kick_decays_between_hits() {
        let early = (0..40).map(|i| kick(i as f32 / 8_000.0).abs()).fold(0.0, f32::max);
        let late = (0..40)
            .map(|i| kick(0.8 + i as f32 / 8_000.0).abs())
            .fold(0.0, f32::max);
        assert!(early > 0.5);
        assert!(late < 0.01);
    }

    #[test]
    fn moods_without_hats_have_no_hat_period() {
        assert!(Rhythm::new(1.0, 0.5, 0).hat_period.is_none());
        assert_eq!(Rhythm::new(1.0, 0.5, 4).hat_period, Some(0.125));
    }
}
