//! Bass layer.
//!
//! # How It Works
//!
//! 1. The mood's bass line advances one note every sixteenth of the loop
//! 2. Each beat restarts a linear decay, so notes are punchy rather than held
//! 3. A sub-octave copy at half amplitude adds weight

use std::f32::consts::TAU;

use crate::dsp::envelope::linear_decay;

use super::Clock;

pub(crate) const STEPS_PER_LOOP: f32 = 16.0;

pub(crate) struct Bass {
    notes: &'static [f32],
    step_seconds: f32,
    level: f32,
}

impl Bass {
    pub(crate) fn new(notes: &'static [f32], loop_seconds: f32, intensity: f32) -> Self {
        Self {
            notes,
            step_seconds: loop_seconds / STEPS_PER_LOOP,
            level: 0.35 * (0.6 + 0.4 * intensity),
        }
    }

    pub(crate) fn note_at(&self, t: f32) -> f32 {
        let step = (t / self.step_seconds) as usize;
        self.notes[step % self.notes.len()]
    }

    pub(crate) fn sample(&self, clock: &Clock) -> f32 {
        let freq = self.note_at(clock.t);
        let body = (TAU * freq * clock.t).sin();
        let sub = (TAU * freq * 0.5 * clock.t).sin() * 0.5;
        (body + sub) * linear_decay(clock.beat_phase) * self.level
    }
}
