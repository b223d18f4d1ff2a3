/*
One-Shot Envelopes
==================

The ADSR envelope of a keyboard synth waits for a gate to close. Nothing in
this crate has a gate: every sound is rendered start to finish into a buffer,
so an envelope is simply a function from time to level.

Vocabulary
----------

  level       Output value in [0, 1], multiplied into the signal.

  attack      Seconds spent ramping linearly from 0 to 1. A few milliseconds
              is enough to avoid a click without softening the transient.

  decay rate  Exponential rate (1/seconds). level = e^(-rate·t). A rate of 10
              loses ~63% of its level every 100 ms; percussion uses 20-80,
              pads 1-3.

  tail        The last stretch before `length` where the level is forced
              linearly to exactly 0.0. Exponentials never reach zero, and a
              buffer that ends at a non-zero level clicks.


The Shape
---------

  Level
    1.0 ┐ ╱╲
        │╱  ╲
        │    ╲_
        │      ╲__
        │         ╲____
    0.0 └──────────────╲──→ Time
        A   exponential  tail
                decay

Rhythmic helpers
----------------

`linear_decay(phase)` returns `1 - phase` for a phase in [0, 1). The ambient
bass uses it with the beat phase, which gives each beat a punchy ramp that
restarts on the next downbeat.
*/

/// Length of the fade-to-zero tail at the end of a one-shot.
const TAIL_SECONDS: f32 = 0.005;

/// Exponential decay `e^(-rate·t)`; zero for negative `t`.
#[inline]
pub fn exp_decay(t: f32, rate: f32) -> f32 {
    if t < 0.0 {
        0.0
    } else {
        (-rate * t).exp()
    }
}

/// Linear ramp from 1 down to 0 across a unit phase.
#[inline]
pub fn linear_decay(phase: f32) -> f32 {
    (1.0 - phase).clamp(0.0, 1.0)
}

/// Attack / exponential decay / tail envelope for non-looping sounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneShotEnvelope {
    attack: f32,
    decay_rate: f32,
    length: f32,
}

impl OneShotEnvelope {
    pub fn new(attack: f32, decay_rate: f32, length: f32) -> Self {
        Self {
            attack: attack.max(0.0),
            decay_rate: decay_rate.max(0.0),
            length: length.max(0.0),
        }
    }

    /// Percussive preset: 2 ms attack.
    pub fn percussive(decay_rate: f32, length: f32) -> Self {
        Self::new(0.002, decay_rate, length)
    }

    /// Envelope level `t` seconds after the sound starts.
    pub fn level(&self, t: f32) -> f32 {
        if t < 0.0 || t >= self.length {
            return 0.0;
        }

        let attack = if self.attack > 0.0 && t < self.attack {
            t / self.attack
        } else {
            1.0
        };

        let decay = exp_decay((t - self.attack).max(0.0), self.decay_rate);

        let remaining = self.length - t;
        let tail = if remaining < TAIL_SECONDS {
            remaining / TAIL_SECONDS
        } else {
            1.0
        };

        let level = attack * decay * tail;
        debug_assert!((0.0..=1.0).contains(&level));
        level
    }

    pub fn length(&self) -> f32 {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_reaches_full_level() {
        let env = OneShotEnvelope::new(0.01, 0.0, 1.0);
        assert!(env.level(0.005) > 0.45 && env.level(0.005) < 0.55);
        assert!(env.level(0.011) > 0.99, "expected attack to reach full level");
    }

    #[test]
    fn decay_falls_exponentially() {
        let env = OneShotEnvelope::new(0.0, 10.0, 2.0);
        let expected = (-1.0f32).exp();
        assert!((env.level(0.1) - expected).abs() < 1e-3);
    }

    #[test]
    fn tail_lands_on_zero() {
        let env = OneShotEnvelope::percussive(1.0, 0.5);
        assert!(env.level(0.4999) < 0.05);
        assert_eq!(env.level(0.5), 0.0);
        assert_eq!(env.level(3.0), 0.0);
        assert_eq!(env.level(-0.1), 0.0);
    }

    #[test]
    fn linear_decay_spans_the_phase() {
        assert_eq!(linear_decay(0.0), 1.0);
        assert!((linear_decay(0.75) - 0.25).abs() < 1e-6);
        assert_eq!(linear_decay(1.5), 0.0);
    }
}
