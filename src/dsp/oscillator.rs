use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Phase-Based Oscillators
=======================

Every generator in this crate renders a whole buffer up front, so there is no
running oscillator object. Instead each waveform is a pure function of
*phase*, measured in cycles:

    phase = frequency * t          (cycles elapsed after t seconds)

Only the fractional part of the phase matters for the wave shape, which keeps
long buffers free of accumulated float drift in the oscillator itself.

  Sine      sin(2π·phase)                 pure tone, no harmonics
  Square    sign of the sine              odd harmonics, hollow
  Saw       2·frac(phase) - 1             all harmonics, buzzy
  Triangle  4·|frac(phase) - 0.5| - 1     weak odd harmonics, soft

Frequency sweeps
----------------
A tone that glides from f0 to f1 cannot use `f(t) * t` as its phase; that
produces a chirp running at twice the intended rate. Phase is the integral of
frequency. For an exponential glide over `length` seconds:

    f(t)     = f0 · (f1/f0)^(t/length)
    phase(t) = f0 · length · ((f1/f0)^(t/length) - 1) / ln(f1/f0)

`sweep_phase` implements exactly that, falling back to `f0·t` when the two
frequencies are equal.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

impl Waveform {
    /// Sample the waveform at `phase` (in cycles). Output is in [-1, 1].
    #[inline]
    pub fn sample(self, phase: f32) -> f32 {
        let frac = phase - phase.floor();
        match self {
            Waveform::Sine => (TAU * frac).sin(),
            Waveform::Square => {
                if frac < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Saw => 2.0 * frac - 1.0,
            Waveform::Triangle => 4.0 * (frac - 0.5).abs() - 1.0,
        }
    }
}

/// Sine at `frequency` Hz, `t` seconds in.
#[inline]
pub fn sine(frequency: f32, t: f32) -> f32 {
    (TAU * frequency * t).sin()
}

/// Integrated phase (cycles) of an exponential glide from `from` to `to` Hz
/// lasting `length` seconds. Past `length` the glide holds at `to`.
pub fn sweep_phase(from: f32, to: f32, t: f32, length: f32) -> f32 {
    let from = from.max(1.0);
    let to = to.max(1.0);
    if length <= 0.0 || (from - to).abs() < f32::EPSILON {
        return from * t;
    }

    let ratio = to / from;
    let ln_ratio = ratio.ln();
    let clamped = t.min(length);
    let glide = from * length * (ratio.powf(clamped / length) - 1.0) / ln_ratio;

    if t > length {
        glide + to * (t - length)
    } else {
        glide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waveforms_stay_in_unit_range() {
        for wave in [
            Waveform::Sine,
            Waveform::Square,
            Waveform::Saw,
            Waveform::Triangle,
        ] {
            for i in 0..1000 {
                let phase = i as f32 * 0.0137;
                let s = wave.sample(phase);
                assert!((-1.0..=1.0).contains(&s), "{wave:?} produced {s}");
            }
        }
    }

    #[test]
    fn valid_sine() {
        let sample_rate = 48_000.0;
        let n = 12.0;
        let expected = (TAU * 440.0 * n / sample_rate).sin();
        let actual = Waveform::Sine.sample(440.0 * n / sample_rate);
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn flat_sweep_matches_plain_phase() {
        let phase = sweep_phase(300.0, 300.0, 0.25, 1.0);
        assert!((phase - 75.0).abs() < 1e-3);
    }

    #[test]
    fn sweep_phase_is_continuous_at_the_end_of_the_glide() {
        let length = 0.2;
        let before = sweep_phase(800.0, 200.0, length - 1e-5, length);
        let after = sweep_phase(800.0, 200.0, length + 1e-5, length);
        assert!((after - before).abs() < 0.01);
    }
}
