//! Mood effects: glitches and signature motifs.
//!
//! # How It Works
//!
//! - Glitches: every sample has a small chance (the mood's glitch rate
//!   divided by the sample rate) of opening a 20 ms noise burst
//! - Combat: low sawtooth stabs on the downbeat and the "and" of three
//! - Mysterious: a sparse high ping every three beats with a quieter echo
//! - Ambient: a soft fixed harmonic wash on A3 that swells once per loop
//! - Festive: a bell on every beat, on top of whatever the mood plays
//!
//! The glitch state lives on this value, which exists for one channel of one
//! synthesis pass.

use std::f32::consts::TAU;

use crate::dsp::envelope::exp_decay;
use crate::dsp::noise::NoiseSource;
use crate::dsp::oscillator::{sine, Waveform};
use crate::mood::{Mood, MusicStyle};

use super::Clock;

const GLITCH_SECONDS: f32 = 0.02;
const GLITCH_LEVEL: f32 = 0.12;

pub(crate) struct Motifs {
    mood: Mood,
    festive: bool,
    glitch_chance: f32,
    glitch_len: usize,
    glitch_remaining: usize,
    noise: NoiseSource,
}

impl Motifs {
    pub(crate) fn new(style: &MusicStyle, sample_rate: u32, noise: NoiseSource) -> Self {
        Self {
            mood: style.mood,
            festive: style.festive,
            glitch_chance: style.profile().glitch_rate / sample_rate as f32,
            glitch_len: (GLITCH_SECONDS * sample_rate as f32) as usize,
            glitch_remaining: 0,
            noise,
        }
    }

    pub(crate) fn sample(&mut self, clock: &Clock) -> f32 {
        let mut out = self.glitch();

        out += match self.mood {
            Mood::Combat => combat_stab(clock),
            Mood::Mysterious => mysterious_ping(clock),
            Mood::Ambient => ambient_wash(clock),
            _ => 0.0,
        };

        if self.festive {
            out += festive_bell(clock);
        }

        out
    }

    fn glitch(&mut self) -> f32 {
        if self.glitch_remaining == 0 && self.noise.chance() < self.glitch_chance {
            self.glitch_remaining = self.glitch_len;
        }

        if self.glitch_remaining > 0 {
            self.glitch_remaining -= 1;
            self.noise.next_sample() * GLITCH_LEVEL
        } else {
            0.0
        }
    }
}

fn combat_stab(clock: &Clock) -> f32 {
    let bar = clock.beat * 4.0;
    let bt = clock.t % bar;
    let stab_len = clock.beat * 0.5;

    [0.0, 2.5 * clock.beat]
        .into_iter()
        .map(|offset| bt - offset)
        .filter(|st| (0.0..stab_len).contains(st))
        .map(|st| Waveform::Saw.sample(55.0 * clock.t) * exp_decay(st, 10.0) * 0.15)
        .sum()
}

fn mysterious_ping(clock: &Clock) -> f32 {
    let pt = clock.t % (clock.beat * 3.0);
    let ping = (TAU * 1760.0 * pt).sin() * exp_decay(pt, 6.0) * 0.06;

    let et = pt - clock.beat * 0.375;
    let echo = if et >= 0.0 {
        (TAU * 1760.0 * et).sin() * exp_decay(et, 6.0) * 0.03
    } else {
        0.0
    };

    ping + echo
}

fn ambient_wash(clock: &Clock) -> f32 {
    let swell = 0.5 + 0.5 * (TAU * clock.t / clock.loop_seconds).sin();
    let wash = sine(220.0, clock.t) + 0.7 * sine(330.0, clock.t) + 0.5 * sine(440.0, clock.t);
    wash * 0.02 * swell
}

fn festive_bell(clock: &Clock) -> f32 {
    let pt = clock.t % clock.beat;
    (sine(2093.0, pt) + 0.5 * sine(3136.0, pt)) * exp_decay(pt, 25.0) * 0.04
}
