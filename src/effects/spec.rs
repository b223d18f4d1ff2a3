//! Declarative description of a one-shot effect.
//!
//! An effect is a duration, an output gain and a short list of layers. Each
//! layer is one primitive from the dsp toolkit placed on the effect's
//! timeline by its [`Shape`]: start offset, length, attack, decay rate and
//! level. `render_effect` is the only code that turns these into samples.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::dsp::oscillator::Waveform;

/// Where a layer sits on the effect timeline and how it fades.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Seconds from the start of the effect.
    pub start: f32,
    /// Seconds the layer sounds for, tail included.
    pub length: f32,
    pub attack: f32,
    /// Exponential decay rate (1/seconds).
    pub decay: f32,
    pub level: f32,
}

impl Shape {
    /// A percussive hit with a 2 ms attack.
    pub const fn hit(start: f32, length: f32, decay: f32, level: f32) -> Self {
        Self {
            start,
            length,
            attack: 0.002,
            decay,
            level,
        }
    }

    /// Replace the attack time, for layers that should fade in.
    pub const fn swell(self, attack: f32) -> Self {
        Self { attack, ..self }
    }

    pub fn end(&self) -> f32 {
        self.start + self.length
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layer {
    /// Fixed-pitch oscillator.
    Tone {
        wave: Waveform,
        freq: f32,
        shape: Shape,
    },
    /// Exponential pitch glide across the layer's length.
    Sweep {
        wave: Waveform,
        from: f32,
        to: f32,
        shape: Shape,
    },
    /// White noise, optionally through a low-pass whose cutoff glides
    /// from the first to the second frequency.
    Noise {
        lowpass: Option<(f32, f32)>,
        shape: Shape,
    },
    /// Sine partials at integer multiples of `freq`, weighted by `partials`.
    Harmonics {
        freq: f32,
        partials: &'static [f32],
        shape: Shape,
    },
    /// One note per `step` seconds. `shape` applies to each note, offset by
    /// the note's position in the run.
    Arpeggio {
        wave: Waveform,
        notes: &'static [f32],
        step: f32,
        shape: Shape,
    },
}

impl Layer {
    pub fn shape(&self) -> &Shape {
        match self {
            Layer::Tone { shape, .. }
            | Layer::Sweep { shape, .. }
            | Layer::Noise { shape, .. }
            | Layer::Harmonics { shape, .. }
            | Layer::Arpeggio { shape, .. } => shape,
        }
    }

    /// Seconds until the layer's last sample.
    pub fn end(&self) -> f32 {
        match self {
            Layer::Arpeggio {
                notes, step, shape, ..
            } => shape.end() + step * notes.len().saturating_sub(1) as f32,
            other => other.shape().end(),
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EffectCategory {
    Ui,
    Touch,
    Neural,
    Defense,
    Art,
    Rhythm,
    Card,
    Outcome,
}

impl EffectCategory {
    pub fn name(self) -> &'static str {
        match self {
            EffectCategory::Ui => "ui",
            EffectCategory::Touch => "touch",
            EffectCategory::Neural => "neural",
            EffectCategory::Defense => "defense",
            EffectCategory::Art => "art",
            EffectCategory::Rhythm => "rhythm",
            EffectCategory::Card => "card",
            EffectCategory::Outcome => "outcome",
        }
    }
}

impl fmt::Display for EffectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSpec {
    pub name: &'static str,
    pub category: EffectCategory,
    pub duration_ms: u32,
    /// Output gain after the soft clip.
    pub gain: f32,
    pub layers: &'static [Layer],
}

impl EffectSpec {
    pub fn duration_seconds(&self) -> f32 {
        self.duration_ms as f32 / 1000.0
    }
}
