//! The effect table.
//!
//! Adding an effect means adding a row here; nothing else changes.

use crate::dsp::oscillator::Waveform::{self, Saw, Sine, Square, Triangle};

use super::spec::EffectCategory::{Art, Card, Defense, Neural, Outcome, Rhythm, Touch, Ui};
use super::spec::{EffectSpec, Layer, Shape};

const fn tone(wave: Waveform, freq: f32, shape: Shape) -> Layer {
    Layer::Tone { wave, freq, shape }
}

const fn sweep(wave: Waveform, from: f32, to: f32, shape: Shape) -> Layer {
    Layer::Sweep {
        wave,
        from,
        to,
        shape,
    }
}

const fn noise(shape: Shape) -> Layer {
    Layer::Noise {
        lowpass: None,
        shape,
    }
}

const fn filtered(from: f32, to: f32, shape: Shape) -> Layer {
    Layer::Noise {
        lowpass: Some((from, to)),
        shape,
    }
}

const fn harmonics(freq: f32, partials: &'static [f32], shape: Shape) -> Layer {
    Layer::Harmonics {
        freq,
        partials,
        shape,
    }
}

const fn arp(wave: Waveform, notes: &'static [f32], step: f32, shape: Shape) -> Layer {
    Layer::Arpeggio {
        wave,
        notes,
        step,
        shape,
    }
}

const fn hit(start: f32, length: f32, decay: f32, level: f32) -> Shape {
    Shape::hit(start, length, decay, level)
}

// Note frequencies (Hz)
const A2: f32 = 110.0;
const E3: f32 = 164.81;
const A3: f32 = 220.0;
const C4: f32 = 261.63;
const D4: f32 = 293.66;
const E4: f32 = 329.63;
const G4: f32 = 392.0;
const A4: f32 = 440.0;
const C5: f32 = 523.25;
const E5: f32 = 659.25;
const G5: f32 = 783.99;
const A5: f32 = 880.0;
const C6: f32 = 1046.5;
const E6: f32 = 1318.51;
const G6: f32 = 1567.98;

const BELL: &[f32] = &[1.0, 0.0, 0.4, 0.0, 0.2];
const ORGAN: &[f32] = &[1.0, 0.5, 0.3, 0.2];
const HOLLOW: &[f32] = &[1.0, 0.0, 0.33, 0.0, 0.2, 0.0, 0.14];

pub static EFFECTS: &[EffectSpec] = &[
    // ui
    EffectSpec {
        name: "hover",
        category: Ui,
        duration_ms: 80,
        gain: 0.5,
        layers: &[tone(Sine, 1200.0, hit(0.0, 0.08, 45.0, 0.5))],
    },
    EffectSpec {
        name: "click",
        category: Ui,
        duration_ms: 100,
        gain: 0.7,
        layers: &[
            tone(Sine, 1800.0, hit(0.0, 0.05, 80.0, 0.6)),
            noise(hit(0.0, 0.02, 150.0, 0.3)),
        ],
    },
    EffectSpec {
        name: "spin",
        category: Ui,
        duration_ms: 400,
        gain: 0.6,
        layers: &[
            sweep(Triangle, 300.0, 1200.0, hit(0.0, 0.4, 4.0, 0.5)),
            filtered(800.0, 4000.0, hit(0.0, 0.4, 6.0, 0.2).swell(0.1)),
        ],
    },
    EffectSpec {
        name: "card-expand",
        category: Ui,
        duration_ms: 250,
        gain: 0.6,
        layers: &[
            sweep(Sine, 400.0, 900.0, hit(0.0, 0.25, 10.0, 0.5)),
            filtered(600.0, 3000.0, hit(0.0, 0.2, 14.0, 0.15)),
        ],
    },
    EffectSpec {
        name: "card-collapse",
        category: Ui,
        duration_ms: 250,
        gain: 0.6,
        layers: &[
            sweep(Sine, 900.0, 400.0, hit(0.0, 0.25, 10.0, 0.5)),
            filtered(3000.0, 600.0, hit(0.0, 0.2, 14.0, 0.15)),
        ],
    },
    EffectSpec {
        name: "notification",
        category: Ui,
        duration_ms: 600,
        gain: 0.6,
        layers: &[
            harmonics(A5, BELL, hit(0.0, 0.3, 9.0, 0.5)),
            harmonics(E6, BELL, hit(0.15, 0.45, 7.0, 0.45)),
        ],
    },
    // touch
    EffectSpec {
        name: "touch-tap",
        category: Touch,
        duration_ms: 90,
        gain: 0.7,
        layers: &[
            tone(Sine, 900.0, hit(0.0, 0.09, 50.0, 0.6)),
            filtered(5000.0, 1500.0, hit(0.0, 0.03, 120.0, 0.25)),
        ],
    },
    EffectSpec {
        name: "touch-success",
        category: Touch,
        duration_ms: 300,
        gain: 0.6,
        layers: &[arp(Sine, &[C5, E5, G5], 0.07, hit(0.0, 0.15, 18.0, 0.5))],
    },
    EffectSpec {
        name: "touch-error",
        category: Touch,
        duration_ms: 300,
        gain: 0.5,
        layers: &[
            tone(Square, 180.0, hit(0.0, 0.12, 15.0, 0.35)),
            tone(Square, 150.0, hit(0.15, 0.15, 15.0, 0.35)),
        ],
    },
    EffectSpec {
        name: "swipe",
        category: Touch,
        duration_ms: 220,
        gain: 0.7,
        layers: &[filtered(600.0, 6000.0, hit(0.0, 0.22, 8.0, 0.7).swell(0.06))],
    },
    EffectSpec {
        name: "drag",
        category: Touch,
        duration_ms: 350,
        gain: 0.5,
        layers: &[
            filtered(400.0, 900.0, hit(0.0, 0.35, 3.0, 0.5).swell(0.05)),
            tone(Triangle, 120.0, hit(0.0, 0.35, 5.0, 0.15).swell(0.05)),
        ],
    },
    // neural
    EffectSpec {
        name: "neural-connect",
        category: Neural,
        duration_ms: 350,
        gain: 0.6,
        layers: &[
            sweep(Sine, 600.0, 1500.0, hit(0.0, 0.2, 10.0, 0.4)),
            tone(Sine, 1500.0, hit(0.15, 0.2, 14.0, 0.3)),
            tone(Sine, 1515.0, hit(0.15, 0.2, 14.0, 0.3)),
        ],
    },
    EffectSpec {
        name: "neural-pulse",
        category: Neural,
        duration_ms: 500,
        gain: 0.6,
        layers: &[
            tone(Sine, 60.0, hit(0.0, 0.5, 6.0, 0.7).swell(0.01)),
            harmonics(240.0, HOLLOW, hit(0.0, 0.3, 12.0, 0.3)),
        ],
    },
    EffectSpec {
        name: "circuit-complete",
        category: Neural,
        duration_ms: 700,
        gain: 0.6,
        layers: &[
            arp(Square, &[A4, C5, E5, A5], 0.06, hit(0.0, 0.08, 30.0, 0.25)),
            harmonics(A5, BELL, hit(0.25, 0.45, 6.0, 0.5)),
        ],
    },
    EffectSpec {
        name: "pattern-match",
        category: Neural,
        duration_ms: 400,
        gain: 0.6,
        layers: &[
            tone(Triangle, E5, hit(0.0, 0.15, 16.0, 0.45)),
            tone(Triangle, A5, hit(0.1, 0.3, 10.0, 0.45)),
        ],
    },
    // defense
    EffectSpec {
        name: "tower-place",
        category: Defense,
        duration_ms: 300,
        gain: 0.8,
        layers: &[
            sweep(Sine, 160.0, 60.0, hit(0.0, 0.2, 14.0, 0.8)),
            filtered(2000.0, 300.0, hit(0.0, 0.12, 30.0, 0.4)),
            tone(Square, 880.0, hit(0.15, 0.08, 40.0, 0.1)),
        ],
    },
    EffectSpec {
        name: "tower-shoot",
        category: Defense,
        duration_ms: 180,
        gain: 0.7,
        layers: &[
            sweep(Square, 1400.0, 300.0, hit(0.0, 0.15, 20.0, 0.35)),
            noise(hit(0.0, 0.05, 60.0, 0.3)),
        ],
    },
    EffectSpec {
        name: "enemy-hit",
        category: Defense,
        duration_ms: 150,
        gain: 0.7,
        layers: &[
            filtered(6000.0, 300.0, hit(0.0, 0.15, 25.0, 0.6)),
            tone(Square, 80.0, hit(0.05, 0.1, 30.0, 0.4)),
        ],
    },
    EffectSpec {
        name: "wave-start",
        category: Defense,
        duration_ms: 1200,
        gain: 0.6,
        layers: &[
            harmonics(A2, ORGAN, hit(0.0, 1.2, 2.0, 0.6).swell(0.15)),
            arp(Saw, &[A3, A3, E4], 0.3, hit(0.0, 0.2, 10.0, 0.2)),
        ],
    },
    EffectSpec {
        name: "base-damage",
        category: Defense,
        duration_ms: 500,
        gain: 0.8,
        layers: &[
            sweep(Saw, 200.0, 50.0, hit(0.0, 0.4, 6.0, 0.5)),
            filtered(1500.0, 150.0, hit(0.0, 0.5, 6.0, 0.6)),
            tone(Square, 110.0, hit(0.0, 0.3, 8.0, 0.2)),
        ],
    },
    // art
    EffectSpec {
        name: "brush-stroke",
        category: Art,
        duration_ms: 300,
        gain: 0.5,
        layers: &[filtered(1200.0, 2500.0, hit(0.0, 0.3, 5.0, 0.6).swell(0.08))],
    },
    EffectSpec {
        name: "color-pick",
        category: Art,
        duration_ms: 150,
        gain: 0.6,
        layers: &[
            tone(Sine, C6, hit(0.0, 0.15, 25.0, 0.4)),
            tone(Sine, G6, hit(0.0, 0.15, 35.0, 0.2)),
        ],
    },
    EffectSpec {
        name: "canvas-clear",
        category: Art,
        duration_ms: 600,
        gain: 0.6,
        layers: &[
            filtered(8000.0, 300.0, hit(0.0, 0.6, 4.0, 0.6)),
            sweep(Sine, 800.0, 200.0, hit(0.0, 0.5, 6.0, 0.25)),
        ],
    },
    EffectSpec {
        name: "undo",
        category: Art,
        duration_ms: 200,
        gain: 0.6,
        layers: &[sweep(Triangle, 700.0, 350.0, hit(0.0, 0.2, 12.0, 0.5))],
    },
    // rhythm
    EffectSpec {
        name: "rhythm-hit",
        category: Rhythm,
        duration_ms: 120,
        gain: 0.7,
        layers: &[
            tone(Sine, A5, hit(0.0, 0.12, 30.0, 0.5)),
            noise(hit(0.0, 0.03, 90.0, 0.25)),
        ],
    },
    EffectSpec {
        name: "rhythm-perfect",
        category: Rhythm,
        duration_ms: 350,
        gain: 0.6,
        layers: &[
            harmonics(C6, BELL, hit(0.0, 0.35, 9.0, 0.5)),
            tone(Sine, G6, hit(0.05, 0.3, 12.0, 0.2)),
        ],
    },
    EffectSpec {
        name: "rhythm-miss",
        category: Rhythm,
        duration_ms: 250,
        gain: 0.5,
        layers: &[
            sweep(Saw, 220.0, 110.0, hit(0.0, 0.25, 10.0, 0.35)),
            filtered(800.0, 200.0, hit(0.0, 0.1, 30.0, 0.3)),
        ],
    },
    EffectSpec {
        name: "combo",
        category: Rhythm,
        duration_ms: 450,
        gain: 0.6,
        layers: &[arp(Square, &[C5, E5, G5, C6], 0.08, hit(0.0, 0.12, 20.0, 0.3))],
    },
    // card
    EffectSpec {
        name: "card-draw",
        category: Card,
        duration_ms: 200,
        gain: 0.6,
        layers: &[filtered(2000.0, 7000.0, hit(0.0, 0.2, 12.0, 0.6).swell(0.03))],
    },
    EffectSpec {
        name: "card-play",
        category: Card,
        duration_ms: 300,
        gain: 0.7,
        layers: &[
            filtered(5000.0, 1000.0, hit(0.0, 0.1, 30.0, 0.5)),
            sweep(Sine, 140.0, 70.0, hit(0.03, 0.25, 14.0, 0.6)),
        ],
    },
    EffectSpec {
        name: "battle-hit",
        category: Card,
        duration_ms: 250,
        gain: 0.8,
        layers: &[
            sweep(Square, 600.0, 100.0, hit(0.0, 0.15, 18.0, 0.4)),
            noise(hit(0.0, 0.25, 20.0, 0.5)),
            tone(Sine, 70.0, hit(0.05, 0.2, 15.0, 0.6)),
        ],
    },
    EffectSpec {
        name: "battle-win",
        category: Card,
        duration_ms: 1500,
        gain: 0.6,
        layers: &[
            arp(Square, &[G4, C5, E5, G5], 0.12, hit(0.0, 0.2, 8.0, 0.25)),
            harmonics(C5, ORGAN, hit(0.5, 1.0, 2.5, 0.5).swell(0.05)),
        ],
    },
    EffectSpec {
        name: "battle-lose",
        category: Card,
        duration_ms: 1500,
        gain: 0.6,
        layers: &[
            arp(Triangle, &[G4, E4, C4], 0.25, hit(0.0, 0.3, 5.0, 0.45)),
            harmonics(A2, HOLLOW, hit(0.75, 0.75, 3.0, 0.45).swell(0.05)),
        ],
    },
    // outcome
    EffectSpec {
        name: "success",
        category: Outcome,
        duration_ms: 500,
        gain: 0.6,
        layers: &[
            arp(Sine, &[C5, E5, G5], 0.08, hit(0.0, 0.2, 10.0, 0.45)),
            harmonics(C6, BELL, hit(0.2, 0.3, 8.0, 0.3)),
        ],
    },
    EffectSpec {
        name: "error",
        category: Outcome,
        duration_ms: 400,
        gain: 0.5,
        layers: &[
            tone(Square, 220.0, hit(0.0, 0.4, 6.0, 0.3)),
            tone(Square, 233.08, hit(0.0, 0.4, 6.0, 0.3)),
        ],
    },
    EffectSpec {
        name: "victory",
        category: Outcome,
        duration_ms: 2500,
        gain: 0.6,
        layers: &[
            arp(Square, &[C5, C5, C5, G5], 0.15, hit(0.0, 0.14, 6.0, 0.25)),
            harmonics(C5, ORGAN, hit(0.6, 1.9, 1.5, 0.45).swell(0.05)),
            harmonics(E5, ORGAN, hit(0.6, 1.9, 1.5, 0.3).swell(0.05)),
            tone(Triangle, G5, hit(0.6, 1.9, 1.5, 0.2).swell(0.05)),
        ],
    },
    EffectSpec {
        name: "defeat",
        category: Outcome,
        duration_ms: 2000,
        gain: 0.6,
        layers: &[
            arp(Triangle, &[E4, D4, C4, A3], 0.35, hit(0.0, 0.4, 4.0, 0.45)),
            harmonics(E3, HOLLOW, hit(1.05, 0.95, 2.5, 0.35).swell(0.05)),
        ],
    },
    EffectSpec {
        name: "level-up",
        category: Outcome,
        duration_ms: 900,
        gain: 0.6,
        layers: &[
            sweep(Square, 200.0, 1600.0, hit(0.0, 0.35, 2.0, 0.2)),
            arp(Sine, &[C5, E5, G5, C6], 0.09, hit(0.3, 0.3, 8.0, 0.4)),
        ],
    },
    EffectSpec {
        name: "achievement",
        category: Outcome,
        duration_ms: 5000,
        gain: 0.6,
        layers: &[
            arp(Sine, &[G5, C6, E6], 0.1, hit(0.0, 0.6, 5.0, 0.35)),
            harmonics(C5, BELL, hit(0.3, 4.7, 1.2, 0.5).swell(0.2)),
            filtered(3000.0, 8000.0, hit(0.3, 2.0, 2.0, 0.05).swell(0.5)),
        ],
    },
];
