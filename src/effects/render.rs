//! The generic one-shot builder.
//!
//! Every layer is rendered into one mono accumulator at its start offset,
//! shaped by a `OneShotEnvelope`, then the whole buffer goes through the
//! same tanh stage and gain as the ambient loop. Layers share nothing: noise
//! layers get their own seed derived from the effect name and layer index.

use std::f32::consts::TAU;

use crate::buffer::SoundBuffer;
use crate::dsp::distortion::soft_clip_buffer;
use crate::dsp::envelope::OneShotEnvelope;
use crate::dsp::filter::OnePole;
use crate::dsp::noise::{derive_seed, NoiseSource};
use crate::dsp::oscillator::sweep_phase;
use crate::error::SynthResult;

use super::spec::{EffectSpec, Layer, Shape};

/// Render `spec` at `sample_rate` into a mono buffer in [-1, 1].
pub fn render_effect(spec: &EffectSpec, sample_rate: u32) -> SynthResult<SoundBuffer> {
    crate::check_sample_rate(sample_rate)?;

    let frames = (spec.duration_ms as f64 * sample_rate as f64 / 1000.0).round() as usize;
    let mut samples = vec![0.0; frames];
    let sr = sample_rate as f32;

    for (index, layer) in spec.layers.iter().enumerate() {
        let seed = derive_seed(index as u64, spec.name);
        render_layer(layer, &mut samples, sr, seed);
    }

    soft_clip_buffer(&mut samples, 1.0, spec.gain);
    Ok(SoundBuffer::mono(sample_rate, samples))
}

fn render_layer(layer: &Layer, out: &mut [f32], sr: f32, seed: u64) {
    match *layer {
        Layer::Tone { wave, freq, shape } => {
            place(out, &shape, sr, |t| wave.sample(freq * t));
        }
        Layer::Sweep {
            wave,
            from,
            to,
            shape,
        } => {
            place(out, &shape, sr, |t| {
                wave.sample(sweep_phase(from, to, t, shape.length))
            });
        }
        Layer::Noise { lowpass, shape } => {
            let mut noise = NoiseSource::new(seed);
            let mut filter = OnePole::new();
            let dt = 1.0 / sr;
            place(out, &shape, sr, |t| {
                let white = noise.next_sample();
                match lowpass {
                    Some((from, to)) => {
                        let cutoff = from * (to / from).powf(t / shape.length);
                        filter.process(white, cutoff, dt)
                    }
                    None => white,
                }
            });
        }
        Layer::Harmonics {
            freq,
            partials,
            shape,
        } => {
            let norm: f32 = partials.iter().map(|p| p.abs()).sum();
            if norm <= 0.0 {
                return;
            }
            place(out, &shape, sr, |t| {
                partials
                    .iter()
                    .enumerate()
                    .map(|(k, amp)| amp * (TAU * freq * (k + 1) as f32 * t).sin())
                    .sum::<f32>()
                    / norm
            });
        }
        Layer::Arpeggio {
            wave,
            notes,
            step,
            shape,
        } => {
            for (i, &freq) in notes.iter().enumerate() {
                let note = Shape {
                    start: shape.start + step * i as f32,
                    ..shape
                };
                place(out, &note, sr, |t| wave.sample(freq * t));
            }
        }
    }
}

/// Add `voice(t)` under the shape's envelope into `out`, `t` being seconds
/// since the layer started. Samples past the end of `out` are dropped.
fn place(out: &mut [f32], shape: &Shape, sr: f32, mut voice: impl FnMut(f32) -> f32) {
    let envelope = OneShotEnvelope::new(shape.attack, shape.decay, shape.length);
    let start = ((shape.start * sr).round() as usize).min(out.len());
    let len = (shape.length * sr).round() as usize;
    let end = start.saturating_add(len).min(out.len());

    for (n, sample) in out[start..end].iter_mut().enumerate() {
        let t = n as f32 / sr;
        *sample += voice(t) * envelope.level(t) * shape.level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::Waveform;
    use crate::effects::spec::EffectCategory;
    use crate::error::SynthError;

    const BEEP: EffectSpec = EffectSpec {
        name: "test-beep",
        category: EffectCategory::Ui,
        duration_ms: 100,
        gain: 0.8,
        layers: &[Layer::Tone {
            wave: Waveform::Sine,
            freq: 1000.0,
            shape: Shape::hit(0.0, 0.1, 20.0, 0.6),
        }],
    };

    #[test]
    fn renders_the_requested_length() {
        let buffer = render_effect(&BEEP, 48_000).unwrap();
        assert_eq!(buffer.channel_count(), 1);
        assert_eq!(buffer.frames(), 4_800);
        assert!(buffer.peak() > 0.1);
        assert!(buffer.peak() <= 0.8);
    }

    #[test]
    fn late_layers_are_truncated_not_panicking() {
        const LATE: EffectSpec = EffectSpec {
            layers: &[Layer::Noise {
                lowpass: Some((4000.0, 200.0)),
                shape: Shape::hit(0.09, 0.5, 10.0, 1.0),
            }],
            ..BEEP
        };
        let buffer = render_effect(&LATE, 8_000).unwrap();
        let samples = buffer.channel(0).unwrap();
        assert!(samples[..700].iter().all(|&s| s == 0.0));
        assert!(samples[720..].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn arpeggio_notes_start_on_their_steps() {
        const ARP: EffectSpec = EffectSpec {
            duration_ms: 400,
            layers: &[Layer::Arpeggio {
                wave: Waveform::Square,
                notes: &[440.0, 550.0, 660.0],
                step: 0.1,
                shape: Shape::hit(0.0, 0.05, 10.0, 0.5),
            }],
            ..BEEP
        };
        let buffer = render_effect(&ARP, 8_000).unwrap();
        let samples = buffer.channel(0).unwrap();
        // Silence between the first note's end and the second note's start.
        assert!(samples[420..780].iter().all(|&s| s == 0.0));
        assert!(samples[800..1200].iter().any(|&s| s != 0.0));
        assert!(samples[2400..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn rejects_unsupported_rates() {
        assert_eq!(
            render_effect(&BEEP, 0),
            Err(SynthError::InvalidSampleRate { rate: 0 })
        );
    }
}
