//! Benchmarks for phase-based waveforms and noise.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use moodsynth::dsp::oscillator::sweep_phase;
use moodsynth::dsp::{NoiseSource, Waveform};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let dt = 1.0 / 48_000.0;

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (name, wave) in [
            ("sine", Waveform::Sine),
            ("saw", Waveform::Saw),
            ("square", Waveform::Square),
            ("triangle", Waveform::Triangle),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for (i, out) in buffer.iter_mut().enumerate() {
                        *out = wave.sample(black_box(440.0 * i as f32 * dt));
                    }
                })
            });
        }

        // Exponential glide - powf per sample
        group.bench_with_input(BenchmarkId::new("sweep", size), &size, |b, _| {
            b.iter(|| {
                for (i, out) in buffer.iter_mut().enumerate() {
                    let phase = sweep_phase(1200.0, 200.0, black_box(i as f32 * dt), 0.2);
                    *out = Waveform::Sine.sample(phase);
                }
            })
        });

        // Noise - PCG32
        let mut noise = NoiseSource::new(7);
        group.bench_with_input(BenchmarkId::new("noise", size), &size, |b, _| {
            b.iter(|| {
                for out in buffer.iter_mut() {
                    *out = noise.next_sample();
                }
            })
        });
    }

    group.finish();
}
