//! Benchmarks for the one-pole low-pass.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use moodsynth::dsp::OnePole;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");
    let dt = 1.0 / 48_000.0;

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();
        let mut buffer = input.clone();

        // Fixed cutoff, coefficient computed once
        let mut filter = OnePole::new();
        let alpha = OnePole::coefficient(1000.0, dt);
        group.bench_with_input(BenchmarkId::new("fixed", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = filter.next_sample(black_box(x), alpha);
                }
            })
        });

        // Swept cutoff, coefficient per sample (the ambient loop's case)
        let mut filter = OnePole::new();
        group.bench_with_input(BenchmarkId::new("swept", size), &size, |b, _| {
            b.iter(|| {
                for (i, (out, &x)) in buffer.iter_mut().zip(&input).enumerate() {
                    let cutoff = 300.0 + i as f32 * 4.0;
                    *out = filter.process(black_box(x), cutoff, dt);
                }
            })
        });
    }

    group.finish();
}
