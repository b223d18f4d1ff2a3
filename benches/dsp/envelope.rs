//! Benchmarks for the one-shot envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use moodsynth::dsp::OneShotEnvelope;

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let dt = 1.0 / 48_000.0;
    let env = OneShotEnvelope::percussive(20.0, 0.5);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("percussive", size), &size, |b, _| {
            b.iter(|| {
                for (i, out) in buffer.iter_mut().enumerate() {
                    *out = env.level(black_box(i as f32 * dt));
                }
            })
        });
    }

    group.finish();
}
