//! Benchmarks for buffer generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use moodsynth::{build_effect_catalog, synthesize_with, LoopParams, Mood, MusicStyle};

pub fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/synthesis");
    group.sample_size(10);

    // One second of stereo loop per mood family
    for mood in [Mood::Ambient, Mood::Combat, Mood::Synthwave] {
        let style = MusicStyle::for_mood(mood);
        let params = LoopParams::new(1.0, 48_000);
        group.bench_with_input(BenchmarkId::new("loop_1s", mood.name()), &style, |b, style| {
            b.iter(|| synthesize_with(black_box(style), black_box(&params)))
        });
    }

    group.bench_function("effect_catalog", |b| {
        b.iter(|| build_effect_catalog(black_box(48_000)))
    });

    group.finish();
}
