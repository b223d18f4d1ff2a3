//! Benchmarks for synthesis primitives and the realtime mixer.
//!
//! Run with: cargo bench
//!
//! Loop and catalog generation run once per style change, so they only need
//! to be fast enough not to stall the host. The mixer runs on the audio
//! thread and must finish well inside the block deadline.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Per-sample primitives (oscillator, filter, envelope, clip)
//!   - scenarios/*  Loop synthesis, catalog build, mixer blocks

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    dsp::bench_oscillator,
    dsp::bench_filter,
    dsp::bench_envelope,
    dsp::bench_distortion,
    scenarios::bench_synthesis,
    scenarios::bench_mixer,
);
criterion_main!(benches);
