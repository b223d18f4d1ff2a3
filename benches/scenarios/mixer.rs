//! Benchmarks for the audio-thread mixer.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion};
use moodsynth::playback::{Mixer, MixerMessage};
use moodsynth::{synthesize_ambient_loop, MusicStyle, SoundBuffer, VoiceHandle};
use rtrb::RingBuffer;

use crate::BLOCK_SIZES;

pub fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mixer");

    let Ok(ambient) = synthesize_ambient_loop(&MusicStyle::reference(), 2.0, 48_000) else {
        return;
    };
    let ambient = Arc::new(ambient);
    let shot = Arc::new(SoundBuffer::mono(48_000, vec![0.1; 48_000]));

    for &size in BLOCK_SIZES {
        // Loop only, then loop plus a burst of one-shots
        for one_shots in [0, 8, 32] {
            let (mut tx, rx) = RingBuffer::new(64);
            let mut mixer = Mixer::new(rx, 48_000, 32, 0.5);
            let _ = tx.push(MixerMessage::StartLoop {
                handle: VoiceHandle(1),
                buffer: Arc::clone(&ambient),
            });
            for _ in 0..one_shots {
                let _ = tx.push(MixerMessage::PlayOneShot {
                    buffer: Arc::clone(&shot),
                    gain: 0.3,
                });
            }
            mixer.process_messages();

            let mut out = vec![0.0f32; size * 2];
            let id = BenchmarkId::new(format!("stereo_{one_shots}_shots"), size);
            group.bench_with_input(id, &size, |b, _| {
                b.iter(|| mixer.render(black_box(&mut out), 2))
            });
        }
    }

    group.finish();
}
