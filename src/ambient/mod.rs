//! Ambient loop synthesis.
//!
//! One generic synthesizer, parameterized by a [`MusicStyle`]. Each output
//! channel is rendered independently by summing five layers:
//!
//! ```text
//!   rhythm ─┐
//!   bass   ─┤
//!   lead   ─┼─► Σ ─► one-pole LP (swept) ─► tanh soft clip ─► gain ─► [-1, 1]
//!   pad    ─┤
//!   motifs ─┘
//! ```
//!
//! All time-dependent modulation (bass steps, pad drift and breathing, filter
//! sweep) completes whole cycles per loop, so the buffer can be looped without
//! a seam. The filter state is a local of one channel pass and is dropped with
//! it.

mod bass;
mod lead;
mod motifs;
mod pad;
mod rhythm;

use std::f32::consts::TAU;
use std::time::Instant;

use tracing::debug;

use crate::buffer::SoundBuffer;
use crate::dsp::distortion::{clamp_unit, soft_clip};
use crate::dsp::filter::OnePole;
use crate::dsp::noise::NoiseSource;
use crate::error::{SynthError, SynthResult};
use crate::mood::MusicStyle;

use bass::Bass;
use lead::Lead;
use motifs::Motifs;
use pad::Pad;
use rhythm::Rhythm;

/// Longest loop the synthesizer will render, in seconds. Keeps the f32
/// timebase finer than one sample at the highest supported rate.
pub const MAX_LOOP_SECONDS: f32 = 60.0;

/// Pad phase offset per channel, in cycles. Small enough to stay mono-compatible.
const PAD_PHASE_OFFSETS: [f32; 2] = [0.0, 0.07];

/// Timing of one sample relative to the beat grid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Clock {
    /// Seconds since the start of the loop.
    pub(crate) t: f32,
    /// Seconds per beat.
    pub(crate) beat: f32,
    /// Position within the current beat, in [0, 1).
    pub(crate) beat_phase: f32,
    pub(crate) loop_seconds: f32,
}

/// Time of frame `index`, computed in f64 so long loops keep a monotonic
/// timebase.
pub(crate) fn sample_time(index: usize, sample_rate: u32) -> f32 {
    (index as f64 / sample_rate as f64) as f32
}

impl Clock {
    pub(crate) fn at(t: f32, beat: f32, loop_seconds: f32) -> Self {
        let beats = t / beat;
        Self {
            t,
            beat,
            beat_phase: beats - beats.floor(),
            loop_seconds,
        }
    }
}

/// Rendering parameters for one ambient loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopParams {
    pub duration_seconds: f32,
    pub sample_rate: u32,
    /// 1 (mono) or 2 (stereo).
    pub channels: usize,
    /// Base seed for the noise streams.
    pub seed: u64,
}

impl LoopParams {
    /// Stereo loop with seed 0.
    pub fn new(duration_seconds: f32, sample_rate: u32) -> Self {
        Self {
            duration_seconds,
            sample_rate,
            channels: 2,
            seed: 0,
        }
    }

    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Frames per channel: `round(duration · sample_rate)`.
    pub fn frames(&self) -> usize {
        (self.duration_seconds as f64 * self.sample_rate as f64).round() as usize
    }

    pub fn validate(&self) -> SynthResult<()> {
        crate::check_sample_rate(self.sample_rate)?;

        let duration = self.duration_seconds;
        if !duration.is_finite() || duration <= 0.0 || duration > MAX_LOOP_SECONDS {
            return Err(SynthError::InvalidDuration { duration });
        }
        if self.frames() == 0 {
            return Err(SynthError::InvalidDuration { duration });
        }

        if !(1..=2).contains(&self.channels) {
            return Err(SynthError::InvalidChannels {
                channels: self.channels,
            });
        }

        Ok(())
    }
}

/// Render a stereo ambient loop for `style`.
///
/// Fails on an unsupported sample rate, a non-positive or oversized duration,
/// or an out-of-range style. Every sample of the result lies in [-1, 1].
pub fn synthesize_ambient_loop(
    style: &MusicStyle,
    duration_seconds: f32,
    sample_rate: u32,
) -> SynthResult<SoundBuffer> {
    synthesize_with(style, &LoopParams::new(duration_seconds, sample_rate))
}

/// Render an ambient loop with explicit channel count and seed.
pub fn synthesize_with(style: &MusicStyle, params: &LoopParams) -> SynthResult<SoundBuffer> {
    params.validate()?;
    style.validate()?;

    let started = Instant::now();
    let frames = params.frames();

    let channels = (0..params.channels)
        .map(|channel| render_channel(style, params, channel, frames))
        .collect();
    let buffer = SoundBuffer::new(params.sample_rate, channels)?;

    debug!(
        style = %style.name,
        mood = %style.mood,
        frames,
        channels = params.channels,
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "synthesized ambient loop"
    );

    Ok(buffer)
}

fn render_channel(style: &MusicStyle, params: &LoopParams, channel: usize, frames: usize) -> Vec<f32> {
    let profile = style.profile();
    let intensity = style.intensity;
    let beat = style.beat_seconds();
    let loop_seconds = params.duration_seconds;
    let sample_rate = params.sample_rate;
    let dt = 1.0 / sample_rate as f32;

    let rhythm = Rhythm::new(intensity, beat, profile.hat_division);
    let bass = Bass::new(profile.bass_notes, loop_seconds, intensity);
    let lead = Lead::new(profile.lead_scale, beat, intensity, profile.lead_voicing);
    let pad = Pad::new(
        profile.pad_partials,
        profile.pad_level,
        loop_seconds,
        PAD_PHASE_OFFSETS[channel.min(1)],
    );

    let mut rhythm_noise = NoiseSource::keyed(params.seed, &format!("ch{channel}/rhythm"));
    let glitch_noise = NoiseSource::keyed(params.seed, &format!("ch{channel}/glitch"));
    let mut motifs = Motifs::new(style, sample_rate, glitch_noise);

    let mut filter = OnePole::new();
    let cutoff_span = 1000.0 + intensity * 1500.0;
    let drive = 1.0 + intensity * 0.5;
    let gain = 0.4 + intensity * 0.3;

    let mut out = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = sample_time(i, sample_rate);
        let clock = Clock::at(t, beat, loop_seconds);

        let mix = rhythm.sample(&clock, rhythm_noise.next_sample())
            + bass.sample(&clock)
            + lead.sample(&clock)
            + pad.sample(&clock)
            + motifs.sample(&clock);

        let sweep = 0.5 + 0.5 * (TAU * t / loop_seconds).sin();
        let filtered = filter.process(mix, 300.0 + sweep * cutoff_span, dt);

        out.push(clamp_unit(soft_clip(filtered, drive) * gain));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;

    #[test]
    fn frame_count_is_rounded_duration() {
        let buffer = synthesize_ambient_loop(&MusicStyle::reference(), 0.5, 22_050).unwrap();
        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.frames(), 11_025);

        let odd = LoopParams::new(0.00005, 44_100);
        assert_eq!(odd.frames(), 2);
    }

    #[test]
    fn every_mood_stays_in_range() {
        for mood in Mood::ALL {
            let style = MusicStyle::for_mood(mood);
            let params = LoopParams::new(1.0, 8_000).with_channels(1).with_seed(3);
            let buffer = synthesize_with(&style, &params).unwrap();
            let samples = buffer.channel(0).unwrap();
            assert!(
                samples.iter().all(|s| (-1.0..=1.0).contains(s)),
                "{mood} left the unit range"
            );
            assert!(buffer.peak() > 0.0, "{mood} rendered silence");
        }
    }

    #[test]
    fn same_seed_same_loop() {
        let style = MusicStyle::for_mood(Mood::Combat);
        let params = LoopParams::new(0.25, 8_000).with_seed(9);
        let first = synthesize_with(&style, &params).unwrap();
        let second = synthesize_with(&style, &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn channels_differ_only_slightly() {
        let params = LoopParams::new(0.5, 8_000);
        let buffer = synthesize_with(&MusicStyle::for_mood(Mood::Ambient), &params).unwrap();
        let left = buffer.channel(0).unwrap();
        let right = buffer.channel(1).unwrap();
        assert_ne!(left, right);

        let diff: f32 = left.iter().zip(right).map(|(l, r)| (l - r).abs()).sum();
        let total: f32 = left.iter().map(|s| s.abs()).sum();
        assert!(diff < total, "channels should stay correlated");
    }

    #[test]
    fn rejects_bad_parameters() {
        let style = MusicStyle::reference();
        assert_eq!(
            synthesize_ambient_loop(&style, 1.0, 100),
            Err(SynthError::InvalidSampleRate { rate: 100 })
        );
        assert!(matches!(
            synthesize_ambient_loop(&style, 0.0, 44_100),
            Err(SynthError::InvalidDuration { .. })
        ));
        assert!(matches!(
            synthesize_ambient_loop(&style, f32::NAN, 44_100),
            Err(SynthError::InvalidDuration { .. })
        ));
        assert!(matches!(
            synthesize_ambient_loop(&style, 61.0, 44_100),
            Err(SynthError::InvalidDuration { .. })
        ));
        assert_eq!(
            synthesize_with(&style, &LoopParams::new(1.0, 8_000).with_channels(3)),
            Err(SynthError::InvalidChannels { channels: 3 })
        );

        let mut hot = style.clone();
        hot.intensity = 1.5;
        assert!(matches!(
            synthesize_ambient_loop(&hot, 1.0, 8_000),
            Err(SynthError::InvalidStyle { .. })
        ));
    }

    #[test]
    fn timebase_advances_every_frame_of_the_longest_loop() {
        let params = LoopParams::new(MAX_LOOP_SECONDS, crate::MAX_SAMPLE_RATE);
        assert!(params.validate().is_ok());

        let last = params.frames() - 1;
        let mut previous = sample_time(last - 64, params.sample_rate);
        for i in last - 63..=last {
            let t = sample_time(i, params.sample_rate);
            assert!(t > previous, "frame {i} did not advance the clock");
            previous = t;
        }
        assert!((previous - MAX_LOOP_SECONDS).abs() < 1e-3);
    }

    #[test]
    fn clock_tracks_beat_phase() {
        let clock = Clock::at(1.25, 0.5, 16.0);
        assert!((clock.beat_phase - 0.5).abs() < 1e-6);
    }
}
