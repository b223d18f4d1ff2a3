pub mod ambient; // Mood-adaptive background loop synthesis
pub mod buffer;
pub mod config;
pub mod dsp;
pub mod effects; // One-shot UI and game stingers
pub mod error;
pub mod mood; // Time-of-day style selection
pub mod playback; // Output device, realtime mixer and controller

pub use ambient::{synthesize_ambient_loop, synthesize_with, LoopParams};
pub use buffer::SoundBuffer;
pub use config::EngineConfig;
pub use effects::{build_effect_catalog, EffectCatalog};
pub use error::{OutputError, SynthError, SynthResult};
pub use mood::{style_for_hour, Mood, MusicStyle, SpecialDate};
pub use playback::{ControllerState, PlaybackController, PlaybackState, VoiceHandle};

pub const MAX_BLOCK_SIZE: usize = 2048;

/// Lowest sample rate the generators accept.
pub const MIN_SAMPLE_RATE: u32 = 8_000;
/// Highest sample rate the generators accept.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

pub(crate) fn check_sample_rate(sample_rate: u32) -> SynthResult<()> {
    if (MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        Ok(())
    } else {
        Err(SynthError::InvalidSampleRate { rate: sample_rate })
    }
}
