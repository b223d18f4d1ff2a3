//! Immutable PCM buffers.
//!
//! A `SoundBuffer` is built once by a generator and then only read. The
//! playback side shares it through `Arc<SoundBuffer>`, so any number of voices
//! can play the same buffer at once.

use crate::error::{SynthError, SynthResult};

#[derive(Debug, Clone, PartialEq)]
pub struct SoundBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl SoundBuffer {
    /// Build from one or two equally long channels.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> SynthResult<Self> {
        if channels.is_empty() || channels.len() > 2 {
            return Err(SynthError::InvalidChannels {
                channels: channels.len(),
            });
        }
        let frames = channels[0].len();
        if channels.iter().any(|c| c.len() != frames) {
            return Err(SynthError::invalid_buffer("channel lengths differ"));
        }

        Ok(Self {
            sample_rate,
            channels,
        })
    }

    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            channels: vec![samples],
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn frames(&self) -> usize {
        self.channels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }

    pub fn duration_seconds(&self) -> f32 {
        self.frames() as f32 / self.sample_rate as f32
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Sample at `frame` for output channel `channel`.
    ///
    /// Output channels past the buffer's last channel reuse the last one, so
    /// a mono buffer plays on every speaker.
    #[inline]
    pub fn frame(&self, frame: usize, channel: usize) -> f32 {
        let ch = channel.min(self.channels.len() - 1);
        self.channels[ch].get(frame).copied().unwrap_or(0.0)
    }

    /// Largest absolute sample across all channels.
    pub fn peak(&self) -> f32 {
        self.channels
            .iter()
            .flat_map(|c| c.iter())
            .fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }
}
