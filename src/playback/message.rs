use std::sync::Arc;

use crate::buffer::SoundBuffer;

use super::VoiceHandle;

/// Control messages from the controller to the audio thread.
///
/// Buffers travel as `Arc`s, so the audio thread never copies sample data
/// and the controller keeps ownership of the allocation.
#[derive(Debug, Clone)]
pub enum MixerMessage {
    /// Replace the ambient loop (if any) with `buffer`, from its first frame.
    StartLoop {
        handle: VoiceHandle,
        buffer: Arc<SoundBuffer>,
    },
    StopLoop,
    /// Target volume for the ambient loop, in [0, 1].
    SetVolume(f32),
    /// Fire-and-forget voice at a fixed gain.
    PlayOneShot { buffer: Arc<SoundBuffer>, gain: f32 },
    /// Stop the loop and every one-shot immediately.
    Silence,
}

impl MixerMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            MixerMessage::StartLoop { .. } => "start-loop",
            MixerMessage::StopLoop => "stop-loop",
            MixerMessage::SetVolume(_) => "set-volume",
            MixerMessage::PlayOneShot { .. } => "play-one-shot",
            MixerMessage::Silence => "silence",
        }
    }
}
