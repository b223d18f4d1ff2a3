use std::sync::Arc;

use rtrb::Consumer;

use crate::buffer::SoundBuffer;

use super::message::MixerMessage;
use super::VoiceHandle;

/// Time constant of the ambient volume glide.
const VOLUME_SMOOTHING_SECONDS: f32 = 0.02;

struct LoopVoice {
    handle: VoiceHandle,
    buffer: Arc<SoundBuffer>,
    position: usize,
}

struct OneShotVoice {
    buffer: Arc<SoundBuffer>,
    gain: f32,
    position: usize,
    /// Trigger order, for stealing the oldest voice.
    age: u64,
}

impl OneShotVoice {
    fn is_finished(&self) -> bool {
        self.position >= self.buffer.frames()
    }
}

/// Audio-thread side of playback.
///
/// Drains control messages at the top of every `render` call, then mixes
/// the ambient loop and all live one-shots into an interleaved block.
/// Nothing in `render` allocates: the one-shot list is sized for the voice
/// cap up front, and a trigger at the cap replaces the oldest voice. Loops it
/// lets go of are still referenced by the controller or the effect catalog,
/// so dropping them here only decrements a count.
pub struct Mixer {
    rx: Consumer<MixerMessage>,
    ambient: Option<LoopVoice>,
    one_shots: Vec<OneShotVoice>,
    max_one_shots: usize,
    volume: f32,
    target_volume: f32,
    smoothing: f32,
    next_age: u64,
}

impl Mixer {
    pub fn new(
        rx: Consumer<MixerMessage>,
        sample_rate: u32,
        max_one_shots: usize,
        initial_volume: f32,
    ) -> Self {
        let max_one_shots = max_one_shots.max(1);
        let volume = initial_volume.clamp(0.0, 1.0);
        let smoothing = 1.0 - (-1.0 / (VOLUME_SMOOTHING_SECONDS * sample_rate as f32)).exp();

        Self {
            rx,
            ambient: None,
            one_shots: Vec::with_capacity(max_one_shots),
            max_one_shots,
            volume,
            target_volume: volume,
            smoothing,
            next_age: 0,
        }
    }

    pub fn process_messages(&mut self) {
        while let Ok(msg) = self.rx.pop() {
            match msg {
                MixerMessage::StartLoop { handle, buffer } => {
                    self.ambient = Some(LoopVoice {
                        handle,
                        buffer,
                        position: 0,
                    });
                }
                MixerMessage::StopLoop => self.ambient = None,
                MixerMessage::SetVolume(volume) => self.target_volume = volume.clamp(0.0, 1.0),
                MixerMessage::PlayOneShot { buffer, gain } => self.trigger(buffer, gain),
                MixerMessage::Silence => {
                    self.ambient = None;
                    self.one_shots.clear();
                }
            }
        }
    }

    fn trigger(&mut self, buffer: Arc<SoundBuffer>, gain: f32) {
        let voice = OneShotVoice {
            buffer,
            gain: gain.clamp(0.0, 1.0),
            position: 0,
            age: self.next_age,
        };
        self.next_age += 1;

        if self.one_shots.len() < self.max_one_shots {
            self.one_shots.push(voice);
            return;
        }

        // Steal the oldest voice
        if let Some(oldest) = self.one_shots.iter_mut().min_by_key(|v| v.age) {
            *oldest = voice;
        }
    }

    /// Mix into `out`, interleaved with `channels` samples per frame.
    /// Mono buffers play on every channel; output is limited to [-1, 1].
    pub fn render(&mut self, out: &mut [f32], channels: usize) {
        self.process_messages();

        let channels = channels.max(1);
        for frame in out.chunks_mut(channels) {
            self.volume += (self.target_volume - self.volume) * self.smoothing;

            for (ch, sample) in frame.iter_mut().enumerate() {
                let mut mix = 0.0;
                if let Some(voice) = &self.ambient {
                    mix += voice.buffer.frame(voice.position, ch) * self.volume;
                }
                for voice in &self.one_shots {
                    mix += voice.buffer.frame(voice.position, ch) * voice.gain;
                }
                *sample = mix.clamp(-1.0, 1.0);
            }

            if let Some(voice) = &mut self.ambient {
                let frames = voice.buffer.frames();
                if frames > 0 {
                    voice.position = (voice.position + 1) % frames;
                }
            }
            for voice in &mut self.one_shots {
                voice.position += 1;
            }
        }

        self.one_shots.retain(|v| !v.is_finished());
    }

    /// 1 while a loop is playing, else 0.
    pub fn ambient_voice_count(&self) -> usize {
        usize::from(self.ambient.is_some())
    }

    pub fn ambient_handle(&self) -> Option<VoiceHandle> {
        self.ambient.as_ref().map(|voice| voice.handle)
    }

    pub fn one_shot_count(&self) -> usize {
        self.one_shots.len()
    }

    /// Current (smoothed) ambient volume.
    pub fn volume(&self) -> f32 {
        self.volume
    }
}
