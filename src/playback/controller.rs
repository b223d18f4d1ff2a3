//! The host-facing playback controller.
//!
//! # State machine
//!
//! ```text
//!                 init ok                start / unlock
//!  Uninitialized ────────► Ready ─────────────────────► AmbientPlaying
//!        │  ▲                 │                           │     ▲
//!        │  └── destroy ──────┴───── stop ──► AmbientStopped ───┘
//!        │                                          start
//!        └─ init fails ──► Disabled (permanent, every call a no-op)
//! ```
//!
//! Control calls never fail and never block on playback. Problems on the
//! control path are logged and swallowed; only style changes, which
//! re-synthesize the loop, return errors.

use std::sync::Arc;

use chrono::{Datelike, Timelike};
use rand_pcg::Pcg32;
use rtrb::{Producer, PushError, RingBuffer};
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ambient::{synthesize_with, LoopParams};
use crate::buffer::SoundBuffer;
use crate::config::EngineConfig;
use crate::dsp::noise::{create_rng, derive_seed};
use crate::effects::{build_effect_catalog, EffectCatalog};
use crate::error::SynthResult;
use crate::mood::{style_for_datetime, MusicStyle};

use super::message::MixerMessage;
use super::mixer::Mixer;
use super::output::{CpalBackend, OutputBackend, OutputFormat};

/// Ring slots one-shots may not use, so loop and volume control always
/// get through a burst of `play` calls.
const CONTROL_RESERVE: usize = 4;

/// Identifies one started ambient voice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceHandle(pub u64);

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    Ready,
    AmbientPlaying,
    AmbientStopped,
    /// No usable output. Permanent.
    Disabled,
}

/// Snapshot of the host-visible playback state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Whether ambient playback is wanted. Set by `start` even while the
    /// output is still waiting for `unlock`.
    pub is_playing: bool,
    pub volume: f32,
    pub ambient_voice: Option<VoiceHandle>,
}

pub struct PlaybackController {
    config: EngineConfig,
    state: ControllerState,
    style: MusicStyle,
    volume: f32,
    is_playing: bool,
    unlocked: bool,
    ambient_voice: Option<VoiceHandle>,
    next_handle: u64,
    ambient_buffer: Option<Arc<SoundBuffer>>,
    /// Loops replaced by `set_style`, held until the mixer lets go so the
    /// audio thread never frees one.
    retired: Vec<Arc<SoundBuffer>>,
    catalog: EffectCatalog,
    format: Option<OutputFormat>,
    backend: Option<Box<dyn OutputBackend>>,
    tx: Option<Producer<MixerMessage>>,
    rng: Pcg32,
}

impl PlaybackController {
    pub fn new(config: EngineConfig) -> Self {
        let rng = create_rng(derive_seed(config.seed, "weekend-jitter"));
        Self {
            volume: config.initial_volume.clamp(0.0, 1.0),
            state: ControllerState::Uninitialized,
            style: MusicStyle::reference(),
            is_playing: false,
            unlocked: false,
            ambient_voice: None,
            next_handle: 1,
            ambient_buffer: None,
            retired: Vec::new(),
            catalog: EffectCatalog::default(),
            format: None,
            backend: None,
            tx: None,
            rng,
            config,
        }
    }

    /// Style to synthesize at `init`. Invalid styles are rejected.
    pub fn with_style(mut self, style: MusicStyle) -> SynthResult<Self> {
        style.validate()?;
        self.style = style;
        Ok(self)
    }

    /// Open the default cpal output.
    pub fn init(&mut self) {
        self.init_with(CpalBackend::new());
    }

    /// Open `backend`, render the loop and effect catalog at its sample
    /// rate and start the mixer. Any failure disables the controller.
    pub fn init_with(&mut self, backend: impl OutputBackend + 'static) {
        match self.state {
            ControllerState::Uninitialized => {}
            ControllerState::Disabled => return,
            state => {
                debug!(?state, "init ignored, already initialized");
                return;
            }
        }

        let mut backend: Box<dyn OutputBackend> = Box::new(backend);
        let format = match backend.open() {
            Ok(format) => format,
            Err(err) => {
                warn!(%err, "failed to open audio output, audio disabled");
                self.disable();
                return;
            }
        };

        let (ambient, catalog) = match self.render_assets(format) {
            Ok(assets) => assets,
            Err(err) => {
                warn!(
                    %err,
                    sample_rate = format.sample_rate,
                    "cannot render for this output, audio disabled"
                );
                backend.close();
                self.disable();
                return;
            }
        };

        let (tx, rx) = RingBuffer::new(self.config.command_capacity);
        let mixer = Mixer::new(
            rx,
            format.sample_rate,
            self.config.max_one_shot_voices,
            self.volume,
        );
        if let Err(err) = backend.start(mixer) {
            warn!(%err, "failed to start audio output, audio disabled");
            backend.close();
            self.disable();
            return;
        }

        info!(
            style = %self.style.name,
            sample_rate = format.sample_rate,
            channels = format.channels,
            effects = catalog.len(),
            "audio ready"
        );

        self.ambient_buffer = Some(Arc::new(ambient));
        self.catalog = catalog;
        self.format = Some(format);
        self.backend = Some(backend);
        self.tx = Some(tx);
        self.state = ControllerState::Ready;
    }

    fn render_assets(&self, format: OutputFormat) -> SynthResult<(SoundBuffer, EffectCatalog)> {
        let ambient = self.render_loop(&self.style, format)?;
        let catalog = build_effect_catalog(format.sample_rate)?;
        Ok((ambient, catalog))
    }

    fn render_loop(&self, style: &MusicStyle, format: OutputFormat) -> SynthResult<SoundBuffer> {
        let params = LoopParams::new(self.config.loop_seconds, format.sample_rate)
            .with_channels(format.channels.clamp(1, 2))
            .with_seed(self.config.seed);
        synthesize_with(style, &params)
    }

    fn disable(&mut self) {
        self.state = ControllerState::Disabled;
        self.is_playing = false;
        self.ambient_voice = None;
    }

    fn is_active(&self) -> bool {
        matches!(
            self.state,
            ControllerState::Ready
                | ControllerState::AmbientPlaying
                | ControllerState::AmbientStopped
        )
    }

    fn can_sound(&self) -> bool {
        self.unlocked || !self.config.requires_unlock
    }

    /// Start the ambient loop, replacing any running one. Before `unlock`
    /// the intent is recorded and resolved on unlock.
    pub fn start(&mut self) {
        if !self.is_active() {
            return;
        }

        self.is_playing = true;
        if !self.can_sound() {
            debug!("start queued until unlock");
            return;
        }
        self.launch_ambient();
    }

    fn launch_ambient(&mut self) {
        let Some(buffer) = self.ambient_buffer.clone() else {
            return;
        };

        let handle = VoiceHandle(self.next_handle);
        self.next_handle += 1;

        // The mixer swaps the loop slot in one step, so the old voice stops
        // on the same block the new one starts.
        if self.send(MixerMessage::StartLoop { handle, buffer }) {
            self.ambient_voice = Some(handle);
            self.state = ControllerState::AmbientPlaying;
            debug!(handle = handle.0, style = %self.style.name, "ambient started");
        }
    }

    /// Stop the ambient loop. Idempotent. If the mixer cannot be told, the
    /// voice is kept and nothing changes.
    pub fn stop(&mut self) {
        if !self.is_active() {
            return;
        }

        if self.ambient_voice.is_some() {
            if !self.send(MixerMessage::StopLoop) {
                return;
            }
            self.ambient_voice = None;
            debug!("ambient stopped");
        }
        self.is_playing = false;
        self.state = ControllerState::AmbientStopped;
    }

    pub fn toggle(&mut self) {
        if self.is_playing {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Set the volume, clamped to [0, 1]. Affects the loop immediately and
    /// one-shots triggered afterwards.
    pub fn set_volume(&mut self, volume: f32) {
        if self.state == ControllerState::Disabled {
            return;
        }
        if volume.is_nan() {
            warn!("ignoring NaN volume");
            return;
        }

        self.volume = volume.clamp(0.0, 1.0);
        self.send(MixerMessage::SetVolume(self.volume));
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Fire a one-shot effect. Unknown names are ignored.
    pub fn play(&mut self, name: &str) {
        if !self.is_active() {
            return;
        }
        let Some(buffer) = self.catalog.get(name) else {
            debug!(name, "unknown effect");
            return;
        };
        if !self.can_sound() {
            debug!(name, "effect dropped before unlock");
            return;
        }

        self.send(MixerMessage::PlayOneShot {
            buffer,
            gain: self.volume,
        });
    }

    /// Record the user gesture that allows output. Resolves a pending
    /// `start`.
    pub fn unlock(&mut self) {
        if self.state == ControllerState::Disabled || self.unlocked {
            return;
        }

        self.unlocked = true;
        info!("audio unlocked");

        if self.is_active() && self.is_playing && self.ambient_voice.is_none() {
            self.launch_ambient();
        }
    }

    /// Stop everything and release the output. The controller can be
    /// initialized again afterwards.
    pub fn destroy(&mut self) {
        if !self.is_active() {
            return;
        }

        self.send(MixerMessage::Silence);
        if let Some(mut backend) = self.backend.take() {
            backend.close();
        }

        self.tx = None;
        self.format = None;
        self.ambient_buffer = None;
        self.retired.clear();
        self.catalog = EffectCatalog::default();
        self.ambient_voice = None;
        self.is_playing = false;
        self.unlocked = false;
        self.state = ControllerState::Uninitialized;
        info!("audio destroyed");
    }

    /// Switch styles. The new loop is rendered before anything changes, so
    /// on error the current loop keeps playing.
    pub fn set_style(&mut self, style: MusicStyle) -> SynthResult<()> {
        style.validate()?;

        if let (true, Some(format)) = (self.is_active(), self.format) {
            let buffer = self.render_loop(&style, format)?;
            if let Some(previous) = self.ambient_buffer.replace(Arc::new(buffer)) {
                self.retired.push(previous);
            }
            info!(
                style = %style.name,
                mood = %style.mood,
                bpm = style.bpm_base,
                "style changed"
            );
            self.style = style;
            if self.ambient_voice.is_some() {
                self.launch_ambient();
            }
        } else if self.state != ControllerState::Disabled {
            self.style = style;
        }

        Ok(())
    }

    /// Follow the clock: switch to the style for `when` if its name differs
    /// from the current one. Returns whether the style changed.
    pub fn refresh_for_time<T>(&mut self, when: &T) -> SynthResult<bool>
    where
        T: Datelike + Timelike,
    {
        let style = style_for_datetime(when, &mut self.rng);
        if style.name == self.style.name {
            return Ok(false);
        }
        self.set_style(style)?;
        Ok(true)
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn playback_state(&self) -> PlaybackState {
        PlaybackState {
            is_playing: self.is_playing,
            volume: self.volume,
            ambient_voice: self.ambient_voice,
        }
    }

    /// Ambient voices the controller holds a handle for: 0 or 1.
    pub fn ambient_voice_count(&self) -> usize {
        usize::from(self.ambient_voice.is_some())
    }

    pub fn style(&self) -> &MusicStyle {
        &self.style
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn catalog(&self) -> &EffectCatalog {
        &self.catalog
    }

    /// The current loop buffer, once initialized.
    pub fn ambient_buffer(&self) -> Option<&Arc<SoundBuffer>> {
        self.ambient_buffer.as_ref()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Push to the audio thread. A full ring drops the message; one-shots
    /// are also dropped once only the control reserve is left.
    fn send(&mut self, msg: MixerMessage) -> bool {
        // Only the controller still holds these, so they are freed here
        self.retired.retain(|buffer| Arc::strong_count(buffer) > 1);

        let Some(tx) = self.tx.as_mut() else {
            return false;
        };
        if matches!(msg, MixerMessage::PlayOneShot { .. }) && tx.slots() <= CONTROL_RESERVE {
            debug!("control ring busy, dropping one-shot");
            return false;
        }
        match tx.push(msg) {
            Ok(()) => true,
            Err(PushError::Full(msg)) => {
                warn!(message = msg.kind(), "control ring full, dropping message");
                false
            }
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            backend.close();
        }
    }
}
