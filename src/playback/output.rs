//! Audio output backends.
//!
//! The controller only talks to an [`OutputBackend`]: `open` reports the
//! device format so buffers can be rendered at the device rate, `start` hands
//! over the [`Mixer`] that the device's audio thread will pull from, and
//! `close` halts output immediately.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use tracing::{debug, error, info};

use crate::error::OutputError;
use crate::MAX_BLOCK_SIZE;

use super::mixer::Mixer;

/// Sample rate and channel count of an opened output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub sample_rate: u32,
    pub channels: usize,
}

pub trait OutputBackend {
    /// Acquire the output and report its format.
    fn open(&mut self) -> Result<OutputFormat, OutputError>;

    /// Begin pulling audio from `mixer`.
    fn start(&mut self, mixer: Mixer) -> Result<(), OutputError>;

    /// Stop output and release the device. Safe to call more than once.
    fn close(&mut self);
}

/// The default output device of the default cpal host.
#[derive(Default)]
pub struct CpalBackend {
    device: Option<cpal::Device>,
    config: Option<cpal::SupportedStreamConfig>,
    stream: Option<cpal::Stream>,
}

impl CpalBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputBackend for CpalBackend {
    fn open(&mut self) -> Result<OutputFormat, OutputError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(OutputError::NoDevice)?;
        let config = device
            .default_output_config()
            .map_err(|e| OutputError::DeviceInit(e.to_string()))?;

        let format = OutputFormat {
            sample_rate: config.sample_rate().0,
            channels: config.channels() as usize,
        };

        info!(
            device = %device.name().unwrap_or_else(|_| "unknown".into()),
            sample_rate = format.sample_rate,
            channels = format.channels,
            sample_format = ?config.sample_format(),
            "opened audio output"
        );

        self.device = Some(device);
        self.config = Some(config);
        Ok(format)
    }

    fn start(&mut self, mixer: Mixer) -> Result<(), OutputError> {
        let (Some(device), Some(supported)) = (&self.device, &self.config) else {
            return Err(OutputError::DeviceInit("output not opened".into()));
        };

        let config = supported.config();
        let stream = match supported.sample_format() {
            cpal::SampleFormat::F32 => build_stream::<f32>(device, &config, mixer)?,
            cpal::SampleFormat::I16 => build_stream::<i16>(device, &config, mixer)?,
            cpal::SampleFormat::U16 => build_stream::<u16>(device, &config, mixer)?,
            other => {
                return Err(OutputError::Unsupported(format!(
                    "sample format {other:?}"
                )))
            }
        };

        stream
            .play()
            .map_err(|e| OutputError::Playback(e.to_string()))?;
        debug!("audio stream started");

        self.stream = Some(stream);
        Ok(())
    }

    fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            // Pause before the drop so output halts immediately
            if let Err(err) = stream.pause() {
                debug!(%err, "pause on close failed");
            }
        }
        self.config = None;
        self.device = None;
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mut mixer: Mixer,
) -> Result<cpal::Stream, OutputError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    let mut block = vec![0.0f32; MAX_BLOCK_SIZE * channels];

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                for chunk in data.chunks_mut(block.len()) {
                    let scratch = &mut block[..chunk.len()];
                    mixer.render(scratch, channels);
                    for (out, &sample) in chunk.iter_mut().zip(scratch.iter()) {
                        *out = T::from_sample(sample);
                    }
                }
            },
            |err| error!(%err, "audio stream error"),
            None,
        )
        .map_err(|e| OutputError::StreamCreate(e.to_string()))
}

/// Renders on demand instead of on a device clock.
///
/// Used by tests and headless bounces: the mixer lives behind a shared
/// handle and only advances when [`OfflineHandle::render`] is called.
pub struct OfflineBackend {
    format: OutputFormat,
    mixer: Arc<Mutex<Option<Mixer>>>,
}

impl OfflineBackend {
    pub fn new(sample_rate: u32, channels: usize) -> Self {
        Self {
            format: OutputFormat {
                sample_rate,
                channels: channels.max(1),
            },
            mixer: Arc::new(Mutex::new(None)),
        }
    }

    /// A handle that stays valid after the backend moves into a controller.
    pub fn handle(&self) -> OfflineHandle {
        OfflineHandle {
            channels: self.format.channels,
            mixer: Arc::clone(&self.mixer),
        }
    }
}

impl OutputBackend for OfflineBackend {
    fn open(&mut self) -> Result<OutputFormat, OutputError> {
        Ok(self.format)
    }

    fn start(&mut self, mixer: Mixer) -> Result<(), OutputError> {
        *lock(&self.mixer) = Some(mixer);
        Ok(())
    }

    fn close(&mut self) {
        *lock(&self.mixer) = None;
    }
}

#[derive(Clone)]
pub struct OfflineHandle {
    channels: usize,
    mixer: Arc<Mutex<Option<Mixer>>>,
}

impl OfflineHandle {
    /// Render `frames` interleaved frames. Silence when nothing is running.
    pub fn render(&self, frames: usize) -> Vec<f32> {
        let mut out = vec![0.0; frames * self.channels];
        if let Some(mixer) = lock(&self.mixer).as_mut() {
            for chunk in out.chunks_mut(MAX_BLOCK_SIZE * self.channels) {
                mixer.render(chunk, self.channels);
            }
        }
        out
    }

    /// Whether a mixer is attached (started and not closed).
    pub fn is_running(&self) -> bool {
        lock(&self.mixer).is_some()
    }

    pub fn ambient_voice_count(&self) -> usize {
        self.with_mixer(|mixer| mixer.ambient_voice_count())
    }

    pub fn one_shot_count(&self) -> usize {
        self.with_mixer(|mixer| mixer.one_shot_count())
    }

    fn with_mixer(&self, f: impl FnOnce(&mut Mixer) -> usize) -> usize {
        let mut guard = lock(&self.mixer);
        match guard.as_mut() {
            Some(mixer) => {
                mixer.process_messages();
                f(mixer)
            }
            None => 0,
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// An environment with no audio output. `open` always fails.
#[derive(Debug, Clone, Default)]
pub struct UnavailableBackend {
    reason: Option<String>,
}

impl UnavailableBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

impl OutputBackend for UnavailableBackend {
    fn open(&mut self) -> Result<OutputFormat, OutputError> {
        match &self.reason {
            Some(reason) => Err(OutputError::DeviceInit(reason.clone())),
            None => Err(OutputError::NoDevice),
        }
    }

    fn start(&mut self, _mixer: Mixer) -> Result<(), OutputError> {
        Err(OutputError::NoDevice)
    }

    fn close(&mut self) {}
}
