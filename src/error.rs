//! Error types.
//!
//! Only buffer generation reports errors to callers. Playback control never
//! does: the controller logs device failures and degrades to silence.

use thiserror::Error;

/// Result type for generation entry points.
pub type SynthResult<T> = Result<T, SynthError>;

/// Construction-time failures from the generators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    #[error("unsupported sample rate: {rate} Hz")]
    InvalidSampleRate { rate: u32 },

    #[error("invalid duration: {duration} seconds")]
    InvalidDuration { duration: f32 },

    #[error("unsupported channel count: {channels}")]
    InvalidChannels { channels: usize },

    #[error("invalid style '{name}': {message}")]
    InvalidStyle { name: String, message: String },

    #[error("malformed buffer: {message}")]
    InvalidBuffer { message: String },
}

impl SynthError {
    pub fn invalid_style(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidStyle {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_buffer(message: impl Into<String>) -> Self {
        Self::InvalidBuffer {
            message: message.into(),
        }
    }
}

/// Failures acquiring or driving the audio output device.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("no audio output device available")]
    NoDevice,

    #[error("device init error: {0}")]
    DeviceInit(String),

    #[error("stream create error: {0}")]
    StreamCreate(String),

    #[error("playback error: {0}")]
    Playback(String),

    #[error("unsupported output: {0}")]
    Unsupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_bad_value() {
        let err = SynthError::InvalidSampleRate { rate: 12 };
        assert!(err.to_string().contains("12"));

        let err = SynthError::invalid_style("Broken", "bpm must be finite");
        assert!(err.to_string().contains("Broken"));
        assert!(err.to_string().contains("bpm must be finite"));
    }
}
