//! Engine configuration.
//!
//! Built with chained setters, the same way a `PlaybackController` host is
//! assembled:
//!
//! ```
//! use moodsynth::EngineConfig;
//!
//! let config = EngineConfig::new()
//!     .loop_seconds(8.0)
//!     .initial_volume(0.5)
//!     .seed(7);
//! assert_eq!(config.max_one_shot_voices, 32);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Length of the ambient loop in seconds.
    pub loop_seconds: f32,
    /// Base seed for every noise stream and the weekend tempo jitter.
    pub seed: u64,
    /// Volume at startup, clamped to [0, 1].
    pub initial_volume: f32,
    /// Concurrent one-shot voices before the oldest is evicted.
    pub max_one_shot_voices: usize,
    /// Capacity of the control ring between the controller and audio thread.
    pub command_capacity: usize,
    /// Whether `start()` must wait for `unlock()` before sound is produced.
    pub requires_unlock: bool,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            loop_seconds: 16.0,
            seed: 0x5EED,
            initial_volume: 0.3,
            max_one_shot_voices: 32,
            command_capacity: 256,
            requires_unlock: true,
        }
    }

    pub fn loop_seconds(mut self, seconds: f32) -> Self {
        self.loop_seconds = seconds;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn initial_volume(mut self, volume: f32) -> Self {
        self.initial_volume = volume;
        self
    }

    pub fn max_one_shot_voices(mut self, voices: usize) -> Self {
        self.max_one_shot_voices = voices.max(1);
        self
    }

    pub fn command_capacity(mut self, capacity: usize) -> Self {
        self.command_capacity = capacity.max(8);
        self
    }

    pub fn requires_unlock(mut self, requires: bool) -> Self {
        self.requires_unlock = requires;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_loop() {
        let config = EngineConfig::default();
        assert_eq!(config.loop_seconds, 16.0);
        assert!(config.requires_unlock);
    }

    #[test]
    fn setters_guard_degenerate_sizes() {
        let config = EngineConfig::new()
            .max_one_shot_voices(0)
            .command_capacity(1);
        assert_eq!(config.max_one_shot_voices, 1);
        assert_eq!(config.command_capacity, 8);
    }
}
