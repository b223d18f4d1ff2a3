//! Low-level synthesis primitives shared by the ambient loop and the effect
//! library.
//!
//! Everything here is either a pure function of time or a small value type
//! that lives inside one generation call. Nothing in this module keeps state
//! between buffers, so two generations never bleed into each other.

/// Soft clipping and final gain staging.
pub mod distortion;
/// Decay curves and the one-shot amplitude envelope.
pub mod envelope;
/// One-pole low-pass filter.
pub mod filter;
/// Seeded white noise and seed derivation.
pub mod noise;
/// Periodic waveforms and swept-phase helpers.
pub mod oscillator;

pub use envelope::OneShotEnvelope;
pub use filter::OnePole;
pub use noise::NoiseSource;
pub use oscillator::Waveform;
