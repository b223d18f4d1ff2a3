//! Output device, realtime mixer and the controller that drives them.
//!
//! ```text
//!   host ──► PlaybackController ──rtrb──► Mixer ──► OutputBackend (cpal)
//!             (control thread)     ring   (audio thread)
//! ```

mod controller;
pub mod message;
pub mod mixer;
pub mod output;

pub use controller::{ControllerState, PlaybackController, PlaybackState, VoiceHandle};
pub use message::MixerMessage;
pub use mixer::Mixer;
pub use output::{
    CpalBackend, OfflineBackend, OfflineHandle, OutputBackend, OutputFormat, UnavailableBackend,
};
