//! Real-world scenario benchmarks.
//!
//! Whole-loop and whole-catalog generation as done at startup, and mixer
//! blocks under increasing one-shot load.

mod mixer;
mod synthesis;

pub use mixer::bench_mixer;
pub use synthesis::bench_synthesis;
