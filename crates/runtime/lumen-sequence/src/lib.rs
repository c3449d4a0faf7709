//! # Lumen Sequence
//!
//! Scripted playback of the four flashlight phases.
//!
//! ## Phases
//!
//! 1. **Continuous**: steady light, one frame per second
//! 2. **Strobe**: eight flash/off cycles
//! 3. **Emergency**: SOS (· · · − − − · · ·)
//! 4. **Brightness**: 25% → 50% → 75% → 100%
//!
//! Output and pacing go through the [`LightOutput`] and [`Delay`] traits,
//! so a run can be recorded and inspected without a terminal or real
//! sleeps.

pub mod backend;
pub mod banner;
pub mod phase;
pub mod runner;

pub use backend::{
    // Traits
    Delay, LightOutput,
    // Terminal
    TerminalOutput, ThreadDelay,
    // Null
    NoDelay, NullOutput,
    // Recording
    OutputEvent, RecordedDelay, RecordingOutput,
};
pub use phase::Phase;
pub use runner::FlashlightRunner;

// Re-export core types for convenience
pub use lumen_config::SequenceConfig;
pub use lumen_core::{Error, PatternKind, Result};
