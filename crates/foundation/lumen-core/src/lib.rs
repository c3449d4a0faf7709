//! # Lumen Core
//!
//! Building blocks for the console flashlight: what a light pattern is,
//! how an intensity becomes a bar of glyphs, and the SOS signal table.
//!
//! ```text
//! PatternKind + intensity ──► Renderer ──► "\r[LIGHT] ██████ [100%]"
//!                                │
//!                                └── last rendered line (kept for redraw)
//! ```
//!
//! Nothing here sleeps or touches the terminal; that lives in
//! `lumen-sequence`.

pub mod pattern;
pub mod render;

pub use pattern::{PatternKind, Signal, SOS_SEQUENCE};
pub use render::{bar_width, Renderer, BAR_CAPACITY, BLANK_WIDTH};

/// Result type for lumen-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the flashlight
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Console output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),
}
