//! Pluggable backends for flashlight output and pacing
//!
//! The runner never writes to stdout or sleeps directly. It goes through
//! two traits so the same sequence can play on:
//!
//! - Terminal (crossterm, real sleeps)
//! - Tests (recorded events, recorded pauses)
//! - Nowhere (null output, no delay)
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  FlashlightRunner                    │
//! │  ┌──────────┐    ┌─────────────┐    ┌────────────┐   │
//! │  │ Renderer │───►│ LightOutput │───►│  Backend   │   │
//! │  └──────────┘    │   (trait)   │    │  (impl)    │   │
//! │                  └─────────────┘    └────────────┘   │
//! │                  ┌─────────────┐                     │
//! │                  │    Delay    │◄── between frames   │
//! │                  │   (trait)   │                     │
//! │                  └─────────────┘                     │
//! └──────────────────────────────────────────────────────┘
//! ```

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{cursor::MoveTo, queue, terminal::{Clear, ClearType}};
use lumen_core::Result;

/// Output sink for frames and text
pub trait LightOutput {
    /// Redraw the bar line in place. Frames carry their own carriage
    /// return and no newline.
    fn frame(&mut self, frame: &str) -> Result<()>;

    /// Print one line of text followed by a newline
    fn line(&mut self, text: &str) -> Result<()>;

    /// Clear the whole screen and home the cursor
    fn clear(&mut self) -> Result<()>;

    /// Flush any buffered output
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Pacing between frames
pub trait Delay {
    fn pause(&mut self, duration: Duration);
}

// ============================================================================
// TERMINAL BACKEND
// ============================================================================

/// Writes to a terminal (stdout by default) through crossterm
pub struct TerminalOutput<W: Write = Stdout> {
    writer: W,
}

impl TerminalOutput<Stdout> {
    pub fn new() -> Self {
        Self { writer: io::stdout() }
    }
}

impl Default for TerminalOutput<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalOutput<W> {
    /// Terminal output over any writer
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LightOutput for TerminalOutput<W> {
    fn frame(&mut self, frame: &str) -> Result<()> {
        self.writer.write_all(frame.as_bytes())?;
        // Frames have no newline; push them out before the next pause
        self.writer.flush()?;
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Blocks the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

// ============================================================================
// NULL BACKEND (for testing / no-op)
// ============================================================================

/// Null output - discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOutput;

impl LightOutput for NullOutput {
    fn frame(&mut self, _frame: &str) -> Result<()> {
        Ok(())
    }

    fn line(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Returns immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn pause(&mut self, _duration: Duration) {}
}

// ============================================================================
// RECORDING BACKEND (for inspecting what a run produced)
// ============================================================================

/// Something the runner sent to its output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    Frame(String),
    Line(String),
    Clear,
}

/// Recording output - keeps every event in order
#[derive(Debug, Default, Clone)]
pub struct RecordingOutput {
    pub events: Vec<OutputEvent>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Text lines, in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            OutputEvent::Line(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Redrawn frames, in order
    pub fn frames(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            OutputEvent::Frame(frame) => Some(frame.as_str()),
            _ => None,
        })
    }
}

impl LightOutput for RecordingOutput {
    fn frame(&mut self, frame: &str) -> Result<()> {
        self.events.push(OutputEvent::Frame(frame.to_string()));
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        self.events.push(OutputEvent::Line(text.to_string()));
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.events.push(OutputEvent::Clear);
        Ok(())
    }
}

/// Records requested pauses without sleeping
#[derive(Debug, Default, Clone)]
pub struct RecordedDelay {
    pub pauses: Vec<Duration>,
}

impl RecordedDelay {
    pub fn new() -> Self {
        Self { pauses: Vec::new() }
    }

    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Delay for RecordedDelay {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_backend() {
        let mut output = NullOutput;
        output.frame("\r[LIGHT] █ [1%]").unwrap();
        output.line("hello").unwrap();
        output.clear().unwrap();
        output.flush().unwrap();
        NoDelay.pause(Duration::from_secs(3600));
    }

    #[test]
    fn test_recording_keeps_order() {
        let mut output = RecordingOutput::new();
        output.clear().unwrap();
        output.frame("\rA").unwrap();
        output.line("one").unwrap();
        output.frame("\rB").unwrap();
        output.line("two").unwrap();

        assert_eq!(output.events[0], OutputEvent::Clear);
        assert_eq!(output.frames().collect::<Vec<_>>(), vec!["\rA", "\rB"]);
        assert_eq!(output.lines().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn test_recorded_delay_total() {
        let mut delay = RecordedDelay::new();
        delay.pause(Duration::from_millis(300));
        delay.pause(Duration::from_millis(200));
        assert_eq!(delay.pauses.len(), 2);
        assert_eq!(delay.total(), Duration::from_millis(500));
    }

    #[test]
    fn test_terminal_output_bytes() {
        let mut output = TerminalOutput::with_writer(Vec::new());
        output.frame("\r[LIGHT] ▓▓ [5%]").unwrap();
        output.line("FLASH 1/8 - HIGH INTENSITY").unwrap();

        let written = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(written, "\r[LIGHT] ▓▓ [5%]FLASH 1/8 - HIGH INTENSITY\n");
    }

    #[test]
    fn test_terminal_clear_emits_escape() {
        let mut output = TerminalOutput::with_writer(Vec::new());
        output.clear().unwrap();

        let written = String::from_utf8(output.into_inner()).unwrap();
        assert!(written.contains("\x1b[2J"));
    }
}
