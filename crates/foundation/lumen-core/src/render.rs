//! Pattern Renderer
//!
//! Turns a pattern tag and an intensity into one redrawn console line.
//! Lines start with a carriage return and carry no newline, so each
//! frame overwrites the previous one in place. The renderer remembers the
//! last frame it produced instead of relying on the terminal cursor.

use crate::PatternKind;

/// Columns of a full-intensity bar
pub const BAR_CAPACITY: usize = 60;

/// Columns blanked when the light is switched off
pub const BLANK_WIDTH: usize = 80;

const LABEL: &str = "[LIGHT] ";

/// Bar width for an intensity: `floor(intensity * capacity / 100)`.
///
/// Intensity is not validated. Values above 100 produce a bar wider than
/// `capacity`; negative values clamp to an empty bar.
pub fn bar_width(intensity: i32, capacity: usize) -> usize {
    let scaled = i64::from(intensity) * capacity as i64;
    if scaled <= 0 {
        0
    } else {
        (scaled / 100) as usize
    }
}

/// Stateful bar renderer
#[derive(Debug, Clone)]
pub struct Renderer {
    capacity: usize,
    blank_width: usize,
    last_line: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_widths(BAR_CAPACITY, BLANK_WIDTH)
    }

    /// Renderer with custom bar capacity and blank-line width
    pub fn with_widths(capacity: usize, blank_width: usize) -> Self {
        Self {
            capacity,
            blank_width,
            last_line: String::new(),
        }
    }

    /// Build the frame for a pattern without recording it
    pub fn frame(&self, kind: PatternKind, intensity: i32) -> String {
        let Some(glyph) = kind.glyph() else {
            let mut blank = " ".repeat(self.blank_width);
            blank.push('\r');
            return blank;
        };

        let width = bar_width(intensity, self.capacity);
        let mut line = String::with_capacity(LABEL.len() + width * glyph.len_utf8() + 12);
        line.push('\r');
        line.push_str(LABEL);
        line.extend(std::iter::repeat(glyph).take(width));
        line.push_str(&format!(" [{}%]", intensity));
        line
    }

    /// Render a pattern, replacing the last rendered line
    pub fn render(&mut self, kind: PatternKind, intensity: i32) -> &str {
        self.last_line = self.frame(kind, intensity);
        &self.last_line
    }

    /// The most recent frame, empty before the first render
    pub fn last_line(&self) -> &str {
        &self.last_line
    }

    /// Whether the last frame left a lit bar on screen
    pub fn is_lit(&self) -> bool {
        self.last_line.contains(LABEL)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
