//! Pattern Tags and SOS Signals
//!
//! A pattern tag picks the glyph a bar is drawn with. `Off` is special:
//! it blanks the line instead of drawing a bar.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// Light pattern selecting the render glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    #[serde(rename = "STEADY_BRIGHT")]
    Steady,
    #[serde(rename = "STROBE_FLASH")]
    StrobeFlash,
    #[serde(rename = "EMERGENCY_FLASH")]
    EmergencyFlash,
    #[serde(rename = "VARIABLE_BRIGHTNESS")]
    VariableBrightness,
    #[serde(rename = "OFF")]
    Off,
    /// Any name outside the table; drawn with the fallback glyph
    #[serde(rename = "UNKNOWN")]
    Unrecognized,
}

impl PatternKind {
    /// Every named pattern, in table order
    pub const ALL: [PatternKind; 5] = [
        Self::Steady,
        Self::StrobeFlash,
        Self::EmergencyFlash,
        Self::VariableBrightness,
        Self::Off,
    ];

    /// Canonical pattern name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Steady => "STEADY_BRIGHT",
            Self::StrobeFlash => "STROBE_FLASH",
            Self::EmergencyFlash => "EMERGENCY_FLASH",
            Self::VariableBrightness => "VARIABLE_BRIGHTNESS",
            Self::Off => "OFF",
            Self::Unrecognized => "UNKNOWN",
        }
    }

    /// Glyph the bar is drawn with. `Off` has none.
    pub fn glyph(&self) -> Option<char> {
        match self {
            Self::Steady | Self::VariableBrightness => Some('█'),
            Self::StrobeFlash => Some('▓'),
            Self::EmergencyFlash => Some('▒'),
            Self::Unrecognized => Some('░'),
            Self::Off => None,
        }
    }

    pub fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }

    /// Parse a pattern name, mapping anything unknown to `Unrecognized`
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or(Self::Unrecognized)
    }
}

impl FromStr for PatternKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPattern(s.to_string()))
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One element of the SOS signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Short,
    Long,
}

impl Signal {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Short => "SHORT",
            Self::Long => "LONG",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// SOS: three short, three long, three short
pub const SOS_SEQUENCE: [Signal; 9] = [
    Signal::Short,
    Signal::Short,
    Signal::Short,
    Signal::Long,
    Signal::Long,
    Signal::Long,
    Signal::Short,
    Signal::Short,
    Signal::Short,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_table() {
        assert_eq!(PatternKind::Steady.glyph(), Some('█'));
        assert_eq!(PatternKind::VariableBrightness.glyph(), Some('█'));
        assert_eq!(PatternKind::StrobeFlash.glyph(), Some('▓'));
        assert_eq!(PatternKind::EmergencyFlash.glyph(), Some('▒'));
        assert_eq!(PatternKind::Unrecognized.glyph(), Some('░'));
        assert_eq!(PatternKind::Off.glyph(), None);
    }

    #[test]
    fn test_parse_names() {
        for kind in PatternKind::ALL {
            assert_eq!(kind.name().parse::<PatternKind>().unwrap(), kind);
        }
        assert_eq!("strobe_flash".parse::<PatternKind>().unwrap(), PatternKind::StrobeFlash);
        assert!(matches!(
            "DISCO".parse::<PatternKind>(),
            Err(Error::UnknownPattern(name)) if name == "DISCO"
        ));
    }

    #[test]
    fn test_parse_lenient_falls_back() {
        assert_eq!(PatternKind::parse_lenient("OFF"), PatternKind::Off);
        assert_eq!(PatternKind::parse_lenient("LASER"), PatternKind::Unrecognized);
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&PatternKind::EmergencyFlash).unwrap();
        assert_eq!(json, "\"EMERGENCY_FLASH\"");
    }

    #[test]
    fn test_sos_sequence() {
        use Signal::{Long, Short};

        assert_eq!(SOS_SEQUENCE.len(), 9);
        assert_eq!(
            SOS_SEQUENCE,
            [Short, Short, Short, Long, Long, Long, Short, Short, Short]
        );
        assert_eq!(Signal::Long.to_string(), "LONG");
    }
}
