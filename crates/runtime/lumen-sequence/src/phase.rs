//! The four scripted phases, in playback order

/// One scripted phase of the flashlight demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Steady light for a fixed number of seconds
    Continuous,
    /// Fixed number of flash/off cycles
    Strobe,
    /// SOS signal
    Emergency,
    /// Walk through the brightness table
    Brightness,
}

impl Phase {
    /// Playback order
    pub const ALL: [Phase; 4] = [
        Self::Continuous,
        Self::Strobe,
        Self::Emergency,
        Self::Brightness,
    ];

    /// 1-based position in the sequence
    pub fn number(&self) -> usize {
        match self {
            Self::Continuous => 1,
            Self::Strobe => 2,
            Self::Emergency => 3,
            Self::Brightness => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Continuous => "Continuous Illumination Mode",
            Self::Strobe => "Strobe Light Pattern",
            Self::Emergency => "Emergency Signal Pattern",
            Self::Brightness => "Brightness Level Demonstration",
        }
    }

    /// Mode name shown on the status banner
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::Continuous => "CONTINUOUS ILLUMINATION",
            Self::Strobe => "STROBE LIGHT PATTERN",
            Self::Emergency => "EMERGENCY SIGNAL - SOS PATTERN",
            Self::Brightness => "BRIGHTNESS LEVEL CONTROL",
        }
    }

    /// Line announcing the phase, e.g. `Phase 2: Strobe Light Pattern`
    pub fn heading(&self) -> String {
        format!("Phase {}: {}", self.number(), self.title())
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order() {
        let numbers: Vec<usize> = Phase::ALL.iter().map(|p| p.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_headings() {
        assert_eq!(Phase::Continuous.heading(), "Phase 1: Continuous Illumination Mode");
        assert_eq!(Phase::Brightness.heading(), "Phase 4: Brightness Level Demonstration");
    }
}
