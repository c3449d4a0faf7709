//! Console banners
//!
//! Each function returns the banner as lines, without trailing newlines.
//! An empty string is a blank line.

const WIDE: usize = 80;
const NARROW: usize = 70;

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = WIDE).trim_end().to_string()
}

/// Program header, printed after the screen is cleared
pub fn header() -> Vec<String> {
    vec![
        rule('=', WIDE),
        centered("PROFESSIONAL CONSOLE FLASHLIGHT APPLICATION"),
        centered("Active Illumination System"),
        rule('=', WIDE),
        "Application provides console-based illumination, strobe patterns,".to_string(),
        "and emergency signaling through dynamic screen brightness control.".to_string(),
        rule('=', WIDE),
        String::new(),
    ]
}

/// Subsystem report shown before the init delay
pub fn initialization_report() -> Vec<String> {
    vec![
        "FLASHLIGHT SYSTEM INITIALIZATION:".to_string(),
        "Console Display Engine: Active".to_string(),
        "Illumination Processor: Operational".to_string(),
        "Pattern Generator: Ready".to_string(),
        "Emergency Protocols: Loaded".to_string(),
        "System Status: READY FOR OPERATION".to_string(),
        rule('-', NARROW),
        String::new(),
    ]
}

/// Operational status block. The power level is informational only.
pub fn status(mode: &str, power_level: i32) -> Vec<String> {
    vec![
        String::new(),
        rule('-', NARROW),
        format!("OPERATIONAL MODE: {}", mode),
        format!("Power Level: {}%", power_level),
        "Status: ACTIVE".to_string(),
        rule('-', NARROW),
    ]
}

/// First line of the termination banner, used to spot it in output
pub const TERMINATION_TITLE: &str = "FLASHLIGHT APPLICATION OPERATION COMPLETED";

/// Closing banner
pub fn termination() -> Vec<String> {
    vec![
        String::new(),
        String::new(),
        rule('=', WIDE),
        centered(TERMINATION_TITLE),
        centered("All Systems Deactivated"),
        rule('=', WIDE),
        "Flashlight functionality demonstration completed successfully.".to_string(),
        "Console illumination system has been properly shut down.".to_string(),
        "Program terminated with successful operational status.".to_string(),
        rule('=', WIDE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_block() {
        let lines = status("STROBE LIGHT PATTERN", 100);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1].len(), 70);
        assert_eq!(lines[2], "OPERATIONAL MODE: STROBE LIGHT PATTERN");
        assert_eq!(lines[3], "Power Level: 100%");
    }

    #[test]
    fn test_banners_are_framed() {
        let header = header();
        assert_eq!(header[0], "=".repeat(80));
        assert!(header[1].trim_start().starts_with("PROFESSIONAL CONSOLE"));
        assert!(header[1].starts_with(' '));

        let closing = termination();
        assert_eq!(closing[3].trim(), TERMINATION_TITLE);
        assert_eq!(closing.last().map(String::len), Some(80));
    }
}
