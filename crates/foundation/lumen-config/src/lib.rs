//! # Lumen Config
//!
//! Every constant the flashlight sequence uses, enumerated in one place.
//! `SequenceConfig::default()` is the only configuration the binary ever
//! runs; tests build their own to avoid real delays or to shrink loops.

use lumen_core::{Signal, BAR_CAPACITY, BLANK_WIDTH, SOS_SEQUENCE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Full sequence configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Pause after the initialization report
    pub init_delay_ms: u64,
    pub display: DisplayConfig,
    pub continuous: ContinuousConfig,
    pub strobe: StrobeConfig,
    pub emergency: EmergencyConfig,
    pub brightness: BrightnessConfig,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            init_delay_ms: 1000,
            display: DisplayConfig::default(),
            continuous: ContinuousConfig::default(),
            strobe: StrobeConfig::default(),
            emergency: EmergencyConfig::default(),
            brightness: BrightnessConfig::default(),
        }
    }
}

impl SequenceConfig {
    pub fn init_delay(&self) -> Duration {
        Duration::from_millis(self.init_delay_ms)
    }

    /// Sum of every pause the sequence requests
    pub fn total_runtime(&self) -> Duration {
        self.init_delay()
            + self.continuous.runtime()
            + self.strobe.runtime()
            + self.emergency.runtime()
            + self.brightness.runtime()
    }
}

/// Bar geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Columns of a 100% bar
    pub bar_capacity: usize,
    /// Columns blanked by `OFF`
    pub blank_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_capacity: BAR_CAPACITY,
            blank_width: BLANK_WIDTH,
        }
    }
}

/// Phase 1: steady light
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuousConfig {
    /// Number of one-tick iterations
    pub duration_secs: u32,
    pub tick_ms: u64,
    pub intensity: i32,
    pub power_level: i32,
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        Self {
            duration_secs: 3,
            tick_ms: 1000,
            intensity: 100,
            power_level: 100,
        }
    }
}

impl ContinuousConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn runtime(&self) -> Duration {
        self.tick() * self.duration_secs
    }
}

/// Phase 2: strobe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrobeConfig {
    pub flash_count: u32,
    /// How long each flash stays lit
    pub flash_ms: u64,
    /// Dark gap after each flash
    pub interval_ms: u64,
    pub intensity: i32,
    pub power_level: i32,
}

impl Default for StrobeConfig {
    fn default() -> Self {
        Self {
            flash_count: 8,
            flash_ms: 200,
            interval_ms: 500,
            intensity: 100,
            power_level: 100,
        }
    }
}

impl StrobeConfig {
    pub fn flash(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn runtime(&self) -> Duration {
        (self.flash() + self.interval()) * self.flash_count
    }
}

/// Phase 3: SOS
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyConfig {
    pub short_ms: u64,
    pub long_ms: u64,
    /// Dark gap after every symbol
    pub gap_ms: u64,
    pub intensity: i32,
    pub power_level: i32,
}

impl Default for EmergencyConfig {
    fn default() -> Self {
        Self {
            short_ms: 300,
            long_ms: 800,
            gap_ms: 200,
            intensity: 100,
            power_level: 100,
        }
    }
}

impl EmergencyConfig {
    /// How long a signal stays lit
    pub fn flash_duration(&self, signal: Signal) -> Duration {
        match signal {
            Signal::Short => Duration::from_millis(self.short_ms),
            Signal::Long => Duration::from_millis(self.long_ms),
        }
    }

    pub fn gap(&self) -> Duration {
        Duration::from_millis(self.gap_ms)
    }

    pub fn runtime(&self) -> Duration {
        SOS_SEQUENCE
            .iter()
            .map(|signal| self.flash_duration(*signal) + self.gap())
            .sum()
    }
}

/// One step of the brightness ramp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrightnessLevel {
    pub percent: i32,
    pub label: String,
}

impl BrightnessLevel {
    pub fn new(percent: i32, label: impl Into<String>) -> Self {
        Self {
            percent,
            label: label.into(),
        }
    }
}

/// Phase 4: brightness ramp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessConfig {
    pub levels: Vec<BrightnessLevel>,
    /// How long each level is held
    pub hold_ms: u64,
    /// Declared on the phase banner, before the first level
    pub power_level: i32,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            levels: vec![
                BrightnessLevel::new(25, "LOW"),
                BrightnessLevel::new(50, "MEDIUM"),
                BrightnessLevel::new(75, "HIGH"),
                BrightnessLevel::new(100, "MAXIMUM"),
            ],
            hold_ms: 1500,
            power_level: 0,
        }
    }
}

impl BrightnessConfig {
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    pub fn runtime(&self) -> Duration {
        self.hold() * self.levels.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = SequenceConfig::default();

        assert_eq!(config.init_delay(), Duration::from_millis(1000));
        assert_eq!(config.continuous.duration_secs, 3);
        assert_eq!(config.continuous.tick(), Duration::from_secs(1));
        assert_eq!(config.strobe.flash_count, 8);
        assert_eq!(config.strobe.flash(), Duration::from_millis(200));
        assert_eq!(config.strobe.interval(), Duration::from_millis(500));
        assert_eq!(config.emergency.gap(), Duration::from_millis(200));
        assert_eq!(config.brightness.hold(), Duration::from_millis(1500));
        assert_eq!(config.brightness.power_level, 0);
        assert_eq!(config.display.bar_capacity, 60);
        assert_eq!(config.display.blank_width, 80);
    }

    #[test]
    fn test_flash_durations() {
        let emergency = EmergencyConfig::default();
        assert_eq!(emergency.flash_duration(Signal::Short), Duration::from_millis(300));
        assert_eq!(emergency.flash_duration(Signal::Long), Duration::from_millis(800));
    }

    #[test]
    fn test_brightness_table_order() {
        let brightness = BrightnessConfig::default();
        let percents: Vec<i32> = brightness.levels.iter().map(|l| l.percent).collect();
        let labels: Vec<&str> = brightness.levels.iter().map(|l| l.label.as_str()).collect();

        assert_eq!(percents, vec![25, 50, 75, 100]);
        assert_eq!(labels, vec!["LOW", "MEDIUM", "HIGH", "MAXIMUM"]);
    }

    #[test]
    fn test_total_runtime() {
        let config = SequenceConfig::default();

        assert_eq!(config.continuous.runtime(), Duration::from_millis(3000));
        assert_eq!(config.strobe.runtime(), Duration::from_millis(5600));
        assert_eq!(config.emergency.runtime(), Duration::from_millis(6000));
        assert_eq!(config.brightness.runtime(), Duration::from_millis(6000));
        assert_eq!(config.total_runtime(), Duration::from_millis(21_600));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: SequenceConfig =
            serde_json::from_str(r#"{"strobe": {"flash_count": 2}, "init_delay_ms": 0}"#).unwrap();

        assert_eq!(config.strobe.flash_count, 2);
        assert_eq!(config.strobe.interval_ms, 500);
        assert_eq!(config.init_delay_ms, 0);
        assert_eq!(config.brightness, BrightnessConfig::default());
    }
}
