//! Flashlight Runner - plays the scripted sequence
//!
//! ```text
//! header → init report → [init delay] → phase 1 → phase 2 → phase 3 → phase 4 → termination
//! ```
//!
//! Every phase runs exactly once, in order. Nothing branches or retries;
//! the only state is which phase is playing.

use std::time::Duration;

use lumen_config::SequenceConfig;
use lumen_core::{PatternKind, Renderer, Result, SOS_SEQUENCE};

use crate::backend::{Delay, LightOutput, ThreadDelay};
use crate::banner;
use crate::Phase;

/// Connects the renderer and config to an output and a delay backend
pub struct FlashlightRunner<O: LightOutput, D: Delay = ThreadDelay> {
    config: SequenceConfig,
    renderer: Renderer,
    output: O,
    delay: D,
    current: Option<Phase>,
    completed: Vec<Phase>,
}

impl<O: LightOutput, D: Delay> FlashlightRunner<O, D> {
    pub fn new(config: SequenceConfig, output: O, delay: D) -> Self {
        let renderer = Renderer::with_widths(config.display.bar_capacity, config.display.blank_width);
        Self {
            config,
            renderer,
            output,
            delay,
            current: None,
            completed: Vec::new(),
        }
    }

    /// Play the whole sequence: header, four phases, termination
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(
            "Starting flashlight sequence ({:.1}s of scripted delays)",
            self.config.total_runtime().as_secs_f64()
        );
        tracing::debug!(config = ?self.config, "Sequence configuration");

        self.output.clear()?;
        self.lines(banner::header())?;
        self.lines(banner::initialization_report())?;
        self.output.flush()?;
        self.pause(self.config.init_delay());

        self.say("INITIATING FLASHLIGHT OPERATION SEQUENCE...")?;
        self.say("")?;

        for phase in Phase::ALL {
            if phase != Phase::Continuous {
                self.say("")?;
            }
            self.say(&phase.heading())?;
            self.run_phase(phase)?;
        }

        self.lines(banner::termination())?;
        self.output.flush()?;

        tracing::info!("Flashlight sequence completed");
        Ok(())
    }

    /// Play one phase, including its status banner
    pub fn run_phase(&mut self, phase: Phase) -> Result<()> {
        tracing::info!(phase = phase.number(), "Phase started: {}", phase);
        self.current = Some(phase);

        match phase {
            Phase::Continuous => self.continuous()?,
            Phase::Strobe => self.strobe()?,
            Phase::Emergency => self.emergency()?,
            Phase::Brightness => self.brightness()?,
        }

        self.current = None;
        self.completed.push(phase);
        Ok(())
    }

    fn continuous(&mut self) -> Result<()> {
        let cfg = self.config.continuous.clone();
        self.status(Phase::Continuous.mode_name(), cfg.power_level)?;

        for second in 1..=cfg.duration_secs {
            tracing::debug!(second, total = cfg.duration_secs, "Steady tick");
            self.light(PatternKind::Steady, cfg.intensity)?;
            self.say(&format!(
                "Illumination Active - Duration: {}/{} seconds",
                second, cfg.duration_secs
            ))?;
            self.pause(cfg.tick());
        }

        self.light(PatternKind::Off, 0)?;
        self.say("Continuous illumination mode completed.")
    }

    fn strobe(&mut self) -> Result<()> {
        let cfg = self.config.strobe.clone();
        self.status(Phase::Strobe.mode_name(), cfg.power_level)?;

        for flash in 1..=cfg.flash_count {
            tracing::debug!(flash, total = cfg.flash_count, "Strobe flash");
            self.light(PatternKind::StrobeFlash, cfg.intensity)?;
            self.say(&format!("FLASH {}/{} - HIGH INTENSITY", flash, cfg.flash_count))?;
            self.pause(cfg.flash());

            self.light(PatternKind::Off, 0)?;
            self.say("Flash interval pause...")?;
            self.pause(cfg.interval());
        }

        self.say("Strobe light pattern sequence completed.")
    }

    fn emergency(&mut self) -> Result<()> {
        let cfg = self.config.emergency.clone();
        self.status(Phase::Emergency.mode_name(), cfg.power_level)?;

        for (index, signal) in SOS_SEQUENCE.iter().enumerate() {
            tracing::debug!(index, signal = signal.name(), "SOS symbol");
            self.light(PatternKind::EmergencyFlash, cfg.intensity)?;
            self.say(&format!("SOS SIGNAL: {} FLASH", signal))?;
            self.pause(cfg.flash_duration(*signal));

            self.light(PatternKind::Off, 0)?;
            self.say("Signal pause...")?;
            self.pause(cfg.gap());
        }

        self.say("Emergency SOS signal pattern completed.")
    }

    fn brightness(&mut self) -> Result<()> {
        let cfg = self.config.brightness.clone();
        self.status(Phase::Brightness.mode_name(), cfg.power_level)?;

        for level in &cfg.levels {
            tracing::debug!(percent = level.percent, label = %level.label, "Brightness level");
            self.status(&format!("BRIGHTNESS: {}", level.label), level.percent)?;
            self.light(PatternKind::VariableBrightness, level.percent)?;
            self.say(&format!("Brightness Level: {} ({}%)", level.label, level.percent))?;
            self.pause(cfg.hold());
        }

        self.light(PatternKind::Off, 0)?;
        self.say("Brightness demonstration completed.")
    }

    fn light(&mut self, kind: PatternKind, intensity: i32) -> Result<()> {
        let frame = self.renderer.render(kind, intensity);
        self.output.frame(frame)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.output.line(text)
    }

    fn lines(&mut self, lines: Vec<String>) -> Result<()> {
        for line in &lines {
            self.output.line(line)?;
        }
        Ok(())
    }

    fn status(&mut self, mode: &str, power_level: i32) -> Result<()> {
        self.lines(banner::status(mode, power_level))
    }

    fn pause(&mut self, duration: Duration) {
        self.delay.pause(duration);
    }

    /// Phase currently playing, if any
    pub fn current_phase(&self) -> Option<Phase> {
        self.current
    }

    /// Phases finished so far, in order
    pub fn completed_phases(&self) -> &[Phase] {
        &self.completed
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Hand back the backends
    pub fn into_parts(self) -> (O, D) {
        (self.output, self.delay)
    }
}

impl<O: LightOutput> FlashlightRunner<O, ThreadDelay> {
    /// Default sequence with real sleeps
    pub fn with_defaults(output: O) -> Self {
        Self::new(SequenceConfig::default(), output, ThreadDelay)
    }
}
