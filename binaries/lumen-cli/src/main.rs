//! Lumen CLI
//!
//! Console flashlight demo. Takes no arguments and always plays the full
//! scripted sequence: continuous light, strobe, SOS, brightness ramp.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lumen_sequence::{FlashlightRunner, TerminalOutput};

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Lumen - console flashlight with strobe, SOS and brightness demo")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the light
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lumen=warn,lumen_sequence=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut runner = FlashlightRunner::with_defaults(TerminalOutput::new());
    runner.run().context("flashlight sequence aborted")?;

    tracing::info!(phases = runner.completed_phases().len(), "Exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_takes_no_arguments() {
        assert!(Cli::try_parse_from(["lumen"]).is_ok());
        assert!(Cli::try_parse_from(["lumen", "--strobe"]).is_err());
        assert!(Cli::try_parse_from(["lumen", "extra"]).is_err());
    }
}
