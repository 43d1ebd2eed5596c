//! Command-line surface and dispatch.

use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use cardstack_config::{CardStackConfig, ConfigLoader, LoadedConfig};
use cardstack_core::ScrollState;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::render::{OutputFormat, write_frames};
use crate::simulate::{run_sweep, single_frame};

#[derive(Debug, Parser)]
#[command(
    name = "cardstackctl",
    version,
    about = "Inspect the card stack carousel transform math"
)]
pub struct Cli {
    /// Config file (TOML or JSON); overrides CARDSTACK_CONFIG_PATH
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every card's transform for one scroll state
    Frame {
        /// Normalized scroll position in [0, 1]
        #[arg(long)]
        progress: f64,
        /// Index of the active card
        #[arg(long, default_value_t = 0)]
        active: usize,
        /// Number of cards; defaults to the configured card count
        #[arg(long)]
        card_count: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
        format: OutputFormat,
    },
    /// Simulate a full scroll across the stack and print each step
    Sweep {
        /// Number of equal scroll increments from start to end
        #[arg(long, default_value_t = 20)]
        steps: usize,
        /// Scroll back to the start after reaching the end
        #[arg(long)]
        reverse: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
        format: OutputFormat,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    fn load_config(&self) -> Result<LoadedConfig> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::new().with_path(path),
            None => ConfigLoader::new(),
        };
        let loaded = loader.load().context("failed to load configuration")?;
        info!(source = ?loaded.source, "configuration loaded");
        Ok(loaded)
    }

    /// Execute the parsed command, writing results to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        // Warnings were already logged by the loader.
        let LoadedConfig { config, .. } = self.load_config()?;

        match &self.command {
            Command::Frame {
                progress,
                active,
                card_count,
                format,
            } => {
                let card_count =
                    card_count.unwrap_or(config.geometry.card_count);
                let frame = single_frame(
                    &config.tuning,
                    ScrollState::new(*progress, *active),
                    card_count,
                )?;
                write_frames(out, &[frame], *format)
            }
            Command::Sweep {
                steps,
                reverse,
                format,
            } => {
                let frames = run_sweep(&config, *steps, *reverse)?;
                write_frames(out, &frames, *format)
            }
            Command::Config => write_config(out, &config),
        }
    }
}

fn write_config<W: Write>(out: &mut W, config: &CardStackConfig) -> Result<()> {
    let rendered = config.to_toml().context("failed to render config")?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
