//! Printing frame reports.

use std::io::Write;

use anyhow::Result;
use cardstack_core::CssNumber;
use clap::ValueEnum;

use crate::simulate::FrameReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable inline CSS per card
    Css,
    /// One JSON object per frame
    Json,
}

pub fn write_frames<W: Write>(
    out: &mut W,
    frames: &[FrameReport],
    format: OutputFormat,
) -> Result<()> {
    for frame in frames {
        match format {
            OutputFormat::Css => write_css(out, frame)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, frame)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn write_css<W: Write>(out: &mut W, frame: &FrameReport) -> Result<()> {
    write!(out, "step {}", frame.step)?;
    if let Some(offset) = frame.offset {
        write!(out, " offset {}", CssNumber(offset))?;
    }
    writeln!(
        out,
        " progress {} active {}",
        CssNumber(frame.state.progress),
        frame.state.active_index
    )?;
    for card in &frame.cards {
        writeln!(out, "  card {}: {}", card.index, card.style.to_inline())?;
    }
    Ok(())
}
