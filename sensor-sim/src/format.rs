//! Frame formatting for console output.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use sensors::Axes;
use serde::Serialize;

/// Number of dashes in the verbose frame separator.
const SEPARATOR_WIDTH: usize = 40;

/// Readings gathered in one loop iteration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub tick: u64,
    pub acceleration: Axes,
    pub field: Axes,
    pub distance_cm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Axes>,
    /// Acceleration axes pinned at a walk bound this frame.
    #[serde(skip)]
    pub saturated_axes: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FrameFormat {
    /// One human-readable line per frame.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes `frame` to `out` in the requested format.
///
/// `verbose` only affects text output: every reading gets its own line and
/// frames are separated by a dashed rule.
pub fn write_frame<W: Write>(
    out: &mut W,
    frame: &Frame,
    format: FrameFormat,
    verbose: bool,
) -> Result<()> {
    match format {
        FrameFormat::Json => {
            serde_json::to_writer(&mut *out, frame).context("serialize frame")?;
            writeln!(out)?;
        }
        FrameFormat::Text if verbose => {
            writeln!(out, "acceleration: {} m/s²", frame.acceleration)?;
            writeln!(out, "magnetic field: {} µT", frame.field)?;
            writeln!(out, "distance: {:.2} cm", frame.distance_cm)?;
            if let Some(position) = frame.position {
                writeln!(out, "position: {position}")?;
            }
            writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        }
        FrameFormat::Text => {
            write!(
                out,
                "acceleration: {} | distance: {:.2} cm",
                frame.acceleration, frame.distance_cm
            )?;
            if let Some(position) = frame.position {
                write!(out, " | position: {position}")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
