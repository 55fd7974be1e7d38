//! Console loop for the simulated sensor module.
//!
//! This crate wires the generators from `sensors` into a paced display loop:
//!
//! - JSON configuration and per-sensor seed derivation
//! - Text and JSON-lines frame output
//! - Ctrl-C handling that ends the loop cleanly
//! - A run summary that can be written as JSON
//!
//! The generators never see the loop's cancellation; only the driver checks
//! the [`ShutdownFlag`].

mod config;
mod driver;
mod format;
mod seed;
mod signal;
mod summary;

pub use config::SimConfig;
pub use driver::{run, DefaultSource, RunOptions, SimSensors, STOP_MESSAGE};
pub use format::{write_frame, Frame, FrameFormat};
pub use seed::derive_seed;
pub use signal::ShutdownFlag;
pub use summary::Summary;
