//! Workflow module
//!
//! This module contains the conversion driver and the job that wires files,
//! codecs and reporting around it.

mod driver;
mod job;
mod progress;
mod report;

pub use driver::{ConversionMode, convert};
pub use job::ConversionJob;
pub use progress::{input_progress, track};
pub use report::{ConversionSummary, LogReporter, Reporter, SilentReporter};
