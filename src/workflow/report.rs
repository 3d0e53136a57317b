//! Job reporting
//!
//! The conversion never prints. It hands its outcome to a [`Reporter`]
//! chosen by the caller.

use std::time::Duration;

use colored::Colorize;
use log::{info, warn};

use crate::format::Format;
use crate::logging::format_message;

use super::driver::ConversionMode;

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of statements written
    pub statements: usize,
    pub elapsed: Duration,
    pub mode: ConversionMode,
    pub input: Format,
    pub output: Format,
    /// Whether graph contexts were discarded
    pub drops_context: bool,
}

/// Receives progress notifications from a conversion job
pub trait Reporter {
    /// Called once the formats are validated, before any statement is read
    fn started(&mut self, _input: Format, _output: Format, _mode: ConversionMode) {}

    /// Called before conversion when quad input is written to a triple format
    fn context_dropped(&mut self, _input: Format, _output: Format) {}

    /// Called once after the output has been finalized
    fn finished(&mut self, summary: &ConversionSummary);
}

/// Reporter that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn finished(&mut self, _summary: &ConversionSummary) {}
}

/// Reporter writing to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn started(&mut self, input: Format, output: Format, mode: ConversionMode) {
        info!("Converting {input} to {output} ({mode} mode)");
    }

    fn context_dropped(&mut self, input: Format, output: Format) {
        warn!("{output} cannot express graphs, contexts from the {input} input are dropped");
    }

    fn finished(&mut self, summary: &ConversionSummary) {
        let message = format!(
            "Done. Converted {} statements in {:?}.",
            summary.statements, summary.elapsed
        );
        let colored_message = format!(
            "Done. Converted {} statements in {:?}.",
            summary.statements.to_string().bold().green(),
            summary.elapsed
        );
        info!("{}", format_message(&message, &colored_message));
    }
}
