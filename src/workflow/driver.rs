//! Conversion driver
//!
//! Moves statements from a decoder to an encoder, either one at a time or as
//! one complete batch.

use std::fmt;

use log::{debug, trace};

use crate::codec::{Decoder, Encoder};
use crate::errors::Result;

/// How statements travel from the decoder to the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    /// One statement in flight, input order preserved
    #[default]
    Streaming,
    /// Whole input in memory, written in one call that may reorder
    Batch,
}

impl ConversionMode {
    pub fn from_stream_flag(stream: bool) -> Self {
        if stream {
            ConversionMode::Streaming
        } else {
            ConversionMode::Batch
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionMode::Streaming => f.write_str("streaming"),
            ConversionMode::Batch => f.write_str("batch"),
        }
    }
}

/// Converts every statement of `decoder` into `encoder`
///
/// The encoder is finalized exactly once after the last write. Any error
/// aborts the conversion right away; the encoder is then dropped without
/// being finalized, and whatever it already flushed stays in the output.
///
/// # Arguments
/// * `decoder` - Source of statements
/// * `encoder` - Sink of statements
/// * `mode` - Streaming or batch conversion
///
/// # Returns
/// * `Result<usize>` - Number of statements written
///
/// # Errors
/// Returns the first decode or encode error
pub fn convert(
    mut decoder: Box<dyn Decoder + '_>,
    mut encoder: Box<dyn Encoder + '_>,
    mode: ConversionMode,
) -> Result<usize> {
    let count = match mode {
        ConversionMode::Streaming => stream_statements(decoder.as_mut(), encoder.as_mut())?,
        ConversionMode::Batch => batch_statements(decoder.as_mut(), encoder.as_mut())?,
    };

    encoder.finalize()?;
    debug!("Converted {count} statements in {mode} mode");

    Ok(count)
}

fn stream_statements(
    decoder: &mut (dyn Decoder + '_),
    encoder: &mut (dyn Encoder + '_),
) -> Result<usize> {
    let mut count = 0;
    while let Some(statement) = decoder.next_statement()? {
        encoder.write(&statement)?;
        count += 1;
        trace!("Wrote statement {count}");
    }
    Ok(count)
}

fn batch_statements(
    decoder: &mut (dyn Decoder + '_),
    encoder: &mut (dyn Encoder + '_),
) -> Result<usize> {
    let statements = decoder.decode_all()?;
    let count = statements.len();
    debug!("Read {count} statements into memory");

    encoder.write_all(statements)?;
    Ok(count)
}
