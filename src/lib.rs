//! Conversion of RDF data between serialization formats
//!
//! Formats are chosen by file extension. Statements flow from a
//! [`codec::Decoder`] to a [`codec::Encoder`] either one at a time or, in
//! batch mode, after the whole input has been read and sorted.

pub mod cli;
pub mod codec;
pub mod config;
pub mod errors;
pub mod format;
pub mod logging;
pub mod policy;
pub mod workflow;

mod constants;
mod utils;

pub mod prelude {
    pub use crate::codec::{CodecOptions, Decoder, Encoder, Statement, Term, open_decoder, open_encoder};
    pub use crate::config::{Settings, read_settings};
    pub use crate::errors::{
        Endpoint, ErrorKind, config_parsing_error, decode_error, encode_error,
        file_operation_error, generic_error, identical_formats_error, unresolved_format_error,
        unsupported_output_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::format::{Format, FormatResolution, resolve};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::policy::{Validation, validate};
    pub use crate::workflow::{
        ConversionJob, ConversionMode, ConversionSummary, LogReporter, Reporter, SilentReporter,
        convert,
    };
}
