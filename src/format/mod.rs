//! Format resolution
//!
//! This module maps file names to RDF serialization formats.

mod resolver;

pub use resolver::{Arity, FORMATS, Format, FormatResolution, FormatSpec, file_extension, resolve};
