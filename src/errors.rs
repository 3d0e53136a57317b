use rio_turtle::TurtleError;
use rio_xml::RdfXmlError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::format::{Format, FormatResolution};

/// Side of a conversion a file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Input,
    Output,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Input => f.write_str("input"),
            Endpoint::Output => f.write_str("output"),
        }
    }
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Resolution,
    Policy,
    Decode,
    Encode,
    FileOperation,
    Configuration,
    Generic,
}

/// Custom error type for the converter
#[derive(Debug)]
pub enum Error {
    /// A file name did not map to any known format
    UnresolvedFormat {
        endpoint: Endpoint,
        path: String,
        extension: Option<String>,
    },
    /// Input and output resolve to the same format
    IdenticalFormats { resolution: FormatResolution },
    /// The output format cannot be written
    UnsupportedOutput { format: Format },
    /// Malformed input content
    Decode {
        source: Option<Box<dyn StdError + Send + Sync>>,
        detail: String,
    },
    /// Failure while writing or finishing the output
    Encode {
        source: Option<io::Error>,
        detail: String,
    },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to settings parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Generic error with a message
    Generic { message: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnresolvedFormat { .. } => ErrorKind::Resolution,
            Error::IdenticalFormats { .. } | Error::UnsupportedOutput { .. } => ErrorKind::Policy,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Encode { .. } => ErrorKind::Encode,
            Error::FileOperation { .. } => ErrorKind::FileOperation,
            Error::ConfigParsing { .. } => ErrorKind::Configuration,
            Error::Generic { .. } => ErrorKind::Generic,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnresolvedFormat {
                endpoint,
                extension,
                ..
            } if extension.as_deref().is_none_or(str::is_empty) => {
                write!(f, "Unknown file format. No file extension on {endpoint} file.")
            }
            Error::UnresolvedFormat { endpoint, path, .. } => {
                write!(f, "Unsupported file extension on {endpoint} file: {path}")
            }
            Error::IdenticalFormats { resolution } => {
                write!(
                    f,
                    "No conversion necessary. Input and output formats are identical ({resolution})."
                )
            }
            Error::UnsupportedOutput { format } => {
                write!(f, "Serializing to {format} currently not supported.")
            }
            Error::Decode { detail, .. } => {
                write!(f, "Failed to parse input: {detail}")
            }
            Error::Encode { detail, .. } => {
                write!(f, "Failed to write output: {detail}")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Decode {
                source: Some(source),
                ..
            } => Some(source.as_ref()),
            Error::Encode {
                source: Some(source),
                ..
            } => Some(source),
            Error::FileOperation { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<TurtleError> for Error {
    fn from(err: TurtleError) -> Self {
        Error::Decode {
            detail: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<RdfXmlError> for Error {
    fn from(err: RdfXmlError) -> Self {
        Error::Decode {
            detail: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Custom Result type for the converter
///
/// # Examples
/// ```
/// use rdf2rdf::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     // Return success
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an unresolved format error
pub fn unresolved_format_error(endpoint: Endpoint, path: &str, extension: Option<&str>) -> Error {
    Error::UnresolvedFormat {
        endpoint,
        path: path.to_string(),
        extension: extension.map(str::to_string),
    }
}

/// Helper function to create an identical formats error
pub fn identical_formats_error(resolution: &FormatResolution) -> Error {
    Error::IdenticalFormats {
        resolution: resolution.clone(),
    }
}

/// Helper function to create an unsupported output error
pub fn unsupported_output_error(format: Format) -> Error {
    Error::UnsupportedOutput { format }
}

/// Helper function to create a decode error without an underlying cause
pub fn decode_error(detail: &str) -> Error {
    Error::Decode {
        source: None,
        detail: detail.to_string(),
    }
}

/// Helper function to create an encode error from an I/O failure
pub fn encode_error(err: io::Error, format: Format) -> Error {
    Error::Encode {
        detail: format!("{format} serializer: {err}"),
        source: Some(err),
    }
}

/// Helper function to create an encode error for a statement that cannot be written
pub fn unencodable_statement_error(detail: &str) -> Error {
    Error::Encode {
        source: None,
        detail: detail.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
