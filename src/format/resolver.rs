//! File name to format resolution
//!
//! Formats are described by the [`FORMATS`] table. Resolution looks the
//! extension of a file name up in an index built from that table, so a new
//! format only needs a new table row.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// RDF serialization formats understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    NTriples,
    NQuads,
    RdfXml,
    Turtle,
}

/// Statement arity a format can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Subject, predicate and object only
    Triple,
    /// Triples plus an optional graph context
    Quad,
}

/// Description of a single serialization format
#[derive(Debug)]
pub struct FormatSpec {
    pub format: Format,
    /// Human readable name, used in messages
    pub name: &'static str,
    /// File extensions, matched literally
    pub extensions: &'static [&'static str],
    pub arity: Arity,
    /// Whether statements can be serialized into this format
    pub writable: bool,
}

/// Every supported format with its capabilities
pub static FORMATS: [FormatSpec; 4] = [
    FormatSpec {
        format: Format::NTriples,
        name: "N-Triples",
        extensions: &["nt"],
        arity: Arity::Triple,
        writable: true,
    },
    FormatSpec {
        format: Format::NQuads,
        name: "N-Quads",
        extensions: &["nq"],
        arity: Arity::Quad,
        // No quad formatter is wired in, only the parser
        writable: false,
    },
    FormatSpec {
        format: Format::RdfXml,
        name: "RDF/XML",
        extensions: &["rdf", "rdfxml", "xml"],
        arity: Arity::Triple,
        writable: true,
    },
    FormatSpec {
        format: Format::Turtle,
        name: "Turtle",
        extensions: &["ttl"],
        arity: Arity::Triple,
        writable: true,
    },
];

static EXTENSIONS: Lazy<HashMap<&'static str, Format>> = Lazy::new(|| {
    FORMATS
        .iter()
        .flat_map(|spec| spec.extensions.iter().map(move |ext| (*ext, spec.format)))
        .collect()
});

impl Format {
    /// Looks a format up by its file extension
    ///
    /// The comparison is case-sensitive: `ttl` is Turtle, `TTL` is not.
    pub fn from_extension(extension: &str) -> Option<Format> {
        EXTENSIONS.get(extension).copied()
    }

    /// Returns the table row describing this format
    pub fn spec(self) -> &'static FormatSpec {
        // FORMATS holds exactly one row per variant
        match self {
            Format::NTriples => &FORMATS[0],
            Format::NQuads => &FORMATS[1],
            Format::RdfXml => &FORMATS[2],
            Format::Turtle => &FORMATS[3],
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn is_quad_capable(self) -> bool {
        self.spec().arity == Arity::Quad
    }

    pub fn is_writable(self) -> bool {
        self.spec().writable
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of resolving a file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatResolution {
    Known(Format),
    /// The extension is not in the table. `None` means the name has no `.`
    Unknown { extension: Option<String> },
}

impl FormatResolution {
    pub fn format(&self) -> Option<Format> {
        match self {
            FormatResolution::Known(format) => Some(*format),
            FormatResolution::Unknown { .. } => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, FormatResolution::Known(_))
    }
}

impl fmt::Display for FormatResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatResolution::Known(format) => write!(f, "{format}"),
            FormatResolution::Unknown { extension: None } => f.write_str("no file extension"),
            FormatResolution::Unknown {
                extension: Some(extension),
            } => write!(f, "unknown extension '{extension}'"),
        }
    }
}

/// Returns everything after the rightmost `.` of `name`
///
/// A name without any `.` has no extension, which is different from a name
/// ending in `.` whose extension is empty.
pub fn file_extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|index| &name[index + 1..])
}

/// Resolves the format of a file from its name
pub fn resolve(name: &str) -> FormatResolution {
    match file_extension(name) {
        Some(extension) => match Format::from_extension(extension) {
            Some(format) => FormatResolution::Known(format),
            None => FormatResolution::Unknown {
                extension: Some(extension.to_string()),
            },
        },
        None => FormatResolution::Unknown { extension: None },
    }
}
