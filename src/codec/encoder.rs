//! Statement encoders backed by the rio formatters

use std::io::{self, Write};

use log::debug;
use rio_api::formatter::TriplesFormatter;
use rio_api::model::Triple;
use rio_turtle::{NTriplesFormatter, TurtleFormatter};
use rio_xml::RdfXmlFormatter;

use crate::errors::{Result, encode_error, unsupported_output_error};
use crate::format::Format;

use super::Encoder;
use super::model::Statement;

enum Formatter<W: Write> {
    NTriples(NTriplesFormatter<W>),
    Turtle(TurtleFormatter<W>),
    RdfXml(RdfXmlFormatter<W>),
}

impl<W: Write> Formatter<W> {
    fn format(&mut self, triple: &Triple<'_>) -> io::Result<()> {
        match self {
            Formatter::NTriples(formatter) => formatter.format(triple),
            Formatter::Turtle(formatter) => formatter.format(triple),
            Formatter::RdfXml(formatter) => formatter.format(triple),
        }
    }

    fn finish(self) -> io::Result<W> {
        match self {
            Formatter::NTriples(formatter) => formatter.finish(),
            Formatter::Turtle(formatter) => formatter.finish(),
            Formatter::RdfXml(formatter) => formatter.finish(),
        }
    }
}

/// Encoder writing statements into a triple format
///
/// Contexts are not representable in any of these formats and are ignored.
pub struct TripleEncoder<W: Write> {
    formatter: Formatter<W>,
    format: Format,
}

impl<W: Write> TripleEncoder<W> {
    /// Creates an encoder for `format` on top of `write`
    ///
    /// # Errors
    /// Returns a policy error for formats that cannot be written and an
    /// encode error when the RDF/XML prologue cannot be written
    pub fn new(format: Format, write: W, xml_indent: usize) -> Result<Self> {
        let formatter = match format {
            Format::NTriples => Formatter::NTriples(NTriplesFormatter::new(write)),
            Format::Turtle => Formatter::Turtle(TurtleFormatter::new(write)),
            Format::RdfXml => Formatter::RdfXml(
                RdfXmlFormatter::with_indentation(write, xml_indent)
                    .map_err(|e| encode_error(e, format))?,
            ),
            Format::NQuads => return Err(unsupported_output_error(format)),
        };
        Ok(TripleEncoder { formatter, format })
    }
}

impl<W: Write> Encoder for TripleEncoder<W> {
    fn write(&mut self, statement: &Statement) -> Result<()> {
        let triple = statement.as_triple()?;
        self.formatter
            .format(&triple)
            .map_err(|e| encode_error(e, self.format))
    }

    /// Sorts the statements before writing them
    ///
    /// Sorting puts statements with the same subject and predicate next to
    /// each other, which the Turtle formatter turns into `;` and `,` lists and
    /// the RDF/XML formatter into shared descriptions. Duplicates are kept.
    fn write_all(&mut self, mut statements: Vec<Statement>) -> Result<()> {
        statements.sort_unstable();
        debug!(
            "Writing {} sorted statements as {}",
            statements.len(),
            self.format
        );
        for statement in &statements {
            self.write(statement)?;
        }
        Ok(())
    }

    fn finalize(self: Box<Self>) -> Result<()> {
        let format = self.format;
        let mut write = self
            .formatter
            .finish()
            .map_err(|e| encode_error(e, format))?;
        write.flush().map_err(|e| encode_error(e, format))
    }
}
