//! Statement codecs
//!
//! The conversion pipeline only talks to the [`Decoder`] and [`Encoder`]
//! traits. The implementations in this module are backed by the rio parsers
//! and formatters, any other grammar implementation can be plugged in by
//! implementing the traits.

mod decoder;
mod encoder;
mod model;

use std::io::{BufRead, Write};

use oxiri::Iri;
use rio_turtle::{NQuadsParser, NTriplesParser, TurtleParser};
use rio_xml::RdfXmlParser;

use crate::constants::DEFAULT_XML_INDENT;
use crate::errors::Result;
use crate::format::Format;

pub use decoder::{QuadDecoder, TripleDecoder};
pub use encoder::TripleEncoder;
pub use model::{Literal, Statement, Term};

/// Source of statements
pub trait Decoder {
    /// Returns the next statement, or `None` at the end of the input
    ///
    /// # Errors
    /// Returns a decode error for malformed input. The decoder should not be
    /// used after an error.
    fn next_statement(&mut self) -> Result<Option<Statement>>;

    /// Reads every remaining statement
    fn decode_all(&mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();
        while let Some(statement) = self.next_statement()? {
            statements.push(statement);
        }
        Ok(statements)
    }

    /// Iterates over the remaining statements
    fn statements(&mut self) -> Statements<'_, Self>
    where
        Self: Sized,
    {
        Statements { decoder: self }
    }
}

impl<D: Decoder + ?Sized> Decoder for Box<D> {
    fn next_statement(&mut self) -> Result<Option<Statement>> {
        (**self).next_statement()
    }

    fn decode_all(&mut self) -> Result<Vec<Statement>> {
        (**self).decode_all()
    }
}

/// Iterator returned by [`Decoder::statements`]
pub struct Statements<'a, D: ?Sized> {
    decoder: &'a mut D,
}

impl<D: Decoder + ?Sized> Iterator for Statements<'_, D> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decoder.next_statement().transpose()
    }
}

/// Sink of statements
pub trait Encoder {
    /// Writes one statement right away
    fn write(&mut self, statement: &Statement) -> Result<()>;

    /// Writes a complete set of statements
    ///
    /// Implementations may reorder and group the statements to produce a
    /// denser serialization, the written multiset stays the same.
    fn write_all(&mut self, statements: Vec<Statement>) -> Result<()> {
        for statement in &statements {
            self.write(statement)?;
        }
        Ok(())
    }

    /// Finishes the serialization and flushes the output
    ///
    /// Consumes the encoder, so it runs at most once.
    fn finalize(self: Box<Self>) -> Result<()>;
}

/// Parser and formatter options
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// Base IRI for relative IRIs in Turtle and RDF/XML input
    pub base_iri: Option<Iri<String>>,
    /// Indentation width of RDF/XML output
    pub xml_indent: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            base_iri: None,
            xml_indent: DEFAULT_XML_INDENT,
        }
    }
}

/// Creates a decoder reading `format` from `read`
pub fn open_decoder<'r, R>(format: Format, read: R, options: &CodecOptions) -> Box<dyn Decoder + 'r>
where
    R: BufRead + 'r,
{
    match format {
        Format::NTriples => Box::new(TripleDecoder::new(NTriplesParser::new(read))),
        Format::NQuads => Box::new(QuadDecoder::new(NQuadsParser::new(read))),
        Format::Turtle => Box::new(TripleDecoder::new(TurtleParser::new(
            read,
            options.base_iri.clone(),
        ))),
        Format::RdfXml => Box::new(TripleDecoder::new(RdfXmlParser::new(
            read,
            options.base_iri.clone(),
        ))),
    }
}

/// Creates an encoder writing `format` into `write`
///
/// # Errors
/// Returns a policy error when `format` cannot be written
pub fn open_encoder<'w, W>(
    format: Format,
    write: W,
    options: &CodecOptions,
) -> Result<Box<dyn Encoder + 'w>>
where
    W: Write + 'w,
{
    Ok(Box::new(TripleEncoder::new(format, write, options.xml_indent)?))
}
