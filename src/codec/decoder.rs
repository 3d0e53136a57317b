//! Statement decoders backed by the rio parsers

use std::collections::VecDeque;

use log::trace;
use rio_api::model::{Quad, Triple};
use rio_api::parser::{QuadsParser, TriplesParser};

use crate::errors::{Error, Result};

use super::Decoder;
use super::model::{Statement, Term};

/// Decoder over a triple format parser (N-Triples, Turtle, RDF/XML)
///
/// One parser step can produce several statements (a Turtle predicate list,
/// an RDF/XML description), those are queued and handed out one by one.
pub struct TripleDecoder<P> {
    parser: P,
    pending: VecDeque<Statement>,
}

impl<P: TriplesParser> TripleDecoder<P> {
    pub fn new(parser: P) -> Self {
        TripleDecoder {
            parser,
            pending: VecDeque::new(),
        }
    }
}

impl<P> Decoder for TripleDecoder<P>
where
    P: TriplesParser,
    Error: From<P::Error>,
{
    fn next_statement(&mut self) -> Result<Option<Statement>> {
        loop {
            if let Some(statement) = self.pending.pop_front() {
                return Ok(Some(statement));
            }
            if self.parser.is_end() {
                return Ok(None);
            }

            let pending = &mut self.pending;
            self.parser.parse_step(&mut |triple: Triple<'_>| -> Result<()> {
                pending.push_back(Statement::from_triple(&triple)?);
                Ok(())
            })?;
            trace!("Parser step produced {} statements", self.pending.len());
        }
    }
}

/// Decoder over a quad format parser (N-Quads)
pub struct QuadDecoder<P> {
    parser: P,
    pending: VecDeque<Statement>,
}

impl<P: QuadsParser> QuadDecoder<P> {
    pub fn new(parser: P) -> Self {
        QuadDecoder {
            parser,
            pending: VecDeque::new(),
        }
    }
}

impl<P> Decoder for QuadDecoder<P>
where
    P: QuadsParser,
    Error: From<P::Error>,
{
    fn next_statement(&mut self) -> Result<Option<Statement>> {
        loop {
            if let Some(statement) = self.pending.pop_front() {
                return Ok(Some(statement));
            }
            if self.parser.is_end() {
                return Ok(None);
            }

            let pending = &mut self.pending;
            self.parser.parse_step(&mut |quad: Quad<'_>| -> Result<()> {
                pending.push_back(statement_from_quad(&quad)?);
                Ok(())
            })?;
        }
    }
}

fn statement_from_quad(quad: &Quad<'_>) -> Result<Statement> {
    Ok(Statement {
        subject: Term::from_subject(quad.subject)?,
        predicate: quad.predicate.iri.to_string(),
        object: Term::from_object(quad.object)?,
        context: quad.graph_name.map(Term::from_graph_name),
    })
}
