//! Owned statement model
//!
//! Parsers hand out borrowed terms that only live for one callback, so every
//! statement is copied into these owned types before it leaves a decoder.

use std::fmt;

use rio_api::model::{
    BlankNode, GraphName, Literal as RioLiteral, NamedNode, Subject, Term as RioTerm, Triple,
};

use crate::errors::{Result, decode_error, unencodable_statement_error};

/// A literal value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Literal {
    Simple {
        value: String,
    },
    LanguageTagged {
        value: String,
        language: String,
    },
    Typed {
        value: String,
        datatype: String,
    },
}

/// A single RDF term
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Iri(String),
    BlankNode(String),
    Literal(Literal),
}

impl Term {
    pub fn iri(iri: &str) -> Self {
        Term::Iri(iri.to_string())
    }

    pub fn blank(id: &str) -> Self {
        Term::BlankNode(id.to_string())
    }

    pub fn literal(value: &str) -> Self {
        Term::Literal(Literal::Simple {
            value: value.to_string(),
        })
    }

    pub(crate) fn from_subject(subject: Subject<'_>) -> Result<Self> {
        match subject {
            Subject::NamedNode(node) => Ok(Term::Iri(node.iri.to_string())),
            Subject::BlankNode(node) => Ok(Term::BlankNode(node.id.to_string())),
            #[allow(unreachable_patterns)]
            _ => Err(decode_error("quoted triples are not supported")),
        }
    }

    pub(crate) fn from_object(object: RioTerm<'_>) -> Result<Self> {
        match object {
            RioTerm::NamedNode(node) => Ok(Term::Iri(node.iri.to_string())),
            RioTerm::BlankNode(node) => Ok(Term::BlankNode(node.id.to_string())),
            RioTerm::Literal(literal) => Ok(Term::Literal(literal.into())),
            #[allow(unreachable_patterns)]
            _ => Err(decode_error("quoted triples are not supported")),
        }
    }

    pub(crate) fn from_graph_name(graph_name: GraphName<'_>) -> Self {
        match graph_name {
            GraphName::NamedNode(node) => Term::Iri(node.iri.to_string()),
            GraphName::BlankNode(node) => Term::BlankNode(node.id.to_string()),
        }
    }

    fn as_subject(&self) -> Result<Subject<'_>> {
        match self {
            Term::Iri(iri) => Ok(Subject::NamedNode(NamedNode { iri })),
            Term::BlankNode(id) => Ok(Subject::BlankNode(BlankNode { id })),
            Term::Literal(_) => Err(unencodable_statement_error(&format!(
                "literal {self} cannot be used as a subject"
            ))),
        }
    }

    fn as_object(&self) -> RioTerm<'_> {
        match self {
            Term::Iri(iri) => RioTerm::NamedNode(NamedNode { iri }),
            Term::BlankNode(id) => RioTerm::BlankNode(BlankNode { id }),
            Term::Literal(literal) => RioTerm::Literal(literal.as_rio()),
        }
    }
}

impl Literal {
    fn as_rio(&self) -> RioLiteral<'_> {
        match self {
            Literal::Simple { value } => RioLiteral::Simple { value },
            Literal::LanguageTagged { value, language } => {
                RioLiteral::LanguageTaggedString { value, language }
            }
            Literal::Typed { value, datatype } => RioLiteral::Typed {
                value,
                datatype: NamedNode { iri: datatype },
            },
        }
    }
}

impl From<RioLiteral<'_>> for Literal {
    fn from(literal: RioLiteral<'_>) -> Self {
        match literal {
            RioLiteral::Simple { value } => Literal::Simple {
                value: value.to_string(),
            },
            RioLiteral::LanguageTaggedString { value, language } => Literal::LanguageTagged {
                value: value.to_string(),
                language: language.to_string(),
            },
            RioLiteral::Typed { value, datatype } => Literal::Typed {
                value: value.to_string(),
                datatype: datatype.iri.to_string(),
            },
        }
    }
}

/// Terms print in N-Triples syntax
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_object())
    }
}

/// A triple with an optional graph context
///
/// Statements order by subject, then predicate, object and context, so
/// sorting a batch puts statements sharing a subject and predicate next to
/// each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Statement {
    pub subject: Term,
    /// Predicate IRI
    pub predicate: String,
    pub object: Term,
    pub context: Option<Term>,
}

impl Statement {
    pub fn new(subject: Term, predicate: &str, object: Term) -> Self {
        Statement {
            subject,
            predicate: predicate.to_string(),
            object,
            context: None,
        }
    }

    pub fn with_context(mut self, context: Term) -> Self {
        self.context = Some(context);
        self
    }

    pub(crate) fn from_triple(triple: &Triple<'_>) -> Result<Self> {
        Ok(Statement {
            subject: Term::from_subject(triple.subject)?,
            predicate: triple.predicate.iri.to_string(),
            object: Term::from_object(triple.object)?,
            context: None,
        })
    }

    /// Borrows the statement as a triple, ignoring any context
    pub(crate) fn as_triple(&self) -> Result<Triple<'_>> {
        Ok(Triple {
            subject: self.subject.as_subject()?,
            predicate: NamedNode {
                iri: &self.predicate,
            },
            object: self.object.as_object(),
        })
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {}", self.subject, self.predicate, self.object)?;
        if let Some(context) = &self.context {
            write!(f, " {context}")?;
        }
        f.write_str(" .")
    }
}
