//! Settings data structures
//!
//! This module contains the data structures for the settings file.

use anyhow::{Result, anyhow};
use oxiri::Iri;
use serde::{Deserialize, Serialize};

use crate::codec::CodecOptions;
use crate::constants::DEFAULT_XML_INDENT;
use crate::workflow::ConversionMode;

/// Defaults read from the settings file
///
/// Every field is optional in the file. Command-line flags take precedence.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Convert one statement at a time instead of loading the whole input
    pub stream: bool,
    /// Show a progress bar while reading the input
    pub progress: bool,
    /// Base IRI for relative IRIs in Turtle and RDF/XML input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_iri: Option<String>,
    /// Indentation width of RDF/XML output
    pub xml_indent: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            stream: true,
            progress: false,
            base_iri: None,
            xml_indent: DEFAULT_XML_INDENT,
        }
    }
}

impl Settings {
    /// Validates the settings
    ///
    /// # Errors
    /// Returns an error with a detailed message if the base IRI is not an
    /// absolute IRI
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_iri()?;
        Ok(())
    }

    pub fn mode(&self) -> ConversionMode {
        ConversionMode::from_stream_flag(self.stream)
    }

    /// Builds the codec options described by these settings
    ///
    /// # Errors
    /// Returns an error if the base IRI cannot be parsed
    pub fn codec_options(&self) -> Result<CodecOptions> {
        Ok(CodecOptions {
            base_iri: self.parsed_base_iri()?,
            xml_indent: self.xml_indent,
        })
    }

    fn parsed_base_iri(&self) -> Result<Option<Iri<String>>> {
        self.base_iri
            .as_ref()
            .map(|iri| {
                Iri::parse(iri.clone()).map_err(|e| {
                    anyhow!("Invalid base IRI '{}': {}\nPlease use an absolute IRI.", iri, e)
                })
            })
            .transpose()
    }
}
