//! Conversion policy
//!
//! Decides whether an input/output format pair may be converted at all and
//! whether graph context is lost on the way.

use log::debug;

use crate::errors::{
    Endpoint, Result, identical_formats_error, unresolved_format_error, unsupported_output_error,
};
use crate::format::{Format, FormatResolution};

/// An accepted format pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub input: Format,
    pub output: Format,
    /// Quad input written to a triple-only format: every context is discarded
    pub drops_context: bool,
}

/// Validates a pair of resolved formats
///
/// Rules are checked in order and the first match wins:
/// 1. identical resolutions are rejected, there is nothing to convert
/// 2. an unresolved input, then an unresolved output, is rejected
/// 3. an output format that cannot be written is rejected
/// 4. anything else is accepted
///
/// # Arguments
/// * `input` - Resolution of the input file name
/// * `output` - Resolution of the output file name
/// * `input_name` - Input file name, used in error messages
/// * `output_name` - Output file name, used in error messages
///
/// # Errors
/// Returns a policy error for rules 1 and 3, a resolution error for rule 2
pub fn validate_named(
    input: &FormatResolution,
    output: &FormatResolution,
    input_name: &str,
    output_name: &str,
) -> Result<Validation> {
    if input == output {
        return Err(identical_formats_error(input));
    }

    let input = known(input, Endpoint::Input, input_name)?;
    let output = known(output, Endpoint::Output, output_name)?;

    if !output.is_writable() {
        return Err(unsupported_output_error(output));
    }

    let drops_context = input.is_quad_capable() && !output.is_quad_capable();
    debug!("Accepted conversion {input} -> {output} (drops context: {drops_context})");

    Ok(Validation {
        input,
        output,
        drops_context,
    })
}

/// Validates a pair of resolved formats without file names for messages
pub fn validate(input: &FormatResolution, output: &FormatResolution) -> Result<Validation> {
    validate_named(input, output, "", "")
}

fn known(resolution: &FormatResolution, endpoint: Endpoint, name: &str) -> Result<Format> {
    match resolution {
        FormatResolution::Known(format) => Ok(*format),
        FormatResolution::Unknown { extension } => Err(unresolved_format_error(
            endpoint,
            name,
            extension.as_deref(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, ErrorKind};
    use crate::format::FORMATS;

    fn all_resolutions() -> Vec<FormatResolution> {
        let mut resolutions: Vec<FormatResolution> = FORMATS
            .iter()
            .map(|spec| FormatResolution::Known(spec.format))
            .collect();
        resolutions.push(FormatResolution::Unknown { extension: None });
        resolutions.push(FormatResolution::Unknown {
            extension: Some("csv".to_string()),
        });
        resolutions
    }

    #[test]
    fn test_identical_formats_are_rejected() {
        for resolution in all_resolutions() {
            let result = validate(&resolution, &resolution);
            assert!(
                matches!(result, Err(Error::IdenticalFormats { .. })),
                "{resolution} -> {resolution} should be rejected as identical"
            );
        }
    }

    #[test]
    fn test_aliases_of_one_format_are_identical() {
        let input = crate::format::resolve("a.rdf");
        let output = crate::format::resolve("b.xml");
        let error = validate(&input, &output).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Policy);
    }

    #[test]
    fn test_nquads_output_is_rejected() {
        let output = FormatResolution::Known(Format::NQuads);
        for input in all_resolutions() {
            if input == output {
                continue;
            }
            let error = validate(&input, &output).unwrap_err();
            if input.is_known() {
                assert!(
                    matches!(error, Error::UnsupportedOutput { format: Format::NQuads }),
                    "{input} -> N-Quads should be unsupported"
                );
            } else {
                assert_eq!(error.kind(), ErrorKind::Resolution);
            }
        }
    }

    #[test]
    fn test_unresolved_input_is_checked_before_output() {
        let input = FormatResolution::Unknown { extension: None };
        let output = FormatResolution::Unknown {
            extension: Some("csv".to_string()),
        };
        let error = validate_named(&input, &output, "data", "out.csv").unwrap_err();
        assert!(matches!(
            error,
            Error::UnresolvedFormat {
                endpoint: Endpoint::Input,
                ..
            }
        ));
    }

    #[test]
    fn test_unresolved_output() {
        let input = FormatResolution::Known(Format::Turtle);
        let output = FormatResolution::Unknown {
            extension: Some("json".to_string()),
        };
        let error = validate_named(&input, &output, "in.ttl", "out.json").unwrap_err();
        assert!(format!("{error}").contains("output file: out.json"));
    }

    #[test]
    fn test_quad_to_triple_drops_context() {
        let validation = validate(
            &FormatResolution::Known(Format::NQuads),
            &FormatResolution::Known(Format::Turtle),
        )
        .unwrap();
        assert!(validation.drops_context);
        assert_eq!(validation.input, Format::NQuads);
        assert_eq!(validation.output, Format::Turtle);
    }

    #[test]
    fn test_triple_to_triple_keeps_everything() {
        let validation = validate(
            &FormatResolution::Known(Format::NTriples),
            &FormatResolution::Known(Format::RdfXml),
        )
        .unwrap();
        assert!(!validation.drops_context);
    }
}
