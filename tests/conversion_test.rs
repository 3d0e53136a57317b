use rdf2rdf::prelude::*;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tempfile::tempdir;

const PEOPLE: &str = r#"<http://example.org/alice> <http://xmlns.com/foaf/0.1/name> "Alice" .
<http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> <http://example.org/bob> .
<http://example.org/bob> <http://xmlns.com/foaf/0.1/name> "Bob"@en .
<http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> <http://example.org/carol> .
<http://example.org/bob> <http://example.org/age> "42"^^<http://www.w3.org/2001/XMLSchema#integer> .
"#;

/// Reads back every statement of a converted file
fn read_statements(path: &Path, format: Format) -> Vec<Statement> {
    let file = File::open(path).unwrap();
    let mut decoder = open_decoder(format, BufReader::new(file), &CodecOptions::default());
    let mut statements = decoder.decode_all().unwrap();
    statements.sort();
    statements
}

fn run(input: &Path, output: &Path, mode: ConversionMode) -> Result<ConversionSummary> {
    ConversionJob::new(input, output, mode).run(&mut SilentReporter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_triple_to_turtle() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("a.nt");
        let output = temp_dir.path().join("b.ttl");
        fs::write(&input, "<http://x/s> <http://x/p> \"o\" .\n").unwrap();

        let summary = run(&input, &output, ConversionMode::Streaming).unwrap();

        assert_eq!(summary.statements, 1);
        assert_eq!(summary.input, Format::NTriples);
        assert_eq!(summary.output, Format::Turtle);
        assert!(!summary.drops_context);
        assert_eq!(
            read_statements(&output, Format::Turtle),
            vec![Statement::new(
                Term::iri("http://x/s"),
                "http://x/p",
                Term::literal("o")
            )]
        );
    }

    #[test]
    fn test_turtle_round_trip_keeps_triples() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("people.nt");
        let turtle = temp_dir.path().join("people.ttl");
        let back = temp_dir.path().join("back.nt");
        fs::write(&input, PEOPLE).unwrap();

        assert_eq!(run(&input, &turtle, ConversionMode::Streaming).unwrap().statements, 5);
        assert_eq!(run(&turtle, &back, ConversionMode::Streaming).unwrap().statements, 5);

        assert_eq!(
            read_statements(&back, Format::NTriples),
            read_statements(&input, Format::NTriples)
        );
    }

    #[test]
    fn test_rdfxml_round_trip_keeps_triples() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("people.nt");
        let xml = temp_dir.path().join("people.rdf");
        let back = temp_dir.path().join("back.nt");
        fs::write(&input, PEOPLE).unwrap();

        run(&input, &xml, ConversionMode::Streaming).unwrap();
        run(&xml, &back, ConversionMode::Streaming).unwrap();

        assert_eq!(
            read_statements(&back, Format::NTriples),
            read_statements(&input, Format::NTriples)
        );
    }

    #[test]
    fn test_batch_and_streaming_write_the_same_statements() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("people.nt");
        let streamed = temp_dir.path().join("streamed.ttl");
        let batched = temp_dir.path().join("batched.ttl");
        fs::write(&input, PEOPLE).unwrap();

        let streaming = run(&input, &streamed, ConversionMode::Streaming).unwrap();
        let batch = run(&input, &batched, ConversionMode::Batch).unwrap();

        assert_eq!(streaming.statements, batch.statements);
        assert_eq!(
            read_statements(&streamed, Format::Turtle),
            read_statements(&batched, Format::Turtle)
        );

        // Sorted input lets the formatter group both `knows` objects
        let compact = fs::read_to_string(&batched).unwrap();
        assert_eq!(compact.matches("<http://example.org/alice>").count(), 1);
    }

    #[test]
    fn test_quads_to_triples_drops_contexts() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("graphs.nq");
        let output = temp_dir.path().join("flat.nt");
        fs::write(
            &input,
            "<http://x/s> <http://x/p> <http://x/o> <http://x/g1> .\n\
             <http://x/s> <http://x/p> <http://x/o> <http://x/g2> .\n\
             <http://x/s> <http://x/q> \"default graph\" .\n",
        )
        .unwrap();

        let summary = run(&input, &output, ConversionMode::Streaming).unwrap();

        assert!(summary.drops_context);
        assert_eq!(summary.statements, 3);

        let statements = read_statements(&output, Format::NTriples);
        assert_eq!(statements.len(), 3);
        assert!(statements.iter().all(|statement| statement.context.is_none()));

        // The statement present in two graphs is written twice
        let repeated = Statement::new(
            Term::iri("http://x/s"),
            "http://x/p",
            Term::iri("http://x/o"),
        );
        assert_eq!(statements.iter().filter(|s| **s == repeated).count(), 2);
    }

    #[test]
    fn test_malformed_input_streaming_keeps_a_prefix() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("broken.nt");
        let output = temp_dir.path().join("broken.ttl");
        fs::write(
            &input,
            "<http://x/a> <http://x/p> \"1\" .\n\
             <http://x/b> <http://x/p> \"2\" .\n\
             <http://x/c> <http://x/p> this is not n-triples\n\
             <http://x/d> <http://x/p> \"4\" .\n",
        )
        .unwrap();

        let error = run(&input, &output, ConversionMode::Streaming).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Decode);

        let written = fs::read_to_string(&output).unwrap();
        assert!(!written.contains("http://x/c"));
        assert!(!written.contains("http://x/d"));
    }

    #[test]
    fn test_malformed_input_batch_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("broken.nt");
        let output = temp_dir.path().join("broken.ttl");
        fs::write(
            &input,
            "<http://x/a> <http://x/p> \"1\" .\n<http://x/b> <http://x/p> broken\n",
        )
        .unwrap();

        let error = run(&input, &output, ConversionMode::Batch).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Decode);
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_empty_input_writes_no_statements() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("empty.nt");
        let output = temp_dir.path().join("empty.ttl");
        fs::write(&input, "").unwrap();

        let summary = run(&input, &output, ConversionMode::Streaming).unwrap();
        assert_eq!(summary.statements, 0);
        assert!(read_statements(&output, Format::Turtle).is_empty());
    }

    #[test]
    fn test_rejected_pairs_leave_output_untouched() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("a.nt");
        fs::write(&input, "<http://x/s> <http://x/p> \"o\" .\n").unwrap();

        for name in ["b.nt", "b.nq", "b.json", "b"] {
            let output = temp_dir.path().join(name);
            let error = run(&input, &output, ConversionMode::Streaming).unwrap_err();
            assert_ne!(error.kind(), ErrorKind::FileOperation);
            assert!(!output.exists(), "{name} should not have been created");
        }
    }

    #[test]
    fn test_base_iri_resolves_relative_turtle() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("relative.ttl");
        let output = temp_dir.path().join("absolute.nt");
        fs::write(&input, "<alice> <knows> <bob> .\n").unwrap();

        let options = CodecOptions {
            base_iri: Some(oxiri::Iri::parse("http://example.org/".to_string()).unwrap()),
            ..CodecOptions::default()
        };
        ConversionJob::new(&input, &output, ConversionMode::Streaming)
            .with_options(options)
            .run(&mut SilentReporter)
            .unwrap();

        assert_eq!(
            read_statements(&output, Format::NTriples),
            vec![Statement::new(
                Term::iri("http://example.org/alice"),
                "http://example.org/knows",
                Term::iri("http://example.org/bob")
            )]
        );
    }
}
