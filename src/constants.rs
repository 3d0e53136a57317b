/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "rdf2rdf";

/// Name of the settings file looked up in the configuration directory
pub const SETTINGS_FILE_DEFAULT: &str = "settings.yaml";

/// No log file unless one is requested
pub const LOG_FILE_DEFAULT: &str = "";

/// Default indentation width of RDF/XML output
pub const DEFAULT_XML_INDENT: usize = 2;

/// Help text for the input command-line option
pub const INPUT_HELP: &str = "Input file, its extension selects the input format";

/// Help text for the output command-line option
pub const OUTPUT_HELP: &str = "Output file, its extension selects the output format";

/// Help text for the stream command-line option
pub const STREAM_HELP: &str =
    "Streaming mode (default true). Use --stream=false to load all data into memory and write compact output";

/// Help text for the progress command-line option
pub const PROGRESS_HELP: &str = "Show a progress indicator while reading the input";

/// Help text for the base IRI command-line option
pub const BASE_HELP: &str = "Base IRI used to resolve relative IRIs in Turtle and RDF/XML input";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read settings from a specific file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Extended help describing formats and modes
pub const AFTER_HELP: &str = "\
By default the converter streams both input and output, emitting converted
statements as soon as they are available, so huge files convert with a
minimal memory footprint. With --stream=false all data is loaded into memory
first, which allows sorting the statements and writing more compact Turtle
with grouped predicate and object lists.

Converting from a quad format to a triple format discards each statement's
context (graph). Converting into N-Quads is not supported.

Formats are determined by file extension:

  Format    | File extension
  ----------|-------------------
  N-Triples | .nt
  N-Quads   | .nq
  RDF/XML   | .rdf .rdfxml .xml
  Turtle    | .ttl";
