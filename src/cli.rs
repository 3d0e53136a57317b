use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, value_parser};
use oxiri::Iri;

use crate::config::Settings;
use crate::constants::{
    AFTER_HELP, BASE_HELP, CONFIG_HELP, INPUT_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, OUTPUT_HELP,
    PROGRESS_HELP, STREAM_HELP, VERBOSE_HELP,
};
use crate::logging::LogLevel;
use crate::utils::expand_path;
use crate::workflow::{ConversionJob, ConversionMode};

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `in`: Input file
/// - `out`: Output file
/// - `stream`: Streaming or batch conversion
/// - `progress`: Show a progress bar
/// - `base`: Base IRI for relative IRIs
/// - `config`: Path to the settings file
/// - `verbose`: Increase verbosity level
/// - `log_file`: Additional log file
pub fn build_command() -> Command {
    let arg_input = Arg::new("in")
        .short('i')
        .long("in")
        .value_name("FILE")
        .help(INPUT_HELP)
        .required(true);

    let arg_output = Arg::new("out")
        .short('o')
        .long("out")
        .value_name("FILE")
        .help(OUTPUT_HELP)
        .required(true);

    // `--stream` alone means true, `--stream=false` switches to batch mode
    let arg_stream = Arg::new("stream")
        .short('s')
        .long("stream")
        .value_name("BOOL")
        .help(STREAM_HELP)
        .value_parser(value_parser!(bool))
        .num_args(0..=1)
        .default_missing_value("true");

    let arg_progress = Arg::new("progress")
        .short('p')
        .long("progress")
        .help(PROGRESS_HELP)
        .action(ArgAction::SetTrue);

    let arg_base = Arg::new("base")
        .short('b')
        .long("base")
        .value_name("IRI")
        .help(BASE_HELP);

    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .after_help(AFTER_HELP)
        .arg(arg_input)
        .arg(arg_output)
        .arg(arg_stream)
        .arg(arg_progress)
        .arg(arg_base)
        .arg(arg_config)
        .arg(arg_verbose)
        .arg(arg_log_file)
}

/// Parses the process arguments
///
/// Exits with a usage message when the arguments are invalid.
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Gets the log file requested on the command line, if any
pub fn get_log_file(matches: &ArgMatches) -> Option<PathBuf> {
    matches
        .get_one::<String>("log_file")
        .filter(|path| !path.is_empty())
        .map(|path| expand_path(path))
}

pub fn get_config_path(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("config").map(String::as_str)
}

/// Builds the conversion job described by the arguments
///
/// Flags given on the command line take precedence over the settings file.
///
/// # Errors
/// Returns an error if the settings or the `--base` IRI are invalid
pub fn job_from_matches(matches: &ArgMatches, settings: &Settings) -> Result<ConversionJob> {
    let input = matches
        .get_one::<String>("in")
        .ok_or_else(|| anyhow!("Missing input file"))?;
    let output = matches
        .get_one::<String>("out")
        .ok_or_else(|| anyhow!("Missing output file"))?;

    let mode = matches
        .get_one::<bool>("stream")
        .map_or_else(|| settings.mode(), |&stream| ConversionMode::from_stream_flag(stream));
    let progress = settings.progress || matches.get_flag("progress");

    let mut options = settings.codec_options()?;
    if let Some(base) = matches.get_one::<String>("base") {
        let iri = Iri::parse(base.clone())
            .map_err(|e| anyhow!("Invalid base IRI '{}': {}", base, e))?;
        options.base_iri = Some(iri);
    }

    Ok(ConversionJob::new(expand_path(input), expand_path(output), mode)
        .with_options(options)
        .with_progress(progress))
}
