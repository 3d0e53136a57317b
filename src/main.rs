use anyhow::Result;
use human_panic::setup_panic;
use log::error;

use rdf2rdf::cli::{get_config_path, get_log_file, get_matches, get_verbosity, job_from_matches};
use rdf2rdf::prelude::*;

fn run() -> Result<()> {
    let matches = get_matches();
    init_logger(get_verbosity(&matches), get_log_file(&matches).as_deref())?;

    let settings = read_settings(get_config_path(&matches))?;
    let job = job_from_matches(&matches, &settings)?;
    job.run(&mut LogReporter)?;

    Ok(())
}

fn main() {
    setup_panic!();

    if let Err(e) = run() {
        // The logger may not be up yet if its own setup failed
        if log::log_enabled!(log::Level::Error) {
            error!("{e:#}");
        } else {
            eprintln!("ERROR: {e:#}");
        }
        std::process::exit(1);
    }
}
