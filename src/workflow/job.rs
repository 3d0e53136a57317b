//! Conversion job
//!
//! A job ties two file paths and a mode together, checks that the
//! conversion makes sense and then runs it exactly once.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::debug;

use crate::codec::{CodecOptions, open_decoder, open_encoder};
use crate::errors::{Result, file_operation_error};
use crate::format::resolve;
use crate::policy::{Validation, validate_named};

use super::driver::{ConversionMode, convert};
use super::progress::{input_progress, track};
use super::report::{ConversionSummary, Reporter};

/// A single conversion from one file into another
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: ConversionMode,
    pub options: CodecOptions,
    /// Show a progress bar while reading the input
    pub progress: bool,
}

impl ConversionJob {
    /// Creates a job with default codec options and no progress display
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, mode: ConversionMode) -> Self {
        ConversionJob {
            input: input.into(),
            output: output.into(),
            mode,
            options: CodecOptions::default(),
            progress: false,
        }
    }

    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Resolves both formats and validates the pair
    ///
    /// No file is touched.
    ///
    /// # Errors
    /// Returns a resolution or policy error
    pub fn plan(&self) -> Result<Validation> {
        validate_named(
            &resolve(&file_name(&self.input)),
            &resolve(&file_name(&self.output)),
            &self.input.to_string_lossy(),
            &self.output.to_string_lossy(),
        )
    }

    /// Runs the conversion
    ///
    /// The formats are validated before any file is opened, so a rejected
    /// job never creates or truncates the output. Both files are closed when
    /// this returns, whatever the outcome.
    ///
    /// # Arguments
    /// * `reporter` - Receives the job notifications
    ///
    /// # Returns
    /// * `Result<ConversionSummary>` - Statement count and elapsed time
    ///
    /// # Errors
    /// Returns the first resolution, policy, file, decode or encode error
    pub fn run(self, reporter: &mut dyn Reporter) -> Result<ConversionSummary> {
        let validation = self.plan()?;

        let input_file = File::open(&self.input)
            .map_err(|e| file_operation_error(e, self.input.clone(), "open"))?;
        let input_size = input_file
            .metadata()
            .map_err(|e| file_operation_error(e, self.input.clone(), "stat"))?
            .len();
        let output_file = File::create(&self.output)
            .map_err(|e| file_operation_error(e, self.output.clone(), "create"))?;
        debug!(
            "Opened {} ({} bytes) and {}",
            self.input.display(),
            input_size,
            self.output.display()
        );

        reporter.started(validation.input, validation.output, self.mode);
        if validation.drops_context {
            reporter.context_dropped(validation.input, validation.output);
        }

        let bar = input_progress(input_size, self.progress);
        let decoder = open_decoder(
            validation.input,
            BufReader::new(track(&bar, input_file)),
            &self.options,
        );
        let encoder = open_encoder(validation.output, BufWriter::new(output_file), &self.options)?;

        let started = Instant::now();
        let result = convert(decoder, encoder, self.mode);
        bar.finish_and_clear();
        let statements = result?;

        let summary = ConversionSummary {
            statements,
            elapsed: started.elapsed(),
            mode: self.mode,
            input: validation.input,
            output: validation.output,
            drops_context: validation.drops_context,
        };
        reporter.finished(&summary);

        Ok(summary)
    }
}

/// Last component of `path`, where the extension lives
fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::format::Format;

    #[test]
    fn test_plan_uses_extensions() {
        let job = ConversionJob::new("dir/in.nq", "dir/out.ttl", ConversionMode::Streaming);
        let validation = job.plan().unwrap();

        assert_eq!(validation.input, Format::NQuads);
        assert_eq!(validation.output, Format::Turtle);
        assert!(validation.drops_context);
    }

    #[test]
    fn test_dots_in_directories_are_ignored() {
        let job = ConversionJob::new("v1.2/data", "out.ttl", ConversionMode::Streaming);
        let error = job.plan().unwrap_err();

        assert_eq!(
            format!("{error}"),
            "Unknown file format. No file extension on input file."
        );
    }

    #[test]
    fn test_rejected_job_does_not_touch_files() {
        let job = ConversionJob::new(
            "does/not/exist.nt",
            "does/not/exist.nq",
            ConversionMode::Streaming,
        );
        let error = job
            .run(&mut crate::workflow::report::SilentReporter)
            .unwrap_err();

        // Policy is checked before the missing input is noticed
        assert_eq!(error.kind(), ErrorKind::Policy);
    }

    #[test]
    fn test_missing_input_is_a_file_error() {
        let job = ConversionJob::new(
            "does/not/exist.nt",
            "does/not/exist.ttl",
            ConversionMode::Streaming,
        );
        let error = job
            .run(&mut crate::workflow::report::SilentReporter)
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::FileOperation);
        assert!(format!("{error}").contains("open"));
    }
}
