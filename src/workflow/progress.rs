//! Progress display for the input stream

use std::io::Read;

use indicatif::{ProgressBar, ProgressBarIter, ProgressStyle};

const TEMPLATE: &str = "{spinner:.dim} [{bar:40}] {bytes}/{total_bytes} ({bytes_per_sec})";

/// Creates the progress bar for an input of `total_bytes`
///
/// A disabled bar is hidden but still counts, so callers do not need a
/// separate code path.
pub fn input_progress(total_bytes: u64, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total_bytes);
    if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
        bar.set_style(style.progress_chars("=>-"));
    }
    bar
}

/// Wraps `read` so every byte read advances `bar`
pub fn track<R: Read>(bar: &ProgressBar, read: R) -> ProgressBarIter<R> {
    bar.wrap_read(read)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_bar_still_counts_bytes() {
        let bar = input_progress(11, false);
        let mut reader = track(&bar, "hello world".as_bytes());

        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();

        assert_eq!(contents, "hello world");
        assert_eq!(bar.position(), 11);
    }
}
