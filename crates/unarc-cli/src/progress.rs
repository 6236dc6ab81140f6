//! Progress bar implementation for CLI operations.

use crate::output::format_size;
use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::path::Path;
use unarc_core::ProgressCallback;

/// CLI progress bar wrapper implementing `ProgressCallback`.
///
/// Counts entries; the bar length is set from the first `on_entry_start`
/// because the entry total is only known once the archive is open.
pub struct CliProgress {
    bar: ProgressBar,
    bytes_written: u64,
}

impl CliProgress {
    /// Creates an empty progress bar labelled `message`.
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new(0);

        // Template: "Extracting [████████░░░░] 42/100 entries (15.2 MB, 00:00:12)"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} entries ({prefix}, {elapsed_precise})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );

        bar.set_message(message.to_string());
        bar.set_prefix(format_size(0));

        Self {
            bar,
            bytes_written: 0,
        }
    }

    /// Handle to the underlying bar, for suspending it around prompts.
    #[must_use]
    pub fn bar(&self) -> ProgressBar {
        self.bar.clone()
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, _path: &Path, total: usize, current: usize) {
        if current == 1 {
            self.bar.set_length(total as u64);
        }
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
        self.bar.set_prefix(format_size(self.bytes_written));
    }

    fn on_entry_complete(&mut self, _path: &Path) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self, _destination: &Path) {
        self.bar.finish_and_clear();
    }
}
