//! Extraction reporting.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Result of a completed extraction run.
///
/// `files_extracted` is the written-entry count: directories are tracked
/// separately and never counted as written entries.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Directory the archive was extracted into.
    pub destination: PathBuf,

    /// Number of files written.
    pub files_extracted: usize,

    /// Number of directory entries created or kept.
    pub directories_created: usize,

    /// Number of files left untouched because the policy answered `Skip`.
    pub files_skipped: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction operation.
    pub duration: Duration,

    /// Whether the source archive was removed after extraction.
    pub source_deleted: bool,

    /// Non-fatal problems, such as a failed source deletion.
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    /// Creates an empty report for `destination`.
    #[must_use]
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Returns total number of entries processed, skipped files included.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created + self.files_skipped
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// One-line completion message.
    ///
    /// ```
    /// use unarc_core::ExtractionReport;
    ///
    /// let mut report = ExtractionReport::new("/proj/assets/photos");
    /// report.files_extracted = 2;
    /// assert_eq!(report.summary(), "Extracted 2 entries to: /proj/assets/photos");
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Extracted {} entries to: {}",
            self.files_extracted,
            self.destination.display()
        )
    }
}

/// Callback trait for progress reporting during extraction.
///
/// `on_complete` doubles as the post-extraction notification: hosts that
/// index the filesystem can refresh their view of `destination` there.
///
/// # Examples
///
/// ```
/// use unarc_core::ProgressCallback;
/// use std::path::Path;
///
/// struct SimpleProgress;
///
/// impl ProgressCallback for SimpleProgress {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("Processing {}/{}: {}", current, total, path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, path: &Path) {
///         println!("Completed: {}", path.display());
///     }
///
///     fn on_complete(&mut self, destination: &Path) {
///         println!("New files under {}", destination.display());
///     }
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called when starting to process an entry.
    ///
    /// # Arguments
    ///
    /// * `path` - Archive-relative path of the entry
    /// * `total` - Total number of entries in the archive
    /// * `current` - Current entry number (1-indexed)
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called after a file's bytes were written.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when an entry has been processed, skipped ones included.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once after the last entry and after the source archive was
    /// deleted, if deletion was requested.
    fn on_complete(&mut self, destination: &Path);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self, _destination: &Path) {}
}
