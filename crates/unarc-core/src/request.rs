//! Extraction request.

use std::path::Path;
use std::path::PathBuf;

use crate::ExtractionConfig;
use crate::Result;
use crate::types::DestDir;

/// Everything one extraction run needs, built from a single user action.
///
/// The destination is always the archive's sibling folder named after its
/// stem; it cannot be overridden.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use unarc_core::ExtractionRequest;
///
/// # fn main() -> Result<(), unarc_core::ExtractionError> {
/// let request = ExtractionRequest::new("/proj/assets/photos.zip")?.delete_source(true);
/// assert_eq!(request.destination(), Path::new("/proj/assets/photos"));
/// assert!(request.delete_source_on_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    archive_path: PathBuf,
    destination: PathBuf,
    delete_source_on_success: bool,
    config: ExtractionConfig,
}

impl ExtractionRequest {
    /// Builds a request for `archive`, computing its destination.
    ///
    /// Nothing is touched on disk.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` if the path has no file stem.
    pub fn new(archive: impl AsRef<Path>) -> Result<Self> {
        let archive_path = archive.as_ref().to_path_buf();
        let destination = DestDir::path_for_archive(&archive_path)?;
        Ok(Self {
            archive_path,
            destination,
            delete_source_on_success: false,
            config: ExtractionConfig::default(),
        })
    }

    /// Delete the archive after every entry was processed.
    #[must_use]
    pub fn delete_source(mut self, delete: bool) -> Self {
        self.delete_source_on_success = delete;
        self
    }

    /// Replace the default extraction limits.
    #[must_use]
    pub fn config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// The source archive.
    #[must_use]
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// The sibling folder entries are written into.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Whether the archive is removed on success.
    #[must_use]
    pub fn delete_source_on_success(&self) -> bool {
        self.delete_source_on_success
    }

    /// Limits applied to this run.
    #[must_use]
    pub fn extraction_config(&self) -> &ExtractionConfig {
        &self.config
    }
}
