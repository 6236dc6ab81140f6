//! Error conversion utilities for CLI.
//!
//! Converts unarc-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use std::path::Path;
use unarc_core::ExtractionError;
use unarc_core::SUPPORTED_EXTENSIONS;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    match err {
        ExtractionError::Interrupted {
            entries_written,
            source,
        } => convert_extraction_error(*source, archive).context(format!(
            "Extraction of '{}' stopped after writing {entries_written} file(s); \
             files already written were left in place",
            archive.display()
        )),
        ExtractionError::PathTraversal { path } => {
            anyhow!(
                "Security violation: Archive '{}' attempted path traversal with '{}'\n\
                 HINT: This archive may be malicious. Do not extract from untrusted sources.",
                archive.display(),
                path.display()
            )
        }
        ExtractionError::SecurityViolation { reason } => {
            anyhow!(
                "Security violation in '{}': {reason}\n\
                 HINT: Use --max-depth to allow deeper entry paths if the archive is trusted.",
                archive.display()
            )
        }
        ExtractionError::QuotaExceeded { resource } => {
            anyhow!(
                "Extraction limit exceeded for '{}': {}\n\
                 HINT: Use --max-files, --max-total-size, or --max-file-size to increase limits.",
                archive.display(),
                resource
            )
        }
        ExtractionError::EmptyArchive { .. } => {
            anyhow!("Can't extract an empty archive: {}", archive.display())
        }
        ExtractionError::UnsupportedFormat { .. } => {
            anyhow!(
                "Archive format not supported: {}\n\
                 HINT: Supported extensions: {}",
                archive.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            )
        }
        ExtractionError::ArchiveOpen { reason, .. } => {
            anyhow!(
                "Failed to open archive '{}': {reason}\n\
                 HINT: The file may be corrupted, encrypted, or not match its extension.",
                archive.display()
            )
        }
        ExtractionError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or malformed.",
                archive.display(),
                reason
            )
        }
        ExtractionError::Filesystem { path, source } => {
            anyhow!(
                "Filesystem error at '{}' while extracting '{}': {source}\n\
                 HINT: Check permissions and free space in the destination folder.",
                path.display(),
                archive.display()
            )
        }
        ExtractionError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ExtractionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, archive))
}
