//! High-level public API for archive extraction.

use std::path::Path;

use crate::ExtractionReport;
use crate::ExtractionRequest;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::extraction::ExtractionEngine;
use crate::policy::OverwritePolicy;

/// Runs one extraction request.
///
/// Entries are written into `request.destination()`; conflicts with
/// existing paths are resolved by `policy`.
///
/// # Errors
///
/// See [`ExtractionEngine::run`].
///
/// # Examples
///
/// ```no_run
/// use unarc_core::{AlwaysOverwrite, ExtractionRequest, extract};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = ExtractionRequest::new("assets/photos.zip")?;
/// let report = extract(&request, &mut AlwaysOverwrite)?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
pub fn extract(
    request: &ExtractionRequest,
    policy: &mut dyn OverwritePolicy,
) -> Result<ExtractionReport> {
    extract_with_progress(request, policy, &mut NoopProgress)
}

/// Runs one extraction request, reporting progress to `progress`.
///
/// # Errors
///
/// See [`ExtractionEngine::run`].
pub fn extract_with_progress(
    request: &ExtractionRequest,
    policy: &mut dyn OverwritePolicy,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    ExtractionEngine::new(policy, progress).run(request)
}

/// Extracts `archive_path` into its sibling folder with default limits,
/// keeping the source archive.
///
/// # Errors
///
/// See [`ExtractionEngine::run`].
pub fn extract_archive<P: AsRef<Path>>(
    archive_path: P,
    policy: &mut dyn OverwritePolicy,
) -> Result<ExtractionReport> {
    let request = ExtractionRequest::new(archive_path)?;
    extract(&request, policy)
}
