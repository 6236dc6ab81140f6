//! Core extraction engine.
//!
//! One run walks the archive once, in the reader's order, writing each
//! entry under the destination folder. Conflicts with existing paths go
//! through an [`OverwriteState`]; ancestor directories are created without
//! asking. There is no rollback: a fatal error leaves already written files
//! in place and is reported as [`ExtractionError::Interrupted`].

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::ExtractionConfig;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::ExtractionRequest;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::formats::ArchiveEntry;
use crate::formats::EntryVisitor;
use crate::formats::common::create_directory;
use crate::formats::common::ensure_parent;
use crate::formats::common::write_file;
use crate::formats::detect::detect_format;
use crate::formats::open_archive;
use crate::policy::OverwriteDecision;
use crate::policy::OverwritePolicy;
use crate::policy::OverwriteState;
use crate::security::QuotaTracker;
use crate::types::DestDir;
use crate::types::EntryType;
use crate::types::SafePath;
use crate::types::normalize_lexically;

/// Main extraction engine.
pub struct ExtractionEngine<'a> {
    policy: &'a mut dyn OverwritePolicy,
    progress: &'a mut dyn ProgressCallback,
}

impl<'a> ExtractionEngine<'a> {
    /// Creates an engine that resolves conflicts with `policy` and reports
    /// to `progress`.
    pub fn new(
        policy: &'a mut dyn OverwritePolicy,
        progress: &'a mut dyn ProgressCallback,
    ) -> Self {
        Self { policy, progress }
    }

    /// Extracts `request.archive_path()` into its sibling destination.
    ///
    /// # Errors
    ///
    /// - `UnsupportedFormat` for an unknown extension (nothing is created)
    /// - `Filesystem` if the destination cannot be created
    /// - `ArchiveOpen` if the archive cannot be read
    /// - `EmptyArchive` if it has no entries (only the destination exists)
    /// - `Interrupted` wrapping the first fatal error of the entry loop
    pub fn run(self, request: &ExtractionRequest) -> Result<ExtractionReport> {
        let start = Instant::now();
        let archive_path = request.archive_path();
        let archive_type = detect_format(archive_path)?;

        let dest = DestDir::for_archive(archive_path)?;
        info!(
            archive = %archive_path.display(),
            destination = %dest.as_path().display(),
            format = archive_type.name(),
            "extracting archive"
        );

        let mut archive = open_archive(archive_path, archive_type)?;
        let total = archive.entry_count();
        if total == 0 {
            return Err(ExtractionError::EmptyArchive {
                path: archive_path.to_path_buf(),
            });
        }

        let mut writer = EntryWriter {
            dest: &dest,
            config: request.extraction_config(),
            overwrite: OverwriteState::new(self.policy),
            progress: &mut *self.progress,
            quota: QuotaTracker::new(),
            buffer: CopyBuffer::new(),
            report: ExtractionReport::new(dest.as_path()),
            total,
            current: 0,
        };

        if let Err(err) = archive.for_each_entry(&mut writer) {
            let entries_written = writer.report.files_extracted;
            warn!(
                archive = %archive_path.display(),
                entries_written,
                error = %err,
                "extraction stopped"
            );
            return Err(ExtractionError::Interrupted {
                entries_written,
                source: Box::new(err),
            });
        }

        let mut report = writer.report;
        if request.delete_source_on_success() {
            delete_source(archive_path, &mut report);
        }

        self.progress.on_complete(dest.as_path());

        report.duration = start.elapsed();
        info!(
            files = report.files_extracted,
            directories = report.directories_created,
            skipped = report.files_skipped,
            bytes = report.bytes_written,
            "extraction complete"
        );
        Ok(report)
    }
}

fn delete_source(archive_path: &Path, report: &mut ExtractionReport) {
    match std::fs::remove_file(archive_path) {
        Ok(()) => {
            debug!(archive = %archive_path.display(), "deleted source archive");
            report.source_deleted = true;
        }
        Err(e) => {
            warn!(archive = %archive_path.display(), error = %e, "failed to delete source archive");
            report.add_warning(format!(
                "failed to delete {}: {e}",
                archive_path.display()
            ));
        }
    }
}

/// A directory entry that resolves to no components names the destination
/// itself (`./`, `sub/../`).
fn names_root(relative: &Path) -> bool {
    normalize_lexically(relative).is_ok_and(|p| p.as_os_str().is_empty())
}

struct EntryWriter<'a> {
    dest: &'a DestDir,
    config: &'a ExtractionConfig,
    overwrite: OverwriteState<'a>,
    progress: &'a mut dyn ProgressCallback,
    quota: QuotaTracker,
    buffer: CopyBuffer,
    report: ExtractionReport,
    total: usize,
    current: usize,
}

impl EntryWriter<'_> {
    fn write_entry(&mut self, entry: &ArchiveEntry, content: &mut dyn Read) -> Result<()> {
        let relative = Path::new(&entry.path);
        if entry.entry_type.is_directory() && names_root(relative) {
            debug!(path = %entry.path, "root directory entry");
            return Ok(());
        }

        let safe_path = SafePath::validate(relative, self.dest, self.config)?;
        let output_path = self.dest.join(&safe_path);

        ensure_parent(&output_path)?;

        let decision = if output_path.exists() {
            self.overwrite.resolve(&output_path)
        } else {
            OverwriteDecision::OverwriteOne
        };

        match entry.entry_type {
            EntryType::Directory => {
                create_directory(&output_path)?;
                self.report.directories_created += 1;
                debug!(path = %entry.path, "created directory");
            }
            EntryType::File if !decision.overwrites() => {
                self.report.files_skipped += 1;
                debug!(path = %entry.path, "skipped existing file");
            }
            EntryType::File => {
                self.quota.check_file(entry.size, self.config)?;
                let written = write_file(
                    content,
                    &output_path,
                    self.config.max_file_size,
                    &mut self.buffer,
                )?;
                self.quota.record_file(written, self.config)?;

                self.report.files_extracted += 1;
                self.report.bytes_written = self.quota.bytes_written();
                self.progress.on_bytes_written(written);
                debug!(path = %entry.path, bytes = written, "wrote file");
            }
        }

        Ok(())
    }
}

impl EntryVisitor for EntryWriter<'_> {
    fn visit_entry(&mut self, entry: &ArchiveEntry, content: &mut dyn Read) -> Result<()> {
        self.current += 1;
        let relative = Path::new(&entry.path);
        self.progress
            .on_entry_start(relative, self.total, self.current);
        self.write_entry(entry, content)?;
        self.progress.on_entry_complete(relative);
        Ok(())
    }
}
