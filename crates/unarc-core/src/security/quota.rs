//! Extraction quota tracking and validation.

use crate::ExtractionConfig;
use crate::ExtractionError;
use crate::Result;
use crate::error::QuotaResource;

/// Tracks resource usage during one extraction run.
#[derive(Debug, Default)]
pub struct QuotaTracker {
    files_written: usize,
    bytes_written: u64,
}

impl QuotaTracker {
    /// Creates a new quota tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a file against the limits before any byte of it is written.
    ///
    /// `declared_size` is the uncompressed size reported by the archive
    /// reader.
    pub fn check_file(&self, declared_size: u64, config: &ExtractionConfig) -> Result<()> {
        if declared_size > config.max_file_size {
            return Err(ExtractionError::QuotaExceeded {
                resource: QuotaResource::FileSize {
                    size: declared_size,
                    max: config.max_file_size,
                },
            });
        }

        let next_count = self.files_written + 1;
        if next_count > config.max_file_count {
            return Err(ExtractionError::QuotaExceeded {
                resource: QuotaResource::FileCount {
                    current: next_count,
                    max: config.max_file_count,
                },
            });
        }

        let next_total =
            self.bytes_written
                .checked_add(declared_size)
                .ok_or(ExtractionError::QuotaExceeded {
                    resource: QuotaResource::IntegerOverflow,
                })?;
        if next_total > config.max_total_size {
            return Err(ExtractionError::QuotaExceeded {
                resource: QuotaResource::TotalSize {
                    current: next_total,
                    max: config.max_total_size,
                },
            });
        }

        Ok(())
    }

    /// Records a file after it has been written.
    pub fn record_file(&mut self, written: u64, config: &ExtractionConfig) -> Result<()> {
        self.files_written += 1;
        self.bytes_written =
            self.bytes_written
                .checked_add(written)
                .ok_or(ExtractionError::QuotaExceeded {
                    resource: QuotaResource::IntegerOverflow,
                })?;

        if written > config.max_file_size {
            return Err(ExtractionError::QuotaExceeded {
                resource: QuotaResource::FileSize {
                    size: written,
                    max: config.max_file_size,
                },
            });
        }

        if self.bytes_written > config.max_total_size {
            return Err(ExtractionError::QuotaExceeded {
                resource: QuotaResource::TotalSize {
                    current: self.bytes_written,
                    max: config.max_total_size,
                },
            });
        }

        Ok(())
    }

    /// Returns the number of files written.
    #[must_use]
    pub fn files_written(&self) -> usize {
        self.files_written
    }

    /// Returns the total bytes written.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
