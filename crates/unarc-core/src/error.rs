//! Error types for archive extraction operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Represents a specific quota resource that was exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotaResource {
    /// File count quota exceeded.
    FileCount {
        /// Current file count.
        current: usize,
        /// Maximum allowed file count.
        max: usize,
    },
    /// Total size quota exceeded.
    TotalSize {
        /// Current total size in bytes.
        current: u64,
        /// Maximum allowed total size in bytes.
        max: u64,
    },
    /// Single file size quota exceeded.
    FileSize {
        /// File size in bytes.
        size: u64,
        /// Maximum allowed file size in bytes.
        max: u64,
    },
    /// Integer overflow detected in quota tracking.
    IntegerOverflow,
}

impl std::fmt::Display for QuotaResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileCount { current, max } => {
                write!(f, "quota exceeded: file count ({current} > {max})")
            }
            Self::TotalSize { current, max } => {
                write!(f, "quota exceeded: total size ({current} > {max})")
            }
            Self::FileSize { size, max } => {
                write!(f, "quota exceeded: single file size ({size} > {max})")
            }
            Self::IntegerOverflow => {
                write!(f, "quota exceeded: integer overflow in quota tracking")
            }
        }
    }
}

/// Errors that can occur during archive extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// I/O operation failed without a more specific path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Filesystem step (create, write, delete) failed for a known path.
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        /// Path the failing operation targeted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// File extension is not one of the supported archive extensions.
    #[error("unsupported archive format: {}", path.display())]
    UnsupportedFormat {
        /// The rejected archive path.
        path: PathBuf,
    },

    /// Archive could not be opened or is not a valid archive of its kind.
    #[error("failed to open archive {}: {reason}", path.display())]
    ArchiveOpen {
        /// The archive path.
        path: PathBuf,
        /// Reader-provided reason.
        reason: String,
    },

    /// Archive contains no entries.
    #[error("can't extract an empty archive: {}", path.display())]
    EmptyArchive {
        /// The archive path.
        path: PathBuf,
    },

    /// Archive became unreadable part way through (corrupt entry data).
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Entry path resolves outside the destination directory.
    #[error("path traversal detected: {}", path.display())]
    PathTraversal {
        /// The entry path that attempted traversal.
        path: PathBuf,
    },

    /// Extraction quota exceeded.
    #[error("{resource}")]
    QuotaExceeded {
        /// Description of the exceeded resource.
        resource: QuotaResource,
    },

    /// Operation not permitted by security policy.
    #[error("operation denied by security policy: {reason}")]
    SecurityViolation {
        /// Reason for the violation.
        reason: String,
    },

    /// A fatal error stopped the entry loop after some entries were written.
    #[error("extraction stopped after writing {entries_written} file(s): {source}")]
    Interrupted {
        /// Files fully written before the failure.
        entries_written: usize,
        /// The error that stopped extraction.
        #[source]
        source: Box<ExtractionError>,
    },
}

impl ExtractionError {
    /// Builds a [`ExtractionError::Filesystem`] for `path`.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for failures of a create, write or delete step.
    ///
    /// Path traversal rejections count as filesystem errors: the entry would
    /// have been written outside the destination directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use unarc_core::ExtractionError;
    /// use std::path::PathBuf;
    ///
    /// let err = ExtractionError::PathTraversal {
    ///     path: PathBuf::from("../etc/passwd"),
    /// };
    /// assert!(err.is_filesystem_error());
    /// ```
    #[must_use]
    pub fn is_filesystem_error(&self) -> bool {
        match self {
            Self::Io(_) | Self::Filesystem { .. } | Self::PathTraversal { .. } => true,
            Self::Interrupted { source, .. } => source.is_filesystem_error(),
            _ => false,
        }
    }

    /// Number of files written before the failure, zero if none.
    #[must_use]
    pub fn entries_written(&self) -> usize {
        match self {
            Self::Interrupted {
                entries_written, ..
            } => *entries_written,
            _ => 0,
        }
    }

    /// Returns the innermost error, unwrapping [`ExtractionError::Interrupted`].
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Interrupted { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns the error code as a static string.
    ///
    /// Useful for matching on error types without full message formatting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self.root_cause() {
            Self::Io(_) | Self::Filesystem { .. } => "FILESYSTEM_ERROR",
            Self::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            Self::ArchiveOpen { .. } => "ARCHIVE_OPEN_ERROR",
            Self::EmptyArchive { .. } => "EMPTY_ARCHIVE",
            Self::InvalidArchive(_) => "INVALID_ARCHIVE",
            Self::PathTraversal { .. } => "PATH_TRAVERSAL",
            Self::QuotaExceeded { .. } => "QUOTA_EXCEEDED",
            Self::SecurityViolation { .. } => "SECURITY_VIOLATION",
            Self::Interrupted { .. } => "INTERRUPTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_quota_resource_display() {
        let res = QuotaResource::FileCount {
            current: 11,
            max: 10,
        };
        assert_eq!(res.to_string(), "quota exceeded: file count (11 > 10)");
    }

    #[test]
    fn test_filesystem_error_message_names_path() {
        let err = ExtractionError::filesystem(
            "/proj/assets/photos/a.jpg",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/proj/assets/photos/a.jpg"));
        assert!(msg.contains("denied"));
        assert!(err.is_filesystem_error());
    }

    #[test]
    fn test_empty_archive_message() {
        let err = ExtractionError::EmptyArchive {
            path: PathBuf::from("empty.zip"),
        };
        assert!(err.to_string().contains("empty archive"));
        assert!(!err.is_filesystem_error());
        assert_eq!(err.entries_written(), 0);
    }

    #[test]
    fn test_interrupted_carries_count_and_cause() {
        let err = ExtractionError::Interrupted {
            entries_written: 3,
            source: Box::new(ExtractionError::PathTraversal {
                path: PathBuf::from("../evil"),
            }),
        };
        assert_eq!(err.entries_written(), 3);
        assert!(err.is_filesystem_error());
        assert_eq!(err.error_code(), "PATH_TRAVERSAL");
        assert!(matches!(
            err.root_cause(),
            ExtractionError::PathTraversal { .. }
        ));
    }

    #[test]
    fn test_interrupted_message_counts_files() {
        let err = ExtractionError::Interrupted {
            entries_written: 1,
            source: Box::new(ExtractionError::InvalidArchive("truncated".into())),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("extraction stopped after writing 1 file(s)"));
        assert!(!msg.contains("1 entries"));
    }

    #[test]
    fn test_all_error_variants_have_codes() {
        let errors = vec![
            ExtractionError::Io(io::Error::other("test")),
            ExtractionError::filesystem("x", io::Error::other("test")),
            ExtractionError::UnsupportedFormat {
                path: PathBuf::from("a.rar"),
            },
            ExtractionError::ArchiveOpen {
                path: PathBuf::from("a.zip"),
                reason: "bad".into(),
            },
            ExtractionError::EmptyArchive {
                path: PathBuf::from("a.zip"),
            },
            ExtractionError::InvalidArchive("bad".into()),
            ExtractionError::PathTraversal {
                path: PathBuf::from("../a"),
            },
            ExtractionError::QuotaExceeded {
                resource: QuotaResource::IntegerOverflow,
            },
            ExtractionError::SecurityViolation {
                reason: "test".into(),
            },
        ];

        for error in errors {
            assert!(!error.error_code().is_empty());
            assert!(!error.to_string().is_empty());
        }
    }
}
