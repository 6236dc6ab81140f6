//! Validated destination directory type.

use crate::ExtractionError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// A validated destination directory for archive extraction.
///
/// This type represents a directory that has been validated to:
/// - Exist on the filesystem
/// - Be a directory (not a file)
/// - Be represented as an absolute canonical path
///
/// Entry paths are joined onto the canonical form, so a [`SafePath`]
/// resolved against a `DestDir` can be compared lexically with it.
///
/// [`SafePath`]: super::SafePath
///
/// # Examples
///
/// ```no_run
/// use unarc_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Creates /proj/assets/photos next to the archive
/// let dest = DestDir::for_archive("/proj/assets/photos.zip")?;
/// println!("Extracting to: {}", dest.as_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Computes the destination for an archive without touching the disk.
    ///
    /// The destination is `parent(archive) / stem(archive)`: a folder next to
    /// the archive named after it without its extension. A bare file name is
    /// resolved against the current directory.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` if the path has no file name to derive a
    /// folder name from.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use unarc_core::types::DestDir;
    ///
    /// let dest = DestDir::path_for_archive(Path::new("/proj/assets/photos.zip")).unwrap();
    /// assert_eq!(dest, Path::new("/proj/assets/photos"));
    /// ```
    pub fn path_for_archive(archive: &Path) -> Result<PathBuf> {
        let stem = archive
            .file_stem()
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| ExtractionError::UnsupportedFormat {
                path: archive.to_path_buf(),
            })?;

        let parent = archive
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        Ok(parent.join(stem))
    }

    /// Creates the destination folder for `archive` and validates it.
    ///
    /// Creation is idempotent: an existing folder is reused as is.
    ///
    /// # Errors
    ///
    /// Returns `Filesystem` if the folder cannot be created, or if a
    /// non-directory already occupies the destination path.
    pub fn for_archive(archive: impl AsRef<Path>) -> Result<Self> {
        let path = Self::path_for_archive(archive.as_ref())?;
        std::fs::create_dir_all(&path).map_err(|e| ExtractionError::filesystem(&path, e))?;
        Self::new(path)
    }

    /// Creates a new `DestDir` after validating the path.
    ///
    /// # Validation
    ///
    /// 1. Verifies the path exists
    /// 2. Verifies the path is a directory
    /// 3. Canonicalizes the path to an absolute path
    ///
    /// # Errors
    ///
    /// Returns `Filesystem` if:
    /// - The path does not exist
    /// - The path exists but is not a directory
    /// - The path cannot be canonicalized
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let metadata = std::fs::metadata(&path).map_err(|e| {
            ExtractionError::filesystem(
                &path,
                std::io::Error::new(
                    e.kind(),
                    format!("destination directory is not accessible: {e}"),
                ),
            )
        })?;

        if !metadata.is_dir() {
            return Err(ExtractionError::filesystem(
                &path,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "destination exists and is not a directory",
                ),
            ));
        }

        let canonical = path.canonicalize().map_err(|e| {
            ExtractionError::filesystem(
                &path,
                std::io::Error::new(e.kind(), format!("failed to canonicalize path: {e}")),
            )
        })?;

        Ok(Self(canonical))
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins a `SafePath` to this destination directory.
    #[inline]
    #[must_use]
    pub fn join(&self, safe_path: &super::SafePath) -> PathBuf {
        self.0.join(safe_path.as_path())
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}
