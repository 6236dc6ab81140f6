//! Validated safe path type for archive extraction.

use crate::ExtractionConfig;
use crate::ExtractionError;
use crate::Result;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use super::DestDir;

/// A validated entry path that is safe to materialize under a [`DestDir`].
///
/// `SafePath` represents a relative path that has been validated to not
/// contain:
/// - `..` components climbing above the destination
/// - Null bytes
/// - Absolute paths or drive prefixes
/// - Excessive path depth
///
/// and whose nearest existing ancestor on disk resolves inside the
/// destination, so a symlink planted inside the destination cannot redirect
/// writes elsewhere.
///
/// # Security Properties
///
/// - Can ONLY be constructed through validation
/// - NO `From<PathBuf>` implementation
/// - Normalized: `.` removed, `..` resolved against earlier components
///
/// # Examples
///
/// ```no_run
/// use unarc_core::ExtractionConfig;
/// use unarc_core::types::DestDir;
/// use unarc_core::types::SafePath;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp")?;
/// let config = ExtractionConfig::default();
///
/// let safe = SafePath::validate(Path::new("foo/bar.txt"), &dest, &config)?;
///
/// assert!(SafePath::validate(Path::new("../etc/passwd"), &dest, &config).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Validates and constructs a `SafePath`.
    ///
    /// # Validation Steps
    ///
    /// 1. Check for null bytes in path
    /// 2. Reject absolute paths, roots and drive prefixes
    /// 3. Resolve `.` and `..` lexically, rejecting `..` that climbs above
    ///    the destination
    /// 4. Validate the resolved depth does not exceed the configured maximum
    /// 5. Verify the nearest existing ancestor stays within the destination
    ///
    /// # Errors
    ///
    /// - `PathTraversal` for escaping `..`, absolute paths, or symlink escapes
    /// - `SecurityViolation` for null bytes, empty paths or excessive depth
    /// - `Filesystem` if an existing ancestor cannot be resolved
    pub fn validate(path: &Path, dest: &DestDir, config: &ExtractionConfig) -> Result<Self> {
        if has_null_bytes(path) {
            return Err(ExtractionError::SecurityViolation {
                reason: format!("path contains null bytes: {}", path.display()),
            });
        }

        let normalized = normalize_lexically(path)?;
        let depth = normalized.components().count();

        if depth == 0 {
            return Err(ExtractionError::SecurityViolation {
                reason: format!("entry path is empty: {:?}", path.display().to_string()),
            });
        }

        if depth > config.max_path_depth {
            return Err(ExtractionError::SecurityViolation {
                reason: format!(
                    "path depth {} exceeds maximum {}",
                    depth, config.max_path_depth
                ),
            });
        }

        let resolved = dest.as_path().join(&normalized);
        if escapes_destination(&resolved, dest)? {
            return Err(ExtractionError::PathTraversal {
                path: path.to_path_buf(),
            });
        }

        Ok(Self(normalized))
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

/// Drops `.` components and resolves `..` against the components before it.
///
/// Returns `PathTraversal` for absolute paths, drive prefixes, and any `..`
/// that would climb above the root of the entry path.
pub(crate) fn normalize_lexically(path: &Path) -> Result<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return Err(ExtractionError::PathTraversal {
                        path: path.to_path_buf(),
                    });
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ExtractionError::PathTraversal {
                    path: path.to_path_buf(),
                });
            }
        }
    }
    Ok(normalized)
}

/// Walks up from `resolved` to the first path that exists and checks that its
/// canonical form is still under the destination.
fn escapes_destination(resolved: &Path, dest: &DestDir) -> Result<bool> {
    let mut probe = resolved;
    loop {
        match probe.canonicalize() {
            Ok(canonical) => return Ok(!canonical.starts_with(dest.as_path())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // A dangling symlink would be followed by File::create.
                if std::fs::symlink_metadata(probe).is_ok() {
                    return Ok(true);
                }
                match probe.parent() {
                    Some(parent) if parent.starts_with(dest.as_path()) => probe = parent,
                    _ => return Ok(false),
                }
            }
            Err(e) => {
                return Err(ExtractionError::filesystem(
                    probe,
                    std::io::Error::new(e.kind(), format!("failed to resolve path: {e}")),
                ));
            }
        }
    }
}

/// Checks if a path contains null bytes.
#[cfg(unix)]
fn has_null_bytes(path: &Path) -> bool {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().contains(&b'\0')
}

/// Checks if a path contains null bytes.
#[cfg(not(unix))]
fn has_null_bytes(path: &Path) -> bool {
    path.to_str().is_none_or(|s| s.contains('\0'))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_dest() -> (TempDir, DestDir) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dest = DestDir::new(temp.path().to_path_buf()).expect("failed to create dest");
        (temp, dest)
    }

    #[test]
    fn test_safe_path_valid() {
        let (_temp, dest) = create_test_dest();
        let config = ExtractionConfig::default();
        let safe = SafePath::validate(Path::new("foo/bar.txt"), &dest, &config).unwrap();
        assert_eq!(safe.as_path(), Path::new("foo/bar.txt"));
    }

    #[test]
    fn test_safe_path_directory_entry_with_trailing_slash() {
        let (_temp, dest) = create_test_dest();
        let config = ExtractionConfig::default();
        let safe = SafePath::validate(Path::new("sub/"), &dest, &config).unwrap();
        assert_eq!(safe.as_path(), Path::new("sub"));
    }

    #[test]
    fn test_safe_path_normalizes_current_dir() {
        let (_temp, dest) = create_test_dest();
        let config = ExtractionConfig::default();
        let safe = SafePath::validate(Path::new("./foo/./bar.txt"), &dest, &config).unwrap();
        assert_eq!(safe.as_path(), Path::new("foo/bar.txt"));
    }

    #[test]
    fn test_safe_path_rejects_parent_dir_escape() {
        let (_temp, dest) = create_test_dest();
        let config = ExtractionConfig::default();
        for path in ["../etc/passwd", "foo/../../etc/passwd", "a/b/../../../c"] {
            let result = SafePath::validate(Path::new(path), &dest, &config);
            assert!(
                matches!(result, Err(ExtractionError::PathTraversal { .. })),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_safe_path_resolves_internal_parent_dir() {
        let (_temp, dest) = create_test_dest();
        let config = ExtractionConfig::default();
        let cases = [
            ("a/b/../c", "a/c"),
            ("sub/../b.txt", "b.txt"),
            ("a/./b/../../c/d.txt", "c/d.txt"),
        ];
        for (input, expected) in cases {
            let safe = SafePath::validate(Path::new(input), &dest, &config).unwrap();
            assert_eq!(safe.as_path(), Path::new(expected), "{input}");
        }
    }

    #[test]
    fn test_safe_path_parent_dir_back_to_root_is_empty() {
        let (_temp, dest) = create_test_dest();
        let config = ExtractionConfig::default();
        let result = SafePath::validate(Path::new("sub/.."), &dest, &config);
        assert!(matches!(
            result,
            Err(ExtractionError::SecurityViolation { .. })
        ));
    }

    #[test]
    fn test_safe_path_depth_counts_resolved_components() {
        let (_temp, dest) = create_test_dest();
        let config = ExtractionConfig {
            max_path_depth: 2,
            ..Default::default()
        };
        assert!(SafePath::validate(Path::new("a/b/../c/../d"), &dest, &config).is_ok());
    }

    #[test]
    fn test_safe_path_rejects_absolute() {
        let (_temp, dest) = create_test_dest();
        let config = ExtractionConfig::default();
        let result = SafePath::validate(Path::new("/etc/passwd"), &dest, &config);
        assert!(matches!(result, Err(ExtractionError::PathTraversal { .. })));
    }

    #[test]
    fn test_safe_path_rejects_empty() {
        let (_temp, dest) = create_test_dest();
        let config = ExtractionConfig::default();
        let result = SafePath::validate(Path::new("./"), &dest, &config);
        assert!(matches!(
            result,
            Err(ExtractionError::SecurityViolation { .. })
        ));
    }

    #[test]
    fn test_safe_path_depth_limit() {
        let (_temp, dest) = create_test_dest();
        let config = ExtractionConfig {
            max_path_depth: 3,
            ..Default::default()
        };
        assert!(SafePath::validate(Path::new("a/b/c"), &dest, &config).is_ok());
        assert!(matches!(
            SafePath::validate(Path::new("a/b/c/d"), &dest, &config),
            Err(ExtractionError::SecurityViolation { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_safe_path_null_byte() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (_temp, dest) = create_test_dest();
        let config = ExtractionConfig::default();
        let path = Path::new(OsStr::from_bytes(b"foo\0bar"));
        assert!(matches!(
            SafePath::validate(path, &dest, &config),
            Err(ExtractionError::SecurityViolation { .. })
        ));
    }

    #[test]
    fn test_safe_path_existing_file() {
        let (temp, dest) = create_test_dest();
        let config = ExtractionConfig::default();
        fs::write(temp.path().join("exists.txt"), "x").unwrap();
        assert!(SafePath::validate(Path::new("exists.txt"), &dest, &config).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_safe_path_rejects_symlinked_parent_escape() {
        let (temp, dest) = create_test_dest();
        let outside = TempDir::new().unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("link")).unwrap();

        let config = ExtractionConfig::default();
        let result = SafePath::validate(Path::new("link/payload.txt"), &dest, &config);
        assert!(matches!(result, Err(ExtractionError::PathTraversal { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_safe_path_rejects_dangling_symlink() {
        let (temp, dest) = create_test_dest();
        std::os::unix::fs::symlink("/nonexistent/target", temp.path().join("dangling")).unwrap();

        let config = ExtractionConfig::default();
        let result = SafePath::validate(Path::new("dangling"), &dest, &config);
        assert!(matches!(result, Err(ExtractionError::PathTraversal { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_safe_path_allows_internal_symlink() {
        let (temp, dest) = create_test_dest();
        fs::create_dir(temp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("alias")).unwrap();

        let config = ExtractionConfig::default();
        assert!(SafePath::validate(Path::new("alias/file.txt"), &dest, &config).is_ok());
    }
}
