//! Archive format detection.

use std::path::Path;

use crate::ExtractionError;
use crate::Result;

/// Extensions accepted as extractable archives, lowercase, without the dot.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["zip", "zipx", "7z"];

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveType {
    /// ZIP container (`.zip`, `.zipx`).
    Zip,
    /// 7z archive.
    SevenZ,
}

impl ArchiveType {
    /// Short format name used in logs and reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::SevenZ => "7z",
        }
    }
}

/// Detects the archive type from a file path.
///
/// Only the extension is inspected, case-insensitively; the file is not
/// opened. A `.7z` file that is really a zip will fail later at open time.
///
/// # Errors
///
/// Returns `UnsupportedFormat` if the extension is missing or unknown.
pub fn detect_format(path: &Path) -> Result<ArchiveType> {
    let unsupported = || ExtractionError::UnsupportedFormat {
        path: path.to_path_buf(),
    };

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(unsupported)?;

    match extension.to_ascii_lowercase().as_str() {
        "zip" | "zipx" => Ok(ArchiveType::Zip),
        "7z" => Ok(ArchiveType::SevenZ),
        _ => Err(unsupported()),
    }
}

/// Returns `true` if the path names a supported archive.
///
/// Pure predicate over the path string: no filesystem access.
///
/// # Examples
///
/// ```
/// use unarc_core::is_supported_archive;
///
/// assert!(is_supported_archive("Assets/Photos.ZIP"));
/// assert!(is_supported_archive("bundle.7z"));
/// assert!(!is_supported_archive("notes.txt"));
/// ```
#[must_use]
pub fn is_supported_archive(path: impl AsRef<Path>) -> bool {
    detect_format(path.as_ref()).is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_zip() {
        let path = PathBuf::from("archive.zip");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::Zip);
    }

    #[test]
    fn test_detect_zipx() {
        let path = PathBuf::from("archive.zipx");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::Zip);
    }

    #[test]
    fn test_detect_7z() {
        let path = PathBuf::from("archive.7z");
        assert_eq!(detect_format(&path).unwrap(), ArchiveType::SevenZ);
    }

    #[test]
    fn test_detect_case_insensitive() {
        assert_eq!(
            detect_format(Path::new("ARCHIVE.7Z")).unwrap(),
            ArchiveType::SevenZ
        );
        assert_eq!(
            detect_format(Path::new("Photos.Zip")).unwrap(),
            ArchiveType::Zip
        );
        assert_eq!(
            detect_format(Path::new("big.ZIPX")).unwrap(),
            ArchiveType::Zip
        );
    }

    #[test]
    fn test_detect_unsupported() {
        for name in ["archive.rar", "archive.tar.gz", "archive", "zip", ".zip"] {
            assert!(
                matches!(
                    detect_format(Path::new(name)),
                    Err(ExtractionError::UnsupportedFormat { .. })
                ),
                "{name} should be unsupported"
            );
        }
    }

    #[test]
    fn test_is_supported_archive() {
        assert!(is_supported_archive("/proj/assets/photos.zip"));
        assert!(is_supported_archive("a.zipx"));
        assert!(is_supported_archive("a.7z"));
        assert!(!is_supported_archive("a.txt"));
        assert!(!is_supported_archive("a.zip.bak"));
    }

    #[test]
    fn test_is_supported_archive_does_not_touch_disk() {
        assert!(is_supported_archive("/definitely/not/here/missing.zip"));
    }

    #[test]
    fn test_supported_extensions_agree_with_detection() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(is_supported_archive(format!("file.{ext}")));
        }
    }

    #[test]
    fn test_archive_type_name() {
        assert_eq!(ArchiveType::Zip.name(), "zip");
        assert_eq!(ArchiveType::SevenZ.name(), "7z");
    }
}
