//! 7z archive format handler.
//!
//! Entry data is decoded by `sevenz-rust2`. Its callback API cannot return
//! our error type, so a failing visitor stashes its error, the callback
//! stops the walk, and the stashed error is returned once the decoder
//! unwinds.
//!
//! Password-protected archives are rejected when the header is read.

use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::path::PathBuf;

use sevenz_rust2::Archive;
use sevenz_rust2::Password;
use tracing::debug;

use crate::ExtractionError;
use crate::Result;
use crate::types::EntryType;

use super::traits::ArchiveEntry;
use super::traits::ArchiveFormat;
use super::traits::EntryVisitor;

/// 7z archive handler.
pub struct SevenZArchive<R: Read + Seek> {
    source: R,
    path: PathBuf,
    entry_count: usize,
}

impl<R: Read + Seek> SevenZArchive<R> {
    /// Reads the archive header and rewinds the source for decoding.
    ///
    /// `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveOpen` if the header is unreadable or the archive is
    /// encrypted.
    pub fn new(mut source: R, path: &Path) -> Result<Self> {
        let archive = Archive::read(&mut source, &Password::empty()).map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            let reason = if err_str.contains("encrypt") || err_str.contains("password") {
                "encrypted 7z archives are not supported".to_string()
            } else {
                e.to_string()
            };
            ExtractionError::ArchiveOpen {
                path: path.to_path_buf(),
                reason,
            }
        })?;

        let entry_count = archive.files.len();
        debug!(
            archive = %path.display(),
            entries = entry_count,
            solid = archive.is_solid,
            "opened 7z archive"
        );

        source.rewind()?;

        Ok(Self {
            source,
            path: path.to_path_buf(),
            entry_count,
        })
    }
}

impl<R: Read + Seek> ArchiveFormat for SevenZArchive<R> {
    fn entry_count(&self) -> usize {
        self.entry_count
    }

    fn for_each_entry(&mut self, visitor: &mut dyn EntryVisitor) -> Result<()> {
        let mut failure: Option<ExtractionError> = None;

        let extract_fn = |entry: &sevenz_rust2::ArchiveEntry,
                          reader: &mut dyn Read,
                          _dest: &PathBuf|
         -> std::result::Result<bool, sevenz_rust2::Error> {
            let entry_type = if entry.is_directory() {
                EntryType::Directory
            } else {
                EntryType::File
            };
            let record = ArchiveEntry {
                path: entry.name.clone(),
                entry_type,
                size: entry.size,
            };

            match visitor.visit_entry(&record, reader) {
                Ok(()) => Ok(true),
                Err(err) => {
                    failure = Some(err);
                    Ok(false)
                }
            }
        };

        // The decoder insists on a destination that exists; the callback
        // never writes through it.
        let decoded =
            sevenz_rust2::decompress_with_extract_fn(&mut self.source, Path::new("."), extract_fn);

        if let Some(err) = failure {
            return Err(err);
        }

        decoded.map_err(|e| map_decode_error(&self.path, &e))
    }

    fn format_name(&self) -> &'static str {
        "7z"
    }
}

fn map_decode_error(path: &Path, err: &sevenz_rust2::Error) -> ExtractionError {
    let err_str = err.to_string();
    let err_lower = err_str.to_lowercase();
    if err_lower.contains("password") || err_lower.contains("encrypt") {
        return ExtractionError::ArchiveOpen {
            path: path.to_path_buf(),
            reason: format!("encrypted archive: {err_str}"),
        };
    }
    ExtractionError::InvalidArchive(format!("7z decode failed: {err_str}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_invalid_magic_rejected() {
        let result = SevenZArchive::new(Cursor::new(b"PK\x03\x04 zip".to_vec()), Path::new("a.7z"));
        match result {
            Err(ExtractionError::ArchiveOpen { path, .. }) => {
                assert_eq!(path, PathBuf::from("a.7z"));
            }
            other => panic!("expected ArchiveOpen, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = SevenZArchive::new(Cursor::new(Vec::new()), Path::new("empty.7z"));
        assert!(matches!(result, Err(ExtractionError::ArchiveOpen { .. })));
    }

    #[test]
    fn test_decode_error_mapping() {
        let err = sevenz_rust2::Error::Other("password required".into());
        assert!(matches!(
            map_decode_error(Path::new("x.7z"), &err),
            ExtractionError::ArchiveOpen { .. }
        ));

        let err = sevenz_rust2::Error::Other("bad crc".into());
        assert!(matches!(
            map_decode_error(Path::new("x.7z"), &err),
            ExtractionError::InvalidArchive(_)
        ));
    }
}
