//! ZIP archive format handler.

use std::io::Read;
use std::io::Seek;
use std::path::Path;

use tracing::debug;
use zip::result::ZipError;

use crate::ExtractionError;
use crate::Result;
use crate::types::EntryType;

use super::traits::ArchiveEntry;
use super::traits::ArchiveFormat;
use super::traits::EntryVisitor;

/// ZIP archive handler backed by the `zip` crate.
///
/// Also used for `.zipx`, which is a zip container with extended
/// compression methods.
pub struct ZipArchive<R: Read + Seek> {
    inner: zip::ZipArchive<R>,
}

impl<R: Read + Seek> ZipArchive<R> {
    /// Opens a zip container.
    ///
    /// `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveOpen` if the central directory cannot be read.
    pub fn new(source: R, path: &Path) -> Result<Self> {
        let inner = zip::ZipArchive::new(source).map_err(|e| ExtractionError::ArchiveOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(archive = %path.display(), entries = inner.len(), "opened zip archive");
        Ok(Self { inner })
    }
}

impl<R: Read + Seek> ArchiveFormat for ZipArchive<R> {
    fn entry_count(&self) -> usize {
        self.inner.len()
    }

    fn for_each_entry(&mut self, visitor: &mut dyn EntryVisitor) -> Result<()> {
        for index in 0..self.inner.len() {
            let mut file = self.inner.by_index(index).map_err(map_entry_error)?;

            let entry = ArchiveEntry {
                path: file.name().to_string(),
                entry_type: EntryType::from_entry_name(file.name()),
                size: file.size(),
            };

            visitor.visit_entry(&entry, &mut file)?;
        }
        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "zip"
    }
}

fn map_entry_error(err: ZipError) -> ExtractionError {
    match err {
        ZipError::Io(io) => ExtractionError::Io(io),
        other => ExtractionError::InvalidArchive(other.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::ZipTestBuilder;
    use std::io::Cursor;

    struct Collect(Vec<(ArchiveEntry, Vec<u8>)>);

    impl EntryVisitor for Collect {
        fn visit_entry(&mut self, entry: &ArchiveEntry, content: &mut dyn Read) -> Result<()> {
            let mut data = Vec::new();
            content.read_to_end(&mut data)?;
            self.0.push((entry.clone(), data));
            Ok(())
        }
    }

    #[test]
    fn test_zip_entries_in_archive_order() {
        let data = ZipTestBuilder::new()
            .add_file("a.jpg", b"aaa")
            .add_directory("sub/")
            .add_file("sub/b.jpg", b"bb")
            .build();

        let mut archive = ZipArchive::new(Cursor::new(data), Path::new("photos.zip")).unwrap();
        assert_eq!(archive.entry_count(), 3);
        assert_eq!(archive.format_name(), "zip");

        let mut visitor = Collect(Vec::new());
        archive.for_each_entry(&mut visitor).unwrap();

        let names: Vec<_> = visitor.0.iter().map(|(e, _)| e.path.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "sub/", "sub/b.jpg"]);
        assert_eq!(visitor.0[0].0.entry_type, EntryType::File);
        assert_eq!(visitor.0[0].0.size, 3);
        assert_eq!(visitor.0[0].1, b"aaa");
        assert_eq!(visitor.0[1].0.entry_type, EntryType::Directory);
        assert!(visitor.0[1].1.is_empty());
    }

    #[test]
    fn test_zip_deflated_content() {
        let data = ZipTestBuilder::new()
            .add_deflated_file("text.txt", &b"hello ".repeat(100))
            .build();

        let mut archive = ZipArchive::new(Cursor::new(data), Path::new("t.zip")).unwrap();
        let mut visitor = Collect(Vec::new());
        archive.for_each_entry(&mut visitor).unwrap();
        assert_eq!(visitor.0[0].1, b"hello ".repeat(100));
    }

    #[test]
    fn test_zip_invalid_data() {
        let result = ZipArchive::new(Cursor::new(b"not a zip".to_vec()), Path::new("bad.zip"));
        assert!(matches!(result, Err(ExtractionError::ArchiveOpen { .. })));
    }

    #[test]
    fn test_zip_empty_archive() {
        let data = ZipTestBuilder::new().build();
        let archive = ZipArchive::new(Cursor::new(data), Path::new("empty.zip")).unwrap();
        assert_eq!(archive.entry_count(), 0);
    }

    #[test]
    fn test_visitor_error_stops_walk() {
        struct FailOnSecond(usize);
        impl EntryVisitor for FailOnSecond {
            fn visit_entry(&mut self, _: &ArchiveEntry, _: &mut dyn Read) -> Result<()> {
                self.0 += 1;
                if self.0 == 2 {
                    return Err(ExtractionError::InvalidArchive("stop".into()));
                }
                Ok(())
            }
        }

        let data = ZipTestBuilder::new()
            .add_file("1", b"1")
            .add_file("2", b"2")
            .add_file("3", b"3")
            .build();
        let mut archive = ZipArchive::new(Cursor::new(data), Path::new("t.zip")).unwrap();
        let mut visitor = FailOnSecond(0);
        let result = archive.for_each_entry(&mut visitor);
        assert!(matches!(result, Err(ExtractionError::InvalidArchive(_))));
        assert_eq!(visitor.0, 2);
    }
}
