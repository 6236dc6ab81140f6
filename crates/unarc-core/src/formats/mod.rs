//! Archive format implementations.

pub(crate) mod common;
pub mod detect;
pub mod sevenz;
pub mod traits;
pub mod zip;

use std::io::Cursor;
use std::path::Path;

use crate::ExtractionError;
use crate::Result;

pub use detect::ArchiveType;
pub use sevenz::SevenZArchive;
pub use traits::ArchiveEntry;
pub use traits::ArchiveFormat;
pub use traits::EntryVisitor;
pub use zip::ZipArchive;

/// Opens `path` with the handler for `archive_type`.
///
/// The whole file is read into memory first so no handle on the archive is
/// held while entries are written; this also lets the source be deleted on
/// platforms that lock open files.
///
/// # Errors
///
/// Returns `ArchiveOpen` if the file cannot be read or is not a valid
/// archive of the given type.
pub fn open_archive(path: &Path, archive_type: ArchiveType) -> Result<Box<dyn ArchiveFormat>> {
    let data = std::fs::read(path).map_err(|e| ExtractionError::ArchiveOpen {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let source = Cursor::new(data);

    match archive_type {
        ArchiveType::Zip => Ok(Box::new(ZipArchive::new(source, path)?)),
        ArchiveType::SevenZ => Ok(Box::new(SevenZArchive::new(source, path)?)),
    }
}
