//! Common traits for archive format handlers.

use std::io::Read;

use crate::Result;
use crate::types::EntryType;

/// One record inside an archive as yielded by a format reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Archive-relative, slash-separated path as stored in the archive.
    pub path: String,
    /// File or directory marker.
    pub entry_type: EntryType,
    /// Uncompressed size declared by the archive (zero for directories).
    pub size: u64,
}

/// Receives entries from [`ArchiveFormat::for_each_entry`].
pub trait EntryVisitor {
    /// Handles one entry. `content` yields the entry's bytes and is empty
    /// for directories.
    ///
    /// # Errors
    ///
    /// Returning an error stops the walk; the format handler passes the
    /// error through unchanged.
    fn visit_entry(&mut self, entry: &ArchiveEntry, content: &mut dyn Read) -> Result<()>;
}

/// Trait for archive format handlers.
pub trait ArchiveFormat {
    /// Number of entries in the archive.
    fn entry_count(&self) -> usize;

    /// Feeds every entry to `visitor` in the reader's native order.
    ///
    /// # Errors
    ///
    /// Returns the visitor's error, or `InvalidArchive` if entry data cannot
    /// be decoded.
    fn for_each_entry(&mut self, visitor: &mut dyn EntryVisitor) -> Result<()>;

    /// Returns the archive format name.
    fn format_name(&self) -> &'static str;
}
