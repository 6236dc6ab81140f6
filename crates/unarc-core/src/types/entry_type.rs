//! Archive entry type enumeration.

/// Type of entry in an archive.
///
/// # Examples
///
/// ```
/// use unarc_core::types::EntryType;
///
/// assert_eq!(EntryType::from_entry_name("sub/"), EntryType::Directory);
/// assert_eq!(EntryType::from_entry_name("sub/b.jpg"), EntryType::File);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// Regular file entry.
    File,

    /// Directory entry.
    Directory,
}

impl EntryType {
    /// Classifies an archive-relative name: a trailing `/` marks a directory.
    #[must_use]
    pub fn from_entry_name(name: &str) -> Self {
        if name.ends_with('/') {
            Self::Directory
        } else {
            Self::File
        }
    }

    /// Returns `true` if this is a regular file.
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }

    /// Returns `true` if this is a directory.
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_file() {
        let entry = EntryType::File;
        assert!(entry.is_file());
        assert!(!entry.is_directory());
    }

    #[test]
    fn test_entry_type_directory() {
        let entry = EntryType::Directory;
        assert!(!entry.is_file());
        assert!(entry.is_directory());
    }

    #[test]
    fn test_from_entry_name() {
        assert_eq!(EntryType::from_entry_name("a.jpg"), EntryType::File);
        assert_eq!(EntryType::from_entry_name("sub/"), EntryType::Directory);
        assert_eq!(EntryType::from_entry_name("sub/b.jpg"), EntryType::File);
        assert_eq!(EntryType::from_entry_name("a/b/c/"), EntryType::Directory);
    }

    #[test]
    fn test_backslash_is_not_a_directory_marker() {
        assert_eq!(EntryType::from_entry_name("sub\\"), EntryType::File);
    }

    #[test]
    fn test_entry_type_debug_format() {
        assert_eq!(format!("{:?}", EntryType::File), "File");
        assert_eq!(format!("{:?}", EntryType::Directory), "Directory");
    }
}
