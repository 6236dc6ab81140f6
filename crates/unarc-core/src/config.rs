//! Extraction limits.

/// Resource limits applied while extracting an archive.
///
/// The defaults are generous: archives dropped into a project are usually
/// trusted asset bundles, and the limits exist to stop runaway archives
/// rather than to police normal content.
///
/// # Examples
///
/// ```
/// use unarc_core::ExtractionConfig;
///
/// let config = ExtractionConfig {
///     max_file_size: 100 * 1024 * 1024, // 100 MB
///     ..Default::default()
/// };
/// assert_eq!(config.max_path_depth, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Maximum size for a single file in bytes.
    pub max_file_size: u64,

    /// Maximum total size for all extracted files in bytes.
    pub max_total_size: u64,

    /// Maximum number of files that can be written.
    pub max_file_count: usize,

    /// Maximum number of components in an entry path.
    pub max_path_depth: usize,
}

impl Default for ExtractionConfig {
    /// Default values:
    /// - `max_file_size`: 4 GiB
    /// - `max_total_size`: 16 GiB
    /// - `max_file_count`: 1,000,000
    /// - `max_path_depth`: 64
    fn default() -> Self {
        Self {
            max_file_size: 4 * 1024 * 1024 * 1024,
            max_total_size: 16 * 1024 * 1024 * 1024,
            max_file_count: 1_000_000,
            max_path_depth: 64,
        }
    }
}

impl ExtractionConfig {
    /// Configuration without size or count limits.
    ///
    /// Path depth stays bounded; the other limits are set to their maximum.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_file_size: u64::MAX,
            max_total_size: u64::MAX,
            max_file_count: usize::MAX,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractionConfig::default();
        assert_eq!(config.max_file_size, 4 * 1024 * 1024 * 1024);
        assert_eq!(config.max_total_size, 16 * 1024 * 1024 * 1024);
        assert_eq!(config.max_file_count, 1_000_000);
        assert_eq!(config.max_path_depth, 64);
    }

    #[test]
    fn test_unlimited_config() {
        let config = ExtractionConfig::unlimited();
        assert_eq!(config.max_file_size, u64::MAX);
        assert_eq!(config.max_file_count, usize::MAX);
        assert_eq!(config.max_path_depth, 64);
    }
}
