//! Filesystem writers shared by every format.
//!
//! Each helper maps I/O failures to `Filesystem { path, .. }` errors naming
//! the path it was working on.

use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use crate::ExtractionError;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_limit;

/// Creates `output_path`'s parent directories.
///
/// Ancestor creation never consults the overwrite policy.
pub fn ensure_parent(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        create_dir_all(parent).map_err(|e| ExtractionError::filesystem(parent, e))?;
    }
    Ok(())
}

/// Writes one file entry, replacing any existing file at `output_path`.
///
/// Returns the number of bytes written.
pub fn write_file(
    reader: &mut dyn Read,
    output_path: &Path,
    max_file_size: u64,
    copy_buffer: &mut CopyBuffer,
) -> Result<u64> {
    let output_file =
        File::create(output_path).map_err(|e| ExtractionError::filesystem(output_path, e))?;
    let mut buffered_writer = BufWriter::with_capacity(64 * 1024, output_file);

    let bytes_written = copy_with_limit(reader, &mut buffered_writer, copy_buffer, max_file_size)
        .map_err(|e| match e {
            ExtractionError::Io(io) => ExtractionError::filesystem(output_path, io),
            other => other,
        })?;

    buffered_writer
        .flush()
        .map_err(|e| ExtractionError::filesystem(output_path, e))?;

    Ok(bytes_written)
}

/// Creates a directory entry. Succeeds if the directory already exists.
pub fn create_directory(dir_path: &Path) -> Result<()> {
    create_dir_all(dir_path).map_err(|e| ExtractionError::filesystem(dir_path, e))
}
