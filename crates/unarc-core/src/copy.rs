//! Buffered entry copy with a streaming size limit.
//!
//! Declared entry sizes come from the archive and may be wrong, so the
//! per-file limit is enforced on the bytes actually copied as well.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::ExtractionError;
use crate::QuotaResource;

/// Buffer size for entry copies (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable heap buffer shared by every file of one extraction run.
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies `reader` into `writer`, failing once more than `limit` bytes flow.
///
/// Read failures come from the archive decoder and are reported as
/// `InvalidArchive`; write failures stay `Io` so the caller can attach the
/// output path.
///
/// # Errors
///
/// Returns `InvalidArchive` on a read error, `Io` on a write error and
/// `QuotaExceeded` when the limit is passed.
pub fn copy_with_limit<R: Read + ?Sized, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
    limit: u64,
) -> Result<u64, ExtractionError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(ExtractionError::InvalidArchive(format!(
                    "failed to read entry data: {e}"
                )));
            }
        };

        total = total
            .checked_add(bytes_read as u64)
            .ok_or(ExtractionError::QuotaExceeded {
                resource: QuotaResource::IntegerOverflow,
            })?;
        if total > limit {
            return Err(ExtractionError::QuotaExceeded {
                resource: QuotaResource::FileSize {
                    size: total,
                    max: limit,
                },
            });
        }

        writer.write_all(&buffer.buf[..bytes_read])?;
    }

    Ok(total)
}
