//! Patching a file in place.

use crate::config::WriteOptions;
use crate::error::{PatchError, PatchResult};
use crate::region::OffsetArg;
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// The file that was written.
    pub path: PathBuf,
    /// Absolute position the first byte landed at.
    pub offset: u64,
    /// Number of bytes written.
    pub written: u64,
}

/// Opens `path` for reading and writing, creating it if needed.
///
/// Existing content is never truncated.
fn open_for_patch(path: &Path, options: &WriteOptions) -> PatchResult<File> {
    let mut open = OpenOptions::new();
    open.read(true).write(true).create(true).truncate(false);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        open.mode(options.create_mode);
    }
    #[cfg(not(unix))]
    let _ = options.create_mode;

    open.open(path).map_err(|source| PatchError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Moves the cursor to the write position and returns it.
fn seek_to(file: &mut File, offset: OffsetArg) -> PatchResult<u64> {
    match offset {
        OffsetArg::Append => Ok(file.seek(SeekFrom::End(0))?),
        OffsetArg::At(at) => {
            let start = u64::try_from(at).map_err(|_| PatchError::Seek {
                offset: at,
                source: io::Error::new(io::ErrorKind::InvalidInput, "negative offset"),
            })?;
            file.seek(SeekFrom::Start(start))
                .map_err(|source| PatchError::Seek { offset: at, source })
        }
    }
}

fn finish(file: &File, options: &WriteOptions) -> PatchResult<()> {
    if options.sync {
        file.sync_all()?;
    }
    Ok(())
}

/// Writes `data` to `path` at `offset` as one contiguous write.
///
/// Seeking past the end of the file leaves a gap that the OS fills with
/// zeros (sparse where supported).
///
/// # Errors
///
/// - [`PatchError::FileAccess`] if the file cannot be opened or created
/// - [`PatchError::Seek`] if the position cannot be reached
/// - [`PatchError::ShortWrite`] or [`PatchError::Io`] if the write fails
pub fn write_bytes(
    path: &Path,
    offset: OffsetArg,
    data: &[u8],
    options: &WriteOptions,
) -> PatchResult<WriteReport> {
    let mut file = open_for_patch(path, options)?;
    let start = seek_to(&mut file, offset)?;
    debug!(path = %path.display(), start, len = data.len(), "writing data");

    let expected = data.len() as u64;
    let written = write_counted(&mut file, data)?;
    if written != expected {
        return Err(PatchError::ShortWrite { written, expected });
    }
    finish(&file, options)?;

    Ok(WriteReport {
        path: path.to_path_buf(),
        offset: start,
        written,
    })
}

/// Writes `byte` repeated `count` times to `path` at `offset`.
///
/// The fill is issued in chunks of at most
/// [`WriteOptions::fill_chunk_size`] bytes.
///
/// # Errors
///
/// Same as [`write_bytes`]. A [`PatchError::ShortWrite`] reports how many
/// bytes reached the file before the write stalled.
pub fn fill(
    path: &Path,
    offset: OffsetArg,
    byte: u8,
    count: u64,
    options: &WriteOptions,
) -> PatchResult<WriteReport> {
    let mut file = open_for_patch(path, options)?;
    let start = seek_to(&mut file, offset)?;
    debug!(path = %path.display(), start, count, byte, "filling range");

    let chunk_len = usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(options.fill_chunk_size.max(1));
    let chunk = vec![byte; chunk_len];

    let mut written = 0u64;
    while written < count {
        let want = usize::try_from(count - written).map_or(chunk_len, |rest| rest.min(chunk_len));
        let n = write_counted(&mut file, &chunk[..want])?;
        written += n;
        if n != want as u64 {
            return Err(PatchError::ShortWrite {
                written,
                expected: count,
            });
        }
    }
    finish(&file, options)?;

    Ok(WriteReport {
        path: path.to_path_buf(),
        offset: start,
        written,
    })
}

/// Writes as much of `data` as the OS accepts, stopping at the first
/// zero-length write. Returns the number of bytes written.
fn write_counted<W: Write>(out: &mut W, data: &[u8]) -> PatchResult<u64> {
    let mut done = 0;
    while done < data.len() {
        match out.write(&data[done..]) {
            Ok(0) => break,
            Ok(n) => done += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(done as u64)
}
