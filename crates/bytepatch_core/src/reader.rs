//! Dumping a byte range of a file.

use crate::dump::HexDump;
use crate::error::{PatchError, PatchResult};
use crate::region::{LengthArg, OffsetArg};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of a [`read_range`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadReport {
    /// The file that was read.
    pub path: PathBuf,
    /// File size when the file was opened.
    pub file_size: u64,
    /// Offset the dump started at.
    pub offset: u64,
    /// Number of bytes requested after resolving `all`.
    pub requested: u64,
    /// Number of bytes actually dumped.
    pub dumped: u64,
}

impl ReadReport {
    /// Whether the file ended before the requested range did.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.dumped < self.requested
    }
}

/// Writes a hex dump of `length` bytes at `offset` of the file at `path`.
///
/// The length is resolved against the file size captured right after the
/// file is opened. A range that runs past the end of the file is not an
/// error: the dump just stops there.
///
/// # Errors
///
/// - [`PatchError::FileAccess`] if the file cannot be opened
/// - [`PatchError::OffsetExceedsSize`] for `append` or an offset at or past
///   the end of the file
/// - [`PatchError::Seek`] for a negative offset
/// - [`PatchError::Io`] if reading the file or writing `out` fails
pub fn read_range<W: Write>(
    path: &Path,
    offset: OffsetArg,
    length: LengthArg,
    out: W,
) -> PatchResult<ReadReport> {
    let mut file = File::open(path).map_err(|source| PatchError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let file_size = file.seek(SeekFrom::End(0))?;

    let start = match offset {
        OffsetArg::Append => {
            return Err(PatchError::OffsetExceedsSize {
                offset: None,
                size: file_size,
            })
        }
        OffsetArg::At(at) if at >= 0 && at.unsigned_abs() >= file_size => {
            return Err(PatchError::OffsetExceedsSize {
                offset: Some(at),
                size: file_size,
            })
        }
        OffsetArg::At(at) => u64::try_from(at).map_err(|_| PatchError::Seek {
            offset: at,
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "negative offset",
            ),
        })?,
    };

    file.seek(SeekFrom::Start(start))?;
    let requested = length.resolve(start, file_size);
    debug!(path = %path.display(), file_size, start, requested, "dumping range");

    let mut dump = HexDump::new(out, requested);
    let mut source = file.take(requested);
    let mut buf = [0u8; 4096];
    loop {
        let n = source.read(&mut buf)?;
        if n == 0 {
            break;
        }
        dump.extend(&buf[..n])?;
    }

    let dumped = dump.written();
    dump.finish()?;

    Ok(ReadReport {
        path: path.to_path_buf(),
        file_size,
        offset: start,
        requested,
        dumped,
    })
}
