//! Memset command implementation.

use crate::error::CliResult;
use bytepatch_core::{fill, parse_byte, parse_number, OffsetArg, PatchError, WriteOptions};
use std::path::Path;
use tracing::info;

/// Runs the memset command: writes `length` copies of one byte at `offset`.
pub fn run(
    offset: &str,
    length: &str,
    byte: &str,
    file: &Path,
    options: &WriteOptions,
) -> CliResult<()> {
    let count = parse_number(length)?;
    let count = u64::try_from(count)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| PatchError::InvalidLength {
            arg: length.to_string(),
        })?;

    let value = parse_byte(byte)?;
    let offset = OffsetArg::parse(offset)?;

    info!("Filling {} bytes of 0x{:02X} at {} in {:?}", count, value, offset, file);
    let report = fill(file, offset, value, count, options)?;
    super::print_written(&report);

    Ok(())
}
