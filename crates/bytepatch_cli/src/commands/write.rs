//! Write command implementation.

use crate::error::CliResult;
use bytepatch_core::{decode_hex, write_bytes, OffsetArg, PatchError, WriteOptions};
use std::path::Path;
use tracing::info;

/// Runs the write command: decodes `data` and writes it at `offset`.
pub fn run(offset: &str, data: &str, file: &Path, options: &WriteOptions) -> CliResult<()> {
    if data.is_empty() {
        return Err(PatchError::EmptyArgument.into());
    }

    let bytes = decode_hex(data)?;
    let offset = OffsetArg::parse(offset)?;

    info!("Writing {} bytes at {} to {:?}", bytes.len(), offset, file);
    let report = write_bytes(file, offset, &bytes, options)?;
    super::print_written(&report);

    Ok(())
}
