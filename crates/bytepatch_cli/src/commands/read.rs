//! Read command implementation.

use crate::error::{CliError, CliResult};
use bytepatch_core::{read_range, LengthArg, OffsetArg};
use std::io;
use std::path::Path;
use tracing::info;

/// Runs the read command.
///
/// `args` is either `<file>` or `<offset> <length> <file>`. The short form
/// reads the whole file.
pub fn run(args: &[String]) -> CliResult<()> {
    let (offset, length, file) = match args {
        [file] => (OffsetArg::At(0), LengthArg::All, file),
        [offset, length, file] => (OffsetArg::parse(offset)?, LengthArg::parse(length)?, file),
        _ => return Err(CliError::Usage),
    };

    info!("Reading {} at {} from {:?}", length, offset, file);
    let report = read_range(Path::new(file), offset, length, io::stdout().lock())?;

    if report.is_short() {
        info!(
            "End of file after {} of {} bytes",
            report.dumped, report.requested
        );
    }

    Ok(())
}
