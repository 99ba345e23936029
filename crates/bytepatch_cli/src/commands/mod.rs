//! CLI command implementations.

pub mod memset;
pub mod read;
pub mod write;

use bytepatch_core::WriteReport;

/// Prints the confirmation line for a successful write.
fn print_written(report: &WriteReport) {
    println!(
        "{} bytes successfully written to `{}'",
        report.written,
        report.path.display()
    );
}
