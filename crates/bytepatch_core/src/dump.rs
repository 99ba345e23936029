//! Hex dump formatting.
//!
//! Each byte is printed as a space followed by two uppercase hex digits.
//! Lines hold [`BYTES_PER_LINE`] bytes, split into groups of
//! [`BYTES_PER_GROUP`] by one extra space:
//!
//! ```text
//!  00 01 02 03  04 05 06 07  08 09 0A 0B  0C 0D 0E 0F
//!  10 11
//! ```

use std::io::{self, Write};

/// Bytes printed per output line.
pub const BYTES_PER_LINE: u64 = 16;

/// Bytes per visual group within a line.
pub const BYTES_PER_GROUP: u64 = 4;

/// Streaming hex dump writer for a range of known length.
///
/// The range length decides where the final newline goes. If the input ends
/// before `expected` bytes were pushed, [`HexDump::finish`] terminates the
/// output with a newline instead.
#[derive(Debug)]
pub struct HexDump<W: Write> {
    out: W,
    expected: u64,
    written: u64,
}

impl<W: Write> HexDump<W> {
    /// Creates a dump of `expected` bytes written to `out`.
    pub fn new(out: W, expected: u64) -> Self {
        Self {
            out,
            expected,
            written: 0,
        }
    }

    /// Formats one byte.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn push(&mut self, byte: u8) -> io::Result<()> {
        self.written += 1;
        let n = self.written;

        if n % BYTES_PER_GROUP == 0 && n % BYTES_PER_LINE != 0 {
            write!(self.out, " {byte:02X} ")?;
        } else {
            write!(self.out, " {byte:02X}")?;
        }

        if n == self.expected || n % BYTES_PER_LINE == 0 {
            self.out.write_all(b"\n")?;
        }

        Ok(())
    }

    /// Formats a run of bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn extend(&mut self, bytes: &[u8]) -> io::Result<()> {
        bytes.iter().try_for_each(|&b| self.push(b))
    }

    /// Number of bytes formatted so far.
    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Whether fewer bytes than expected were pushed.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.written < self.expected
    }

    /// Ends the dump, flushes the output and hands it back.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing the output fails.
    pub fn finish(mut self) -> io::Result<W> {
        if self.is_short() {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
