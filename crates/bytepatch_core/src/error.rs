//! Error types for parsing and patching.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for bytepatch operations.
pub type PatchResult<T> = Result<T, PatchError>;

/// Errors that can occur while parsing arguments or touching the file.
///
/// Every variant is fatal for the running command. The `Display` output is
/// the diagnostic shown to the user after an `error: ` prefix.
#[derive(Debug, Error)]
pub enum PatchError {
    /// A numeric literal contains characters invalid for its base.
    #[error("argument cannot be interpreted as number: {arg}")]
    InvalidNumber {
        /// The offending argument.
        arg: String,
    },

    /// A numeric literal does not fit a signed 64-bit integer.
    #[error("number out of range: {arg}")]
    NumberOverflow {
        /// The offending argument.
        arg: String,
    },

    /// A byte literal matches none of the accepted forms.
    #[error("invalid argument: {arg}")]
    InvalidByte {
        /// The offending argument.
        arg: String,
    },

    /// A byte literal parsed to a value outside `0..=255`.
    #[error("argument value outside of 8 bit range: {arg} ({value})")]
    ByteOutOfRange {
        /// The offending argument.
        arg: String,
        /// The parsed value.
        value: i64,
    },

    /// Hex data contains a character that is neither a hex digit nor whitespace.
    #[error("character `{}' is not a hexadecimal digit", render_char(.found))]
    InvalidHexDigit {
        /// The offending input byte.
        found: u8,
    },

    /// A required argument was empty.
    #[error("empty argument")]
    EmptyArgument,

    /// A fill length below one.
    #[error("length must be 1 or more: {arg}")]
    InvalidLength {
        /// The offending argument.
        arg: String,
    },

    /// A read offset at or past the end of the file.
    #[error("offset equals or exceeds filesize")]
    OffsetExceedsSize {
        /// The requested offset, `None` for the `append` sentinel.
        offset: Option<i64>,
        /// File size at open time.
        size: u64,
    },

    /// The file could not be opened or created.
    #[error("cannot open `{}': {source}", .path.display())]
    FileAccess {
        /// The file path.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Seeking to the requested position failed.
    #[error("cannot seek to offset {offset}: {source}")]
    Seek {
        /// The requested offset.
        offset: i64,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Fewer bytes than requested reached the file.
    #[error("short write: {written} of {expected} bytes written")]
    ShortWrite {
        /// Bytes actually written.
        written: u64,
        /// Bytes that should have been written.
        expected: u64,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn render_char(byte: &u8) -> String {
    let byte = *byte;
    if byte.is_ascii_graphic() || byte == b' ' {
        char::from(byte).to_string()
    } else {
        format!("0x{byte:02X}")
    }
}
