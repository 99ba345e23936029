//! Offset and length arguments.
//!
//! Offsets and lengths share their grammar slot with a keyword that is
//! resolved against the file when the command runs: `append` for offsets and
//! `all` for lengths. Both are case-insensitive.

use crate::error::PatchResult;
use crate::literal::parse_number;
use std::fmt;
use std::str::FromStr;

/// Keyword selecting the current end of file as write position.
const APPEND: &str = "append";

/// Keyword selecting everything from the offset to the end of file.
const ALL: &str = "all";

/// A file position argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetArg {
    /// The end of the file at the time of writing.
    Append,
    /// An absolute byte position, as given on the command line.
    At(i64),
}

impl OffsetArg {
    /// Parses an offset argument.
    ///
    /// # Errors
    ///
    /// Returns the [`parse_number`] error when the argument is neither
    /// `append` nor a number.
    pub fn parse(arg: &str) -> PatchResult<Self> {
        if arg.eq_ignore_ascii_case(APPEND) {
            Ok(Self::Append)
        } else {
            parse_number(arg).map(Self::At)
        }
    }
}

impl FromStr for OffsetArg {
    type Err = crate::error::PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OffsetArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Append => f.write_str(APPEND),
            Self::At(offset) => write!(f, "{offset}"),
        }
    }
}

/// A byte count argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthArg {
    /// Everything up to the end of the file.
    All,
    /// An explicit count, as given on the command line.
    Count(i64),
}

impl LengthArg {
    /// Parses a length argument.
    ///
    /// # Errors
    ///
    /// Returns the [`parse_number`] error when the argument is neither `all`
    /// nor a number.
    pub fn parse(arg: &str) -> PatchResult<Self> {
        if arg.eq_ignore_ascii_case(ALL) {
            Ok(Self::All)
        } else {
            parse_number(arg).map(Self::Count)
        }
    }

    /// Resolves the number of bytes to read starting at `offset` in a file of
    /// `size` bytes.
    ///
    /// `All` and counts below one mean "up to the end of the file". Larger
    /// counts are returned unchanged, even when they reach past the end.
    #[must_use]
    pub fn resolve(self, offset: u64, size: u64) -> u64 {
        match self {
            Self::Count(count) if count >= 1 => count.unsigned_abs(),
            _ => size.saturating_sub(offset),
        }
    }
}

impl FromStr for LengthArg {
    type Err = crate::error::PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LengthArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}
