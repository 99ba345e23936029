//! # bytepatch core
//!
//! Building blocks for inspecting and patching binary files.
//!
//! Files are treated as **opaque byte sequences**. Nothing in this crate
//! knows about file formats, structures or endianness.
//!
//! ## Components
//!
//! - [`parse_number`] / [`parse_byte`] - numeric and byte literal parsing
//! - [`decode_hex`] - whitespace-tolerant hex string decoding
//! - [`OffsetArg`] / [`LengthArg`] - offset and length arguments with sentinels
//! - [`HexDump`] - the hex dump formatter
//! - [`read_range`] - dump a byte range of a file
//! - [`write_bytes`] / [`fill`] - patch a file at an offset
//!
//! ## Example
//!
//! ```rust
//! use bytepatch_core::{decode_hex, parse_byte, parse_number};
//!
//! assert_eq!(parse_number("0x1F").unwrap(), 31);
//! assert_eq!(parse_byte("\\n").unwrap(), 10);
//! assert_eq!(decode_hex("de ad be ef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dump;
mod error;
mod hex;
mod literal;
mod reader;
mod region;
mod writer;

pub use config::{WriteOptions, DEFAULT_CREATE_MODE, DEFAULT_FILL_CHUNK_SIZE};
pub use dump::{HexDump, BYTES_PER_GROUP, BYTES_PER_LINE};
pub use error::{PatchError, PatchResult};
pub use hex::decode_hex;
pub use literal::{parse_byte, parse_number};
pub use reader::{read_range, ReadReport};
pub use region::{LengthArg, OffsetArg};
pub use writer::{fill, write_bytes, WriteReport};
