//! # bytepatch testkit
//!
//! Test utilities for bytepatch.
//!
//! This crate provides:
//! - Temporary binary file fixtures
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use bytepatch_testkit::prelude::*;
//!
//! let file = TempBinFile::with_contents(b"\x00\x01\x02");
//! assert_eq!(file.contents(), vec![0, 1, 2]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
