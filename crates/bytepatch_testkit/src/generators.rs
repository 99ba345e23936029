//! Property-based test generators using proptest.
//!
//! Provides strategies for command-line literals together with the value
//! they are expected to parse to.

use proptest::prelude::*;

/// Strategy for non-negative numbers rendered in any supported literal form.
///
/// Yields `(literal, value)`.
pub fn number_literal_strategy() -> impl Strategy<Value = (String, i64)> {
    (0..=i64::MAX, 0..5u8).prop_map(|(n, form)| {
        let literal = match form {
            0 => n.to_string(),
            1 => format!("0x{n:x}"),
            2 => format!("0X{n:X}"),
            3 => format!("\\x{n:x}"),
            _ => format!("0{n:o}"),
        };
        (literal, n)
    })
}

/// Strategy for byte literals in any supported form.
///
/// Yields `(literal, value)`.
pub fn byte_literal_strategy() -> impl Strategy<Value = (String, u8)> {
    (any::<u8>(), 0..3u8).prop_map(|(b, form)| {
        let literal = match form {
            0 => format!("0x{b:02x}"),
            1 => format!("\\x{b:X}"),
            _ => format!("\\{b}"),
        };
        (literal, b)
    })
}

/// Strategy for data to patch into a file.
pub fn patch_data_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..256)
}

/// Renders `data` as a hex string with a space between every byte.
pub fn to_hex_arg(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Configuration for property-based tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to generate.
    pub cases: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self { cases: 256 }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests, such as ones touching the file system.
    #[must_use]
    pub fn quick() -> Self {
        Self { cases: 32 }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            ..ProptestConfig::default()
        }
    }
}
