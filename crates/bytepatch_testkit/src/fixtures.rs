//! Temporary file fixtures.
//!
//! Provides throwaway binary files for exercising reads and writes.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A binary file inside its own temporary directory.
///
/// The directory and file are removed when the fixture is dropped.
pub struct TempBinFile {
    path: PathBuf,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: TempDir,
}

impl TempBinFile {
    /// Creates a fixture whose file does not exist yet.
    pub fn missing() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("target.bin");
        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Creates a fixture holding `contents`.
    pub fn with_contents(contents: &[u8]) -> Self {
        let file = Self::missing();
        std::fs::write(&file.path, contents).expect("Failed to write fixture file");
        file
    }

    /// Creates a fixture holding `len` bytes counting up from zero, wrapping at 256.
    pub fn counting(len: usize) -> Self {
        Self::with_contents(&counting_bytes(len))
    }

    /// Returns the path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file back.
    pub fn contents(&self) -> Vec<u8> {
        std::fs::read(&self.path).expect("Failed to read fixture file")
    }

    /// Returns the current file size.
    pub fn len(&self) -> u64 {
        std::fs::metadata(&self.path)
            .expect("Failed to stat fixture file")
            .len()
    }

    /// Whether the file is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns `len` bytes counting up from zero, wrapping at 256.
pub fn counting_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

/// Renders `bytes` the way a read dump of exactly those bytes looks.
pub fn expected_dump(bytes: &[u8]) -> String {
    let mut dump = bytepatch_core::HexDump::new(Vec::new(), bytes.len() as u64);
    dump.extend(bytes).expect("Failed to format dump");
    String::from_utf8(dump.finish().expect("Failed to finish dump"))
        .expect("Dump should be ASCII")
}
