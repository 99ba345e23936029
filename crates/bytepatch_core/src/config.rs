//! Write configuration.

/// Permission bits for files created by a write (before the umask).
pub const DEFAULT_CREATE_MODE: u32 = 0o664;

/// Number of fill bytes handed to the OS per write call.
pub const DEFAULT_FILL_CHUNK_SIZE: usize = 64 * 1024;

/// Options controlling how a patch reaches the file.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Permission bits used when the target file has to be created.
    /// Only honoured on Unix.
    pub create_mode: u32,

    /// Upper bound on the buffer used for fill writes.
    pub fill_chunk_size: usize,

    /// Whether to `fsync` the file before reporting success.
    pub sync: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            create_mode: DEFAULT_CREATE_MODE,
            fill_chunk_size: DEFAULT_FILL_CHUNK_SIZE,
            sync: false,
        }
    }
}

impl WriteOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the permission bits for newly created files.
    #[must_use]
    pub const fn create_mode(mut self, mode: u32) -> Self {
        self.create_mode = mode;
        self
    }

    /// Sets the fill buffer size. Zero is treated as one.
    #[must_use]
    pub const fn fill_chunk_size(mut self, size: usize) -> Self {
        self.fill_chunk_size = if size == 0 { 1 } else { size };
        self
    }

    /// Sets whether to sync file data before returning.
    #[must_use]
    pub const fn sync(mut self, value: bool) -> Self {
        self.sync = value;
        self
    }
}
