use std::path::PathBuf;

use scribe_core::Stage;

/// Options for [`crate::TransactionalFileWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Treat a failed durability sync as a write failure and roll back.
    /// When `false` the file is kept and the report says it is not durable.
    pub require_durable: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            require_durable: true,
        }
    }
}

/// What a successful write did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub bytes_written: usize,
    /// Whether the content was synced to stable storage.
    pub durable: bool,
    /// Close status flag; `false` means closing the handle reported an error.
    pub handle_closed: bool,
    /// Every stage the write went through, ending in `Done`.
    pub stages: Vec<Stage>,
}
