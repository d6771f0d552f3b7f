//! Scribe engine: file I/O steps and the transactional write with rollback.
mod error;
mod fs;
pub mod steps;
mod types;
mod writer;

pub use error::WriteError;
pub use fs::{FileSystem, StdFileSystem, StdHandle, WriteHandle};
pub use types::{WriteReport, WriterConfig};
pub use writer::{write_text, TransactionalFileWriter};

pub use scribe_core::{FailureKind, Outcome, Stage, WriteRequest};
