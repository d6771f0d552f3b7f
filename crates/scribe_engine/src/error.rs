use std::io;
use std::path::{Path, PathBuf};

use scribe_core::FailureKind;
use thiserror::Error;

/// Why a transactional write did not complete.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The target could not be opened for writing. Nothing was created.
    #[error("could not create {path:?}: {source}")]
    Creation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing or persisting failed; any partial file has been removed.
    #[error("could not write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A partial file is left behind because rollback could not delete it.
    #[error("could not delete partially written {path:?}: {source}")]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// The failure kind recorded by the write state machine.
    pub fn kind(&self) -> FailureKind {
        match self {
            WriteError::Creation { .. } => FailureKind::Creation,
            WriteError::Write { .. } => FailureKind::Write,
            WriteError::Deletion { .. } => FailureKind::Deletion,
        }
    }

    /// The target path of the failed write.
    pub fn path(&self) -> &Path {
        match self {
            WriteError::Creation { path, .. }
            | WriteError::Write { path, .. }
            | WriteError::Deletion { path, .. } => path,
        }
    }
}
