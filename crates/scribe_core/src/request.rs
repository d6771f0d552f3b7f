use std::path::{Path, PathBuf};

/// A single "write this text to this path" request.
///
/// Both fields are supplied by the caller; there is no default target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    target_path: PathBuf,
    content: String,
}

impl WriteRequest {
    pub fn new(target_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            target_path: target_path.into(),
            content: content.into(),
        }
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
