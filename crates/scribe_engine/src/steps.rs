//! The individual steps of a transactional write.
//!
//! Each step is attempted exactly once by [`crate::TransactionalFileWriter`];
//! they are public so they can be exercised on their own.

use std::io;
use std::path::Path;

use scribe_logging::{scribe_debug, scribe_warn};

use crate::{FileSystem, WriteError, WriteHandle};

/// Opens `path` for writing. Any OS-level failure becomes [`WriteError::Creation`].
pub fn create_file<F: FileSystem>(fs: &F, path: &Path) -> Result<F::Handle, WriteError> {
    fs.create_file(path).map_err(|source| WriteError::Creation {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `content` and flushes it to the OS, then syncs it to storage.
///
/// Write and flush errors are returned. The sync result is reported as the
/// returned bool: `Ok(false)` means the bytes reached the OS but may not
/// survive a crash.
pub fn write_and_flush<H: WriteHandle>(handle: &mut H, content: &str) -> io::Result<bool> {
    handle.write_all(content.as_bytes())?;
    handle.flush()?;
    match handle.sync() {
        Ok(()) => {
            scribe_debug!("flushed {} bytes safely to disk", content.len());
            Ok(true)
        }
        Err(err) => {
            scribe_warn!("durability sync failed: {}", err);
            Ok(false)
        }
    }
}

pub fn file_exists<F: FileSystem>(fs: &F, path: &Path) -> bool {
    fs.file_exists(path)
}

/// Removes `path`. Any OS-level failure becomes [`WriteError::Deletion`].
pub fn delete_file<F: FileSystem>(fs: &F, path: &Path) -> Result<(), WriteError> {
    fs.delete_file(path).map_err(|source| WriteError::Deletion {
        path: path.to_path_buf(),
        source,
    })
}

pub fn is_handle_open<H: WriteHandle>(handle: &H) -> bool {
    handle.is_open()
}

/// Closes the handle, returning whether that succeeded. Never fails:
/// closing an already-closed handle yields `false`.
pub fn close_handle<H: WriteHandle>(handle: &mut H) -> bool {
    match handle.close() {
        Ok(()) => true,
        Err(err) => {
            scribe_warn!("file handle could not be closed: {}", err);
            false
        }
    }
}
