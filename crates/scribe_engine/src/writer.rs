use std::io;
use std::mem;
use std::path::Path;

use scribe_core::{update, Msg, Stage, WriteRequest, WriteState};
use scribe_logging::{scribe_debug, scribe_error, scribe_info, scribe_warn};

use crate::steps;
use crate::{FileSystem, StdFileSystem, WriteError, WriteHandle, WriteReport, WriterConfig};

/// Writes text to a path so that afterwards the file either holds exactly
/// that text or does not exist.
///
/// Not safe for concurrent use against the same path: no lock is taken,
/// callers serialize writes to one target themselves.
///
/// A symlinked target is followed when the file is created, but rollback
/// removes only the link: the linked file is left truncated.
#[derive(Debug, Clone)]
pub struct TransactionalFileWriter<F = StdFileSystem> {
    fs: F,
    config: WriterConfig,
}

impl TransactionalFileWriter<StdFileSystem> {
    pub fn new() -> Self {
        Self::with_file_system(StdFileSystem)
    }
}

impl Default for TransactionalFileWriter<StdFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> TransactionalFileWriter<F> {
    pub fn with_file_system(fs: F) -> Self {
        Self {
            fs,
            config: WriterConfig::default(),
        }
    }

    pub fn with_config(mut self, config: WriterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> WriterConfig {
        self.config
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Create, write and sync, rolling back on failure; the handle is
    /// released on every path once it was obtained.
    ///
    /// When the rollback itself fails, [`WriteError::Deletion`] is returned
    /// instead of the write error. A failed close is only logged and shows
    /// up as `handle_closed: false` in the report.
    pub fn process(&self, request: &WriteRequest) -> Result<WriteReport, WriteError> {
        self.process_with_history(request).0
    }

    /// Like [`Self::process`], but also returns the stages visited, which
    /// the report alone does not carry on failure.
    pub fn process_with_history(
        &self,
        request: &WriteRequest,
    ) -> (Result<WriteReport, WriteError>, Vec<Stage>) {
        let mut txn = Transaction::new(request.target_path());
        let result = self.run(&mut txn, request);
        (result, txn.into_history())
    }

    fn run(
        &self,
        txn: &mut Transaction<'_>,
        request: &WriteRequest,
    ) -> Result<WriteReport, WriteError> {
        let path = request.target_path();
        txn.step(Msg::Begin);

        let handle = match steps::create_file(&self.fs, path) {
            Ok(handle) => handle,
            Err(err) => {
                txn.step(Msg::CreateFailed);
                scribe_error!("{}", err);
                return Err(err);
            }
        };
        txn.step(Msg::Created);

        let mut guard = HandleGuard::new(handle, path);
        let written = self.write_or_roll_back(txn, guard.handle_mut(), request);
        let handle_closed = guard.release();
        txn.step(Msg::Closed { ok: handle_closed });

        let durable = written?;
        scribe_info!(
            "wrote {} bytes to {:?} (durable={})",
            request.content().len(),
            path,
            durable
        );
        Ok(WriteReport {
            path: path.to_path_buf(),
            bytes_written: request.content().len(),
            durable,
            handle_closed,
            stages: txn.history().to_vec(),
        })
    }

    fn write_or_roll_back(
        &self,
        txn: &mut Transaction<'_>,
        handle: &mut F::Handle,
        request: &WriteRequest,
    ) -> Result<bool, WriteError> {
        let path = request.target_path();
        let write_error = match self.persist(handle, request.content()) {
            Ok(durable) => {
                txn.step(Msg::Written);
                return Ok(durable);
            }
            Err(err) => err,
        };
        txn.step(Msg::WriteFailed);
        scribe_warn!("writing {:?} failed, rolling back: {}", path, write_error);

        if !steps::file_exists(&self.fs, path) {
            txn.step(Msg::NothingToRollBack);
            return Err(WriteError::Write {
                path: path.to_path_buf(),
                source: write_error,
            });
        }

        match steps::delete_file(&self.fs, path) {
            Ok(()) => {
                txn.step(Msg::RolledBack);
                scribe_info!("rolled back partial file {:?}", path);
                Err(WriteError::Write {
                    path: path.to_path_buf(),
                    source: write_error,
                })
            }
            Err(err) => {
                txn.step(Msg::RollbackFailed);
                scribe_error!("{} (after write error: {})", err, write_error);
                Err(err)
            }
        }
    }

    fn persist(&self, handle: &mut F::Handle, content: &str) -> io::Result<bool> {
        let durable = steps::write_and_flush(handle, content)?;
        if !durable && self.config.require_durable {
            return Err(io::Error::other(
                "content could not be synced to durable storage",
            ));
        }
        Ok(durable)
    }
}

/// Writes `content` to `path` with the default writer.
pub fn write_text(
    path: impl AsRef<Path>,
    content: impl Into<String>,
) -> Result<WriteReport, WriteError> {
    let request = WriteRequest::new(path.as_ref(), content);
    TransactionalFileWriter::new().process(&request)
}

/// Tracks the state machine of one `process` call.
struct Transaction<'p> {
    path: &'p Path,
    state: WriteState,
}

impl<'p> Transaction<'p> {
    fn new(path: &'p Path) -> Self {
        Self {
            path,
            state: WriteState::new(),
        }
    }

    fn step(&mut self, msg: Msg) {
        let state = mem::take(&mut self.state);
        self.state = update(state, msg);
        scribe_debug!("{:?}: {:?} -> {}", self.path, msg, self.state.stage());
    }

    fn history(&self) -> &[Stage] {
        self.state.history()
    }

    fn into_history(self) -> Vec<Stage> {
        self.state.history().to_vec()
    }
}

/// Owns the handle for the duration of a write and releases it exactly once:
/// through `release` on normal paths, or on drop while unwinding.
struct HandleGuard<'p, H: WriteHandle> {
    handle: H,
    path: &'p Path,
    released: bool,
}

impl<'p, H: WriteHandle> HandleGuard<'p, H> {
    fn new(handle: H, path: &'p Path) -> Self {
        Self {
            handle,
            path,
            released: false,
        }
    }

    fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    fn release(mut self) -> bool {
        self.released = true;
        self.close_if_open()
    }

    fn close_if_open(&mut self) -> bool {
        if !steps::is_handle_open(&self.handle) {
            scribe_debug!("handle for {:?} was already closed", self.path);
            return true;
        }
        let closed = steps::close_handle(&mut self.handle);
        if closed {
            scribe_debug!("file handle for {:?} was closed", self.path);
        } else {
            scribe_warn!("file handle for {:?} was not closed", self.path);
        }
        closed
    }
}

impl<H: WriteHandle> Drop for HandleGuard<'_, H> {
    fn drop(&mut self) {
        if !self.released {
            self.released = true;
            self.close_if_open();
        }
    }
}
