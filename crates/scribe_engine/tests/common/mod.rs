// Shared test helpers. Imported via `mod common;` in integration test files.
#![allow(dead_code)]

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use scribe_engine::{FileSystem, StdFileSystem, StdHandle, WriteHandle};

/// Which steps should fail instead of touching the disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct Faults {
    pub create: bool,
    pub write: bool,
    pub flush: bool,
    pub sync: bool,
    pub delete: bool,
    pub close: bool,
    /// Remove the real file right before the existence check.
    pub vanish_before_check: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallCounts {
    pub create: usize,
    pub write: usize,
    pub flush: usize,
    pub sync: usize,
    pub exists: usize,
    pub delete: usize,
    pub close: usize,
}

/// Real file system with injectable failures and per-step call counts.
#[derive(Debug, Clone, Default)]
pub struct FaultyFileSystem {
    inner: StdFileSystem,
    faults: Faults,
    calls: Arc<Mutex<CallCounts>>,
}

impl FaultyFileSystem {
    pub fn new(faults: Faults) -> Self {
        Self {
            inner: StdFileSystem,
            faults,
            calls: Arc::new(Mutex::new(CallCounts::default())),
        }
    }

    pub fn calls(&self) -> CallCounts {
        self.calls.lock().unwrap().clone()
    }

    fn count(&self, bump: impl FnOnce(&mut CallCounts)) {
        bump(&mut self.calls.lock().unwrap());
    }
}

impl FileSystem for FaultyFileSystem {
    type Handle = FaultyHandle;

    fn create_file(&self, path: &Path) -> io::Result<FaultyHandle> {
        self.count(|c| c.create += 1);
        if self.faults.create {
            return Err(injected("cannot create file"));
        }
        Ok(FaultyHandle {
            inner: self.inner.create_file(path)?,
            faults: self.faults,
            calls: self.calls.clone(),
        })
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.count(|c| c.exists += 1);
        if self.faults.vanish_before_check {
            let _ = std::fs::remove_file(path);
        }
        self.inner.file_exists(path)
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        self.count(|c| c.delete += 1);
        if self.faults.delete {
            return Err(injected("file cannot be deleted"));
        }
        self.inner.delete_file(path)
    }
}

#[derive(Debug)]
pub struct FaultyHandle {
    inner: StdHandle,
    faults: Faults,
    calls: Arc<Mutex<CallCounts>>,
}

impl FaultyHandle {
    fn count(&self, bump: impl FnOnce(&mut CallCounts)) {
        bump(&mut self.calls.lock().unwrap());
    }
}

impl WriteHandle for FaultyHandle {
    fn write_all(&mut self, content: &[u8]) -> io::Result<()> {
        self.count(|c| c.write += 1);
        if self.faults.write {
            return Err(injected("write failed"));
        }
        self.inner.write_all(content)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.count(|c| c.flush += 1);
        if self.faults.flush {
            return Err(injected("flush failed"));
        }
        self.inner.flush()
    }

    fn sync(&mut self) -> io::Result<()> {
        self.count(|c| c.sync += 1);
        if self.faults.sync {
            return Err(injected("sync failed"));
        }
        self.inner.sync()
    }

    fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    fn close(&mut self) -> io::Result<()> {
        self.count(|c| c.close += 1);
        // Release the real file either way so the temp dir can be cleaned up.
        let closed = self.inner.close();
        if self.faults.close {
            return Err(injected("close failed"));
        }
        closed
    }
}

fn injected(message: &str) -> io::Error {
    io::Error::other(message)
}
