use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use scribe_logging::scribe_debug;

/// An open, writable file owned by a single write.
pub trait WriteHandle {
    fn write_all(&mut self, content: &[u8]) -> io::Result<()>;

    /// Pushes buffered bytes to the operating system.
    fn flush(&mut self) -> io::Result<()>;

    /// Asks the operating system to persist the file to stable storage.
    fn sync(&mut self) -> io::Result<()>;

    fn is_open(&self) -> bool;

    fn close(&mut self) -> io::Result<()>;
}

/// The file system operations a transactional write is built from.
pub trait FileSystem {
    type Handle: WriteHandle;

    /// Opens `path` for writing, creating or truncating it.
    fn create_file(&self, path: &Path) -> io::Result<Self::Handle>;

    fn file_exists(&self, path: &Path) -> bool;

    fn delete_file(&self, path: &Path) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    type Handle = StdHandle;

    fn create_file(&self, path: &Path) -> io::Result<StdHandle> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(windows)]
        {
            use std::os::windows::fs::OpenOptionsExt;
            // FILE_SHARE_READ | FILE_SHARE_WRITE | FILE_SHARE_DELETE, so rollback
            // can remove the file while the handle is still open.
            options.share_mode(0x1 | 0x2 | 0x4);
        }
        let file = options.open(path)?;
        Ok(StdHandle {
            writer: Some(BufWriter::new(file)),
        })
    }

    fn file_exists(&self, path: &Path) -> bool {
        // Also sees dangling symlinks, which `Path::exists` would miss.
        fs::symlink_metadata(path).is_ok()
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

/// Buffered handle over a `std::fs::File`.
#[derive(Debug)]
pub struct StdHandle {
    writer: Option<BufWriter<File>>,
}

impl StdHandle {
    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.writer.as_mut().ok_or_else(already_closed)
    }
}

impl WriteHandle for StdHandle {
    fn write_all(&mut self, content: &[u8]) -> io::Result<()> {
        self.writer()?.write_all(content)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }

    fn sync(&mut self) -> io::Result<()> {
        self.writer()?.get_ref().sync_all()
    }

    fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    fn close(&mut self) -> io::Result<()> {
        let writer = self.writer.take().ok_or_else(already_closed)?;
        // Closing never writes: bytes still buffered here belong to a write
        // that already failed its flush step.
        let (file, buffered) = writer.into_parts();
        if let Ok(unflushed) = buffered {
            if !unflushed.is_empty() {
                scribe_debug!("discarding {} unflushed bytes on close", unflushed.len());
            }
        }
        drop(file);
        Ok(())
    }
}

fn already_closed() -> io::Error {
    io::Error::other("file handle is already closed")
}
