//! Shared test doubles

use crate::materializer::{Filesystem, LocalFilesystem};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Cloneable in-memory writer
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Real filesystem that fails every write to one file name
#[derive(Debug)]
pub struct FailingFilesystem {
    file_name: &'static str,
    attempts: Mutex<Vec<PathBuf>>,
}

impl FailingFilesystem {
    pub fn failing_on(file_name: &'static str) -> Self {
        Self {
            file_name,
            attempts: Mutex::new(Vec::new()),
        }
    }

    /// Every path a write was attempted on, in order
    pub fn attempts(&self) -> Vec<PathBuf> {
        self.attempts.lock().unwrap().clone()
    }
}

impl Filesystem for FailingFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        LocalFilesystem.create_dir_all(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.attempts.lock().unwrap().push(path.to_path_buf());
        if path.file_name().is_some_and(|name| name == self.file_name) {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        LocalFilesystem.write_file(path, contents)
    }
}
