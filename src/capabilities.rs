//! Injected collaborators
//!
//! The shell core never reads the wall clock, launches programs or touches
//! the directory tree directly. Each of those goes through one of the traits
//! below so tests can substitute deterministic fakes.

use crate::error::{Result, ShellError};
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Source of "now" in local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Opens a file with the operating system's default handler.
pub trait FileOpener: Send + Sync {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Directory listing used by the search worker.
///
/// Listing a directory may fail as a whole (permissions, races); entries that
/// cannot be inspected individually are skipped rather than reported.
pub trait FileSystem: Send + Sync {
    fn current_dir(&self) -> Result<PathBuf>;

    fn list_directories(&self, path: &Path) -> Result<Vec<PathBuf>>;

    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Opens files through the `open` crate.
pub struct SystemOpener;

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) -> Result<()> {
        open::that(path).map_err(|e| ShellError::OpenFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

pub struct LocalFileSystem;

impl LocalFileSystem {
    fn list(path: &Path, want_dirs: bool) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path).map_err(|e| ShellError::DirectoryAccessDenied {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut paths = Vec::new();
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            // Symlinked directories are neither walked (keeps the walk finite)
            // nor reported as files.
            let matches = if want_dirs {
                file_type.is_dir()
            } else {
                file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
            };
            if matches {
                paths.push(entry.path());
            }
        }
        Ok(paths)
    }
}

impl FileSystem for LocalFileSystem {
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }

    fn list_directories(&self, path: &Path) -> Result<Vec<PathBuf>> {
        Self::list(path, true)
    }

    fn list_files(&self, path: &Path) -> Result<Vec<PathBuf>> {
        Self::list(path, false)
    }
}

/// The full set of collaborators handed to a [`crate::shell::Shell`].
#[derive(Clone)]
pub struct Capabilities {
    pub clock: Arc<dyn Clock>,
    pub opener: Arc<dyn FileOpener>,
    pub fs: Arc<dyn FileSystem>,
}

impl Capabilities {
    /// Real clock, real file system and the platform's default opener.
    pub fn system() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            opener: Arc::new(SystemOpener),
            fs: Arc::new(LocalFileSystem),
        }
    }
}
