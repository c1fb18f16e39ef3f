//! Background file search
//!
//! Walks a directory tree looking for a file by name and opens the first
//! match with the injected opener. The walk uses an explicit stack so that a
//! directory which cannot be read only removes its own subtree from the
//! search.
//!
//! **Concurrency**: the walk runs on its own detached thread and talks to the
//! rest of the shell only through a cloned [`Output`] sender. It never
//! touches the registry or the command log, and it needs no async runtime.
//! There is no cancellation: once started, a search runs until it finds a
//! match, exhausts the tree, or the process exits. Nothing waits for it at
//! shutdown.

use crate::capabilities::{FileOpener, FileSystem};
use crate::error::{Result, ShellError};
use crate::output::Output;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

fn file_name_matches(path: &Path, wanted_lower: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase() == wanted_lower)
        .unwrap_or(false)
}

/// Search `root` for a file named `target` (case-insensitive) and open it.
///
/// Reports `Found:`/`Opened:` on success, the open error on failure to open,
/// and `File not found:` after a full walk without a match. Only the first
/// match is considered.
pub fn search_and_open(
    target: &str,
    root: &Path,
    fs: &dyn FileSystem,
    opener: &dyn FileOpener,
    output: &Output,
) -> Result<PathBuf> {
    let wanted = target.to_lowercase();
    let mut pending = vec![root.to_path_buf()];
    let mut visited = 0usize;

    while let Some(dir) = pending.pop() {
        visited += 1;

        match fs.list_files(&dir) {
            Ok(files) => {
                if let Some(found) = files.into_iter().find(|f| file_name_matches(f, &wanted)) {
                    tracing::debug!(path = %found.display(), visited, "Search matched");
                    output.line(format!("Found: {}", found.display()));
                    return match opener.open(&found) {
                        Ok(()) => {
                            output.line(format!("Opened: {}", found.display()));
                            Ok(found)
                        },
                        Err(e) => {
                            output.line(e.to_string());
                            Err(e)
                        },
                    };
                }
            },
            Err(e) => tracing::debug!(error = %e, "Skipping unreadable directory"),
        }

        match fs.list_directories(&dir) {
            Ok(subdirs) => pending.extend(subdirs),
            Err(e) => tracing::debug!(error = %e, "Skipping unreadable subtree"),
        }
    }

    tracing::debug!(file = target, visited, "Search exhausted");
    let err = ShellError::FileNotFound(target.to_string());
    output.line(err.to_string());
    Err(err)
}

/// Run [`search_and_open`] on a detached background thread.
///
/// Works with or without a tokio runtime. The handle can be joined by
/// callers that need the outcome; the shell itself drops it.
pub fn spawn_search(
    target: String,
    root: PathBuf,
    fs: Arc<dyn FileSystem>,
    opener: Arc<dyn FileOpener>,
    output: Output,
) -> Result<JoinHandle<Result<PathBuf>>> {
    let handle = thread::Builder::new()
        .name("codecmd-search".to_string())
        .spawn(move || search_and_open(&target, &root, fs.as_ref(), opener.as_ref(), &output))?;
    Ok(handle)
}
