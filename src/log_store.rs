//! Command log
//!
//! Every accepted input line is recorded with its timestamp in an in-memory,
//! append-only sequence and mirrored best-effort to a durable day file named
//! after the date the program started (`logs_YYYY-MM-DD.txt`). The day file
//! is chosen once: a session that runs past midnight keeps writing to the
//! file of its start date.

use crate::capabilities::Clock;
use crate::error::{Result, ShellError};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const CLOSING_MESSAGE: &str = "Program closed.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub message: String,
}

/// Append-only durable mirror of the command log.
pub trait LogWriter: Send {
    fn append_line(&mut self, line: &str) -> Result<()>;
}

/// The per-run log file under the log directory.
#[derive(Debug, Clone)]
pub struct DayFile {
    path: PathBuf,
}

impl DayFile {
    pub fn path_for(log_dir: &Path, date: NaiveDate) -> PathBuf {
        log_dir.join(format!("logs_{}.txt", date.format("%Y-%m-%d")))
    }

    /// Create the log directory and the day file if they are missing.
    ///
    /// Failures are logged and otherwise ignored; appends will be retried
    /// (and swallowed) line by line.
    pub fn create(log_dir: &Path, start_date: NaiveDate) -> Self {
        let path = Self::path_for(log_dir, start_date);

        if let Err(e) = fs::create_dir_all(log_dir) {
            tracing::warn!(
                "Failed to create log directory {}: {}",
                log_dir.display(),
                e
            );
        } else if let Err(e) = OpenOptions::new().create(true).append(true).open(&path) {
            tracing::warn!("Failed to create log file {}: {}", path.display(), e);
        }

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogWriter for DayFile {
    fn append_line(&mut self, line: &str) -> Result<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", line))
            .map_err(|e| ShellError::LogWriteFailed {
                path: self.path.clone(),
                source: e,
            })
    }
}

/// Format one durable log line: `[YYYY-MM-DD HH:MM:SS] message`.
pub fn format_file_line(timestamp: NaiveDateTime, message: &str) -> String {
    format!("[{}] {}", timestamp.format(FILE_TIMESTAMP_FORMAT), message)
}

pub struct LogStore {
    entries: Vec<LogEntry>,
    clock: Arc<dyn Clock>,
    writer: Option<Box<dyn LogWriter>>,
}

impl LogStore {
    pub fn new(clock: Arc<dyn Clock>, writer: Option<Box<dyn LogWriter>>) -> Self {
        Self {
            entries: Vec::new(),
            clock,
            writer,
        }
    }

    /// Record `message` at the current time and mirror it to the day file.
    pub fn append(&mut self, message: &str) -> &LogEntry {
        let now = self.clock.now();
        // A clock stepping backwards must not break the time ordering.
        let timestamp = match self.entries.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };

        self.mirror(timestamp, message);
        self.entries.push(LogEntry {
            timestamp,
            message: message.to_string(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Entries with `from <= timestamp <= to`, in insertion order.
    pub fn query_range(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .filter(|e| e.timestamp >= from && e.timestamp <= to)
            .collect()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append the shutdown marker to the day file only.
    pub fn write_closing_line(&mut self) {
        let now = self.clock.now();
        self.mirror(now, CLOSING_MESSAGE);
    }

    fn mirror(&mut self, timestamp: NaiveDateTime, message: &str) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        if let Err(e) = writer.append_line(&format_file_line(timestamp, message)) {
            tracing::warn!(error = %e, "Durable log write failed, keeping in-memory entry");
        }
    }
}
