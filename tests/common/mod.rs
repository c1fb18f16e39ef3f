//! Common utilities for integration tests
//!
//! Binary helpers for driving `codecmd` through stdin, plus a small harness
//! for exercising the library with a controllable clock and a recording
//! file opener.

#![allow(dead_code)]

use assert_cmd::Command;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use codecmd::capabilities::{Capabilities, Clock, FileOpener, LocalFileSystem};
use codecmd::config::ShellConfig;
use codecmd::error::{Result, ShellError};
use codecmd::output::{drain, Output, OutputReceiver};
use codecmd::shell::Shell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Get the path to the `codecmd` binary
///
/// Prefers `CARGO_BIN_EXE_codecmd` (set by cargo for integration tests and
/// honoured with custom target directories) and falls back to
/// `cargo_bin()` for local runs.
#[allow(deprecated)] // cargo_bin() is deprecated but needed for fallback
pub fn codecmd_binary() -> PathBuf {
    std::env::var("CARGO_BIN_EXE_codecmd")
        .map(PathBuf::from)
        .unwrap_or_else(|_| assert_cmd::cargo::cargo_bin("codecmd"))
}

/// A `codecmd` command writing its day file under `log_dir`.
///
/// Echo is forced on so transcripts are the same whether or not the test
/// runner's stdin is a terminal.
pub fn codecmd_command(log_dir: &Path) -> Command {
    let mut cmd = Command::new(codecmd_binary());
    cmd.arg("--log-dir")
        .arg(log_dir)
        .arg("--echo")
        .env_remove("CODECMD_LOG_DIR")
        .env_remove("CODECMD_MAX_DEPTH")
        .env_remove("CODECMD_SEARCH_ROOT")
        .env_remove("RUST_LOG");
    cmd
}

/// The day file the binary creates today in `log_dir`.
pub fn todays_log_file(log_dir: &Path) -> PathBuf {
    let today = chrono::Local::now().date_naive();
    log_dir.join(format!("logs_{}.txt", today.format("%Y-%m-%d")))
}

/// A clock that only moves when told to.
pub struct StepClock {
    now: Mutex<NaiveDateTime>,
}

impl StepClock {
    pub fn at(h: u32, m: u32, s: u32) -> Arc<Self> {
        let now = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }
    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for StepClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<PathBuf>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }
}

impl FileOpener for RecordingOpener {
    fn open(&self, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(ShellError::OpenFailed {
                path: path.to_path_buf(),
                reason: "empty path".to_string(),
            });
        }
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// A library-level shell with the default built-ins.
pub struct Harness {
    pub shell: Shell,
    pub clock: Arc<StepClock>,
    pub opener: Arc<RecordingOpener>,
    pub temp_dir: TempDir,
    rx: OutputReceiver,
}

impl Harness {
    /// Clock starts at 2025-06-02 07:30:00; `search` walks `<temp>/tree`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let tree = temp_dir.path().join("tree");
        std::fs::create_dir_all(&tree).unwrap();

        let clock = StepClock::at(7, 30, 0);
        let opener = Arc::new(RecordingOpener::default());
        let config = ShellConfig {
            log_dir: temp_dir.path().join("logs"),
            search_root: Some(tree),
            ..ShellConfig::default()
        };
        let capabilities = Capabilities {
            clock: clock.clone(),
            opener: opener.clone(),
            fs: Arc::new(LocalFileSystem),
        };

        let (output, rx) = Output::channel();
        let shell = Shell::new(config, output, capabilities);
        let mut harness = Self {
            shell,
            clock,
            opener,
            temp_dir,
            rx,
        };
        harness.take_lines();
        harness
    }

    /// Run one input line and return the lines it produced synchronously.
    pub fn run(&mut self, line: &str) -> Vec<String> {
        self.shell.execute_line(line);
        self.take_lines()
    }

    pub fn take_lines(&mut self) -> Vec<String> {
        drain(&mut self.rx)
    }
    pub async fn recv_line(&mut self) -> Option<String> {
        tokio::time::timeout(std::time::Duration::from_secs(10), self.rx.recv())
            .await
            .ok()
            .flatten()
    }
    pub fn tree(&self) -> PathBuf {
        self.temp_dir.path().join("tree")
    }
}
