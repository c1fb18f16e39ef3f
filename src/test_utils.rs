#[cfg(test)]
pub mod test_helpers {
    use crate::capabilities::{Capabilities, Clock, FileOpener, LocalFileSystem};
    use crate::commands::default_registry;
    use crate::config::ShellConfig;
    use crate::error::{Result, ShellError};
    use crate::log_store::DayFile;
    use crate::output::{drain, Output, OutputReceiver};
    use crate::registry::Registry;
    use crate::shell::Shell;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// A clock that only moves when told to.
    pub struct ManualClock {
        now: Mutex<NaiveDateTime>,
    }

    impl ManualClock {
        pub fn at(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> Arc<Self> {
            let now = NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(h, m, s)
                .unwrap();
            Arc::new(Self {
                now: Mutex::new(now),
            })
        }

        pub fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> NaiveDateTime {
            *self.now.lock().unwrap()
        }
    }

    /// Records every path it is asked to open, optionally failing each time.
    #[derive(Default)]
    pub struct RecordingOpener {
        opened: Mutex<Vec<PathBuf>>,
        failure: Option<String>,
    }

    impl RecordingOpener {
        pub fn failing(reason: &str) -> Self {
            Self {
                opened: Mutex::new(Vec::new()),
                failure: Some(reason.to_string()),
            }
        }

        pub fn opened(&self) -> Vec<PathBuf> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl FileOpener for RecordingOpener {
        fn open(&self, path: &Path) -> Result<()> {
            if let Some(reason) = &self.failure {
                return Err(ShellError::OpenFailed {
                    path: path.to_path_buf(),
                    reason: reason.clone(),
                });
            }
            self.opened.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    /// A shell wired to a manual clock, a recording opener and a temp directory.
    ///
    /// The clock starts at 2025-03-14 09:00:00.
    pub struct TestShell {
        pub shell: Shell,
        pub clock: Arc<ManualClock>,
        pub opener: Arc<RecordingOpener>,
        rx: OutputReceiver,
        seen: Vec<String>,
        temp_dir: TempDir,
    }

    impl TestShell {
        /// Only the test built-ins `echo` and `fail`, no day file.
        pub fn bare() -> Self {
            let mut registry = Registry::new();
            install_test_builtins(&mut registry);
            Self::build(registry, Arc::new(RecordingOpener::default()), false)
        }

        /// Every built-in plus `echo`, with a day file in the temp directory.
        pub fn full() -> Self {
            Self::with_opener(Arc::new(RecordingOpener::default()))
        }

        pub fn with_opener(opener: Arc<RecordingOpener>) -> Self {
            let mut registry = default_registry();
            install_test_builtins(&mut registry);
            Self::build(registry, opener, true)
        }

        fn build(registry: Registry, opener: Arc<RecordingOpener>, day_file: bool) -> Self {
            let temp_dir = TempDir::new().unwrap();
            let search_root = temp_dir.path().join("workspace");
            std::fs::create_dir_all(&search_root).unwrap();

            let clock = ManualClock::at(2025, 3, 14, 9, 0, 0);
            let config = ShellConfig {
                log_dir: temp_dir.path().join("logs"),
                search_root: Some(search_root),
                ..ShellConfig::default()
            };
            let capabilities = Capabilities {
                clock: clock.clone(),
                opener: opener.clone(),
                fs: Arc::new(LocalFileSystem),
            };
            let writer = day_file.then(|| {
                Box::new(DayFile::create(&config.log_dir, clock.now().date()))
                    as Box<dyn crate::log_store::LogWriter>
            });

            let (output, rx) = Output::channel();
            let shell = Shell::with_parts(config, output, capabilities, registry, writer);

            Self {
                shell,
                clock,
                opener,
                rx,
                seen: Vec::new(),
                temp_dir,
            }
        }

        /// Every line received since the last [`TestShell::clear`].
        pub fn lines(&mut self) -> Vec<String> {
            self.seen.extend(drain(&mut self.rx));
            self.seen.clone()
        }

        pub fn clear(&mut self) {
            drain(&mut self.rx);
            self.seen.clear();
        }

        /// Wait until a line starting with `prefix` has arrived.
        pub async fn wait_for(
            &mut self,
            prefix: &str,
            timeout: std::time::Duration,
        ) -> Option<String> {
            self.seen.extend(drain(&mut self.rx));
            if let Some(line) = self.seen.iter().find(|l| l.starts_with(prefix)) {
                return Some(line.clone());
            }

            let deadline = tokio::time::Instant::now() + timeout;
            loop {
                let line = tokio::time::timeout_at(deadline, self.rx.recv())
                    .await
                    .ok()??;
                self.seen.push(line.clone());
                if line.starts_with(prefix) {
                    return Some(line);
                }
            }
        }

        /// Like [`TestShell::wait_for`], for tests that run without a runtime.
        pub fn wait_for_blocking(
            &mut self,
            prefix: &str,
            timeout: std::time::Duration,
        ) -> Option<String> {
            let deadline = std::time::Instant::now() + timeout;
            loop {
                self.seen.extend(drain(&mut self.rx));
                if let Some(line) = self.seen.iter().find(|l| l.starts_with(prefix)) {
                    return Some(line.clone());
                }
                if std::time::Instant::now() >= deadline {
                    return None;
                }
                std::thread::sleep(std::time::Duration::from_millis(10));
            }
        }

        pub fn search_root(&self) -> PathBuf {
            self.temp_dir.path().join("workspace")
        }

        pub fn log_dir(&self) -> PathBuf {
            self.temp_dir.path().join("logs")
        }
    }

    fn install_test_builtins(registry: &mut Registry) {
        registry.register_builtin(
            "echo",
            Arc::new(|shell: &mut Shell, args: &[String]| -> Result<()> {
                shell.output().line(args.join(" "));
                Ok(())
            }),
        );
        registry.register_builtin(
            "fail",
            Arc::new(|_: &mut Shell, _: &[String]| -> Result<()> {
                Err(ShellError::InvalidInput("deliberate failure".to_string()))
            }),
        );
    }
}
