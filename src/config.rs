use crate::error::{Result, ShellError};
use std::path::PathBuf;

/// Default bound on nested custom-command expansions.
pub const DEFAULT_MAX_DISPATCH_DEPTH: usize = 32;

/// Largest accepted bound; each expansion costs a stack frame.
pub const MAX_DISPATCH_DEPTH_LIMIT: usize = 1024;

/// Shell configuration.
///
/// Read from the environment, then overridden by command-line flags:
///   CODECMD_LOG_DIR      directory for the daily command log files
///   CODECMD_MAX_DEPTH    custom-command expansion limit (1..=1024)
///   CODECMD_SEARCH_ROOT  root directory for `search` (default: working directory)
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub log_dir: PathBuf,
    pub max_dispatch_depth: usize,
    pub search_root: Option<PathBuf>,
    /// Echo each accepted line as `> line` before its output.
    pub echo_input: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            max_dispatch_depth: DEFAULT_MAX_DISPATCH_DEPTH,
            search_root: None,
            echo_input: true,
        }
    }
}

/// `logs/` next to the executable, or under the working directory when the
/// executable path is unavailable.
pub fn default_log_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("logs")))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn parse_depth(raw: &str) -> Result<usize> {
    let depth: usize = raw.trim().parse().map_err(|_| {
        ShellError::InvalidInput(format!("Invalid max dispatch depth: '{}'", raw))
    })?;
    validate_depth(depth)
}

fn validate_depth(depth: usize) -> Result<usize> {
    if depth == 0 || depth > MAX_DISPATCH_DEPTH_LIMIT {
        return Err(ShellError::InvalidInput(format!(
            "Max dispatch depth must be between 1 and {}, got {}",
            MAX_DISPATCH_DEPTH_LIMIT, depth
        )));
    }
    Ok(depth)
}

impl ShellConfig {
    /// Build configuration from `CODECMD_*` environment variables and defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("CODECMD_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        if let Ok(raw) = std::env::var("CODECMD_MAX_DEPTH") {
            config.max_dispatch_depth = parse_depth(&raw)?;
        }

        if let Ok(dir) = std::env::var("CODECMD_SEARCH_ROOT") {
            config.search_root = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        log_dir: Option<PathBuf>,
        max_depth: Option<usize>,
        search_root: Option<PathBuf>,
        echo_input: Option<bool>,
    ) -> Result<Self> {
        if let Some(dir) = log_dir {
            self.log_dir = dir;
        }
        if let Some(depth) = max_depth {
            self.max_dispatch_depth = validate_depth(depth)?;
        }
        if let Some(root) = search_root {
            self.search_root = Some(root);
        }
        if let Some(echo) = echo_input {
            self.echo_input = echo;
        }
        Ok(self)
    }
}
