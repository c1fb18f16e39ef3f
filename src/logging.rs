//! CodeCmd diagnostic logging
//!
//! Structured diagnostics through the tracing crate. Shell output owns
//! stdout, so diagnostics are written to stderr or to a file. This is
//! separate from the command log kept by [`crate::log_store`].

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// How diagnostics are filtered, formatted and where they go.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    /// ANSI colors; ignored for file output.
    pub color: bool,
    pub show_timestamps: bool,
    /// Include the emitting module path.
    pub show_target: bool,
    /// One JSON object per event.
    pub json_format: bool,
    /// Attach the current span to JSON events.
    pub enable_spans: bool,
    /// Write here instead of stderr.
    pub file_output: Option<PathBuf>,
}

/// The interactive shell with no flags: warnings and errors only.
impl Default for LoggingConfig {
    fn default() -> Self {
        Self::from_args(false, 0, false)
    }
}

impl LoggingConfig {
    /// Map `--quiet`, `-v` repetitions and `--json` onto a config.
    pub fn from_args(quiet: bool, verbose: u8, json: bool) -> Self {
        let level = match (quiet, verbose) {
            (true, _) => Level::ERROR,
            (false, 0) => Level::WARN,
            (false, 1) => Level::INFO,
            (false, 2) => Level::DEBUG,
            (false, _) => Level::TRACE,
        };

        Self {
            level,
            color: !json && io::stderr().is_terminal(),
            show_timestamps: verbose > 0 || json,
            show_target: verbose > 1,
            json_format: json,
            enable_spans: verbose > 1,
            file_output: None,
        }
    }
}

/// `RUST_LOG` wins over the configured level.
fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("codecmd={}", level)))
}

fn make_writer(file: Option<&Path>) -> io::Result<BoxMakeWriter> {
    let Some(path) = file else {
        return Ok(BoxMakeWriter::new(io::stderr));
    };

    let name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "Invalid diagnostics file path")
    })?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    Ok(BoxMakeWriter::new(tracing_appender::rolling::never(dir, name)))
}

/// Install the global tracing subscriber. Call once, before the shell starts.
pub fn init_logging(config: LoggingConfig) -> io::Result<()> {
    let to_file = config.file_output.is_some();
    let writer = make_writer(config.file_output.as_deref())?;
    let registry = Registry::default().with(env_filter(config.level));

    if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_current_span(config.enable_spans)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(writer);
        registry.with(layer).init();
        return Ok(());
    }

    let layer = fmt::layer()
        .with_target(config.show_target)
        .with_ansi(config.color && !to_file)
        .with_writer(writer);

    if config.show_timestamps {
        registry
            .with(layer.with_timer(fmt::time::ChronoLocal::rfc_3339()))
            .init();
    } else {
        registry.with(layer.without_time()).init();
    }

    Ok(())
}
