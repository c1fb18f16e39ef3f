//! Command resolution and dispatch
//!
//! `Shell` owns everything a command can touch: the registry, the command
//! log, the output sink and the injected capabilities. Input lines enter
//! through [`Shell::execute_line`], which logs them and hands them to
//! [`Shell::dispatch`]. Failures stop at that boundary and become a single
//! output line; the shell stays usable.

use crate::capabilities::Capabilities;
use crate::commands::default_registry;
use crate::config::ShellConfig;
use crate::error::{Result, ShellError};
use crate::log_store::{DayFile, LogStore, LogWriter};
use crate::output::Output;
use crate::registry::{Registry, Resolution};
use crate::tokenizer::{split_args, tokenize};
use chrono::NaiveDateTime;

const BANNER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Lifecycle requests raised by built-ins for the host loop to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellSignal {
    Exit,
    Restart,
}

pub struct Shell {
    registry: Registry,
    log: LogStore,
    output: Output,
    capabilities: Capabilities,
    config: ShellConfig,
    program_epoch: NaiveDateTime,
    signal: Option<ShellSignal>,
}

impl Shell {
    /// A shell with every built-in and a day file under `config.log_dir`.
    pub fn new(config: ShellConfig, output: Output, capabilities: Capabilities) -> Self {
        // One reading names the day file and sets the epoch, so both agree
        // on the date even at midnight.
        let program_epoch = capabilities.clock.now();
        let day_file = DayFile::create(&config.log_dir, program_epoch.date());
        tracing::info!(path = %day_file.path().display(), "Command log file");

        Self::assemble(
            config,
            output,
            capabilities,
            default_registry(),
            Some(Box::new(day_file)),
            program_epoch,
        )
    }

    /// Assemble a shell from explicit parts.
    ///
    /// `writer` is the durable mirror of the command log; `None` keeps the
    /// log in memory only.
    pub fn with_parts(
        config: ShellConfig,
        output: Output,
        capabilities: Capabilities,
        registry: Registry,
        writer: Option<Box<dyn LogWriter>>,
    ) -> Self {
        let program_epoch = capabilities.clock.now();
        Self::assemble(config, output, capabilities, registry, writer, program_epoch)
    }

    fn assemble(
        config: ShellConfig,
        output: Output,
        capabilities: Capabilities,
        registry: Registry,
        writer: Option<Box<dyn LogWriter>>,
        program_epoch: NaiveDateTime,
    ) -> Self {
        let log = LogStore::new(capabilities.clock.clone(), writer);

        output.line(format!(
            "CodeCmd started: {}",
            program_epoch.format(BANNER_TIMESTAMP_FORMAT)
        ));

        Self {
            registry,
            log,
            output,
            capabilities,
            config,
            program_epoch,
            signal: None,
        }
    }

    /// Accept one line of user input.
    ///
    /// Blank lines are ignored. Anything else is echoed, logged and then
    /// dispatched; the log records the line even when dispatch fails.
    pub fn execute_line(&mut self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }

        if self.config.echo_input {
            self.output.line(format!("> {}", input));
        }
        self.log.append(input);

        if let Err(e) = self.dispatch(input, 0) {
            tracing::debug!(error = %e, code = e.to_error_code(), input, "Command failed");
            self.output.line(e.render(input));
        }
    }

    /// Resolve and run `line`.
    ///
    /// `depth` counts the custom-command expansions already performed for the
    /// current input line. Expanding past `max_dispatch_depth` fails with
    /// [`ShellError::DispatchRecursionExceeded`].
    pub fn dispatch(&mut self, line: &str, depth: usize) -> Result<()> {
        let (head, rest) = tokenize(line);
        if head.is_empty() {
            return Ok(());
        }

        match self.registry.resolve(head) {
            Resolution::Builtin { name, handler } => {
                let args = split_args(rest);
                tracing::debug!(command = %name, depth, "Running builtin");
                handler
                    .execute(self, &args)
                    .map_err(|e| ShellError::HandlerExecution {
                        command: name,
                        source: Box::new(e),
                    })
            },
            Resolution::Custom(custom) => {
                if depth >= self.config.max_dispatch_depth {
                    return Err(ShellError::DispatchRecursionExceeded {
                        command: custom.name,
                        limit: self.config.max_dispatch_depth,
                    });
                }

                self.output
                    .line(format!("(custom) {} → {}", custom.name, custom.replacement));
                self.dispatch(&custom.replacement, depth + 1)
            },
            Resolution::Unknown(name) => Err(ShellError::UnknownCommand(name)),
        }
    }

    /// Announce shutdown and close the day file.
    pub fn shutdown(&mut self) {
        let now = self.now();
        self.output.line(format!(
            "CodeCmd closing: {}",
            now.format(BANNER_TIMESTAMP_FORMAT)
        ));
        self.log.write_closing_line();
    }

    pub fn request(&mut self, signal: ShellSignal) {
        self.signal = Some(signal);
    }

    /// Take the pending lifecycle request, if any.
    pub fn take_signal(&mut self) -> Option<ShellSignal> {
        self.signal.take()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.capabilities.clock.now()
    }

    pub fn program_epoch(&self) -> NaiveDateTime {
        self.program_epoch
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn log(&self) -> &LogStore {
        &self.log
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}
