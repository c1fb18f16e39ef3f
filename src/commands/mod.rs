// Built-in command handlers
//
// Each built-in is a `Builtin` trait object registered by name:
// Core: help, log, give, assign
// Files: start, search
// Lifecycle: exit, reload

pub mod help;
pub mod lifecycle;
pub mod log;
pub mod macros;
pub mod search;
pub mod start;

use crate::error::Result;
use crate::registry::Registry;
use crate::shell::Shell;
use std::sync::Arc;

/// A code-defined command handler.
///
/// Handlers receive the shell they run in and the whitespace-split argument
/// list. Output goes through [`Shell::output`]; any error returned is
/// reported by the dispatcher as an execution error of the input line.
pub trait Builtin: Send + Sync {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<()>;
}

impl<F> Builtin for F
where
    F: Fn(&mut Shell, &[String]) -> Result<()> + Send + Sync,
{
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<()> {
        self(shell, args)
    }
}

/// Names of the built-ins installed by [`default_registry`].
pub const BUILTIN_NAMES: &[&str] = &[
    "help", "exit", "reload", "start", "log", "search", "give", "assign",
];

/// A registry holding every built-in and no user definitions.
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register_builtin("help", Arc::new(help::HelpCommand));
    registry.register_builtin("exit", Arc::new(lifecycle::ExitCommand));
    registry.register_builtin("reload", Arc::new(lifecycle::ReloadCommand));
    registry.register_builtin("start", Arc::new(start::StartCommand));
    registry.register_builtin("log", Arc::new(log::LogCommand));
    registry.register_builtin("search", Arc::new(search::SearchCommand));
    registry.register_builtin("give", Arc::new(macros::GiveCommand));
    registry.register_builtin("assign", Arc::new(macros::AssignCommand));
    registry
}
