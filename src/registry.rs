//! Command registry
//!
//! Holds the three name tables the dispatcher consults: built-in handlers,
//! user-defined custom commands and aliases. All names compare
//! case-insensitively; the spelling used at definition time is kept for
//! display.
//!
//! Lookup precedence is alias (exactly one hop), then built-in, then custom.
//! An alias may only target a name that is a built-in or custom command at
//! the time it is created, so alias chains and alias cycles cannot exist.

use crate::commands::Builtin;
use crate::error::{Result, ShellError};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A user-defined name that expands to a replacement command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCommand {
    pub name: String,
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub target: String,
}

/// What a command head refers to after alias resolution.
pub enum Resolution {
    Builtin {
        name: String,
        handler: Arc<dyn Builtin>,
    },
    Custom(CustomCommand),
    Unknown(String),
}

fn key(name: &str) -> String {
    name.to_lowercase()
}

#[derive(Default)]
pub struct Registry {
    builtins: BTreeMap<String, (String, Arc<dyn Builtin>)>,
    custom: BTreeMap<String, CustomCommand>,
    aliases: BTreeMap<String, Alias>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a built-in handler, replacing any handler of the same name.
    pub fn register_builtin(&mut self, name: &str, handler: Arc<dyn Builtin>) {
        self.builtins.insert(key(name), (name.to_string(), handler));
    }

    /// Store a custom command. The replacement line is not inspected.
    ///
    /// Returns the previous definition when `name` is redefined.
    pub fn define_custom(&mut self, name: &str, replacement: &str) -> Option<CustomCommand> {
        tracing::debug!(name, replacement, "Defining custom command");
        self.custom.insert(
            key(name),
            CustomCommand {
                name: name.to_string(),
                replacement: replacement.to_string(),
            },
        )
    }

    /// Point `name` at an existing built-in or custom command.
    pub fn define_alias(&mut self, name: &str, target: &str) -> Result<()> {
        if !self.is_builtin(target) && !self.is_custom(target) {
            return Err(ShellError::UnknownTarget(target.to_string()));
        }

        tracing::debug!(name, target, "Defining alias");
        self.aliases.insert(
            key(name),
            Alias {
                name: name.to_string(),
                target: target.to_string(),
            },
        );
        Ok(())
    }

    /// Follow at most one alias hop.
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases
            .get(&key(name))
            .map(|alias| alias.target.as_str())
            .unwrap_or(name)
    }

    /// Resolve a command head: alias first, then built-ins, then custom commands.
    pub fn resolve(&self, head: &str) -> Resolution {
        let name = self.resolve_alias(head);

        if let Some((canonical, handler)) = self.builtins.get(&key(name)) {
            return Resolution::Builtin {
                name: canonical.clone(),
                handler: Arc::clone(handler),
            };
        }

        if let Some(custom) = self.custom.get(&key(name)) {
            return Resolution::Custom(custom.clone());
        }

        Resolution::Unknown(head.to_string())
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains_key(&key(name))
    }

    pub fn is_custom(&self, name: &str) -> bool {
        self.custom.contains_key(&key(name))
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(&key(name))
    }

    pub fn custom(&self, name: &str) -> Option<&CustomCommand> {
        self.custom.get(&key(name))
    }

    pub fn builtin_names(&self) -> impl Iterator<Item = &str> {
        self.builtins.values().map(|(name, _)| name.as_str())
    }

    /// Custom commands in name order.
    pub fn custom_commands(&self) -> impl Iterator<Item = &CustomCommand> {
        self.custom.values()
    }

    /// Aliases in name order.
    pub fn aliases(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.values()
    }
}
