//! User-defined names: `give` (custom commands) and `assign` (aliases).
//!
//! `give` stores its replacement line without checking that it names a real
//! command; `assign` requires its target to exist when the alias is made.

use crate::commands::Builtin;
use crate::error::Result;
use crate::shell::Shell;

/// `give <name> <command line...>`
pub struct GiveCommand;

impl Builtin for GiveCommand {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<()> {
        let [name, replacement @ ..] = args else {
            shell.output().line("Usage: give <name> <command line>");
            return Ok(());
        };
        if replacement.is_empty() {
            shell.output().line("Usage: give <name> <command line>");
            return Ok(());
        }

        let replacement = replacement.join(" ");
        shell.registry_mut().define_custom(name, &replacement);
        shell
            .output()
            .line(format!("Custom command added: {} => `{}`", name, replacement));
        Ok(())
    }
}

/// `assign <existing> <alias>`
pub struct AssignCommand;

impl Builtin for AssignCommand {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<()> {
        let [existing, alias, ..] = args else {
            shell.output().line("Usage: assign <existing> <alias>");
            return Ok(());
        };

        shell.registry_mut().define_alias(alias, existing)?;
        shell
            .output()
            .line(format!("Alias added: {} => {}", alias, existing));
        Ok(())
    }
}
