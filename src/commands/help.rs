use crate::commands::Builtin;
use crate::error::Result;
use crate::shell::Shell;

const USAGE: &[&str] = &[
    "  help                           : Show all commands with a short description.",
    "  start <fileName>               : Open a file (.js, .py, .html, ...) with its registered program.",
    "  log [HH:mm-HH:mm | HH]         : Show log entries since startup or within a time range.",
    "     Example: log                -> Everything since the program started.",
    "     Example: log 08:00-21:00    -> Today between 08:00 and 21:00.",
    "     Example: log 13             -> Today between 13:00 and 13:59.",
    "  reload                         : Restart the shell.",
    "  exit                           : Close the application.",
    "  search <fileName>              : Find a file under the working directory and open it.",
    "  give <name> <command line>     : Define a custom command that runs the command line.",
    "     Example: give greet echo Hello",
    "  assign <existing> <alias>      : Add another name for an existing command.",
    "     Example: assign help llp    -> typing 'llp' runs help.",
];

/// `help`: list built-ins, then user-defined commands and aliases.
pub struct HelpCommand;

impl Builtin for HelpCommand {
    fn execute(&self, shell: &mut Shell, _args: &[String]) -> Result<()> {
        let output = shell.output();
        let registry = shell.registry();

        output.line("Available commands:");
        for line in USAGE {
            output.line(*line);
        }

        let mut custom = registry.custom_commands().peekable();
        if custom.peek().is_some() {
            output.line("  -- Custom commands --");
            for cmd in custom {
                output.line(format!("     {} => `{}`", cmd.name, cmd.replacement));
            }
        }

        let mut aliases = registry.aliases().peekable();
        if aliases.peek().is_some() {
            output.line("  -- Aliases --");
            for alias in aliases {
                output.line(format!("     {} => {}", alias.name, alias.target));
            }
        }

        Ok(())
    }
}
