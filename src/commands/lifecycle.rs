use crate::commands::Builtin;
use crate::error::Result;
use crate::shell::{Shell, ShellSignal};

/// `exit`: ask the host loop to shut the shell down.
pub struct ExitCommand;

impl Builtin for ExitCommand {
    fn execute(&self, shell: &mut Shell, _args: &[String]) -> Result<()> {
        shell.output().line("Exiting...");
        shell.request(ShellSignal::Exit);
        Ok(())
    }
}

/// `reload`: ask the host loop to restart the process.
pub struct ReloadCommand;

impl Builtin for ReloadCommand {
    fn execute(&self, shell: &mut Shell, _args: &[String]) -> Result<()> {
        shell.output().line("Restarting...");
        shell.request(ShellSignal::Restart);
        Ok(())
    }
}
