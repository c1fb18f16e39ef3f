use crate::commands::Builtin;
use crate::error::Result;
use crate::shell::Shell;
use std::path::Path;

/// `start <fileName>`: open a file with the system's default program.
pub struct StartCommand;

impl Builtin for StartCommand {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<()> {
        let Some(file) = args.first() else {
            shell.output().line("Usage: start <fileName>");
            return Ok(());
        };

        match shell.capabilities().opener.open(Path::new(file)) {
            Ok(()) => shell
                .output()
                .line(format!("Start: {} launch attempted.", file)),
            Err(e) => {
                tracing::debug!(error = %e, "start failed");
                shell.output().line(format!("Start error: {}", e));
            },
        }
        Ok(())
    }
}
