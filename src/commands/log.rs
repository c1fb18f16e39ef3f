use crate::commands::Builtin;
use crate::error::Result;
use crate::shell::Shell;
use crate::time_range::parse_range;

/// `log [range]`: show command log entries inside a time window.
pub struct LogCommand;

impl Builtin for LogCommand {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<()> {
        let (from, to) = parse_range(&args.join(" "), shell.program_epoch(), shell.now())?;
        let entries = shell.log().query_range(from, to);
        let output = shell.output();
        let window = format!("[{} - {}]", from.format("%H:%M"), to.format("%H:%M"));

        if entries.is_empty() {
            output.line(format!("No log entries found in {}.", window));
            return Ok(());
        }

        output.line(format!("--- {} log entries ---", window));
        for entry in &entries {
            output.line(format!(
                "[{}] {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.message
            ));
        }
        output.line(format!("--- Total {} entries ---", entries.len()));
        Ok(())
    }
}
