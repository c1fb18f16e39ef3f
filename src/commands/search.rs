use crate::commands::Builtin;
use crate::error::Result;
use crate::search::spawn_search;
use crate::shell::Shell;
use std::sync::Arc;

/// `search <fileName>`: find a file below the search root and open it.
///
/// Returns as soon as the background walk is started; results arrive on the
/// output channel later.
pub struct SearchCommand;

impl Builtin for SearchCommand {
    fn execute(&self, shell: &mut Shell, args: &[String]) -> Result<()> {
        let Some(target) = args.first() else {
            shell.output().line("Usage: search <fileName>");
            return Ok(());
        };

        let capabilities = shell.capabilities();
        let root = match &shell.config().search_root {
            Some(root) => root.clone(),
            None => capabilities.fs.current_dir()?,
        };

        shell.output().line(format!(
            "Searching for: {} (working directory and subdirectories)",
            target
        ));
        tracing::debug!(file = %target, root = %root.display(), "Starting search");

        spawn_search(
            target.clone(),
            root,
            Arc::clone(&capabilities.fs),
            Arc::clone(&capabilities.opener),
            shell.output().clone(),
        )?;
        Ok(())
    }
}
