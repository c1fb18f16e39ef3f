use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str = r#"
CodeCmd - an interactive command shell

Type one command per line. Built-ins:
  help                      List commands, custom commands and aliases
  start <fileName>          Open a file with its default program
  log [range]               Show the command log (e.g. log, log 13, log 08:00-21:00)
  search <fileName>         Find a file below the working directory and open it
  give <name> <command...>  Define a custom command
  assign <existing> <alias> Add another name for a command
  reload                    Restart the shell
  exit                      Quit

Every command is recorded to logs/logs_YYYY-MM-DD.txt, named after the day
the shell was started.

Environment:
  CODECMD_LOG_DIR       Directory for command log files
  CODECMD_MAX_DEPTH     Custom-command expansion limit (default 32)
  CODECMD_SEARCH_ROOT   Root directory for `search`
  RUST_LOG              Diagnostic log filter
"#;

#[derive(Parser, Clone, Debug)]
#[command(name = "codecmd")]
#[command(about = "Interactive command shell with aliases, custom commands and a time-windowed log")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Enable verbose diagnostics (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report diagnostic errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output diagnostics in JSON format
    #[arg(long)]
    pub json: bool,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub diagnostics_file: Option<PathBuf>,

    /// Directory for the daily command log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Maximum nesting of custom-command expansions
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Root directory for `search` (default: working directory)
    #[arg(long, value_name = "DIR")]
    pub search_root: Option<PathBuf>,

    /// Echo each input line as `> line` (default when stdin is not a terminal)
    #[arg(long, conflicts_with = "no_echo")]
    pub echo: bool,

    /// Never echo input lines
    #[arg(long)]
    pub no_echo: bool,
}

impl Cli {
    /// Explicit echo choice, if either flag was given.
    pub fn echo_override(&self) -> Option<bool> {
        match (self.echo, self.no_echo) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
