use clap::Parser;
use codecmd::capabilities::Capabilities;
use codecmd::cli::Cli;
use codecmd::config::ShellConfig;
use codecmd::error::Result;
use codecmd::logging::LoggingConfig;
use codecmd::output::{drain, Output, OutputReceiver};
use codecmd::shell::{Shell, ShellSignal};
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut log_config = LoggingConfig::from_args(cli.quiet, cli.verbose, cli.json);
    log_config.file_output = cli.diagnostics_file.clone();
    if let Err(e) = codecmd::logging::init_logging(log_config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    match run(&cli).await {
        Ok(Some(ShellSignal::Restart)) => restart(),
        // A search still walking the tree must not hold the process open.
        Ok(_) => {
            std::io::stdout().flush().ok();
            std::process::exit(0);
        },
        Err(e) => {
            let error_response = e.to_error_response();
            match serde_json::to_string_pretty(&error_response) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("{}", e),
            }
            std::process::exit(1);
        },
    }
}

/// Run the read-dispatch-print loop until `exit`, `reload` or end of input.
async fn run(cli: &Cli) -> Result<Option<ShellSignal>> {
    let interactive = std::io::stdin().is_terminal();
    let echo = cli.echo_override().unwrap_or(!interactive);
    let config = ShellConfig::from_env()?.with_overrides(
        cli.log_dir.clone(),
        cli.max_depth,
        cli.search_root.clone(),
        Some(echo),
    )?;

    let (output, mut rx) = Output::channel();
    let mut shell = Shell::new(config, output, Capabilities::system());
    flush(&mut rx);
    prompt(interactive);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let signal = loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break None;
                };
                shell.execute_line(&line);
                flush(&mut rx);
                if let Some(signal) = shell.take_signal() {
                    break Some(signal);
                }
                prompt(interactive);
            },
            Some(text) = rx.recv() => {
                // Background output, e.g. search results.
                println!("{}", text);
                prompt(interactive);
            },
        }
    };

    shell.shutdown();
    flush(&mut rx);
    Ok(signal)
}

fn flush(rx: &mut OutputReceiver) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in drain(rx) {
        if writeln!(out, "{}", line).is_err() {
            return;
        }
    }
    out.flush().ok();
}

fn prompt(interactive: bool) {
    if interactive {
        print!("> ");
        std::io::stdout().flush().ok();
    }
}

/// Start a fresh copy of this executable with the same arguments and exit.
fn restart() {
    let spawned = std::env::current_exe().and_then(|exe| {
        std::process::Command::new(exe)
            .args(std::env::args_os().skip(1))
            .spawn()
    });

    if let Err(e) = spawned {
        tracing::error!(error = %e, "Failed to restart");
        eprintln!("Failed to restart: {}", e);
        std::process::exit(1);
    }
    std::process::exit(0);
}
