//! mnsh — an interactive filesystem shell with trash-backed undo.

use std::path::PathBuf;

use clap::Parser;
use mnsh_core::{Session, SessionPaths};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive filesystem shell with single-step undo", long_about = None)]
struct Cli {
    /// Execute one command line and exit instead of starting the REPL.
    #[arg(short = 'c', long = "command")]
    command: Option<String>,

    /// Audit log file.
    #[arg(long, default_value = "shell.log")]
    log_file: PathBuf,

    /// Persisted command history file.
    #[arg(long, default_value = ".history")]
    history_file: PathBuf,

    /// Trash directory used as the deletion staging ground.
    #[arg(long, default_value = ".trash")]
    trash_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let paths = SessionPaths {
        log_file: cli.log_file,
        history_file: cli.history_file,
        trash_dir: cli.trash_dir,
    };
    let mut session = Session::new(&paths)?;

    if let Some(line) = cli.command {
        mnsh_builtins::execute_line(&mut session, &line);
        return Ok(());
    }

    run_repl(&mut session)
}

fn run_repl(session: &mut Session) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(&session.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if !mnsh_builtins::execute_line(session, &line) {
                    println!("Exiting shell");
                    break;
                }
            }
            // Ctrl-C interrupts the pending line, not the session.
            Err(ReadlineError::Interrupted) => {
                println!("Type 'exit' to leave the shell");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
