//! `rm <path> [-r]` — safety-gated move into the trash area.

use std::io::{self, BufRead, Write};

use mnsh_core::{path, safety, Session, ShellError, ShellResult, UndoRecord};

const USAGE: &str = "rm <path> [-r]";

/// Interactive entry point: directory removals confirm on stdin.
pub fn invoke(session: &mut Session, args: &[String]) -> ShellResult<()> {
    invoke_with_confirm(session, args, ask_on_stdin)
}

/// Deletion never destroys data directly: the target is moved into the
/// trash area and the undo ledger armed with both paths. Declining the
/// directory confirmation leaves the filesystem and any prior undo
/// record untouched.
///
/// The confirmation is injected so tests can script the prompt.
pub fn invoke_with_confirm(
    session: &mut Session,
    args: &[String],
    mut confirm: impl FnMut(&str) -> bool,
) -> ShellResult<()> {
    let recursive = args.iter().any(|a| a == "-r");
    let operands: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
    let Some(token) = operands.first() else {
        return Err(ShellError::Usage(USAGE));
    };

    let target = path::resolve(&session.cwd, token);
    if let Some(reason) = safety::deny_reason(token, &target, &session.cwd) {
        return Err(ShellError::SafetyDenied(reason));
    }
    if !target.exists() {
        return Err(ShellError::NotFound(target));
    }

    let is_dir = target.is_dir();
    if is_dir {
        if !recursive {
            return Err(ShellError::RecursiveRequired(target, "remove"));
        }
        let prompt = format!(
            "Remove directory '{}' and all its contents? (y/n): ",
            target.display()
        );
        if !confirm(&prompt) {
            println!("Cancelled");
            return Ok(());
        }
    }

    let trash_item = session.trash.stage(&target)?;
    session.ledger.arm(UndoRecord::Delete {
        original: target.clone(),
        trash_item,
    });
    if is_dir {
        println!("Removed directory: {}", target.display());
    } else {
        println!("Removed file: {}", target.display());
    }
    Ok(())
}

fn ask_on_stdin(prompt: &str) -> bool {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}
