//! `mv <src> <dst>` — move or rename, with cross-device fallback.

use mnsh_core::{fsops, path, Session, ShellError, ShellResult, UndoRecord};

const USAGE: &str = "mv <source> <destination>";

/// Moving onto an existing directory places the source inside it. The
/// undo record stores the final destination so `undo` can move it back.
pub fn invoke(session: &mut Session, args: &[String]) -> ShellResult<()> {
    if args.len() < 2 {
        return Err(ShellError::Usage(USAGE));
    }

    let source = path::resolve(&session.cwd, &args[0]);
    let mut destination = path::resolve(&session.cwd, &args[1]);

    if !source.exists() {
        return Err(ShellError::NotFound(source));
    }

    if destination.is_dir() {
        if let Some(name) = source.file_name() {
            destination = destination.join(name);
        }
    }

    fsops::rename_or_copy(&source, &destination)?;
    session.ledger.arm(UndoRecord::Move {
        source: source.clone(),
        destination: destination.clone(),
    });
    println!("Moved {} to {}", source.display(), destination.display());
    Ok(())
}
