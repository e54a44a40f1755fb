//! `cp <src> <dst> [-r]` — copy a file, or a directory tree with `-r`.

use std::fs;

use mnsh_core::{fsops, path, Session, ShellError, ShellResult, UndoRecord};

const USAGE: &str = "cp <source> <destination> [-r]";

/// Arms the undo ledger with the created destination once the copy has
/// fully succeeded; a failed copy leaves the ledger untouched.
pub fn invoke(session: &mut Session, args: &[String]) -> ShellResult<()> {
    let recursive = args.iter().any(|a| a == "-r");
    let operands: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
    if operands.len() < 2 {
        return Err(ShellError::Usage(USAGE));
    }

    let source = path::resolve(&session.cwd, operands[0]);
    let mut destination = path::resolve(&session.cwd, operands[1]);

    if !source.exists() {
        return Err(ShellError::NotFound(source));
    }

    if source.is_dir() {
        if !recursive {
            return Err(ShellError::RecursiveRequired(source, "copy"));
        }
        fsops::copy_dir_recursive(&source, &destination)?;
    } else {
        if destination.is_dir() {
            if let Some(name) = source.file_name() {
                destination = destination.join(name);
            }
        }
        fs::copy(&source, &destination)?;
    }

    session.ledger.arm(UndoRecord::Copy { destination: destination.clone() });
    println!("Copied {} to {}", source.display(), destination.display());
    Ok(())
}
