//! `undo` — invert the most recent reversible command.

use mnsh_core::{fsops, Session, ShellError, ShellResult, UndoRecord};

/// A destination or trash item that vanished out-of-band counts as
/// already reverted; the ledger is cleared either way. The ledger is
/// only cleared after the reversal succeeds, so a failing undo can be
/// retried.
pub fn invoke(session: &mut Session, _args: &[String]) -> ShellResult<()> {
    let Some(record) = session.ledger.peek().cloned() else {
        return Err(ShellError::NothingToUndo);
    };
    revert(session, &record)?;
    session.ledger.clear();
    Ok(())
}

fn revert(session: &mut Session, record: &UndoRecord) -> ShellResult<()> {
    match record {
        UndoRecord::Copy { destination } => {
            if destination.exists() {
                fsops::remove_any(destination)?;
                println!("Undo cp: removed {}", destination.display());
            }
        }
        UndoRecord::Move { source, destination } => {
            if destination.exists() {
                fsops::rename_or_copy(destination, source)?;
                println!("Undo mv: moved back to {}", source.display());
            }
        }
        UndoRecord::Delete { original, trash_item } => {
            if trash_item.exists() {
                session.trash.restore(trash_item, original)?;
                println!("Undo rm: restored {}", original.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{args, session_in};
    use crate::{cp, mv, rm};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn empty_ledger_is_a_reported_failure() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        let err = invoke(&mut session, &args(&[])).unwrap_err();
        assert!(matches!(err, ShellError::NothingToUndo));
    }

    #[test]
    fn undo_cp_removes_destination_and_keeps_source() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "body").unwrap();
        let mut session = session_in(dir.path());

        cp::invoke(&mut session, &args(&["a.txt", "b.txt"])).unwrap();
        invoke(&mut session, &args(&[])).unwrap();

        assert!(dir.path().join("a.txt").exists());
        assert!(!dir.path().join("b.txt").exists());
        assert!(!session.ledger.is_armed());
    }

    #[test]
    fn undo_mv_moves_destination_back() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "body").unwrap();
        let mut session = session_in(dir.path());

        mv::invoke(&mut session, &args(&["a.txt", "b.txt"])).unwrap();
        invoke(&mut session, &args(&[])).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "body");
        assert!(!dir.path().join("b.txt").exists());
    }

    #[test]
    fn undo_rm_restores_from_trash() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "body").unwrap();
        let mut session = session_in(dir.path());

        rm::invoke_with_confirm(&mut session, &args(&["notes.txt"]), |_| true).unwrap();
        invoke(&mut session, &args(&[])).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "body");
        assert_eq!(fs::read_dir(session.trash.dir()).unwrap().count(), 0);
    }

    #[test]
    fn only_the_last_operation_is_reverted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "body").unwrap();
        let mut session = session_in(dir.path());

        cp::invoke(&mut session, &args(&["a.txt", "copy.txt"])).unwrap();
        mv::invoke(&mut session, &args(&["copy.txt", "moved.txt"])).unwrap();
        invoke(&mut session, &args(&[])).unwrap();

        // The mv came back; the cp stands.
        assert!(dir.path().join("copy.txt").exists());
        assert!(!dir.path().join("moved.txt").exists());

        // And the slot is spent: a second undo has nothing left.
        let err = invoke(&mut session, &args(&[])).unwrap_err();
        assert!(matches!(err, ShellError::NothingToUndo));
    }

    #[test]
    fn vanished_destination_counts_as_reverted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "body").unwrap();
        let mut session = session_in(dir.path());

        cp::invoke(&mut session, &args(&["a.txt", "b.txt"])).unwrap();
        fs::remove_file(dir.path().join("b.txt")).unwrap();

        invoke(&mut session, &args(&[])).unwrap();
        assert!(!session.ledger.is_armed());
    }
}
