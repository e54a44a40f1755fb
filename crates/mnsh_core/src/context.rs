//! The per-process session owned by the dispatch loop.

use std::path::PathBuf;

use crate::audit::CommandLog;
use crate::error::ShellResult;
use crate::history::HistoryStore;
use crate::trash::TrashArea;
use crate::undo::UndoLedger;

/// Where the session keeps its on-disk companions.
#[derive(Debug, Clone)]
pub struct SessionPaths {
    pub log_file: PathBuf,
    pub history_file: PathBuf,
    pub trash_dir: PathBuf,
}

impl Default for SessionPaths {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("shell.log"),
            history_file: PathBuf::from(".history"),
            trash_dir: PathBuf::from(".trash"),
        }
    }
}

/// All mutable shell state. Exactly one per process; handlers receive
/// it by `&mut` and nothing else touches it. None of it survives the
/// process except what the history store and audit log flush to disk.
#[derive(Debug)]
pub struct Session {
    pub cwd: PathBuf,
    pub commands_run: u64,
    pub ledger: UndoLedger,
    pub history: HistoryStore,
    pub audit: CommandLog,
    pub trash: TrashArea,
}

impl Session {
    /// Session rooted at the process working directory.
    pub fn new(paths: &SessionPaths) -> ShellResult<Self> {
        Self::with_cwd(std::env::current_dir()?, paths)
    }

    /// Session rooted at an explicit directory.
    pub fn with_cwd(cwd: PathBuf, paths: &SessionPaths) -> ShellResult<Self> {
        Ok(Self {
            cwd,
            commands_run: 0,
            ledger: UndoLedger::new(),
            history: HistoryStore::load(&paths.history_file),
            audit: CommandLog::open(&paths.log_file)?,
            trash: TrashArea::open(&paths.trash_dir)?,
        })
    }

    /// Prompt shown before each read: the absolute current directory.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.cwd.display())
    }
}
