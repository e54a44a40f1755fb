//! Error taxonomy shared by every command handler.
//!
//! Handlers return [`ShellResult`]; the dispatcher is the single place
//! that turns an error into a user-facing message and an audit log
//! failure entry. Unexpected I/O and archive errors are wrapped rather
//! than remapped so their messages surface verbatim.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for all shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    /// Wrong argument count or shape. Carries the usage line.
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("No such directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No such file: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Is a directory: {}", .0.display())]
    IsDirectory(PathBuf),

    /// Directory operand without the `-r` flag; the second field names
    /// the verb for the hint ("copy", "remove").
    #[error("{path} is a directory (use -r to {verb} recursively)", path = .0.display(), verb = .1)]
    RecursiveRequired(PathBuf, &'static str),

    #[error("Use -r for recursive search in directories")]
    RecursiveSearchRequired,

    /// The safety gate refused a deletion.
    #[error("{0}")]
    SafetyDenied(&'static str),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("No command to undo")]
    NothingToUndo,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Archive(#[from] zip::result::ZipError),

    #[error(transparent)]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
