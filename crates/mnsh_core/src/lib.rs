//! Core state and invariants for the mnsh interactive shell.
//!
//! Everything that outlives a single command lives here: the [`Session`]
//! owned by the dispatch loop, the single-slot [`UndoLedger`], the
//! [`trash::TrashArea`] that makes deletion reversible, the bounded
//! persisted [`history::HistoryStore`], and the append-only
//! [`audit::CommandLog`]. The command handlers themselves live in the
//! `mnsh_builtins` crate.

pub mod audit;
pub mod context;
pub mod error;
pub mod fsops;
pub mod history;
pub mod path;
pub mod safety;
pub mod trash;
pub mod undo;

pub use context::{Session, SessionPaths};
pub use error::{ShellError, ShellResult};
pub use undo::{UndoLedger, UndoRecord};
