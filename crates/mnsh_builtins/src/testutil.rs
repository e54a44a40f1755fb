//! Shared helpers for handler tests.

use std::path::Path;

use mnsh_core::{Session, SessionPaths};

/// A session rooted at `dir`, with its log, history, and trash kept
/// inside `dir` so tests stay hermetic.
pub fn session_in(dir: &Path) -> Session {
    let paths = SessionPaths {
        log_file: dir.join("shell.log"),
        history_file: dir.join(".history"),
        trash_dir: dir.join(".trash"),
    };
    Session::with_cwd(dir.to_path_buf(), &paths).expect("session setup")
}

/// Convenience for building `&[String]` argument lists.
pub fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
