//! Append-only audit trail of every command attempt.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::warn;

use crate::error::ShellResult;

/// One append-mode handle, opened at startup and held for the life of
/// the process. Entries are never read back or rewritten.
#[derive(Debug)]
pub struct CommandLog {
    path: PathBuf,
    file: File,
}

impl CommandLog {
    /// Open the log for appending, writing the fixed header if the file
    /// did not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> ShellResult<Self> {
        let path = path.into();
        let fresh = !path.exists();
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        if fresh {
            writeln!(file, "Shell Log")?;
            writeln!(file, "{}", "=".repeat(50))?;
        }
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a successful command attempt.
    pub fn success(&mut self, command: &str) {
        self.append(command, None);
    }

    /// Record a failed attempt; the detail goes on its own line.
    pub fn failure(&mut self, command: &str, detail: &str) {
        self.append(command, Some(detail));
    }

    fn append(&mut self, command: &str, detail: Option<&str>) {
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut write = || -> std::io::Result<()> {
            writeln!(self.file, "[{stamp}] {command}")?;
            if let Some(detail) = detail {
                writeln!(self.file, "[{stamp}] ERROR: {detail}")?;
            }
            self.file.flush()
        };
        // A broken audit file must not take the session down with it.
        if let Err(e) = write() {
            warn!("audit log write failed: {e}");
        }
    }
}
