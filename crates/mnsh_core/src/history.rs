//! Bounded, persisted record of accepted input lines.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ShellResult;

/// Retention cap for the persisted window.
pub const HISTORY_CAP: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub command: String,
    pub timestamp: String,
}

/// Sliding window of the last [`HISTORY_CAP`] input lines, flushed to
/// disk on every append. Ids keep counting past the cap; an id is never
/// reassigned while the window slides.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl HistoryStore {
    /// Load persisted history. A missing or malformed file means empty
    /// history, never a startup failure.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries: Vec<HistoryEntry> = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                debug!("discarding malformed history file {}: {e}", path.display());
                Vec::new()
            }),
            Err(_) => Vec::new(),
        };
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { path, entries, next_id }
    }

    /// Append a line and flush the window to disk.
    pub fn push(&mut self, command: &str) -> ShellResult<()> {
        self.entries.push(HistoryEntry {
            id: self.next_id,
            command: command.to_string(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
        self.next_id += 1;
        if self.entries.len() > HISTORY_CAP {
            let overflow = self.entries.len() - HISTORY_CAP;
            self.entries.drain(..overflow);
        }
        self.save()
    }

    fn save(&self) -> ShellResult<()> {
        let text = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// The most recent `n` retained entries, oldest first.
    pub fn recent(&self, n: usize) -> &[HistoryEntry] {
        let n = n.min(HISTORY_CAP).min(self.entries.len());
        &self.entries[self.entries.len() - n..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
