//! Holding directory for deleted items.
//!
//! Deletion is a move into this directory under a timestamped name;
//! `undo` moves the item back out. Items are never expired or garbage
//! collected by the shell.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{ShellError, ShellResult};
use crate::fsops;

#[derive(Debug, Clone)]
pub struct TrashArea {
    dir: PathBuf,
}

impl TrashArea {
    /// Open the trash directory, creating it if absent.
    pub fn open(dir: impl Into<PathBuf>) -> ShellResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Move `target` into the trash and return the path it now lives at.
    ///
    /// The item is named `{basename}_{timestamp}`; a numeric suffix keeps
    /// same-named items deleted within the same second apart.
    pub fn stage(&self, target: &Path) -> ShellResult<PathBuf> {
        let basename = target
            .file_name()
            .ok_or_else(|| ShellError::NotFound(target.to_path_buf()))?
            .to_string_lossy()
            .into_owned();
        let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();

        let mut item = self.dir.join(format!("{basename}_{stamp}"));
        let mut n = 1;
        while item.exists() {
            item = self.dir.join(format!("{basename}_{stamp}_{n}"));
            n += 1;
        }

        fsops::rename_or_copy(target, &item)?;
        Ok(item)
    }

    /// Move a trashed item back to its original location.
    pub fn restore(&self, trash_item: &Path, original: &Path) -> ShellResult<()> {
        fsops::rename_or_copy(trash_item, original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn stage_moves_item_under_timestamped_name() {
        let dir = tempdir().unwrap();
        let trash = TrashArea::open(dir.path().join(".trash")).unwrap();
        let target = dir.path().join("notes.txt");
        fs::write(&target, "body").unwrap();

        let item = trash.stage(&target).unwrap();

        assert!(!target.exists());
        assert!(item.exists());
        let name = item.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("notes.txt_"), "unexpected trash name: {name}");
    }

    #[test]
    fn same_second_deletions_get_distinct_slots() {
        let dir = tempdir().unwrap();
        let trash = TrashArea::open(dir.path().join(".trash")).unwrap();
        let a = dir.path().join("a/notes.txt");
        let b = dir.path().join("b/notes.txt");
        fs::create_dir_all(a.parent().unwrap()).unwrap();
        fs::create_dir_all(b.parent().unwrap()).unwrap();
        fs::write(&a, "one").unwrap();
        fs::write(&b, "two").unwrap();

        let first = trash.stage(&a).unwrap();
        let second = trash.stage(&b).unwrap();

        assert_ne!(first, second);
        assert!(first.exists() && second.exists());
    }

    #[test]
    fn restore_moves_item_back() {
        let dir = tempdir().unwrap();
        let trash = TrashArea::open(dir.path().join(".trash")).unwrap();
        let target = dir.path().join("notes.txt");
        fs::write(&target, "body").unwrap();

        let item = trash.stage(&target).unwrap();
        trash.restore(&item, &target).unwrap();

        assert!(target.exists());
        assert!(!item.exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "body");
    }
}
