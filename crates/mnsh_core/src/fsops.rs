//! Shared filesystem helpers used by the move/copy/delete family.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::ShellResult;

/// Move `src` to `dst`, falling back to copy-then-remove when the
/// rename crosses a filesystem boundary.
pub fn rename_or_copy(src: &Path, dst: &Path) -> ShellResult<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => {
            if src.is_dir() {
                copy_dir_recursive(src, dst)?;
                fs::remove_dir_all(src)?;
            } else {
                fs::copy(src, dst)?;
                fs::remove_file(src)?;
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn is_cross_device(e: &io::Error) -> bool {
    e.raw_os_error() == Some(libc::EXDEV)
}

#[cfg(not(unix))]
fn is_cross_device(e: &io::Error) -> bool {
    // ERROR_NOT_SAME_DEVICE
    e.raw_os_error() == Some(17)
}

/// Copy a directory tree. Existing destination directories are merged.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> ShellResult<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let ty = entry.file_type()?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if ty.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}

/// Remove `path`, whether it is a file or a directory tree.
pub fn remove_any(path: &Path) -> ShellResult<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn rename_within_same_filesystem() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dst = dir.path().join("b.txt");
        fs::write(&src, "hello").unwrap();

        rename_or_copy(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "hello");
    }

    #[test]
    fn copies_nested_tree() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("tree");
        fs::create_dir_all(src.join("inner")).unwrap();
        fs::write(src.join("top.txt"), "top").unwrap();
        fs::write(src.join("inner/leaf.txt"), "leaf").unwrap();

        let dst = dir.path().join("copy");
        copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
        assert_eq!(fs::read_to_string(dst.join("inner/leaf.txt")).unwrap(), "leaf");
        assert!(src.exists());
    }

    #[test]
    fn remove_any_handles_files_and_directories() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f.txt");
        fs::write(&file, "x").unwrap();
        remove_any(&file).unwrap();
        assert!(!file.exists());

        let tree = dir.path().join("tree");
        fs::create_dir_all(tree.join("sub")).unwrap();
        remove_any(&tree).unwrap();
        assert!(!tree.exists());
    }
}
