//! Syntactic path resolution for user-supplied tokens.

use std::path::{Path, PathBuf};

/// Resolve a path token against the current directory.
///
/// `".."` strips the last component of `current_dir` (the root is its
/// own parent), `"~"` expands to the user's home directory, an absolute
/// token is used verbatim, and anything else is joined onto
/// `current_dir`. Purely syntactic: nothing is checked for existence
/// and resolution never fails.
pub fn resolve(current_dir: &Path, token: &str) -> PathBuf {
    if token == ".." {
        current_dir.parent().unwrap_or(current_dir).to_path_buf()
    } else if token == "~" {
        dirs::home_dir().unwrap_or_else(|| current_dir.to_path_buf())
    } else {
        let candidate = Path::new(token);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            current_dir.join(candidate)
        }
    }
}
