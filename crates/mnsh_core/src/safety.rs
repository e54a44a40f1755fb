//! Deletion safety gate.

use std::path::Path;

/// Return the reason `target` must not be deleted, or `None` if it may.
///
/// The gate is deliberately narrow: it blocks the filesystem root and
/// the parent of the current directory (by literal `".."` token or by
/// resolved path), nothing else. The current directory itself is fair
/// game; this is a guard against the two classic self-inflicted
/// disasters, not a sandbox.
pub fn deny_reason(token: &str, target: &Path, current_dir: &Path) -> Option<&'static str> {
    if target == Path::new("/") {
        return Some("Cannot delete root directory");
    }
    if token == ".." || current_dir.parent() == Some(target) {
        return Some("Cannot delete parent directory");
    }
    None
}
