//! `history [N]` — show the last N accepted lines.

use mnsh_core::history::HISTORY_CAP;
use mnsh_core::{Session, ShellResult};

/// N defaults to 10 and is capped at the retention window; a
/// non-numeric argument falls back to the default. Entries print as
/// `id: [timestamp] command`, most recent last, keeping the ids they
/// were assigned when first accepted.
pub fn invoke(session: &mut Session, args: &[String]) -> ShellResult<()> {
    let n = args
        .first()
        .and_then(|a| a.parse::<usize>().ok())
        .unwrap_or(10)
        .min(HISTORY_CAP);

    for entry in session.history.recent(n) {
        println!("{}: [{}] {}", entry.id, entry.timestamp, entry.command);
    }
    Ok(())
}
