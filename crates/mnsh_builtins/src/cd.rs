//! `cd [path]` — change the working directory.

use std::env;

use mnsh_core::{path, Session, ShellError, ShellResult};

/// With no argument the target is the home directory. On success both
/// the process working directory and `Session.cwd` are updated, so the
/// prompt always shows a canonical absolute path.
pub fn invoke(session: &mut Session, args: &[String]) -> ShellResult<()> {
    let target = match args.first() {
        Some(token) => path::resolve(&session.cwd, token),
        None => dirs::home_dir().unwrap_or_else(|| session.cwd.clone()),
    };

    if !target.is_dir() {
        return Err(ShellError::NotADirectory(target));
    }

    let canonical = target.canonicalize()?;
    env::set_current_dir(&canonical)?;
    session.cwd = canonical;
    Ok(())
}
