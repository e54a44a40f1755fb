//! `ls [-1] [path]` — list a directory, plain or detailed.

use std::fs;

use chrono::{DateTime, Local};
use mnsh_core::{path, Session, ShellError, ShellResult};

/// Plain mode prints one name per line with a `/` suffix on
/// directories; `-1` adds a type/exec flag, the byte size, and the
/// modification time. Flags and the optional path may appear in any
/// order.
pub fn invoke(session: &mut Session, args: &[String]) -> ShellResult<()> {
    let mut target = session.cwd.clone();
    let mut detailed = false;
    for arg in args {
        if arg == "-1" {
            detailed = true;
        } else if !arg.starts_with('-') {
            target = path::resolve(&session.cwd, arg);
        }
    }

    if !target.exists() {
        return Err(ShellError::NotFound(target));
    }

    let mut entries = fs::read_dir(&target)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        if detailed {
            let Ok(meta) = entry.metadata() else { continue };
            let flag = if meta.is_dir() {
                'd'
            } else if is_executable(&meta) {
                'x'
            } else {
                '-'
            };
            let mtime: DateTime<Local> = meta.modified()?.into();
            println!(
                "{flag} {name:<20} {size:>10} bytes {stamp}",
                size = meta.len(),
                stamp = mtime.format("%Y-%m-%d %H:%M:%S"),
            );
        } else if entry.path().is_dir() {
            println!("{name}/");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    false
}
