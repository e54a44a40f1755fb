//! Verb dispatch and the single point of reporting and audit logging.

use mnsh_core::{Session, ShellError, ShellResult};
use tracing::{debug, warn};

use crate::{archives, cat, cd, cp, grep, history, ls, mv, rm, undo};

/// Process one raw input line: record it in history, parse the verb,
/// run the matching handler, then report and audit the outcome.
///
/// Returns `false` when the line asks the shell to exit. A handler
/// error never escapes: it is printed once as `ERROR: ...` and logged
/// with detail, and the session carries on.
pub fn execute_line(session: &mut Session, line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return true;
    }
    if line.eq_ignore_ascii_case("exit") {
        return false;
    }

    if let Err(e) = session.history.push(line) {
        warn!("history not persisted: {e}");
    }

    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return true;
    };
    let verb = verb.to_lowercase();
    let args: Vec<String> = parts.map(str::to_string).collect();

    session.commands_run += 1;
    debug!(verb = %verb, argc = args.len(), "dispatching");

    match run_verb(session, &verb, &args) {
        Ok(()) => session.audit.success(line),
        Err(err) => {
            println!("ERROR: {err}");
            let detail = err.to_string();
            session.audit.failure(line, &detail);
        }
    }
    true
}

fn run_verb(session: &mut Session, verb: &str, args: &[String]) -> ShellResult<()> {
    match verb {
        "ls" => ls::invoke(session, args),
        "cd" => cd::invoke(session, args),
        "cat" => cat::invoke(session, args),
        "cp" => cp::invoke(session, args),
        "mv" => mv::invoke(session, args),
        "rm" => rm::invoke(session, args),
        "zip" => archives::zip_cmd(session, args),
        "unzip" => archives::unzip(session, args),
        "tar" => archives::tar_cmd(session, args),
        "untar" => archives::untar(session, args),
        "grep" => grep::invoke(session, args),
        "history" => history::invoke(session, args),
        "undo" => undo::invoke(session, args),
        other => Err(ShellError::UnknownCommand(other.to_string())),
    }
}
