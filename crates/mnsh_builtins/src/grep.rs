//! `grep <pattern> <path> [-r] [-i]` — regex line search.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use mnsh_core::{path, Session, ShellError, ShellResult};
use regex::{Regex, RegexBuilder};
use walkdir::WalkDir;

const USAGE: &str = "grep <pattern> <path> [-r] [-i]";

/// A single matching line.
#[derive(Debug, PartialEq, Eq)]
pub struct Match {
    pub file: PathBuf,
    pub line_no: usize,
    pub line: String,
}

/// Searching a directory requires `-r`; `-i` makes the pattern
/// case-insensitive. Unreadable and non-text files are skipped
/// silently, matching the behavior of a quick interactive search.
pub fn invoke(session: &mut Session, args: &[String]) -> ShellResult<()> {
    if args.len() < 2 {
        return Err(ShellError::Usage(USAGE));
    }
    let pattern = &args[0];
    let target = path::resolve(&session.cwd, &args[1]);
    let recursive = args.iter().any(|a| a == "-r");
    let ignore_case = args.iter().any(|a| a == "-i");

    let regex = RegexBuilder::new(pattern).case_insensitive(ignore_case).build()?;

    if !target.exists() {
        return Err(ShellError::NotFound(target));
    }
    if target.is_dir() && !recursive {
        return Err(ShellError::RecursiveSearchRequired);
    }

    for m in search(&regex, &target, recursive) {
        println!("{}:{}: {}", m.file.display(), m.line_no, m.line);
    }
    Ok(())
}

/// Collect matches from a file, or from every file under a directory.
fn search(regex: &Regex, target: &Path, recursive: bool) -> Vec<Match> {
    let mut matches = Vec::new();
    if target.is_file() {
        search_file(regex, target, &mut matches);
    } else if recursive {
        for entry in WalkDir::new(target).into_iter().filter_map(Result::ok) {
            if entry.file_type().is_file() {
                search_file(regex, entry.path(), &mut matches);
            }
        }
    }
    matches
}

fn search_file(regex: &Regex, file: &Path, matches: &mut Vec<Match>) {
    let Ok(handle) = File::open(file) else { return };
    for (idx, line) in BufReader::new(handle).lines().enumerate() {
        // Binary data or a read error ends this file, not the search.
        let Ok(line) = line else { return };
        if regex.is_match(&line) {
            matches.push(Match {
                file: file.to_path_buf(),
                line_no: idx + 1,
                line: line.trim().to_string(),
            });
        }
    }
}
