//! `cat <path>` — print a file's contents.

use std::fs;

use mnsh_core::{path, Session, ShellError, ShellResult};

pub fn invoke(session: &mut Session, args: &[String]) -> ShellResult<()> {
    let token = args.first().ok_or(ShellError::Usage("cat <file>"))?;
    let file = path::resolve(&session.cwd, token);

    if file.is_dir() {
        return Err(ShellError::IsDirectory(file));
    }
    if !file.exists() {
        return Err(ShellError::FileNotFound(file));
    }

    let content = fs::read_to_string(&file)?;
    println!("{content}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{args, session_in};
    use tempfile::tempdir;

    #[test]
    fn requires_an_argument() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        let err = invoke(&mut session, &args(&[])).unwrap_err();
        assert!(matches!(err, ShellError::Usage(_)));
    }

    #[test]
    fn rejects_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let mut session = session_in(dir.path());
        let err = invoke(&mut session, &args(&["sub"])).unwrap_err();
        assert!(matches!(err, ShellError::IsDirectory(_)));
    }

    #[test]
    fn prints_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();
        let mut session = session_in(dir.path());
        invoke(&mut session, &args(&["a.txt"])).unwrap();

        let err = invoke(&mut session, &args(&["b.txt"])).unwrap_err();
        assert!(matches!(err, ShellError::FileNotFound(_)));
    }
}
