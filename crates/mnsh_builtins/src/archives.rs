//! Archive verbs: `zip`/`unzip` and `tar`/`untar`.
//!
//! Zip entries are named relative to the archived directory's parent,
//! so extraction recreates the directory itself; tarballs are rooted at
//! the directory basename for the same reason. Extraction always lands
//! in the current directory.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use mnsh_core::{path, Session, ShellError, ShellResult};
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const ZIP_USAGE: &str = "zip <folder> <archive.zip>";
const UNZIP_USAGE: &str = "unzip <archive.zip>";
const TAR_USAGE: &str = "tar <folder> <archive.tar.gz>";
const UNTAR_USAGE: &str = "untar <archive.tar.gz>";

/// `zip <dir> <archive>` — deflate-compress a directory tree.
pub fn zip_cmd(session: &mut Session, args: &[String]) -> ShellResult<()> {
    if args.len() < 2 {
        return Err(ShellError::Usage(ZIP_USAGE));
    }
    let folder = path::resolve(&session.cwd, &args[0]);
    let archive = ensure_suffix(path::resolve(&session.cwd, &args[1]), ".zip");

    if !folder.is_dir() {
        return Err(ShellError::NotADirectory(folder));
    }

    let root = folder.parent().unwrap_or(&folder);
    let file = File::create(&archive)?;
    let mut writer = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(&folder) {
        let entry = entry.map_err(io::Error::from)?;
        let Ok(rel) = entry.path().strip_prefix(root) else { continue };
        let name = rel.to_string_lossy().replace('\\', "/");
        if entry.file_type().is_dir() {
            writer.add_directory(name, options)?;
        } else {
            writer.start_file(name, options)?;
            let mut input = File::open(entry.path())?;
            io::copy(&mut input, &mut writer)?;
        }
    }
    writer.finish()?;

    println!("Created ZIP archive: {}", archive.display());
    Ok(())
}

/// `unzip <archive>` — extract into the current directory.
pub fn unzip(session: &mut Session, args: &[String]) -> ShellResult<()> {
    let token = args.first().ok_or(ShellError::Usage(UNZIP_USAGE))?;
    let archive = path::resolve(&session.cwd, token);
    if !archive.exists() {
        return Err(ShellError::FileNotFound(archive));
    }

    let file = File::open(&archive)?;
    let mut reader = ZipArchive::new(file)?;
    reader.extract(&session.cwd)?;

    println!("Extracted ZIP archive: {}", archive.display());
    Ok(())
}

/// `tar <dir> <archive>` — gzip-compressed tarball.
pub fn tar_cmd(session: &mut Session, args: &[String]) -> ShellResult<()> {
    if args.len() < 2 {
        return Err(ShellError::Usage(TAR_USAGE));
    }
    let folder = path::resolve(&session.cwd, &args[0]);
    let archive = ensure_suffix(path::resolve(&session.cwd, &args[1]), ".tar.gz");

    if !folder.is_dir() {
        return Err(ShellError::NotADirectory(folder));
    }

    let file = File::create(&archive)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    let root = folder.file_name().map(Path::new).unwrap_or_else(|| Path::new("."));
    builder.append_dir_all(root, &folder)?;
    builder.into_inner()?.finish()?;

    println!("Created TAR.GZ archive: {}", archive.display());
    Ok(())
}

/// `untar <archive>` — extract into the current directory.
pub fn untar(session: &mut Session, args: &[String]) -> ShellResult<()> {
    let token = args.first().ok_or(ShellError::Usage(UNTAR_USAGE))?;
    let archive = path::resolve(&session.cwd, token);
    if !archive.exists() {
        return Err(ShellError::FileNotFound(archive));
    }

    let file = File::open(&archive)?;
    let mut reader = tar::Archive::new(GzDecoder::new(file));
    reader.unpack(&session.cwd)?;

    println!("Extracted TAR.GZ archive: {}", archive.display());
    Ok(())
}

fn ensure_suffix(path: PathBuf, suffix: &str) -> PathBuf {
    let mut name = path.into_os_string();
    if !name.to_string_lossy().ends_with(suffix) {
        name.push(suffix);
    }
    PathBuf::from(name)
}
