// Thin adapters over std::fs. Each one reports a tagged FsError.

use crate::shell::error::FsError;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

/// Succeeds if something exists at `path`. Symlinks are followed.
pub fn access(path: &Path) -> Result<(), FsError> {
    fs::metadata(path)?;
    Ok(())
}

/// Regular files and directories in `path`, in enumeration order.
/// Symlinks and special files are left out.
pub fn read_dir(path: &Path) -> Result<Vec<Entry>, FsError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let ty = entry.file_type()?;
        let kind = if ty.is_dir() {
            EntryKind::Directory
        } else if ty.is_file() {
            EntryKind::File
        } else {
            continue;
        };
        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            kind,
        });
    }
    Ok(entries)
}

/// Streams the file at `path` into `out` chunk by chunk.
/// Bytes already written stay written if a later read fails.
pub fn copy_to(path: &Path, out: &mut dyn Write) -> Result<u64, FsError> {
    let mut file = File::open(path)?;
    let copied = io::copy(&mut file, out)?;
    Ok(copied)
}

/// Creates an empty file at `path`. Fails with `AlreadyExists` if any entry,
/// a dangling symlink included, is already there.
pub fn create(path: &Path) -> Result<(), FsError> {
    OpenOptions::new().create_new(true).append(true).open(path)?;
    Ok(())
}
