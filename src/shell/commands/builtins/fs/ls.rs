// Ls command

use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::error::CommandError;
use crate::shell::fs::{read_dir, Entry, EntryKind};
use log::debug;
use std::io::Write;

pub struct LsCommand;
impl Executable for LsCommand {
    fn execute(&self, _arg: Option<&str>, ctx: &mut ShellContext, out: &mut dyn Write) -> Result<(), CommandError> {
        let entries = read_dir(&ctx.cwd)?;
        debug!("ls: {} entries in {}", entries.len(), ctx.cwd.display());

        writeln!(out, "{}", format_listing(entries))?;
        Ok(())
    }
}

/// Directories first, then files; each block sorted by name, case-sensitive.
pub fn format_listing(entries: Vec<Entry>) -> String {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in entries {
        match entry.kind {
            EntryKind::Directory => dirs.push(format!("d {}", entry.name)),
            EntryKind::File => files.push(format!("- {}", entry.name)),
        }
    }

    dirs.sort();
    files.sort();
    dirs.extend(files);
    dirs.join("\n")
}
