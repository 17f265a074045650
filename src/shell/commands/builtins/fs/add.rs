// Add command

use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::{require_arg, resolve_path};
use crate::shell::context::ShellContext;
use crate::shell::error::{CommandError, FsError};
use crate::shell::fs::{access, create};
use log::debug;
use std::io::Write;
use std::path::Path;

pub struct AddCommand;
impl Executable for AddCommand {
    fn execute(&self, arg: Option<&str>, ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<(), CommandError> {
        let name = require_arg(arg)?;
        let target = resolve_path(ctx, name);

        // Only a file directly inside the current directory may be created.
        // Compared as raw path text, so "/a/b/" and "/a/b" differ.
        if target.parent().map(Path::as_os_str) != Some(ctx.cwd.as_os_str()) {
            debug!("add: {} is outside {}", target.display(), ctx.cwd.display());
            return Err(CommandError::InvalidInput);
        }

        match access(&target) {
            Ok(()) => return Err(FsError::AlreadyExists.into()),
            Err(FsError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }

        // Refuses anything already there, dangling symlinks included.
        create(&target)?;
        debug!("add: created {}", target.display());
        Ok(())
    }
}
