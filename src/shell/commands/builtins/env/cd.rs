// Cd command

use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::{require_arg, resolve_path};
use crate::shell::context::ShellContext;
use crate::shell::error::CommandError;
use crate::shell::fs::access;
use log::debug;
use std::io::Write;

pub struct CdCommand;
impl Executable for CdCommand {
    fn execute(&self, arg: Option<&str>, ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<(), CommandError> {
        let path_str = require_arg(arg)?;
        let new_path = resolve_path(ctx, path_str);

        // Existence is all that is checked; the target is not required to be a directory.
        access(&new_path)?;

        debug!("cd: {} -> {}", ctx.cwd.display(), new_path.display());
        ctx.cwd = new_path;
        Ok(())
    }
}
