// Up command

use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use crate::shell::error::CommandError;
use crate::shell::path::parent;
use log::debug;
use std::io::Write;

pub struct UpCommand;
impl Executable for UpCommand {
    fn execute(&self, _arg: Option<&str>, ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<(), CommandError> {
        // Purely lexical, the parent may not exist.
        let target = parent(&ctx.cwd);
        debug!("up: {} -> {}", ctx.cwd.display(), target.display());
        ctx.cwd = target;
        Ok(())
    }
}
