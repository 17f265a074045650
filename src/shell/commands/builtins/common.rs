use crate::shell::context::ShellContext;
use crate::shell::error::CommandError;
use crate::shell::path::resolve;
use std::path::PathBuf;

pub fn resolve_path(ctx: &ShellContext, path: &str) -> PathBuf {
    resolve(&ctx.cwd, path)
}

/// The argument of a command that cannot run without one.
pub fn require_arg(arg: Option<&str>) -> Result<&str, CommandError> {
    arg.ok_or(CommandError::InvalidInput)
}
