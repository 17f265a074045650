// Cat command

use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::{require_arg, resolve_path};
use crate::shell::context::ShellContext;
use crate::shell::error::CommandError;
use crate::shell::fs::copy_to;
use log::debug;
use std::io::Write;

pub struct CatCommand;
impl Executable for CatCommand {
    fn execute(&self, arg: Option<&str>, ctx: &mut ShellContext, out: &mut dyn Write) -> Result<(), CommandError> {
        let path_str = require_arg(arg)?;
        let path = resolve_path(ctx, path_str);

        let copied = copy_to(&path, out)?;
        debug!("cat: {} bytes from {}", copied, path.display());
        Ok(())
    }

    // The prompt marks the end of the stream, so a broken stream gets none.
    fn prompt_on_failure(&self) -> bool {
        false
    }
}
