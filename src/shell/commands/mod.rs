pub mod builtins;

use crate::shell::context::ShellContext;
use crate::shell::error::CommandError;
use std::io::Write;

pub trait Executable {
    /// Runs the command with its single optional argument, writing any
    /// listing or file content to `out`.
    fn execute(
        &self,
        arg: Option<&str>,
        ctx: &mut ShellContext,
        out: &mut dyn Write,
    ) -> Result<(), CommandError>;

    /// Whether the current-directory prompt follows a failed run.
    fn prompt_on_failure(&self) -> bool {
        true
    }
}
