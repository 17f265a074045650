pub mod context;
pub mod commands;
pub mod parser;
pub mod path;
pub mod fs;
pub mod error;
pub mod session;

use context::ShellContext;
use error::report;
use log::{debug, trace};
use parser::parse_command_line;
use std::io::{self, Write};


/// Runs one input line to completion: dispatch, error line, prompt.
/// Unknown keywords produce no output at all.
pub fn run_command_line(line: &str, ctx: &mut ShellContext, out: &mut dyn Write) -> io::Result<()> {
    let Some(cmd) = parse_command_line(line) else {
        return Ok(());
    };

    let commands = ctx.commands();
    let Some(command) = commands.get(cmd.keyword) else {
        trace!("Ignoring unknown command: {}", cmd.keyword);
        return Ok(());
    };

    match command.execute(cmd.argument, ctx, out) {
        Ok(()) => write_prompt(ctx, out)?,
        Err(e) => {
            debug!(
                "{} failed ({}): {}",
                cmd.keyword,
                if e.is_input_error() { "input" } else { "operation" },
                e
            );
            report(&e, out)?;
            if command.prompt_on_failure() {
                write_prompt(ctx, out)?;
            }
        }
    }

    out.flush()
}

pub fn write_prompt(ctx: &ShellContext, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "You are currently in, {}", ctx.cwd.display())?;
    writeln!(out)
}
