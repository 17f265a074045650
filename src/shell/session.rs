use crate::config::Config;
use crate::shell::context::ShellContext;
use crate::shell::{run_command_line, write_prompt};
use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};
use std::path::Path;

pub fn welcome_message(username: &str) -> String {
    format!("Welcome to the File Manager, {}!", username)
}

pub fn farewell_message(username: &str) -> String {
    format!("Thank you for using File Manager, {}, goodbye!", username)
}

/// Prints the farewell. Shared by end of input and the interrupt handler.
pub fn write_farewell(username: &str, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", farewell_message(username))?;
    out.flush()
}

/// One interactive session: who is using it and where they are.
pub struct Session {
    username: String,
    ctx: ShellContext,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            username: config.username,
            ctx: ShellContext::new(config.start_dir),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn cwd(&self) -> &Path {
        &self.ctx.cwd
    }

    /// Reads lines until `input` is exhausted. Each line is fully handled
    /// before the next one is read.
    pub fn run<R: BufRead>(&mut self, mut input: R, out: &mut dyn Write) -> Result<()> {
        info!("Session started for {} in {}", self.username, self.ctx.cwd.display());

        writeln!(out, "{}", welcome_message(&self.username)).context("Failed to write banner")?;
        writeln!(out)?;
        write_prompt(&self.ctx, out)?;
        out.flush()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = input.read_until(b'\n', &mut buf).context("Failed to read input")?;
            if read == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            run_command_line(&line, &mut self.ctx, out).context("Failed to write output")?;
        }

        info!("End of input, closing session");
        write_farewell(&self.username, out)?;
        Ok(())
    }
}
