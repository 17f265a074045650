use anyhow::{Context, Result};
use log::debug;
use std::io;
use crate::config::Config;
use crate::shell::session::{Session, write_farewell};

pub fn handle_session(config: Config) -> Result<()> {
    let mut session = Session::new(config);

    let username = session.username().to_string();
    ctrlc::set_handler(move || {
        let _ = write_farewell(&username, &mut io::stdout());
        std::process::exit(0);
    })
    .context("Failed to install interrupt handler")?;

    // Unlocked handle: the interrupt handler must be able to write at any time.
    let mut stdout = io::stdout();
    session.run(io::stdin().lock(), &mut stdout)?;

    debug!("Session ended in {}", session.cwd().display());
    Ok(())
}
