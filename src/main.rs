mod args;
mod config;
mod handlers;
mod shell;

use anyhow::Result;
use args::ArgSource;
use config::Config;
use handlers::session::handle_session;

fn main() -> Result<()> {
    env_logger::init();
    let args = ArgSource::from_env()?;
    let config = Config::from_args(&args)?;

    handle_session(config)
}
