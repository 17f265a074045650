pub mod fs;
pub mod env;
pub mod io;
pub mod common; // Private helpers

use crate::shell::context::ShellContext;

/// Helper to register all built-in commands at once
pub fn register_all_builtins(ctx: &mut ShellContext) {
    // Navigation
    ctx.register_command("up", Box::new(env::up::UpCommand));
    ctx.register_command("cd", Box::new(env::cd::CdCommand));

    // FS commands
    ctx.register_command("ls", Box::new(fs::ls::LsCommand));
    ctx.register_command("add", Box::new(fs::add::AddCommand));

    // IO
    ctx.register_command("cat", Box::new(io::cat::CatCommand));
}
