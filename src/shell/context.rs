use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use crate::shell::commands::Executable;

pub struct ShellContext {
    pub cwd: PathBuf,
    pub registry: Arc<HashMap<String, Box<dyn Executable>>>,
}

impl ShellContext {
    pub fn new(cwd: PathBuf) -> Self {
        let mut ctx = Self {
            cwd,
            registry: Arc::new(HashMap::new()),
        };
        crate::shell::commands::builtins::register_all_builtins(&mut ctx);
        ctx
    }

    pub fn register_command(&mut self, name: &str, command: Box<dyn Executable>) {
        if let Some(map) = Arc::get_mut(&mut self.registry) {
            map.insert(name.to_string(), command);
        } else {
            // Only reachable if a dispatch is in flight while registering
            log::error!("Cannot register '{}': registry is in use", name);
        }
    }

    /// Handle to the registry that can outlive a `&mut self` borrow.
    pub fn commands(&self) -> Arc<HashMap<String, Box<dyn Executable>>> {
        Arc::clone(&self.registry)
    }
}
