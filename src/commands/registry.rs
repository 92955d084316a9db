// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Make `alias` dispatch to the already registered `target`.
    pub fn alias(&mut self, alias: &str, target: &str) {
        self.aliases.insert(alias.to_string(), target.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        let name = self.aliases.get(name).map(|s| s.as_str()).unwrap_or(name);
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered names and aliases, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .commands
            .keys()
            .chain(self.aliases.keys())
            .map(|s| s.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::date::DateCommand;
use super::echo::EchoCommand;
use super::ls::LsCommand;
use super::nano_cmd::NanoCommand;
use super::pwd::PwdCommand;
use super::python_cmd::PythonCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register the terminal's built-in commands.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(PythonCommand));
    registry.alias("python3", "python");
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(NanoCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(DateCommand));
}

/// Create a registry holding exactly the built-in commands.
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_names() {
        let registry = create_default_registry();
        assert_eq!(
            registry.names(),
            vec![
                "cat", "cd", "clear", "date", "echo", "ls", "nano", "pwd", "python", "python3",
                "whoami",
            ]
        );
    }

    #[test]
    fn test_alias_resolves_to_target() {
        let registry = create_default_registry();
        assert_eq!(registry.get("python3").map(|c| c.name()), Some("python"));
        assert!(registry.contains("python3"));
        assert!(!registry.contains("bash"));
        assert!(!registry.contains("help"));
    }
}
