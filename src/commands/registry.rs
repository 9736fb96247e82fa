// src/commands/registry.rs
use std::collections::{BTreeMap, HashMap};

use super::types::Command;

/// Verb table, built once per shell.
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        for alias in cmd.aliases() {
            self.aliases.insert(alias.to_string(), name.clone());
        }
        self.commands.insert(name, cmd);
    }

    /// Look up a verb or one of its aliases. Names are lower-case.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        let name = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Primary names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    /// Primary names and aliases, sorted.
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .commands
            .keys()
            .map(String::as_str)
            .chain(self.aliases.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|c| c.as_ref())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::amiga_cmd::AmigaCommand;
use super::avail_cmd::AvailCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClsCommand;
use super::copy::CopyCommand;
use super::date::DateCommand;
use super::delete::DeleteCommand;
use super::dir::DirCommand;
use super::echo::EchoCommand;
use super::execute_cmd::ExecuteCommand;
use super::help_cmd::HelpCommand;
use super::history_cmd::HistoryCommand;
use super::info_cmd::InfoCommand;
use super::makedir::MakedirCommand;
use super::mount::{MountCommand, UnmountCommand};
use super::pattern::PatternCommand;
use super::status_cmd::StatusCommand;
use super::type_cmd::TypeCommand;
use super::write_cmd::WriteCommand;

/// Register every builtin verb.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(AmigaCommand));
    registry.register(Box::new(AvailCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(ClsCommand));
    registry.register(Box::new(CopyCommand));
    registry.register(Box::new(DateCommand));
    registry.register(Box::new(DeleteCommand));
    registry.register(Box::new(DirCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(ExecuteCommand));
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(HistoryCommand));
    registry.register(Box::new(InfoCommand));
    registry.register(Box::new(MakedirCommand));
    registry.register(Box::new(MountCommand));
    registry.register(Box::new(UnmountCommand));
    registry.register(Box::new(PatternCommand));
    registry.register(Box::new(StatusCommand));
    registry.register(Box::new(TypeCommand));
    registry.register(Box::new(WriteCommand));
}

pub fn create_builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = create_builtin_registry();
        for verb in ["amiga", "dir", "cd", "echo", "mount", "unmount", "pattern", "execute", "cls"] {
            assert!(registry.contains(verb), "missing {}", verb);
        }
        assert_eq!(registry.get("clear").map(|c| c.name()), Some("cls"));
        assert!(!registry.contains("bogus"));
    }

    #[test]
    fn test_names_sorted() {
        let registry = create_builtin_registry();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(!names.contains(&"clear"));
        assert!(registry.all_names().contains(&"clear"));
    }
}
