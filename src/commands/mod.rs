// src/commands/mod.rs
pub mod amiga_cmd;
pub mod args;
pub mod avail_cmd;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod copy;
pub mod date;
pub mod delete;
pub mod dir;
pub mod echo;
pub mod execute_cmd;
pub mod help_cmd;
pub mod history_cmd;
pub mod info_cmd;
pub mod makedir;
pub mod mount;
pub mod pattern;
pub mod registry;
pub mod status_cmd;
pub mod type_cmd;
pub mod types;
pub mod write_cmd;

#[cfg(test)]
pub(crate) mod test_support;

pub use registry::{create_builtin_registry, register_builtins, CommandRegistry};
pub use types::{Command, CommandContext, CommandOutput, SideEffect};
