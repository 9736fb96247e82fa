//! wsa-shell - a retro device-path shell
//!
//! One namespace over several devices (`SYS:`, `RAM:`, `DH0:`...), some held
//! in memory and some overlaid on a host directory, driven by a small
//! line-oriented command interpreter.

pub mod commands;
pub mod complete;
pub mod config;
pub mod error;
pub mod fs;
pub mod interpreter;
pub mod listing;
pub mod logging;
pub mod path;
pub mod session;
pub mod shell;

pub use commands::{CommandOutput, SideEffect};
pub use config::{ConfigError, ShellConfig};
pub use error::ShellError;
pub use interpreter::{Interpreter, ScriptRunner};
pub use path::CanonicalPath;
pub use session::Session;
pub use shell::Shell;
