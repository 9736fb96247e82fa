//! Interpreter - command line dispatch
//!
//! One line in, text plus an optional side effect out. The interpreter is
//! stateless between lines; everything persistent lives in the [`Session`].
//!
//! Reported errors from a verb are rendered as `VERB: message` text. Any other
//! failure is a fault and is returned as `Err` for the caller to contain.

use std::sync::Arc;

use tracing::debug;

use crate::commands::cd_cmd::change_directory;
use crate::commands::{CommandContext, CommandOutput, CommandRegistry, SideEffect};
use crate::error::ShellError;
use crate::session::Session;

#[derive(Clone)]
pub struct Interpreter {
    registry: Arc<CommandRegistry>,
}

impl Interpreter {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Primary verb names, as shown at the command device root.
    pub fn command_names(&self) -> Vec<String> {
        self.registry.names().into_iter().map(String::from).collect()
    }

    pub async fn execute(&self, session: &mut Session, line: &str) -> Result<CommandOutput, ShellError> {
        let line = line.trim();
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = tokens.first() else {
            return Ok(CommandOutput::empty());
        };

        // A bare device or alias navigates and is not recorded.
        if tokens.len() == 1 && session.namespace().is_navigable(first) {
            let result = change_directory(session, first).await;
            return finish(session, "cd", result);
        }

        session.record(line);

        let verb = first.to_lowercase();
        let Some(command) = self.registry.get(&verb) else {
            let err = ShellError::UnrecognizedCommand { verb: first.to_string() };
            return Ok(CommandOutput::text(format!("{}\n", err)));
        };

        let raw_args = line[first.len()..].trim_start().to_string();
        let ctx = CommandContext {
            args: tokens[1..].iter().map(|s| s.to_string()).collect(),
            raw_args,
            session: &mut *session,
            interpreter: self,
        };
        debug!(verb = %command.name(), "dispatch");

        let result = command.execute(ctx).await;
        finish(session, command.name(), result)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Arc::new(crate::commands::create_builtin_registry()))
    }
}

/// Apply a navigation effect, render reported errors, pass faults on.
fn finish(
    session: &mut Session,
    verb: &str,
    result: Result<CommandOutput, ShellError>,
) -> Result<CommandOutput, ShellError> {
    match result {
        Ok(output) => {
            if let Some(SideEffect::Navigate(path)) = &output.effect {
                session.set_current_dir(path.clone());
            }
            Ok(output)
        }
        Err(err) if err.is_reported() => Ok(CommandOutput::text(format!(
            "{}: {}\n",
            verb.to_uppercase(),
            err
        ))),
        Err(err) => Err(err),
    }
}
