// src/commands/types.rs
use async_trait::async_trait;

use crate::error::ShellError;
use crate::interpreter::Interpreter;
use crate::path::CanonicalPath;
use crate::session::Session;

/// Effects a verb asks the caller to apply besides printing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    Navigate(CanonicalPath),
    ClearScreen,
}

/// Result of one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub effect: Option<SideEffect>,
}

impl CommandOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), effect: None }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn navigate(path: CanonicalPath) -> Self {
        Self { text: String::new(), effect: Some(SideEffect::Navigate(path)) }
    }

    pub fn clear_screen() -> Self {
        Self { text: String::new(), effect: Some(SideEffect::ClearScreen) }
    }
}

/// Everything a verb can see while it runs.
pub struct CommandContext<'a> {
    /// Whitespace-separated arguments after the verb.
    pub args: Vec<String>,
    /// The argument text exactly as typed, for verbs with their own syntax.
    pub raw_args: String,
    pub session: &'a mut Session,
    pub interpreter: &'a Interpreter,
}

impl CommandContext<'_> {
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Other spellings that dispatch to this verb.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// One line for the `help` table.
    fn summary(&self) -> &'static str;

    fn usage(&self) -> &'static str;

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError>;
}
