// src/commands/delete/mod.rs
use async_trait::async_trait;

use crate::commands::args::missing;
use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

/// Removes a file or an empty directory without asking.
pub struct DeleteCommand;

#[async_trait]
impl Command for DeleteCommand {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn summary(&self) -> &'static str {
        "Delete files"
    }

    fn usage(&self) -> &'static str {
        "DELETE <file>"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let target = ctx.raw_args.trim().to_string();
        if target.is_empty() {
            return Err(missing("file", self.usage()));
        }
        let path = ctx
            .session
            .namespace()
            .canonicalize(&target, ctx.session.current_dir())?;
        if ctx.session.current_dir().starts_with(&path) {
            return Err(ShellError::invalid(format!("'{}' is in use", path)));
        }
        let kind = if ctx.session.namespace().is_directory(&path).await? {
            "Directory"
        } else {
            "File"
        };

        ctx.session.namespace_mut().delete(&path).await?;
        Ok(CommandOutput::text(format!("DELETE: {} '{}' deleted\n", kind, target)))
    }
}
