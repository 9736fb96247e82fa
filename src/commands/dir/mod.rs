// src/commands/dir/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;
use crate::listing::Lister;

pub struct DirCommand;

#[async_trait]
impl Command for DirCommand {
    fn name(&self) -> &'static str {
        "dir"
    }

    fn summary(&self) -> &'static str {
        "List directory contents (Name, Size, Protection, Date)"
    }

    fn usage(&self) -> &'static str {
        "DIR [<directory>]"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let namespace = ctx.session.namespace();
        let path = namespace.canonicalize(&ctx.raw_args, ctx.session.current_dir())?;
        let listing = Lister::new(namespace, ctx.interpreter.command_names())
            .format(&path)
            .await?;
        Ok(CommandOutput::text(listing.render()))
    }
}
