// src/commands/copy/mod.rs
use async_trait::async_trait;

use crate::commands::args::missing;
use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct CopyCommand;

#[async_trait]
impl Command for CopyCommand {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn summary(&self) -> &'static str {
        "Copy files"
    }

    fn usage(&self) -> &'static str {
        "COPY <source> <destination>"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let (source, dest) = match (ctx.arg(0), ctx.arg(1)) {
            (Some(source), Some(dest)) => (source.to_string(), dest.to_string()),
            (Some(_), None) => return Err(missing("destination", self.usage())),
            _ => return Err(missing("source", self.usage())),
        };

        let cwd = ctx.session.current_dir().clone();
        let namespace = ctx.session.namespace();
        let source_path = namespace.canonicalize(&source, &cwd)?;
        let mut dest_path = namespace.canonicalize(&dest, &cwd)?;

        let content = namespace.read_file(&source_path).await?;
        // Copying onto a directory lands inside it under the source name.
        if namespace.is_directory(&dest_path).await? {
            dest_path = dest_path.join(source_path.name());
        }

        ctx.session.namespace_mut().write_file(&dest_path, content).await?;
        Ok(CommandOutput::text(format!("COPY: '{}' copied to '{}'\n", source, dest)))
    }
}
