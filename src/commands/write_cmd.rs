use async_trait::async_trait;

use crate::commands::args::{after_first_token, missing};
use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

/// Create or overwrite a file with the rest of the line.
pub struct WriteCommand;

#[async_trait]
impl Command for WriteCommand {
    fn name(&self) -> &'static str { "write" }

    fn summary(&self) -> &'static str { "Write text to a file" }

    fn usage(&self) -> &'static str { "WRITE <file> <text>" }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let Some(target) = ctx.arg(0) else {
            return Err(missing("file", self.usage()));
        };
        let path = ctx
            .session
            .namespace()
            .canonicalize(target, ctx.session.current_dir())?;
        let mut content = after_first_token(&ctx.raw_args).to_string();
        content.push('\n');

        ctx.session
            .namespace_mut()
            .write_file(&path, content.into_bytes())
            .await?;
        Ok(CommandOutput::empty())
    }
}
