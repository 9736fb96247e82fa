// src/commands/echo/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn summary(&self) -> &'static str {
        "Echo text to terminal"
    }

    fn usage(&self) -> &'static str {
        "ECHO <text>"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let mut output = ctx.args.join(" ");
        output.push('\n');
        Ok(CommandOutput::text(output))
    }
}
