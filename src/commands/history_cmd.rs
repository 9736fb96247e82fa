use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct HistoryCommand;

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &'static str { "history" }

    fn summary(&self) -> &'static str { "Show command history" }

    fn usage(&self) -> &'static str { "HISTORY [<count>]" }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let history = ctx.session.history();
        let count = match ctx.arg(0) {
            Some(arg) => arg
                .parse::<usize>()
                .map_err(|_| ShellError::invalid(format!("'{}' is not a count", arg)))?
                .min(history.len()),
            None => history.len(),
        };

        let start = history.len().saturating_sub(count);
        let mut stdout = String::new();
        for (i, cmd) in history.iter().enumerate().skip(start) {
            stdout.push_str(&format!("{:5}  {}\n", i + 1, cmd));
        }

        Ok(CommandOutput::text(stdout))
    }
}
