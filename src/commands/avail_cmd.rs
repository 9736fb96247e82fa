use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct AvailCommand;

#[async_trait]
impl Command for AvailCommand {
    fn name(&self) -> &'static str { "avail" }

    fn summary(&self) -> &'static str { "List available commands" }

    fn usage(&self) -> &'static str { "AVAIL" }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let mut stdout = String::from("Available commands:\n");
        for name in ctx.interpreter.registry().all_names() {
            stdout.push_str(&format!("  {}\n", name));
        }
        Ok(CommandOutput::text(stdout))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::setup;

    #[tokio::test]
    async fn test_avail_is_sorted_and_includes_aliases() {
        let (interp, mut session, _tmp) = setup();
        let out = interp.execute(&mut session, "avail").await.unwrap();
        let names: Vec<&str> = out.text.lines().skip(1).map(str::trim).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"clear"));
        assert!(names.contains(&"cls"));
    }
}
