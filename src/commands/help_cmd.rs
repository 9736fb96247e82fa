use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct HelpCommand;

const FEATURES: &str = "\
Amiga Features:
  Type a device name (e.g., 'dh0:') to change to that device
  Logical assignments S:, L:, DEVS:, FONTS: and T: work anywhere a path does
  Startup sequence execution at terminal startup (SYS:S/Startup-Sequence)
";

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    fn summary(&self) -> &'static str { "Display this help" }

    fn usage(&self) -> &'static str { "HELP [<command>]" }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let registry = ctx.interpreter.registry();

        if let Some(verb) = ctx.arg(0) {
            return Ok(CommandOutput::text(match registry.get(&verb.to_lowercase()) {
                Some(cmd) => format!("{} - {}\nUsage: {}\n", cmd.name().to_uppercase(), cmd.summary(), cmd.usage()),
                None => format!("No help available for '{}'\n", verb),
            }));
        }

        let mut stdout = String::from("Available commands:\n");
        for cmd in registry.iter() {
            stdout.push_str(&format!("  {:<8} - {}\n", cmd.name().to_uppercase(), cmd.summary()));
        }
        stdout.push('\n');
        stdout.push_str(FEATURES);

        Ok(CommandOutput::text(stdout))
    }
}
