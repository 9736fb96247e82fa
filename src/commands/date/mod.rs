// src/commands/date/mod.rs
use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct DateCommand;

/// `Monday 19-Oct-26 14:03:11`
pub fn format_amiga_datetime(now: DateTime<Local>) -> String {
    now.format("%A %d-%b-%y %H:%M:%S").to_string()
}

#[async_trait]
impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    fn summary(&self) -> &'static str {
        "Show current date and time"
    }

    fn usage(&self) -> &'static str {
        "DATE"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::text(format!("{}\n", format_amiga_datetime(Local::now()))))
    }
}
