use async_trait::async_trait;
use chrono::Local;
use rand::Rng;

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    fn name(&self) -> &'static str { "status" }

    fn summary(&self) -> &'static str { "Show system status" }

    fn usage(&self) -> &'static str { "STATUS" }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let session = &*ctx.session;
        let now = Local::now();
        let process = rand::thread_rng().gen_range(1..=99);
        let devices: Vec<&str> = session.namespace().devices().iter().map(|d| d.name()).collect();

        let mut stdout = String::from("=== AMIGA SYSTEM STATUS ===\n");
        stdout.push_str(&format!("Date: {}\n", now.format("%d-%b-%y")));
        stdout.push_str(&format!("Time: {}\n", now.format("%H:%M:%S")));
        stdout.push_str(&format!("CLI: Shell Process #{}\n", process));
        stdout.push_str(&format!("Current Directory: {}\n", session.current_dir()));
        stdout.push_str(&format!("History: {} commands\n", session.history().len()));
        stdout.push_str(&format!("Mounted Devices: {}\n", devices.join(" ")));
        stdout.push_str("Task Priority: 0\n");
        stdout.push_str("Stack: 8000 bytes used of 32000\n");

        Ok(CommandOutput::text(stdout))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::setup;

    #[tokio::test]
    async fn test_status_reports_session() {
        let (interp, mut session, _tmp) = setup();
        interp.execute(&mut session, "RAM:").await.unwrap();
        let out = interp.execute(&mut session, "status").await.unwrap();
        assert!(out.text.starts_with("=== AMIGA SYSTEM STATUS ===\n"));
        assert!(out.text.contains("Current Directory: RAM:\n"));
        assert!(out.text.contains("History: 1 commands\n"));
        assert!(out.text.contains("Mounted Devices: SYS: RAM: C: DH0:\n"));
        assert!(out.text.contains("CLI: Shell Process #"));
    }
}
