use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct InfoCommand;

const AMIGA: &str = "\
=== AMIGA SIMULATION ===
System: AmigaOS 3.1
CPU: Motorola 68020 @ 25MHz
ChipRAM: 2MB
FastRAM: 8MB
Kickstart: 3.1 (40.68)
Workbench: 3.1
";

#[async_trait]
impl Command for InfoCommand {
    fn name(&self) -> &'static str { "info" }

    fn summary(&self) -> &'static str { "Display system information" }

    fn usage(&self) -> &'static str { "INFO" }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let session = &*ctx.session;
        let namespace = session.namespace();
        let started = DateTime::<Local>::from(session.started());
        let host = std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        let mut stdout = String::from("WSA Terminal - Windows Subsystem for Amiga\n\n");
        stdout.push_str(AMIGA);
        stdout.push_str("\n=== ACTUAL SYSTEM ===\n");
        stdout.push_str(&format!("System: {}\n", std::env::consts::OS));
        stdout.push_str(&format!("Machine: {}\n", std::env::consts::ARCH));
        stdout.push_str(&format!("Working Directory: {}\n", host));
        stdout.push_str("\nWSA Terminal Information:\n");
        stdout.push_str(&format!("  Version: {}\n", env!("CARGO_PKG_VERSION")));
        stdout.push_str(&format!("  Started: {}\n", started.format("%d-%b-%y %H:%M:%S")));
        stdout.push_str(&format!("  Current Directory: {}\n", session.current_dir()));
        stdout.push_str(&format!("  Devices: {} mounted\n", namespace.devices().len()));
        stdout.push_str(&format!("  Virtual Files: {} files\n", namespace.store().file_count()));

        Ok(CommandOutput::text(stdout))
    }
}
