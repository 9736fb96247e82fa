// src/commands/cd_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;
use crate::session::Session;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn summary(&self) -> &'static str {
        "Change directory"
    }

    fn usage(&self) -> &'static str {
        "CD [<directory>]"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        if ctx.raw_args.trim().is_empty() {
            return Ok(CommandOutput::text(format!(
                "Current directory: {}\n",
                ctx.session.current_dir()
            )));
        }
        change_directory(ctx.session, &ctx.raw_args).await
    }
}

/// Resolve `raw` and ask for navigation if it names a directory.
///
/// Failures never move the session; they come back as text or a
/// reported error.
pub async fn change_directory(session: &Session, raw: &str) -> Result<CommandOutput, ShellError> {
    let raw = raw.trim();
    let resolved = session.namespace().resolve(raw, session.current_dir())?;
    if resolved.clamped && &resolved.path == session.current_dir() {
        return Ok(CommandOutput::text("Already at root directory.\n"));
    }
    if !session.namespace().is_directory(&resolved.path).await? {
        return Ok(CommandOutput::text(format!("Directory {} not found.\n", raw)));
    }
    Ok(CommandOutput::navigate(resolved.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{ctx, setup};
    use crate::commands::SideEffect;

    #[tokio::test]
    async fn test_cd_no_args_prints_current() {
        let (interp, mut session, _tmp) = setup();
        let out = CdCommand.execute(ctx(&interp, &mut session, "")).await.unwrap();
        assert_eq!(out.text, "Current directory: SYS:\n");
        assert!(out.effect.is_none());
    }

    #[tokio::test]
    async fn test_cd_into_and_back_out() {
        let (interp, mut session, _tmp) = setup();
        interp.execute(&mut session, "cd C").await.unwrap();
        assert_eq!(session.current_dir().to_string(), "SYS:C");
        interp.execute(&mut session, "cd ..").await.unwrap();
        assert_eq!(session.current_dir().to_string(), "SYS:");
    }

    #[tokio::test]
    async fn test_cd_parent_at_every_root() {
        let (interp, mut session, _tmp) = setup();
        for root in ["SYS:", "RAM:", "C:", "DH0:"] {
            interp.execute(&mut session, root).await.unwrap();
            let out = interp.execute(&mut session, "cd ..").await.unwrap();
            assert_eq!(out.text, "Already at root directory.\n");
            assert_eq!(session.current_dir().to_string(), root);
        }
    }

    #[tokio::test]
    async fn test_cd_missing_directory_leaves_cwd() {
        let (interp, mut session, _tmp) = setup();
        let out = interp.execute(&mut session, "cd Nowhere").await.unwrap();
        assert_eq!(out.text, "Directory Nowhere not found.\n");
        assert_eq!(session.current_dir().to_string(), "SYS:");

        let out = interp.execute(&mut session, "cd S/Startup-Sequence").await.unwrap();
        assert_eq!(out.text, "Directory S/Startup-Sequence not found.\n");
    }

    #[tokio::test]
    async fn test_cd_unknown_device_is_reported() {
        let (interp, mut session, _tmp) = setup();
        let out = interp.execute(&mut session, "cd XYZ:foo").await.unwrap();
        assert_eq!(out.text, "CD: Unknown device 'XYZ:'\n");
        assert_eq!(session.current_dir().to_string(), "SYS:");
    }

    #[tokio::test]
    async fn test_cd_into_host_directory() {
        let (interp, mut session, tmp) = setup();
        std::fs::create_dir(tmp.path().join("Work")).unwrap();
        let out = CdCommand
            .execute(ctx(&interp, &mut session, "dh0:Work"))
            .await
            .unwrap();
        match out.effect {
            Some(SideEffect::Navigate(path)) => assert_eq!(path.to_string(), "DH0:Work"),
            other => panic!("unexpected effect {:?}", other),
        }
    }
}
