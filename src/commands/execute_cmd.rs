use async_trait::async_trait;
use tracing::info;

use crate::commands::args::missing;
use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;
use crate::fs::decode_text;
use crate::interpreter::ScriptRunner;
use crate::session::MAX_SCRIPT_DEPTH;

/// Runs a stored script line by line in the current session.
pub struct ExecuteCommand;

#[async_trait]
impl Command for ExecuteCommand {
    fn name(&self) -> &'static str { "execute" }

    fn summary(&self) -> &'static str { "Execute a script file" }

    fn usage(&self) -> &'static str { "EXECUTE <script>" }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let target = ctx.raw_args.trim();
        if target.is_empty() {
            return Err(missing("script", self.usage()));
        }
        if ctx.session.script_depth >= MAX_SCRIPT_DEPTH {
            return Err(ShellError::invalid(format!(
                "Scripts nested deeper than {} levels",
                MAX_SCRIPT_DEPTH
            )));
        }

        let namespace = ctx.session.namespace();
        let path = namespace.canonicalize(target, ctx.session.current_dir())?;
        let script = decode_text(&namespace.read_file(&path).await?);
        info!(script = %path, "executing script");

        ctx.session.script_depth += 1;
        let output = ScriptRunner::new(ctx.interpreter).run(ctx.session, &script).await;
        ctx.session.script_depth -= 1;

        Ok(CommandOutput::text(format!("Executing {}...\n{}", path, output)))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::setup;

    #[tokio::test]
    async fn test_execute_stored_script() {
        let (interp, mut session, _tmp) = setup();
        interp.execute(&mut session, "write RAM:setup echo ready").await.unwrap();
        let out = interp.execute(&mut session, "execute RAM:setup").await.unwrap();
        assert_eq!(out.text, "Executing RAM:setup...\nready\n");
    }

    #[tokio::test]
    async fn test_execute_script_changes_directory() {
        let (interp, mut session, tmp) = setup();
        std::fs::write(tmp.path().join("go"), "; jump\nRAM:\nmakedir Work\ncd Work\n").unwrap();
        interp.execute(&mut session, "execute DH0:go").await.unwrap();
        assert_eq!(session.current_dir().to_string(), "RAM:Work");
    }

    #[tokio::test]
    async fn test_execute_recursion_is_bounded() {
        let (interp, mut session, _tmp) = setup();
        interp.execute(&mut session, "write RAM:loop execute RAM:loop").await.unwrap();
        let out = interp.execute(&mut session, "execute RAM:loop").await.unwrap();
        assert!(out.text.contains("EXECUTE: Scripts nested deeper than 8 levels"));
        assert_eq!(session.script_depth, 0);
    }

    #[tokio::test]
    async fn test_execute_missing_script() {
        let (interp, mut session, _tmp) = setup();
        let out = interp.execute(&mut session, "execute S:Nothing").await.unwrap();
        assert_eq!(out.text, "EXECUTE: Object 'SYS:S/Nothing' not found\n");
    }
}
