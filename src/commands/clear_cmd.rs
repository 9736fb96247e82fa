use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

/// Screen clearing is left to the front end; the verb only signals it.
pub struct ClsCommand;

#[async_trait]
impl Command for ClsCommand {
    fn name(&self) -> &'static str {
        "cls"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["clear"]
    }

    fn summary(&self) -> &'static str {
        "Clear screen"
    }

    fn usage(&self) -> &'static str {
        "CLS"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::clear_screen())
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::setup;
    use crate::commands::SideEffect;

    #[tokio::test]
    async fn test_cls_and_clear_signal_clear_screen() {
        let (interp, mut session, _tmp) = setup();
        for line in ["cls", "CLEAR"] {
            let out = interp.execute(&mut session, line).await.unwrap();
            assert_eq!(out.effect, Some(SideEffect::ClearScreen));
            assert!(out.text.is_empty());
        }
    }
}
