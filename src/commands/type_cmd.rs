use async_trait::async_trait;

use crate::commands::args::missing;
use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;
use crate::fs::decode_text;

pub struct TypeCommand;

#[async_trait]
impl Command for TypeCommand {
    fn name(&self) -> &'static str { "type" }

    fn summary(&self) -> &'static str { "Display file contents" }

    fn usage(&self) -> &'static str { "TYPE <file>" }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        if ctx.raw_args.trim().is_empty() {
            return Err(missing("file", self.usage()));
        }
        let namespace = ctx.session.namespace();
        let path = namespace.canonicalize(&ctx.raw_args, ctx.session.current_dir())?;
        let bytes = namespace.read_file(&path).await?;

        let mut text = decode_text(&bytes);
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Ok(CommandOutput::text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{ctx, setup};

    #[tokio::test]
    async fn test_type_virtual_file_via_alias() {
        let (interp, mut session, _tmp) = setup();
        let out = TypeCommand
            .execute(ctx(&interp, &mut session, "T:Temp-File"))
            .await
            .unwrap();
        assert_eq!(out.text, "Temporary file\n");
    }

    #[tokio::test]
    async fn test_type_latin1_host_file() {
        let (interp, mut session, tmp) = setup();
        std::fs::write(tmp.path().join("legacy.txt"), [0x47, 0x72, 0xFC, 0xDF, 0x65, b'\n']).unwrap();
        let out = TypeCommand
            .execute(ctx(&interp, &mut session, "DH0:legacy.txt"))
            .await
            .unwrap();
        assert_eq!(out.text, "Grüße\n");
    }

    #[tokio::test]
    async fn test_type_errors() {
        let (interp, mut session, _tmp) = setup();
        let out = interp.execute(&mut session, "type").await.unwrap();
        assert_eq!(out.text, "TYPE: No file specified. Usage: TYPE <file>\n");
        let out = interp.execute(&mut session, "type Prefs").await.unwrap();
        assert_eq!(out.text, "TYPE: 'SYS:Prefs' is a directory\n");
    }
}
