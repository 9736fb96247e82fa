// src/commands/makedir/mod.rs
use async_trait::async_trait;

use crate::commands::args::missing;
use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct MakedirCommand;

#[async_trait]
impl Command for MakedirCommand {
    fn name(&self) -> &'static str {
        "makedir"
    }

    fn summary(&self) -> &'static str {
        "Create directories"
    }

    fn usage(&self) -> &'static str {
        "MAKEDIR <directory>"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let name = ctx.raw_args.trim().to_string();
        if name.is_empty() {
            return Err(missing("directory name", self.usage()));
        }
        let path = ctx
            .session
            .namespace()
            .canonicalize(&name, ctx.session.current_dir())?;
        ctx.session.namespace_mut().make_directory(&path).await?;
        Ok(CommandOutput::text(format!("MAKEDIR: Directory '{}' created\n", name)))
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::setup;

    #[tokio::test]
    async fn test_makedir_appears_once_sorted() {
        let (interp, mut session, _tmp) = setup();
        let out = interp.execute(&mut session, "makedir Extras").await.unwrap();
        assert_eq!(out.text, "MAKEDIR: Directory 'Extras' created\n");
        let out = interp.execute(&mut session, "dir").await.unwrap();
        let rows: Vec<&str> = out
            .text
            .lines()
            .filter(|l| l.contains("(dir)"))
            .map(|l| l.split_whitespace().next().unwrap_or_default())
            .collect();
        assert_eq!(rows, vec!["C", "DEVS", "Extras", "Fonts", "L", "Prefs", "S", "Tools", "WBStartup"]);
    }

    #[tokio::test]
    async fn test_makedir_existing_is_reported() {
        let (interp, mut session, _tmp) = setup();
        let out = interp.execute(&mut session, "makedir S").await.unwrap();
        assert_eq!(out.text, "MAKEDIR: 'SYS:S' already exists\n");
    }

    #[tokio::test]
    async fn test_makedir_on_host() {
        let (interp, mut session, tmp) = setup();
        interp.execute(&mut session, "makedir DH0:Games").await.unwrap();
        assert!(tmp.path().join("Games").is_dir());
    }

    #[tokio::test]
    async fn test_makedir_without_name() {
        let (interp, mut session, _tmp) = setup();
        let out = interp.execute(&mut session, "makedir").await.unwrap();
        assert_eq!(
            out.text,
            "MAKEDIR: No directory name specified. Usage: MAKEDIR <directory>\n"
        );
    }
}
