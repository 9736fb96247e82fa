// src/commands/pattern/mod.rs
use async_trait::async_trait;
use glob::{MatchOptions, Pattern};

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::error::ShellError;

pub struct PatternCommand;

const USAGE: &str = "\
Usage: PATTERN <pattern>
Examples:
  PATTERN #?        (matches all files)
  PATTERN ~pattern  (matches files starting with pattern)
  PATTERN *         (matches all files)
  PATTERN ?.info    (? matches one character)
";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Name filter for one pattern argument.
#[derive(Debug)]
pub enum NameMatcher {
    All,
    Prefix(String),
    Glob(Pattern),
    Literal(String),
}

impl NameMatcher {
    pub fn parse(pattern: &str) -> Self {
        if pattern == "*" || pattern == "#?" {
            return Self::All;
        }
        if let Some(prefix) = pattern.strip_prefix('~') {
            return Self::Prefix(prefix.to_lowercase());
        }
        match Pattern::new(&pattern.replace("#?", "*")) {
            Ok(glob) => Self::Glob(glob),
            Err(_) => Self::Literal(pattern.to_lowercase()),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Prefix(prefix) => name.to_lowercase().starts_with(prefix),
            Self::Glob(glob) => glob.matches_with(name, MATCH_OPTIONS),
            Self::Literal(literal) => name.to_lowercase() == *literal,
        }
    }
}

#[async_trait]
impl Command for PatternCommand {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn summary(&self) -> &'static str {
        "Pattern matching utility"
    }

    fn usage(&self) -> &'static str {
        "PATTERN <pattern>"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<CommandOutput, ShellError> {
        let Some(pattern) = ctx.arg(0) else {
            return Ok(CommandOutput::text(USAGE));
        };
        let cwd = ctx.session.current_dir();
        let matcher = NameMatcher::parse(pattern);
        let entries = ctx.session.namespace().list(cwd).await?;

        // A device root already ends in ':'.
        let colon = if cwd.is_root() { "" } else { ":" };
        let mut stdout = format!("Files matching pattern \"{}\" in {}{}\n", pattern, cwd, colon);
        let mut found = false;
        for entry in entries.iter().filter(|e| matcher.matches(&e.name)) {
            found = true;
            if entry.is_directory() {
                stdout.push_str(&format!("  {}/ (drwx)\n", entry.name));
            } else {
                stdout.push_str(&format!("  {} (rwed)\n", entry.name));
            }
        }
        if !found {
            stdout.push_str("  No files match the pattern.\n");
        }
        Ok(CommandOutput::text(stdout))
    }
}
