//! Shell
//!
//! Main entry point for one shell session: ties together the configuration,
//! the session state and the interpreter.

use tracing::info;

use crate::commands::CommandOutput;
use crate::complete::suggest_paths;
use crate::config::{ConfigError, ShellConfig};
use crate::error::ShellError;
use crate::fs::decode_text;
use crate::interpreter::{Interpreter, ScriptRunner};
use crate::path::CanonicalPath;
use crate::session::Session;

pub struct Shell {
    interpreter: Interpreter,
    session: Session,
}

impl Shell {
    /// Create a session from `config` with the builtin verbs.
    pub fn new(config: &ShellConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_session(Session::from_config(config)?))
    }

    pub fn from_session(session: Session) -> Self {
        Self { interpreter: Interpreter::default(), session }
    }

    /// Run one command line.
    pub async fn execute(&mut self, line: &str) -> Result<CommandOutput, ShellError> {
        self.interpreter.execute(&mut self.session, line).await
    }

    /// Run a script text line by line. Faults are reported in the output.
    pub async fn run_script(&mut self, script: &str) -> String {
        ScriptRunner::new(&self.interpreter).run(&mut self.session, script).await
    }

    /// Run the first startup script found in the configured locations.
    pub async fn startup_sequence(&mut self) -> String {
        let mut output = String::from("Executing startup sequence...\n");
        let candidates = self.session.startup_scripts().to_vec();
        for candidate in candidates {
            let namespace = self.session.namespace();
            let Ok(path) = namespace.canonicalize(&candidate, self.session.current_dir()) else {
                continue;
            };
            if !namespace.is_file(&path).await.unwrap_or(false) {
                continue;
            }
            let Ok(bytes) = namespace.read_file(&path).await else {
                continue;
            };
            info!(script = %path, "running startup script");
            output.push_str(&format!("Executing {}...\n", candidate));
            output.push_str(&self.run_script(&decode_text(&bytes)).await);
            break;
        }
        output
    }

    pub async fn suggest_paths(&self, partial: &str) -> Vec<String> {
        suggest_paths(self.session.namespace(), partial, self.session.current_dir()).await
    }

    /// `SYS:Prefs> `
    pub fn prompt(&self) -> String {
        format!("{}> ", self.session.current_dir())
    }

    pub fn current_dir(&self) -> &CanonicalPath {
        self.session.current_dir()
    }

    pub fn history(&self) -> &[String] {
        self.session.history()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    fn shell() -> (Shell, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let config = ShellConfig::default().with_host_root(tmp.path());
        (Shell::new(&config).unwrap(), tmp)
    }

    #[tokio::test]
    async fn test_prompt_follows_cwd() {
        let (mut shell, _tmp) = shell();
        assert_eq!(shell.prompt(), "SYS:> ");
        shell.execute("cd Prefs").await.unwrap();
        assert_eq!(shell.prompt(), "SYS:Prefs> ");
    }

    #[tokio::test]
    async fn test_default_startup_sequence_is_comments_only() {
        let (mut shell, _tmp) = shell();
        assert_eq!(
            shell.startup_sequence().await,
            "Executing startup sequence...\nExecuting SYS:S/Startup-Sequence...\n"
        );
        assert!(shell.history().is_empty());
    }

    #[tokio::test]
    async fn test_startup_sequence_falls_through_to_later_location() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = ShellConfig::default().with_host_root(tmp.path());
        config.files.retain(|f| f.path != "SYS:S/Startup-Sequence");
        config.files.push(FileConfig {
            path: "SYS:S/startup-sequence".to_string(),
            content: "echo booted\ncd RAM:\n".to_string(),
        });
        let mut shell = Shell::new(&config).unwrap();
        let out = shell.startup_sequence().await;
        assert_eq!(
            out,
            "Executing startup sequence...\nExecuting SYS:S/startup-sequence...\nbooted\n"
        );
        assert_eq!(shell.current_dir().to_string(), "RAM:");
    }

    #[tokio::test]
    async fn test_startup_sequence_without_scripts() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = ShellConfig::default().with_host_root(tmp.path());
        config.startup_scripts.clear();
        let mut shell = Shell::new(&config).unwrap();
        assert_eq!(shell.startup_sequence().await, "Executing startup sequence...\n");
    }
}
