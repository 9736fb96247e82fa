// src/interpreter/script_runner.rs
use std::fmt::Write as _;

use tracing::warn;

use super::Interpreter;
use crate::session::Session;

/// Feeds a stored script through the interpreter one line at a time.
///
/// Blank lines and `;` comments are skipped. A fault on one line is reported
/// in the output and the script carries on with the next line.
pub struct ScriptRunner<'a> {
    interpreter: &'a Interpreter,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(interpreter: &'a Interpreter) -> Self {
        Self { interpreter }
    }

    pub async fn run(&self, session: &mut Session, script: &str) -> String {
        let mut output = String::new();
        for line in script.lines().map(str::trim) {
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            if let Some(rest) = echo_remainder(line) {
                output.push_str(rest);
                output.push('\n');
                continue;
            }

            match self.interpreter.execute(session, line).await {
                Ok(result) => {
                    output.push_str(&result.text);
                    if !result.text.is_empty() && !result.text.ends_with('\n') {
                        output.push('\n');
                    }
                }
                Err(fault) => {
                    warn!(line, error = %fault, "script line failed");
                    let _ = writeln!(output, "Error executing startup command '{}': {}", line, fault);
                }
            }
        }
        output
    }
}

/// Text after `echo` and one separating blank, if `line` is an echo.
fn echo_remainder(line: &str) -> Option<&str> {
    let verb = line.get(..4)?;
    if !verb.eq_ignore_ascii_case("echo") {
        return None;
    }
    let rest = &line[4..];
    let mut chars = rest.chars();
    match chars.next() {
        None => Some(""),
        Some(c) if c.is_whitespace() => Some(chars.as_str()),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;

    fn setup() -> (Interpreter, Session, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let config = ShellConfig::default().with_host_root(tmp.path());
        let session = Session::from_config(&config).unwrap();
        (Interpreter::default(), session, tmp)
    }

    #[test]
    fn test_echo_remainder() {
        assert_eq!(echo_remainder("echo  two  spaces"), Some(" two  spaces"));
        assert_eq!(echo_remainder("ECHO x"), Some("x"));
        assert_eq!(echo_remainder("echo"), Some(""));
        assert_eq!(echo_remainder("echoes x"), None);
        assert_eq!(echo_remainder("dir"), None);
        assert_eq!(echo_remainder("é"), None);
    }

    #[tokio::test]
    async fn test_comments_blanks_echo_and_unknown_verb() {
        let (interp, mut session, _tmp) = setup();
        let script = "; comment\n\necho ok\nbogus verb\n";
        let output = ScriptRunner::new(&interp).run(&mut session, script).await;
        assert_eq!(
            output,
            "ok\nCommand 'bogus' not found. Type 'help' for available commands.\n"
        );
    }

    #[tokio::test]
    async fn test_fault_does_not_stop_script() {
        let (interp, mut session, _tmp) = setup();
        let script = "type DH0:bad\0name\necho after";
        let output = ScriptRunner::new(&interp).run(&mut session, script).await;
        assert!(output.starts_with("Error executing startup command 'type DH0:bad\0name': "));
        assert!(output.ends_with("after\n"));
    }

    #[tokio::test]
    async fn test_navigation_carries_between_lines() {
        let (interp, mut session, _tmp) = setup();
        let script = "cd Prefs\nmakedir Custom\nRAM:";
        let output = ScriptRunner::new(&interp).run(&mut session, script).await;
        assert!(output.contains("MAKEDIR: Directory 'Custom' created"));
        assert_eq!(session.current_dir().to_string(), "RAM:");
        assert!(session
            .namespace()
            .store()
            .is_directory(&crate::path::CanonicalPath::root("SYS:").join("Prefs").join("Custom")));
    }
}
