// src/commands/test_support.rs
use super::CommandContext;
use crate::config::ShellConfig;
use crate::interpreter::Interpreter;
use crate::session::Session;

/// Default layout with `DH0:` on a fresh temporary directory.
pub fn setup() -> (Interpreter, Session, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = ShellConfig::default().with_host_root(tmp.path());
    let session = Session::from_config(&config).unwrap();
    (Interpreter::default(), session, tmp)
}

pub fn ctx<'a>(
    interpreter: &'a Interpreter,
    session: &'a mut Session,
    raw_args: &str,
) -> CommandContext<'a> {
    CommandContext {
        args: raw_args.split_whitespace().map(String::from).collect(),
        raw_args: raw_args.to_string(),
        session,
        interpreter,
    }
}
