//! Session State
//!
//! Everything one shell session owns: its namespace, current directory and
//! command history. Sessions share nothing, so each can run on its own task.

use std::time::SystemTime;

use crate::config::{ConfigError, ShellConfig};
use crate::error::ShellError;
use crate::fs::Namespace;
use crate::path::{normalize_device_name, CanonicalPath};

/// Deepest `execute` nesting before a script is refused.
pub const MAX_SCRIPT_DEPTH: usize = 8;

#[derive(Debug, Clone)]
pub struct Session {
    namespace: Namespace,
    current_dir: CanonicalPath,
    home: CanonicalPath,
    history: Vec<String>,
    started: SystemTime,
    startup_scripts: Vec<String>,
    pub(crate) script_depth: usize,
}

impl Session {
    /// Start in `home`, which must be an existing virtual directory.
    pub fn new(namespace: Namespace, home: &str) -> Result<Self, ShellError> {
        let home = match home.find(':') {
            Some(idx) => namespace.canonicalize(home, &CanonicalPath::root(&home[..=idx]))?,
            None => namespace.canonicalize(&normalize_device_name(home), &CanonicalPath::root(home))?,
        };
        if !namespace.store().is_directory(&home) {
            return Err(ShellError::invalid(format!(
                "Home directory {} must be a virtual directory",
                home
            )));
        }
        Ok(Self {
            namespace,
            current_dir: home.clone(),
            home,
            history: Vec::new(),
            started: SystemTime::now(),
            startup_scripts: Vec::new(),
            script_depth: 0,
        })
    }

    pub fn from_config(config: &ShellConfig) -> Result<Self, ConfigError> {
        let namespace = config.build_namespace()?;
        let mut session = Self::new(namespace, &config.home)?;
        session.startup_scripts = config.startup_scripts.clone();
        Ok(session)
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn namespace_mut(&mut self) -> &mut Namespace {
        &mut self.namespace
    }

    pub fn current_dir(&self) -> &CanonicalPath {
        &self.current_dir
    }

    pub fn home(&self) -> &CanonicalPath {
        &self.home
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn started(&self) -> SystemTime {
        self.started
    }

    pub fn startup_scripts(&self) -> &[String] {
        &self.startup_scripts
    }

    /// Only the interpreter moves the current directory, after checking
    /// the target is a directory.
    pub(crate) fn set_current_dir(&mut self, path: CanonicalPath) {
        self.current_dir = path;
    }

    pub(crate) fn record(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_starts_at_sys() {
        let session = Session::from_config(&ShellConfig::default()).unwrap();
        assert_eq!(session.current_dir().to_string(), "SYS:");
        assert_eq!(session.home(), session.current_dir());
        assert!(session.history().is_empty());
        assert_eq!(session.startup_scripts().len(), 4);
    }

    #[test]
    fn test_home_must_be_virtual_directory() {
        let config = ShellConfig {
            home: "DH0:".to_string(),
            ..ShellConfig::default()
        };
        assert!(Session::from_config(&config).is_err());

        let config = ShellConfig {
            home: "SYS:Nowhere".to_string(),
            ..ShellConfig::default()
        };
        assert!(Session::from_config(&config).is_err());
    }
}
