//! Typed spawn options applied to the child process.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

/// Platform knobs forwarded to [`std::process::Command`].
///
/// The harness applies these without interpreting them: a `current_dir`
/// that does not exist surfaces as a spawn error from the OS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnOptions {
    /// Working directory for the child. Inherits the caller's when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_dir: Option<PathBuf>,
    /// Start from an empty environment instead of inheriting the caller's.
    /// Entries from [`crate::Harness::env`] are still applied.
    pub clear_env: bool,
    /// Unix only: process group for the child. `0` puts the child in a new
    /// group with itself as leader. Ignored on other platforms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_group: Option<i32>,
}

impl SpawnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Do not inherit the ambient environment.
    pub fn clear_env(mut self, clear: bool) -> Self {
        self.clear_env = clear;
        self
    }

    /// Set the process group (Unix).
    pub fn process_group(mut self, pgroup: i32) -> Self {
        self.process_group = Some(pgroup);
        self
    }

    /// The working directory override, if any.
    pub fn working_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    pub(crate) fn apply(&self, command: &mut Command) {
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        if self.clear_env {
            command.env_clear();
        }
        if let Some(pgroup) = self.process_group {
            set_process_group(command, pgroup);
        }
    }
}

#[cfg(unix)]
fn set_process_group(command: &mut Command, pgroup: i32) {
    use std::os::unix::process::CommandExt;
    command.process_group(pgroup);
}

#[cfg(not(unix))]
fn set_process_group(_command: &mut Command, _pgroup: i32) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_overrides() {
        let opts = SpawnOptions::default();
        assert!(opts.current_dir.is_none());
        assert!(!opts.clear_env);
        assert!(opts.process_group.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let opts = SpawnOptions::new()
            .current_dir("/usr")
            .clear_env(true)
            .process_group(0);

        assert_eq!(opts.working_dir(), Some(Path::new("/usr")));
        assert!(opts.clear_env);
        assert_eq!(opts.process_group, Some(0));
    }

    #[test]
    fn apply_sets_current_dir() {
        let mut cmd = Command::new("pwd");
        SpawnOptions::new().current_dir("/usr").apply(&mut cmd);
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/usr")));
    }

    #[test]
    fn deserializes_partial_table() {
        let opts: SpawnOptions = toml::from_str(r#"current_dir = "/tmp""#).unwrap();
        assert_eq!(opts, SpawnOptions::new().current_dir("/tmp"));
    }
}
