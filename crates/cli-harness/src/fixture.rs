//! TOML fixture files describing a [`Harness`].
//!
//! A fixture maps directly onto the harness fields:
//!
//! ```toml
//! command = "cat"
//! argv = "-n -"            # or ["-n", "-"]
//! stdin = "meow"
//! spawn_in_shell = false
//!
//! [env]
//! LANG = "C"
//!
//! [spawn_options]
//! current_dir = "/usr"
//! ```
//!
//! Only `command` is required.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::argv::Argv;
use crate::error::HarnessError;
use crate::harness::{Harness, HarnessChanges};
use crate::spawn::SpawnOptions;

/// On-disk shape of a harness fixture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarnessToml {
    /// Executable name or path.
    pub command: String,
    #[serde(default)]
    pub stdin: String,
    /// Arguments as a list or as one shell-style string.
    #[serde(default)]
    pub argv: Argv,
    #[serde(default)]
    pub spawn_in_shell: bool,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default)]
    pub spawn_options: SpawnOptions,
}

impl HarnessToml {
    /// Convert into a [`Harness`], normalizing `argv`.
    pub fn into_harness(self) -> Result<Harness, HarnessError> {
        Harness::build(
            self.command,
            HarnessChanges::new()
                .stdin(self.stdin)
                .argv(self.argv)
                .env(self.env)
                .spawn_options(self.spawn_options)
                .spawn_in_shell(self.spawn_in_shell),
        )
    }
}

impl From<&Harness> for HarnessToml {
    fn from(harness: &Harness) -> Self {
        Self {
            command: harness.command().to_owned(),
            stdin: harness.stdin().to_owned(),
            argv: Argv::List(harness.argv().to_vec()),
            spawn_in_shell: harness.spawn_in_shell(),
            env: harness.env().clone(),
            spawn_options: harness.spawn_options().clone(),
        }
    }
}

impl Harness {
    /// Parse a harness from fixture TOML.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Fixture`] for malformed TOML or missing `command`,
    /// [`HarnessError::InvalidArgv`] for an untokenizable argv string.
    pub fn from_toml(content: &str) -> Result<Self, HarnessError> {
        let parsed: HarnessToml = toml::from_str(content)?;
        parsed.into_harness()
    }
}

/// Read and parse a fixture file.
pub fn load_fixture(path: &Path) -> Result<Harness> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read harness fixture {}", path.display()))?;
    Harness::from_toml(&content)
        .with_context(|| format!("invalid harness fixture {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_fixture_uses_defaults() {
        let harness = Harness::from_toml(r#"command = "whatever""#).unwrap();
        assert_eq!(harness, Harness::new("whatever"));
    }

    #[test]
    fn full_fixture() {
        let harness = Harness::from_toml(
            r#"
command = "cat"
argv = "-n 'my file'"
stdin = "meow"
spawn_in_shell = true

[env]
LANG = "C"

[spawn_options]
current_dir = "/usr"
clear_env = true
"#,
        )
        .unwrap();

        assert_eq!(harness.command(), "cat");
        assert_eq!(harness.argv(), ["-n", "my file"]);
        assert_eq!(harness.stdin(), "meow");
        assert!(harness.spawn_in_shell());
        assert_eq!(harness.env().get("LANG").map(String::as_str), Some("C"));
        assert_eq!(
            harness.spawn_options(),
            &SpawnOptions::new().current_dir("/usr").clear_env(true)
        );
    }

    #[test]
    fn missing_command_is_a_fixture_error() {
        let err = Harness::from_toml(r#"argv = ["-n"]"#).unwrap_err();
        assert!(matches!(err, HarnessError::Fixture(_)), "got {err:?}");
    }

    #[test]
    fn bad_argv_string_is_rejected() {
        let err = Harness::from_toml("command = \"cat\"\nargv = \"'oops\"").unwrap_err();
        assert!(matches!(err, HarnessError::InvalidArgv { .. }), "got {err:?}");
    }

    #[test]
    fn serializes_back_to_an_equivalent_fixture() {
        let harness = Harness::for_commandline("grep -n 'two words'")
            .unwrap()
            .merging_env([("LANG", "C")]);
        let text = toml::to_string(&HarnessToml::from(&harness)).unwrap();
        assert_eq!(Harness::from_toml(&text).unwrap(), harness);
    }

    #[test]
    fn load_fixture_reports_path() {
        let err = load_fixture(Path::new("/nonexistent/cli-harness/fixture.toml")).unwrap_err();
        assert!(
            format!("{err:#}").contains("/nonexistent/cli-harness/fixture.toml"),
            "got: {err:#}"
        );
    }
}
