use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the interpreter used in shell mode.
pub const SHELL_ENV_VAR: &str = "CLI_HARNESS_SHELL";

/// Settings for how shell-mode harnesses are executed.
///
/// Reads from the `CLI_HARNESS_SHELL` environment variable, falling back to
/// `/bin/sh -c`. [`crate::Harness::commandline`] is quoted with POSIX rules,
/// so the interpreter must be a POSIX-compatible shell; `cmd.exe` is not
/// supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Interpreter that receives the rendered command line.
    pub shell: PathBuf,
    /// Flag telling the interpreter to run the next argument as a command.
    pub shell_flag: String,
}

impl HarnessConfig {
    pub const DEFAULT_SHELL: &str = "/bin/sh";
    pub const DEFAULT_SHELL_FLAG: &str = "-c";

    /// Build a config from the environment.
    ///
    /// Priority: `CLI_HARNESS_SHELL` env var, then [`Self::DEFAULT_SHELL`].
    /// An empty value is treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let shell = get(SHELL_ENV_VAR)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_SHELL.to_owned());
        Self::new(shell, Self::DEFAULT_SHELL_FLAG)
    }

    /// Build a config with an explicit interpreter (useful for tests).
    pub fn new(shell: impl Into<PathBuf>, shell_flag: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            shell_flag: shell_flag.into(),
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
