//! The [`Harness`] value type: construction, derivation and rendering.
//!
//! Execution lives in [`runner`]; field replacement sets live in
//! [`changes`].

pub mod changes;
pub mod runner;

use std::collections::BTreeMap;
use std::fmt;

use crate::argv::{self, Argv};
use crate::error::HarnessError;
use crate::spawn::SpawnOptions;

pub use changes::HarnessChanges;

/// Immutable description of one command invocation.
///
/// Build with [`Harness::new`], [`Harness::build`] or
/// [`Harness::for_commandline`]; derive variants with [`Harness::with`],
/// [`Harness::appending_argv`] and [`Harness::merging_env`]. None of these
/// touch the receiver.
#[derive(Clone, PartialEq, Eq)]
pub struct Harness {
    command: String,
    stdin: String,
    argv: Vec<String>,
    env: BTreeMap<String, String>,
    spawn_options: SpawnOptions,
    spawn_in_shell: bool,
}

impl Harness {
    /// A harness for `command` with no arguments, no stdin, no extra
    /// environment, default spawn options, and direct invocation.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            stdin: String::new(),
            argv: Vec::new(),
            env: BTreeMap::new(),
            spawn_options: SpawnOptions::default(),
            spawn_in_shell: false,
        }
    }

    /// A harness for `command` with `changes` applied over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidArgv`] if `changes` carries a
    /// shell-style argv that cannot be tokenized.
    pub fn build(
        command: impl Into<String>,
        changes: HarnessChanges,
    ) -> Result<Self, HarnessError> {
        Self::new(command).with(changes)
    }

    /// Parse a shell-style command line into a command and its arguments.
    ///
    /// ```
    /// # use cli_harness::Harness;
    /// let harness = Harness::for_commandline("grep -n 'two words'").unwrap();
    /// assert_eq!(harness.command(), "grep");
    /// assert_eq!(harness.argv(), ["-n", "two words"]);
    /// ```
    pub fn for_commandline(cmdline: &str) -> Result<Self, HarnessError> {
        Self::for_commandline_with(cmdline, HarnessChanges::default())
    }

    /// Like [`Harness::for_commandline`], with `changes` applied to the
    /// other fields.
    ///
    /// The arguments always come from `cmdline`; an `argv` in `changes` is
    /// ignored.
    pub fn for_commandline_with(
        cmdline: &str,
        changes: HarnessChanges,
    ) -> Result<Self, HarnessError> {
        let mut words = argv::split(cmdline)?.into_iter();
        let command = words
            .next()
            .ok_or_else(|| HarnessError::EmptyCommandline(cmdline.to_owned()))?;

        let changes = HarnessChanges {
            argv: None,
            ..changes
        };
        let base = Self::new(command).with(changes)?;
        Ok(Self {
            argv: words.collect(),
            ..base
        })
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn stdin(&self) -> &str {
        &self.stdin
    }

    /// The normalized argument vector (never includes the command).
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Environment entries layered over the inherited environment.
    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    pub fn spawn_options(&self) -> &SpawnOptions {
        &self.spawn_options
    }

    pub fn spawn_in_shell(&self) -> bool {
        self.spawn_in_shell
    }

    /// A copy of this harness with the fields named in `changes` replaced.
    ///
    /// ```
    /// # use cli_harness::{Harness, HarnessChanges};
    /// let base = Harness::build("ls", HarnessChanges::new().argv("-l")).unwrap();
    /// let other = base.with(HarnessChanges::new().argv("-a")).unwrap();
    /// assert_eq!(base.argv(), ["-l"]);
    /// assert_eq!(other.argv(), ["-a"]);
    /// ```
    pub fn with(&self, changes: HarnessChanges) -> Result<Self, HarnessError> {
        if changes.is_empty() {
            return Ok(self.clone());
        }

        let argv = match changes.argv {
            Some(argv) => argv.normalize()?,
            None => self.argv.clone(),
        };

        Ok(Self {
            command: self.command.clone(),
            stdin: changes.stdin.unwrap_or_else(|| self.stdin.clone()),
            argv,
            env: changes.env.unwrap_or_else(|| self.env.clone()),
            spawn_options: changes
                .spawn_options
                .unwrap_or_else(|| self.spawn_options.clone()),
            spawn_in_shell: changes.spawn_in_shell.unwrap_or(self.spawn_in_shell),
        })
    }

    /// A copy of this harness with `extra` appended to the arguments.
    ///
    /// `extra` is normalized the same way as at construction.
    pub fn appending_argv(&self, extra: impl Into<Argv>) -> Result<Self, HarnessError> {
        let mut argv = self.argv.clone();
        argv.extend(extra.into().normalize()?);
        self.with(HarnessChanges::new().argv(argv))
    }

    /// A copy of this harness with `extra` overlaid on its environment.
    ///
    /// Keys in `extra` win; all other keys from both sides are kept.
    pub fn merging_env<K, V>(&self, extra: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut env = self.env.clone();
        env.extend(extra.into_iter().map(|(k, v)| (k.into(), v.into())));
        Self {
            env,
            ..self.clone()
        }
    }

    /// The command and its arguments, each shell-quoted.
    ///
    /// Splitting the result with shell rules gives back exactly
    /// `command` followed by `argv`.
    pub fn commandline(&self) -> String {
        shell_words::join(std::iter::once(&self.command).chain(&self.argv))
    }
}

impl fmt::Debug for Harness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Harness").field(&self.commandline()).finish()
    }
}

impl fmt::Display for Harness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.commandline())
    }
}
