use std::collections::BTreeMap;

use crate::argv::Argv;
use crate::spawn::SpawnOptions;

/// A set of field replacements for [`super::Harness::with`] and
/// [`super::Harness::build`].
///
/// Unset fields keep the receiver's value (or the default when building).
/// Set fields replace the old value wholesale: `argv` here replaces the
/// whole argument vector, and `env` replaces the whole map. Use
/// [`super::Harness::appending_argv`] or [`super::Harness::merging_env`]
/// to extend instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessChanges {
    pub(crate) stdin: Option<String>,
    pub(crate) argv: Option<Argv>,
    pub(crate) env: Option<BTreeMap<String, String>>,
    pub(crate) spawn_options: Option<SpawnOptions>,
    pub(crate) spawn_in_shell: Option<bool>,
}

impl HarnessChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stdin payload.
    pub fn stdin(mut self, stdin: impl Into<String>) -> Self {
        self.stdin = Some(stdin.into());
        self
    }

    /// Replace the argument vector.
    pub fn argv(mut self, argv: impl Into<Argv>) -> Self {
        self.argv = Some(argv.into());
        self
    }

    /// Replace the environment map.
    pub fn env<K, V>(mut self, env: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(
            env.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Replace the spawn options.
    pub fn spawn_options(mut self, options: SpawnOptions) -> Self {
        self.spawn_options = Some(options);
        self
    }

    /// Choose between shell and direct invocation.
    pub fn spawn_in_shell(mut self, in_shell: bool) -> Self {
        self.spawn_in_shell = Some(in_shell);
        self
    }

    /// `true` when no field would be replaced.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_changes_nothing() {
        assert!(HarnessChanges::new().is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let changes = HarnessChanges::new()
            .stdin("meow")
            .argv("-n -")
            .env([("A", "1")])
            .spawn_options(SpawnOptions::new().current_dir("/tmp"))
            .spawn_in_shell(true);

        assert!(!changes.is_empty());
        assert_eq!(changes.stdin.as_deref(), Some("meow"));
        assert_eq!(changes.argv, Some(Argv::from("-n -")));
        assert_eq!(
            changes.env,
            Some(BTreeMap::from([("A".to_owned(), "1".to_owned())]))
        );
        assert_eq!(changes.spawn_in_shell, Some(true));
    }
}
