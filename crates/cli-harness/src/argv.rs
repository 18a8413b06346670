//! Argument vectors given either as a list or as a shell-style string.

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// An argument vector as supplied by a caller.
///
/// [`Argv::List`] is taken verbatim. [`Argv::Shell`] is split into words
/// with shell quoting rules, so `"--a 'b c'"` becomes `["--a", "b c"]`.
/// Either form is stored as a plain `Vec<String>` once normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Argv {
    List(Vec<String>),
    Shell(String),
}

impl Argv {
    /// Resolve into an ordered list of arguments.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidArgv`] when a shell-style string has
    /// an unterminated quote or a trailing escape.
    pub fn normalize(self) -> Result<Vec<String>, HarnessError> {
        match self {
            Self::List(args) => Ok(args),
            Self::Shell(line) => split(&line),
        }
    }
}

impl Default for Argv {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// Split a shell-style string into words.
pub(crate) fn split(line: &str) -> Result<Vec<String>, HarnessError> {
    shell_words::split(line).map_err(|source| HarnessError::InvalidArgv {
        value: line.to_owned(),
        source,
    })
}

impl From<&str> for Argv {
    fn from(line: &str) -> Self {
        Self::Shell(line.to_owned())
    }
}

impl From<String> for Argv {
    fn from(line: String) -> Self {
        Self::Shell(line)
    }
}

impl From<Vec<String>> for Argv {
    fn from(args: Vec<String>) -> Self {
        Self::List(args)
    }
}

impl From<Vec<&str>> for Argv {
    fn from(args: Vec<&str>) -> Self {
        Self::List(args.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Argv {
    fn from(args: &[&str]) -> Self {
        Self::List(args.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Argv {
    fn from(args: [&str; N]) -> Self {
        Self::List(args.iter().map(|s| (*s).to_owned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_left_alone() {
        let argv = Argv::from(["--a", "b c", "", "$HOME"]);
        assert_eq!(
            argv.normalize().unwrap(),
            vec!["--a", "b c", "", "$HOME"]
        );
    }

    #[test]
    fn shell_string_splits_on_whitespace() {
        assert_eq!(Argv::from("--a b").normalize().unwrap(), vec!["--a", "b"]);
        assert_eq!(
            Argv::from("  spaced\t  out\n").normalize().unwrap(),
            vec!["spaced", "out"]
        );
    }

    #[test]
    fn shell_string_respects_quotes() {
        let argv = Argv::from(r#"--name 'two words' "double quoted" back\ slash"#);
        assert_eq!(
            argv.normalize().unwrap(),
            vec!["--name", "two words", "double quoted", "back slash"]
        );
    }

    #[test]
    fn empty_shell_string_is_empty_argv() {
        assert!(Argv::from("").normalize().unwrap().is_empty());
        assert!(Argv::default().normalize().unwrap().is_empty());
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        let err = Argv::from("--a 'b").normalize().unwrap_err();
        match err {
            HarnessError::InvalidArgv { value, .. } => assert_eq!(value, "--a 'b"),
            other => panic!("expected InvalidArgv, got {other:?}"),
        }
    }

    #[test]
    fn deserializes_from_either_form() {
        #[derive(Deserialize)]
        struct Wrapper {
            argv: Argv,
        }

        let list: Wrapper = toml::from_str(r#"argv = ["-n", "-"]"#).unwrap();
        assert_eq!(list.argv, Argv::from(["-n", "-"]));

        let shell: Wrapper = toml::from_str(r#"argv = "-n -""#).unwrap();
        assert_eq!(shell.argv, Argv::from("-n -"));
    }
}
