use std::io;

use thiserror::Error;

/// Errors raised while building or running a [`crate::Harness`].
///
/// A process that runs and exits non-zero is not an error; see
/// [`crate::HarnessResult::has_failed`].
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A shell-style argv string could not be tokenized.
    #[error("invalid argv {value:?}: {source}")]
    InvalidArgv {
        value: String,
        #[source]
        source: shell_words::ParseError,
    },

    /// A command line held no command word.
    #[error("command line has no command: {0:?}")]
    EmptyCommandline(String),

    /// The process could not be started.
    #[error("failed to spawn `{commandline}`")]
    Spawn {
        commandline: String,
        #[source]
        source: io::Error,
    },

    /// The process started but its output or exit status could not be
    /// collected.
    #[error("failed to wait on `{commandline}`")]
    Wait {
        commandline: String,
        #[source]
        source: io::Error,
    },

    #[error("fixture parse error: {0}")]
    Fixture(#[from] toml::de::Error),
}

impl HarnessError {
    /// The underlying I/O error for spawn and wait failures.
    ///
    /// Lets callers match on the platform error kind (e.g.
    /// [`io::ErrorKind::NotFound`] for a missing executable).
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Spawn { source, .. } | Self::Wait { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argv_names_the_value() {
        let source = shell_words::split("'open").unwrap_err();
        let err = HarnessError::InvalidArgv {
            value: "'open".to_owned(),
            source,
        };
        assert!(err.to_string().contains("\"'open\""), "got: {err}");
    }

    #[test]
    fn io_error_only_for_process_failures() {
        let err = HarnessError::Spawn {
            commandline: "nope".to_owned(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(
            err.io_error().map(io::Error::kind),
            Some(io::ErrorKind::NotFound)
        );

        let err = HarnessError::EmptyCommandline(String::new());
        assert!(err.io_error().is_none());
    }
}
