use std::process::ExitStatus;
use std::time::Duration;

/// The captured outcome of one [`crate::Harness::run`].
///
/// A failing process still produces a `HarnessResult`; callers decide what
/// a non-zero exit means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessResult {
    stdout: String,
    stderr: String,
    status: ExitStatus,
    duration: Duration,
}

impl HarnessResult {
    pub(crate) fn new(
        stdout: String,
        stderr: String,
        status: ExitStatus,
        duration: Duration,
    ) -> Self {
        Self {
            stdout,
            stderr,
            status,
            duration,
        }
    }

    /// Captured standard output.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Captured standard error.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// The raw termination status reported by the OS.
    pub fn status(&self) -> ExitStatus {
        self.status
    }

    /// Wall-clock time between spawn and exit.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The process exit code, or `None` if it was terminated by a signal.
    pub fn exit_status(&self) -> Option<i32> {
        self.status.code()
    }

    /// The signal that terminated the process, if any.
    #[cfg(unix)]
    pub fn signal(&self) -> Option<i32> {
        use std::os::unix::process::ExitStatusExt;
        self.status.signal()
    }

    /// `true` iff the process exited with code 0.
    pub fn has_succeeded(&self) -> bool {
        self.exit_status() == Some(0)
    }

    pub fn has_failed(&self) -> bool {
        !self.has_succeeded()
    }
}
