//! Blocking execution of a [`Harness`].

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{debug, warn};

use super::Harness;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::result::HarnessResult;

impl Harness {
    /// Run the command to completion using [`HarnessConfig::from_env`].
    ///
    /// See [`Harness::run_with`].
    pub fn run(&self) -> Result<HarnessResult, HarnessError> {
        self.run_with(&HarnessConfig::from_env())
    }

    /// Run the command to completion and capture its output.
    ///
    /// Blocks until the child exits; there is no timeout. `stdin` is
    /// written in full and then closed. stdout and stderr are buffered
    /// until the child exits.
    ///
    /// In direct mode the command is executed with `argv` as-is. In shell
    /// mode `config.shell` is run with `config.shell_flag` and
    /// [`Harness::commandline`].
    ///
    /// # Errors
    ///
    /// Only failures to start or collect the child are errors. A child
    /// that exits non-zero or is killed by a signal yields `Ok`.
    pub fn run_with(&self, config: &HarnessConfig) -> Result<HarnessResult, HarnessError> {
        let commandline = self.commandline();
        let mut command = self.to_command(config);

        debug!(
            commandline = %commandline,
            in_shell = self.spawn_in_shell,
            current_dir = ?self.spawn_options.working_dir(),
            "spawning harness command"
        );

        let start = Instant::now();
        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| HarnessError::Spawn {
                commandline: commandline.clone(),
                source,
            })?;

        // Feed stdin from a separate thread so a child that fills its
        // stdout pipe before draining stdin cannot deadlock us.
        let writer = child.stdin.take().map(|mut pipe| {
            let payload = self.stdin.clone();
            thread::spawn(move || pipe.write_all(payload.as_bytes()))
        });

        let waited = child.wait_with_output();
        // Join the writer on every path, including a failed wait.
        if let Some(handle) = writer {
            finish_stdin_writer(handle, &commandline);
        }
        let output = waited.map_err(|source| HarnessError::Wait {
            commandline: commandline.clone(),
            source,
        })?;

        let result = HarnessResult::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            output.status,
            start.elapsed(),
        );

        debug!(
            commandline = %commandline,
            exit_code = ?result.exit_status(),
            duration_ms = result.duration().as_millis() as u64,
            "harness command finished"
        );

        Ok(result)
    }

    /// Assemble the [`Command`] for this harness without running it.
    fn to_command(&self, config: &HarnessConfig) -> Command {
        let mut command = if self.spawn_in_shell {
            let mut cmd = Command::new(&config.shell);
            cmd.arg(&config.shell_flag).arg(self.commandline());
            cmd
        } else {
            let mut cmd = Command::new(&self.command);
            cmd.args(&self.argv);
            cmd
        };

        // Options first: clearing the environment must not drop `env`.
        self.spawn_options.apply(&mut command);
        command.envs(&self.env);
        command
    }
}

/// Wait for the stdin writer and log anything other than a closed pipe.
///
/// Returns `true` when the payload was written or the child closed its
/// input early.
fn finish_stdin_writer(handle: JoinHandle<io::Result<()>>, commandline: &str) -> bool {
    match handle.join() {
        Ok(Ok(())) => true,
        // The child is free to exit without reading its input.
        Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => true,
        Ok(Err(e)) => {
            warn!(commandline = %commandline, error = %e, "failed to write stdin");
            false
        }
        Err(_) => {
            warn!(commandline = %commandline, "stdin writer thread panicked");
            false
        }
    }
}
