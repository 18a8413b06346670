//! Immutable harness for running command-line programs from tests.
//!
//! A [`Harness`] describes one invocation: the command, its argument
//! vector, a stdin payload, extra environment variables, typed
//! [`SpawnOptions`], and whether to go through a shell. Harnesses never
//! change once built; [`Harness::with`], [`Harness::appending_argv`] and
//! [`Harness::merging_env`] return new values.
//!
//! ```text
//! Harness::for_commandline("cat -")
//!     |
//!     | .with(HarnessChanges::new().stdin("meow"))
//!     v
//! Harness --run()--> std::process::Command --> HarnessResult
//!                                               { stdout, stderr, status }
//! ```
//!
//! A non-zero exit is data on the [`HarnessResult`], not an error. Only a
//! failure to start or collect the process surfaces as [`HarnessError`].

pub mod argv;
pub mod config;
pub mod error;
pub mod fixture;
pub mod harness;
pub mod result;
pub mod spawn;

pub use argv::Argv;
pub use config::HarnessConfig;
pub use error::HarnessError;
pub use harness::{Harness, HarnessChanges};
pub use result::HarnessResult;
pub use spawn::SpawnOptions;
