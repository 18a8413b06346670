//! Shared test utilities for cli-harness integration tests.
//!
//! - [`init_tracing`] installs a fmt subscriber once per test binary,
//!   filtered by `RUST_LOG` (silent by default).
//! - [`scratch_dir`] and [`write_script`] give tests a throwaway
//!   directory and small executable helper scripts inside it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber.
///
/// Safe to call from every test; only the first call has an effect.
/// Output goes through the libtest capture so it only shows for failures.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Create an empty temporary directory, removed when the guard drops.
pub fn scratch_dir() -> TempDir {
    TempDir::new().expect("failed to create scratch dir")
}

/// Write an executable `/bin/sh` script named `name` into `dir`.
///
/// `body` is placed after the shebang line. Returns the script path.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))
        .unwrap_or_else(|e| panic!("failed to write script {}: {e}", path.display()));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .unwrap_or_else(|e| panic!("failed to chmod script {}: {e}", path.display()));
    }

    path
}

/// A path inside `dir` that is guaranteed not to exist.
pub fn missing_path(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    assert!(!path.exists(), "{} unexpectedly exists", path.display());
    path
}
