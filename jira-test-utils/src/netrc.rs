//! Throwaway `.netrc` files for credential tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary home directory holding a `.netrc` with the given content.
///
/// The process environment is left alone; pass [`NetrcGuard::home_dir`] to
/// the code under test instead.
pub struct NetrcGuard {
  temp_dir: TempDir,
  netrc_path: PathBuf,
}

impl NetrcGuard {
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");
    fs::write(&netrc_path, content).expect("Failed to write test .netrc");

    Self { temp_dir, netrc_path }
  }

  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
