//! HOME directory isolation for testing

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::env::EnvVarGuard;

/// Points `HOME` and `XDG_CONFIG_HOME` at a temporary directory so code that
/// resolves `~/.netrc` or the config directory never touches the real ones.
pub struct HomeEnvTestGuard {
  pub temp_dir: TempDir,
  _home: EnvVarGuard,
  _config_home: EnvVarGuard,
}

impl Default for HomeEnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl HomeEnvTestGuard {
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_dir = temp_dir.path().join(".config");
    fs::create_dir_all(&config_dir).expect("Failed to create config directory");

    let home = EnvVarGuard::new("HOME");
    home.set(temp_dir.path());
    let config_home = EnvVarGuard::new("XDG_CONFIG_HOME");
    config_home.set(&config_dir);

    Self {
      temp_dir,
      _home: home,
      _config_home: config_home,
    }
  }

  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }

  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join(".config")
  }

  /// Write `content` to a path relative to the temporary HOME
  pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
    let path = self.temp_dir.path().join(relative_path);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
  }
}
