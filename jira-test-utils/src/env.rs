//! Environment variable overrides for tests
//!
//! Process environment is global, so tests using these guards must not run
//! concurrently with other tests reading the same variable.

use std::env;
use std::ffi::OsStr;

/// Remembers the value of one environment variable and restores it on drop
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
}

impl EnvVarGuard {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  pub fn set(&self, value: impl AsRef<OsStr>) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(value) => unsafe {
        env::set_var(&self.name, value);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}
