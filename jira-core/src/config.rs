//! # Configuration Management
//!
//! Optional settings for talking to a Jira site, stored as TOML in the
//! platform config directory and overridable through the environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::url::{ENV_JIRA_HOST, ensure_url_scheme};

/// Environment variable overriding the `User-Agent` header.
pub const ENV_JIRA_USER_AGENT: &str = "JIRA_USER_AGENT";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_JIRA_TIMEOUT_SECS: &str = "JIRA_TIMEOUT_SECS";

/// Settings for a Jira site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraConfig {
  pub host: Option<String>,
  pub user_agent: Option<String>,
  pub timeout_secs: Option<u64>,
}

impl JiraConfig {
  /// Default location, `<config dir>/jira/config.toml`
  pub fn config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "jira").context("Failed to determine project directories")?;
    Ok(dirs.config_dir().join("config.toml"))
  }

  /// Load from the default location, then apply environment overrides.
  pub fn load() -> Result<Self> {
    let mut config = Self::load_from(&Self::config_path()?)?;
    config.apply_env(|key| std::env::var(key).ok())?;
    Ok(config)
  }

  /// Load from `path`, or return the defaults if the file does not exist.
  pub fn load_from(path: &Path) -> Result<Self> {
    if !path.exists() {
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read Jira config from {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse Jira config from {}", path.display()))
  }

  pub fn save_to(&self, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(self).context("Failed to serialize Jira config to TOML")?;
    fs::write(path, content).with_context(|| format!("Failed to write Jira config to {}", path.display()))
  }

  /// Overwrite fields whose environment variable is set and non-empty.
  pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
    let var = |key: &str| lookup(key).map(|value| value.trim().to_string()).filter(|value| !value.is_empty());

    if let Some(host) = var(ENV_JIRA_HOST) {
      self.host = Some(host);
    }
    if let Some(user_agent) = var(ENV_JIRA_USER_AGENT) {
      self.user_agent = Some(user_agent);
    }
    if let Some(secs) = var(ENV_JIRA_TIMEOUT_SECS) {
      let secs = secs
        .parse()
        .with_context(|| format!("{ENV_JIRA_TIMEOUT_SECS} must be a whole number of seconds, got '{secs}'"))?;
      self.timeout_secs = Some(secs);
    }

    Ok(())
  }

  /// The configured host with a URL scheme.
  pub fn base_url(&self) -> Result<String> {
    let host = self
      .host
      .as_deref()
      .with_context(|| format!("No Jira host configured. Set {ENV_JIRA_HOST} or `host` in the config file"))?;
    ensure_url_scheme(host)
  }

  pub fn timeout(&self) -> Option<Duration> {
    self.timeout_secs.map(Duration::from_secs)
  }
}
