//! Authentication helpers for building a ready-to-use [`JiraClient`].
//!
//! Host, user agent and timeout come from [`JiraConfig`]; credentials come
//! from the environment or `~/.netrc` via [`jira_core::creds`].

use std::path::Path;

use anyhow::{Context, Result};
use directories::BaseDirs;
use jira_core::JiraConfig;
use jira_core::creds::get_jira_credentials_with;
use jira_core::url::host_name;
use tracing::debug;

use crate::client::JiraClient;
use crate::consts::USER_AGENT;

/// Check if Jira credentials are available for the provided host.
pub fn check_jira_credentials(home: &Path, jira_host: &str) -> Result<bool> {
  Ok(credentials_available(home, jira_host, env_var))
}

/// Build an authenticated client for the host in `config`.
pub fn connect(home: &Path, config: &JiraConfig) -> Result<JiraClient> {
  connect_with(home, config, env_var)
}

fn env_var(key: &str) -> Option<String> {
  std::env::var(key).ok()
}

fn credentials_available(home: &Path, jira_host: &str, lookup: impl Fn(&str) -> Option<String>) -> bool {
  get_jira_credentials_with(home, jira_host, lookup).is_ok()
}

fn connect_with(home: &Path, config: &JiraConfig, lookup: impl Fn(&str) -> Option<String>) -> Result<JiraClient> {
  let base_url = config.base_url()?;
  let host = host_name(&base_url)?;
  let credentials = get_jira_credentials_with(home, &host, lookup).context("Failed to get credentials")?;
  debug!(%base_url, username = %credentials.username, "Connecting to Jira");

  let mut builder = JiraClient::builder(&base_url)
    .basic_auth(&credentials.username, &credentials.password)
    .user_agent(config.user_agent.as_deref().unwrap_or(USER_AGENT));
  if let Some(timeout) = config.timeout() {
    builder = builder.timeout(timeout);
  }

  builder.build().context("Failed to create Jira client")
}

/// Build a client from the user's config file, environment and `.netrc`.
pub fn connect_from_env() -> Result<JiraClient> {
  let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
  let config = JiraConfig::load()?;
  connect(base_dirs.home_dir(), &config)
}
