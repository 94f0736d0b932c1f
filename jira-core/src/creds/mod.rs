//! # Credential Management
//!
//! Jira Cloud authenticates with an account email and an API token. They are
//! looked up from the environment first, then from `~/.netrc`.

use std::fmt;
use std::path::Path;

use anyhow::{Result, bail};

pub mod netrc;

use netrc::{get_netrc_path, normalize_host, parse_netrc_file};

/// Environment variable holding the Jira account email.
pub const ENV_JIRA_USER: &str = "JIRA_USER";
/// Environment variable holding the Jira API token.
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";

/// Machine name tried when a site has no `.netrc` entry of its own.
const ATLASSIAN_MACHINE: &str = "atlassian.net";

/// Username and API token for a Jira site
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Get Jira credentials for `jira_host`.
///
/// `JIRA_USER` and `JIRA_API_TOKEN` win when both are set. Otherwise the
/// `.netrc` in `home` is searched for the host, then for `atlassian.net`.
pub fn get_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  get_jira_credentials_with(home, jira_host, |key| std::env::var(key).ok())
}

/// Like [`get_jira_credentials`], reading variables through `lookup` instead
/// of the process environment.
pub fn get_jira_credentials_with(
  home: &Path,
  jira_host: &str,
  lookup: impl Fn(&str) -> Option<String>,
) -> Result<Credentials> {
  let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
  if let (Some(username), Some(password)) = (non_empty(ENV_JIRA_USER), non_empty(ENV_JIRA_API_TOKEN)) {
    return Ok(Credentials { username, password });
  }

  let host = normalize_host(jira_host);
  let netrc_path = get_netrc_path(home);
  if netrc_path.exists() {
    for machine in [host.as_str(), ATLASSIAN_MACHINE] {
      if let Some(creds) = parse_netrc_file(&netrc_path, machine)? {
        return Ok(creds);
      }
    }
  }

  bail!(
    "No Jira credentials found. Set {ENV_JIRA_USER} and {ENV_JIRA_API_TOKEN}, or add a .netrc entry for '{host}' \
     or '{ATLASSIAN_MACHINE}'"
  )
}
