//! Jira host parsing.
//!
//! Hosts come from users in many shapes (`company.atlassian.net`,
//! `https://company.atlassian.net/`, `https:/company.atlassian.net`); these
//! helpers turn them into a base URL the client can resolve endpoints against.

use anyhow::{Context, Result};
use url::{Position, Url};

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Read `$JIRA_HOST` and return it with a URL scheme.
///
/// Returns an error if the variable is unset or empty.
pub fn resolve_jira_base_url() -> Result<String> {
  resolve_jira_base_url_with(|key| std::env::var(key).ok())
}

pub(crate) fn resolve_jira_base_url_with(lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
  let host = lookup(ENV_JIRA_HOST)
    .filter(|host| !host.trim().is_empty())
    .with_context(|| format!("Jira host environment variable '{ENV_JIRA_HOST}' not set"))?;
  ensure_url_scheme(&host)
}

/// Ensure a host has a URL scheme, assuming `https://` when it has none.
///
/// A malformed `http:` or `https:` prefix missing its slashes is replaced by
/// `https://`. A lone trailing `/` path is dropped.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let host = input.trim();
  if host.is_empty() {
    anyhow::bail!("Host cannot be empty");
  }

  let url = match Url::parse(host) {
    Ok(url) if url.has_host() && host.contains("://") => url,
    _ => parse_as_https(host)?,
  };

  Ok(render(&url))
}

/// Host name of a base URL, as used for `.netrc` lookups
pub fn host_name(base_url: &str) -> Result<String> {
  let url = Url::parse(&ensure_url_scheme(base_url)?).with_context(|| format!("Invalid Jira host '{base_url}'"))?;
  url
    .host_str()
    .map(str::to_string)
    .with_context(|| format!("Jira host '{base_url}' has no host name"))
}

fn parse_as_https(host: &str) -> Result<Url> {
  let lowered = host.to_ascii_lowercase();
  let rest = ["https:", "http:"]
    .iter()
    .find(|prefix| lowered.starts_with(*prefix))
    .map_or(host, |prefix| &host[prefix.len()..])
    .trim_start_matches('/');

  Url::parse(&format!("https://{rest}"))
    .with_context(|| format!("Failed to parse URL: '{host}'. Ensure it has a valid scheme."))
}

fn render(url: &Url) -> String {
  let path = match url.path() {
    "/" => "",
    path => path,
  };
  format!("{}{}{}", &url[..Position::BeforePath], path, &url[Position::AfterPath..])
}
