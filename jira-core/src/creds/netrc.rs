//! Reading Jira credentials out of a `.netrc` file.
//!
//! Entries may be written on a single line (`machine host login user password
//! token`) or spread across several lines. `default` entries and `macdef`
//! bodies are understood so that files shared with other tools still parse.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file inside `home`.
///
/// ```
/// use std::path::Path;
/// use jira_core::creds::netrc::get_netrc_path;
///
/// assert_eq!(get_netrc_path(Path::new("/home/user")), Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Finds the `login`/`password` pair for `target_machine`.
///
/// Returns `Ok(None)` when the file has no entry for the machine or the entry
/// is missing either value. A `default` entry only applies when no explicit
/// machine matched.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  Ok(find_entry(&content, target_machine))
}

/// Strips the scheme and trailing slashes from a Jira host.
///
/// ```
/// use jira_core::creds::netrc::normalize_host;
///
/// assert_eq!(normalize_host("https://company.atlassian.net/"), "company.atlassian.net");
/// assert_eq!(normalize_host("jira.example.com"), "jira.example.com");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  let host = raw_host.trim();
  let host = host
    .strip_prefix("https://")
    .or_else(|| host.strip_prefix("http://"))
    .unwrap_or(host);
  host.trim_end_matches('/').to_string()
}

#[derive(Default)]
struct Entry {
  login: Option<String>,
  password: Option<String>,
}

impl Entry {
  fn into_credentials(self) -> Option<Credentials> {
    match (self.login, self.password) {
      (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
        Some(Credentials { username, password })
      }
      _ => None,
    }
  }
}

enum Scope {
  Skipped,
  Target,
  Default,
}

fn find_entry(content: &str, target_machine: &str) -> Option<Credentials> {
  let mut target = None::<Entry>;
  let mut fallback = None::<Entry>;
  let mut scope = Scope::Skipped;

  let mut lines = content.lines();
  while let Some(line) = lines.next() {
    let mut tokens = line.split_whitespace();
    while let Some(token) = tokens.next() {
      match token {
        "machine" => {
          scope = match tokens.next() {
            Some(machine) if machine == target_machine && target.is_none() => {
              target = Some(Entry::default());
              Scope::Target
            }
            _ => Scope::Skipped,
          };
        }
        "default" => {
          scope = if fallback.is_none() {
            fallback = Some(Entry::default());
            Scope::Default
          } else {
            Scope::Skipped
          };
        }
        "login" | "password" | "account" => {
          let value = tokens.next().map(str::to_string);
          let entry = match scope {
            Scope::Target => target.as_mut(),
            Scope::Default => fallback.as_mut(),
            Scope::Skipped => None,
          };
          if let Some(entry) = entry {
            match token {
              "login" => entry.login = value,
              "password" => entry.password = value,
              _ => {}
            }
          }
        }
        "macdef" => {
          // A macro body runs until the next blank line.
          for body in lines.by_ref() {
            if body.trim().is_empty() {
              break;
            }
          }
          scope = Scope::Skipped;
          break;
        }
        _ => {}
      }
    }
  }

  target
    .and_then(Entry::into_credentials)
    .or_else(|| fallback.and_then(Entry::into_credentials))
}
