//! # Response Wrapper
//!
//! Raw response data kept alongside every decoded result so callers can
//! inspect what the site actually returned.

use std::collections::HashMap;
use std::fmt;

use reqwest::Method;
use serde::Deserialize;

/// Status code, resolved endpoint, method and raw body of a response
#[derive(Clone, PartialEq, Eq)]
pub struct ResponseScheme {
  pub code: u16,
  pub endpoint: String,
  pub method: Method,
  pub bytes: Vec<u8>,
}

impl ResponseScheme {
  /// Whether the status code is in the 200-299 range
  pub const fn is_success(&self) -> bool {
    self.code >= 200 && self.code < 300
  }

  /// The raw body as text, replacing invalid UTF-8 sequences
  pub fn text(&self) -> String {
    String::from_utf8_lossy(&self.bytes).into_owned()
  }

  /// Decode Jira's error envelope from the body, when it has one.
  ///
  /// Failure responses are not guaranteed to carry JSON, so this returns
  /// `None` instead of an error when the body does not match.
  pub fn api_error(&self) -> Option<ApiErrorScheme> {
    if self.bytes.is_empty() {
      return None;
    }
    serde_json::from_slice::<ApiErrorScheme>(&self.bytes)
      .ok()
      .filter(|error| !error.error_messages.is_empty() || !error.errors.is_empty())
  }
}

impl fmt::Debug for ResponseScheme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ResponseScheme")
      .field("code", &self.code)
      .field("endpoint", &self.endpoint)
      .field("method", &self.method)
      .field("bytes", &self.bytes.len())
      .finish()
  }
}

/// Error envelope returned by Jira on rejected requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorScheme {
  #[serde(default)]
  pub error_messages: Vec<String>,
  #[serde(default)]
  pub errors: HashMap<String, String>,
}

impl fmt::Display for ApiErrorScheme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut parts: Vec<String> = self.error_messages.clone();
    let mut fields: Vec<_> = self.errors.iter().collect();
    fields.sort();
    parts.extend(fields.into_iter().map(|(field, message)| format!("{field}: {message}")));
    write!(f, "{}", parts.join("; "))
  }
}
