//! # Client Errors
//!
//! Every failure surfaced by the client falls into one of three groups:
//! local validation performed before any request is sent, transport failures
//! reported by `reqwest`, and rejections from the remote site carrying the
//! received status code.

use thiserror::Error;

use crate::response::ResponseScheme;

/// Errors returned by [`JiraClient`](crate::JiraClient) and its services
#[derive(Debug, Error)]
pub enum JiraError {
  /// A required identifier or payload field was empty
  #[error("no {0} set")]
  Validation(&'static str),

  /// An identifier that would not stay a single path segment
  #[error("invalid {name} '{value}'")]
  Identifier { name: &'static str, value: String },

  /// The endpoint could not be resolved against the site URL
  #[error("invalid endpoint '{endpoint}': {source}")]
  Url {
    endpoint: String,
    #[source]
    source: url::ParseError,
  },

  /// Connection, DNS, TLS or timeout failure
  #[error("request failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// The request payload could not be serialized
  #[error("failed to encode request payload: {0}")]
  Encode(#[source] serde_json::Error),

  /// The response body did not match the expected structure
  #[error("failed to decode response from {} {}: {source}", .response.method, .response.endpoint)]
  Decode {
    response: Box<ResponseScheme>,
    #[source]
    source: serde_json::Error,
  },

  /// The site answered with a status outside of 200-299
  #[error("request failed with status code {}", .0.code)]
  Status(Box<ResponseScheme>),
}

impl JiraError {
  /// The response wrapper, when the failure happened after a response arrived
  pub fn response(&self) -> Option<&ResponseScheme> {
    match self {
      Self::Decode { response, .. } | Self::Status(response) => Some(response),
      _ => None,
    }
  }

  /// The status code received from the site, if any
  pub fn status_code(&self) -> Option<u16> {
    self.response().map(|response| response.code)
  }

  /// Whether the error was raised before any request left the process
  pub const fn is_validation(&self) -> bool {
    matches!(self, Self::Validation(_) | Self::Identifier { .. })
  }
}

/// Result alias used throughout the client
pub type Result<T, E = JiraError> = std::result::Result<T, E>;

/// Reject empty string identifiers
pub(crate) fn require(value: &str, name: &'static str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(JiraError::Validation(name));
  }
  Ok(())
}

/// Reject identifiers placed into a URL path that are blank or would escape
/// their segment: separators, query and fragment markers, percent escapes and
/// dot segments.
pub(crate) fn require_segment(value: &str, name: &'static str) -> Result<()> {
  require(value, name)?;
  if matches!(value.trim(), "." | "..") || value.contains(['/', '\\', '?', '#', '%']) {
    return Err(JiraError::Identifier {
      name,
      value: value.to_string(),
    });
  }
  Ok(())
}

/// Reject numeric identifiers that are zero or negative
pub(crate) fn require_id(value: i64, name: &'static str) -> Result<()> {
  if value <= 0 {
    return Err(JiraError::Validation(name));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use reqwest::Method;

  use super::*;

  #[test]
  fn test_require_rejects_blank_values() {
    assert!(matches!(require("", "issue key"), Err(JiraError::Validation("issue key"))));
    assert!(matches!(require("   ", "issue key"), Err(JiraError::Validation("issue key"))));
    assert!(require("KP-1", "issue key").is_ok());
  }

  #[test]
  fn test_require_segment_rejects_path_escapes() {
    for value in ["../project/KP", "..", ".", "KP-1?fields=secret#", "KP-1#top", "a/b", "a\\b", "%2e%2e"] {
      let error = require_segment(value, "issue key").unwrap_err();
      assert!(matches!(&error, JiraError::Identifier { name: "issue key", .. }), "{value}");
      assert!(error.is_validation());
    }

    assert!(matches!(require_segment(" ", "issue key"), Err(JiraError::Validation("issue key"))));
    assert!(require_segment("KP-1", "issue key").is_ok());
    assert!(require_segment("customfield_10050", "field id").is_ok());
  }

  #[test]
  fn test_require_id_rejects_zero_and_negative() {
    assert!(matches!(require_id(0, "filter id"), Err(JiraError::Validation("filter id"))));
    assert!(matches!(require_id(-5, "filter id"), Err(JiraError::Validation("filter id"))));
    assert!(require_id(10_000, "filter id").is_ok());
  }

  #[test]
  fn test_status_error_exposes_response() {
    let error = JiraError::Status(Box::new(ResponseScheme {
      code: 404,
      endpoint: "https://example.atlassian.net/rest/api/3/issue/KP-1".to_string(),
      method: Method::GET,
      bytes: br#"{"errorMessages":["Issue does not exist"],"errors":{}}"#.to_vec(),
    }));

    assert_eq!(error.status_code(), Some(404));
    assert!(error.to_string().contains("404"));
    assert!(!error.is_validation());
  }

  #[test]
  fn test_validation_message() {
    let error = JiraError::Validation("dashboard id");
    assert_eq!(error.to_string(), "no dashboard id set");
    assert!(error.response().is_none());
  }
}
