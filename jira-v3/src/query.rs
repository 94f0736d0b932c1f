//! # Query Strings
//!
//! Order-stable query string construction. Keys are emitted in ascending
//! order and repeated keys keep their insertion order, so the same inputs
//! always produce the same endpoint.

use std::collections::BTreeMap;
use std::fmt::Display;

use url::form_urlencoded;

/// Accumulates query parameters for an endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
  params: BTreeMap<&'static str, Vec<String>>,
}

impl Query {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a value under `key`
  pub fn add(&mut self, key: &'static str, value: impl Display) -> &mut Self {
    self.params.entry(key).or_default().push(value.to_string());
    self
  }

  /// Append a value only when present
  pub fn add_opt<T: Display>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
    if let Some(value) = value {
      self.add(key, value);
    }
    self
  }

  /// Append a string only when it is not empty
  pub fn add_str(&mut self, key: &'static str, value: &str) -> &mut Self {
    if !value.is_empty() {
      self.add(key, value);
    }
    self
  }

  /// Append `true`/`false` only when set
  pub fn add_bool(&mut self, key: &'static str, value: bool) -> &mut Self {
    if value {
      self.add(key, "true");
    }
    self
  }

  /// Join the values with commas under a single key, skipped when empty
  pub fn add_csv<S: AsRef<str>>(&mut self, key: &'static str, values: &[S]) -> &mut Self {
    if !values.is_empty() {
      let joined = values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
      self.add(key, joined);
    }
    self
  }

  /// Repeat the key once per value
  pub fn add_all<T: Display>(&mut self, key: &'static str, values: &[T]) -> &mut Self {
    for value in values {
      self.add(key, value);
    }
    self
  }

  /// Append the `startAt`/`maxResults` pair used by paginated endpoints
  pub fn page(&mut self, start_at: i32, max_results: i32) -> &mut Self {
    self.add("startAt", start_at).add("maxResults", max_results)
  }

  pub fn is_empty(&self) -> bool {
    self.params.is_empty()
  }

  /// Form-urlencode the parameters, keys sorted
  pub fn encode(&self) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in &self.params {
      for value in values {
        serializer.append_pair(key, value);
      }
    }
    serializer.finish()
  }

  /// Attach the encoded parameters to `path`, leaving it bare when empty
  pub fn endpoint(&self, path: &str) -> String {
    if self.is_empty() {
      path.to_string()
    } else {
      format!("{path}?{}", self.encode())
    }
  }
}
