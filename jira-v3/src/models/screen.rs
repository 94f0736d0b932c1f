use serde::{Deserialize, Serialize};

/// Represents a screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenScheme {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
}

/// Filters for the screen listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenSearchOptions {
  pub ids: Vec<i64>,
  pub query_string: Option<String>,
  pub scope: Vec<String>,
  pub order_by: Option<String>,
}

/// Body of a screen create or update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPayloadScheme {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

/// A field that can be added to a screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailableScreenFieldScheme {
  pub id: String,
  pub name: String,
}
