use serde::{Deserialize, Serialize};

/// Represents a Jira issue type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueTypeScheme {
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub icon_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subtask: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub entity_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hierarchy_level: Option<i32>,
}

/// Body of an issue type create or update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueTypePayloadScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  /// `standard` or `subtask`; only honoured on creation
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub issue_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hierarchy_level: Option<i32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_id: Option<i64>,
}

/// Represents a workflow status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusScheme {
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub icon_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status_category: Option<StatusCategoryScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusCategoryScheme {
  pub id: i64,
  pub key: String,
  pub name: String,
  pub color_name: Option<String>,
}

/// Represents an issue priority
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriorityScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub icon_url: Option<String>,
}
