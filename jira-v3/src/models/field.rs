use serde::{Deserialize, Serialize};

/// Represents a system or custom issue field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueFieldScheme {
  pub id: String,
  pub key: Option<String>,
  pub name: String,
  pub description: Option<String>,
  pub custom: Option<bool>,
  pub orderable: Option<bool>,
  pub navigable: Option<bool>,
  pub searchable: Option<bool>,
  pub clause_names: Vec<String>,
  pub schema: Option<FieldSchemaScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSchemaScheme {
  #[serde(rename = "type")]
  pub field_type: String,
  pub items: Option<String>,
  pub system: Option<String>,
  pub custom: Option<String>,
  pub custom_id: Option<i64>,
}

/// Body of a custom field creation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldPayloadScheme {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  /// e.g. `com.atlassian.jira.plugin.system.customfieldtypes:select`
  #[serde(rename = "type")]
  pub field_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub searcher_key: Option<String>,
}

/// Filters for the field search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSearchOptionsScheme {
  /// `custom` and/or `system`
  pub types: Vec<String>,
  pub ids: Vec<String>,
  pub query: Option<String>,
  pub order_by: Option<String>,
  pub expand: Vec<String>,
}
