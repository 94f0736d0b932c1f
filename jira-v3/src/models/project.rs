use serde::{Deserialize, Serialize};

use super::common::AvatarUrlScheme;
use super::issue_type::{IssueTypeScheme, StatusScheme};
use super::user::UserScheme;

/// Represents a Jira project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectScheme {
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lead: Option<UserScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project_type_key: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub style: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub simplified: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_private: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub archived: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<AvatarUrlScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project_category: Option<ProjectCategoryScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issue_types: Option<Vec<IssueTypeScheme>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expand: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectCategoryScheme {
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub id: Option<String>,
  pub name: Option<String>,
  pub description: Option<String>,
}

/// Body of a project create or update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPayloadScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lead_account_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  /// `PROJECT_LEAD` or `UNASSIGNED`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub permission_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub notification_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issue_security_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub workflow_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issue_type_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issue_type_screen_scheme: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field_configuration_scheme: Option<i64>,
  /// `software`, `service_desk` or `business`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project_type_key: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project_template_key: Option<String>,
}

/// Returned after a project is created
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCreatedScheme {
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub id: i64,
  pub key: String,
}

/// Filters for the project search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSearchOptionsScheme {
  pub order_by: Option<String>,
  pub ids: Vec<i64>,
  pub keys: Vec<String>,
  pub query: Option<String>,
  pub type_keys: Vec<String>,
  pub category_id: Option<i64>,
  pub action: Option<String>,
  pub status: Vec<String>,
  pub expand: Vec<String>,
}

/// Statuses available to one issue type of a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectStatusPageScheme {
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub id: String,
  pub name: String,
  pub subtask: bool,
  pub statuses: Vec<StatusScheme>,
}
