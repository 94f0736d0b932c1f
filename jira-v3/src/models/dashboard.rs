use serde::{Deserialize, Serialize};

use super::group::GroupScheme;
use super::project::ProjectScheme;
use super::user::UserScheme;

/// Represents a Jira dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardScheme {
  pub id: String,
  pub name: String,
  pub description: Option<String>,
  pub is_favourite: Option<bool>,
  pub owner: Option<UserScheme>,
  pub popularity: Option<i64>,
  pub rank: Option<i64>,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub view: Option<String>,
  pub share_permissions: Vec<SharePermissionScheme>,
  pub edit_permissions: Vec<SharePermissionScheme>,
}

/// Page returned by the legacy dashboard listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageOfDashboardsScheme {
  pub start_at: i64,
  pub max_results: i64,
  pub total: i64,
  pub prev: Option<String>,
  pub next: Option<String>,
  pub dashboards: Vec<DashboardScheme>,
}

/// Who a dashboard or filter is shared with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePermissionScheme {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  /// `user`, `group`, `project`, `projectRole`, `global`, `loggedin` or `project-unknown`
  #[serde(rename = "type")]
  pub share_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project: Option<ProjectScheme>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub role: Option<ShareRoleScheme>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group: Option<GroupScheme>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user: Option<UserScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRoleScheme {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

/// Body of a dashboard create, update or copy request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayloadScheme {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub share_permissions: Vec<SharePermissionScheme>,
  #[serde(default)]
  pub edit_permissions: Vec<SharePermissionScheme>,
}

/// Filters for the dashboard search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSearchOptionsScheme {
  pub dashboard_name: Option<String>,
  pub owner_account_id: Option<String>,
  pub group_permission_name: Option<String>,
  pub group_id: Option<String>,
  pub project_id: Option<i64>,
  pub order_by: Option<String>,
  pub status: Option<String>,
  pub expand: Vec<String>,
}
