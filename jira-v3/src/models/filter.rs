use serde::{Deserialize, Serialize};

use super::dashboard::SharePermissionScheme;
use super::user::UserScheme;

/// Represents a saved JQL filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterScheme {
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub id: Option<String>,
  pub name: String,
  pub description: Option<String>,
  pub owner: Option<UserScheme>,
  pub jql: Option<String>,
  pub view_url: Option<String>,
  pub search_url: Option<String>,
  pub favourite: Option<bool>,
  pub favourite_count: Option<i64>,
  pub share_permissions: Vec<SharePermissionScheme>,
  pub edit_permissions: Vec<SharePermissionScheme>,
  pub expand: Option<String>,
}

/// Body of a filter create or update request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPayloadScheme {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub jql: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub favourite: Option<bool>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub share_permissions: Vec<SharePermissionScheme>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub edit_permissions: Vec<SharePermissionScheme>,
}

/// Filters for the filter search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSearchOptionScheme {
  pub name: Option<String>,
  pub account_id: Option<String>,
  pub group: Option<String>,
  pub project_id: Option<i64>,
  pub ids: Vec<i64>,
  pub order_by: Option<String>,
  pub expand: Vec<String>,
}

/// Default share scope applied to new filters: `GLOBAL`, `AUTHENTICATED` or `PRIVATE`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareScopeScheme {
  pub scope: String,
}

/// Body of a share permission added to a filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionFilterPayloadScheme {
  #[serde(rename = "type")]
  pub share_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_id: Option<String>,
  #[serde(rename = "groupname", default, skip_serializing_if = "Option::is_none")]
  pub group_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_role_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
  /// 1 for view, 3 for view and edit
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rights: Option<i32>,
}
