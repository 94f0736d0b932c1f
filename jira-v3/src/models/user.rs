use serde::{Deserialize, Serialize};

use super::common::AvatarUrlScheme;

/// Represents a Jira user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserScheme {
  #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub account_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email_address: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub active: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub time_zone: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub locale: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<AvatarUrlScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub groups: Option<UserGroupsScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expand: Option<String>,
}

/// Groups listed on an expanded user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroupsScheme {
  pub size: i64,
  pub items: Vec<UserGroupScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserGroupScheme {
  pub name: String,
  pub group_id: Option<String>,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
}

/// Body of a user creation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayloadScheme {
  pub email_address: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notification: Option<bool>,
  /// Products the user gets access to, e.g. `jira-software`
  #[serde(default)]
  pub products: Vec<String>,
}
