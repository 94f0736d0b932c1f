use serde::{Deserialize, Serialize};

/// Represents a Jira group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupScheme {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group_id: Option<String>,
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
}

/// Entry of the bulk group listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupDetailScheme {
  pub name: String,
  pub group_id: Option<String>,
}

/// Filters for the bulk group listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupBulkOptionsScheme {
  pub group_ids: Vec<String>,
  pub group_names: Vec<String>,
}

/// Body of a group creation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPayloadScheme {
  pub name: String,
}
