use serde::{Deserialize, Serialize};

/// Represents a permission scheme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionSchemeScheme {
  pub id: i64,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub name: String,
  pub description: Option<String>,
  pub expand: Option<String>,
  pub permissions: Vec<PermissionGrantScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionSchemePageScheme {
  pub permission_schemes: Vec<PermissionSchemeScheme>,
}

/// Body of a permission scheme create or update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSchemePayloadScheme {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub permissions: Vec<PermissionGrantPayloadScheme>,
}

/// A single permission granted to a holder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionGrantScheme {
  pub id: i64,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub holder: Option<PermissionGrantHolderScheme>,
  pub permission: String,
}

/// Who receives a permission: `group`, `projectRole`, `user`, `anyone`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGrantHolderScheme {
  #[serde(rename = "type")]
  pub holder_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub parameter: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expand: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrantPayloadScheme {
  pub holder: PermissionGrantHolderScheme,
  pub permission: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionGrantsScheme {
  pub permissions: Vec<PermissionGrantScheme>,
  pub expand: Option<String>,
}
