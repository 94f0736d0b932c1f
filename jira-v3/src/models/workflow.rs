use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Represents a published workflow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowScheme {
  pub id: Option<WorkflowPublishedIdScheme>,
  pub description: Option<String>,
  pub statuses: Vec<WorkflowStatusScheme>,
  pub is_default: Option<bool>,
  pub created: Option<String>,
  pub updated: Option<String>,
}

/// Identifies a workflow by name and entity id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowPublishedIdScheme {
  pub name: String,
  pub entity_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowStatusScheme {
  pub id: String,
  pub name: String,
}

/// Filters for the workflow search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowSearchOptions {
  pub workflow_name: Vec<String>,
  pub expand: Vec<String>,
  pub query_string: Option<String>,
  pub order_by: Option<String>,
  pub is_active: Option<bool>,
}

/// Body of a workflow creation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPayloadScheme {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub statuses: Vec<WorkflowStatusPayloadScheme>,
  pub transitions: Vec<WorkflowTransitionPayloadScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStatusPayloadScheme {
  pub id: String,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTransitionPayloadScheme {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub from: Vec<String>,
  pub to: String,
  /// `global`, `initial` or `directed`
  #[serde(rename = "type")]
  pub transition_type: String,
}

/// Represents a workflow scheme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowSchemeScheme {
  pub id: i64,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub name: String,
  pub description: Option<String>,
  pub default_workflow: Option<String>,
  pub issue_type_mappings: BTreeMap<String, String>,
  pub draft: Option<bool>,
}

/// Body of a workflow scheme creation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSchemePayloadScheme {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default_workflow: Option<String>,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub issue_type_mappings: BTreeMap<String, String>,
}
