use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::AdfNode;
use super::issue_type::{IssueTypeScheme, PriorityScheme, StatusScheme};
use super::project::ProjectScheme;
use super::user::UserScheme;

/// Represents a Jira issue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueScheme {
  pub id: Option<String>,
  pub key: Option<String>,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub expand: Option<String>,
  pub fields: Option<IssueFieldsScheme>,
  pub transitions: Option<Vec<IssueTransitionScheme>>,
}

/// Represents Jira issue fields.
///
/// Fields without a dedicated member, custom fields included, are kept in
/// `custom_fields` under their field id (`customfield_10010`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueFieldsScheme {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<AdfNode>,
  #[serde(rename = "issuetype", skip_serializing_if = "Option::is_none")]
  pub issue_type: Option<IssueTypeScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project: Option<ProjectScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<StatusScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub priority: Option<PriorityScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<UserScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reporter: Option<UserScheme>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub labels: Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parent: Option<Box<IssueScheme>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated: Option<String>,
  #[serde(flatten)]
  pub custom_fields: Map<String, Value>,
}

/// Body of an issue create or edit request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuePayloadScheme {
  pub fields: IssueFieldsScheme,
  /// Field operations (`add`, `set`, `remove`) keyed by field id
  #[serde(skip_serializing_if = "Map::is_empty")]
  pub update: Map<String, Value>,
}

/// Returned after an issue is created
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueResponseScheme {
  pub id: String,
  pub key: String,
  #[serde(rename = "self")]
  pub self_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueBulkPayloadScheme {
  pub issue_updates: Vec<IssuePayloadScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueBulkResponseScheme {
  pub issues: Vec<IssueResponseScheme>,
  pub errors: Vec<Value>,
}

/// Represents a Jira transition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueTransitionScheme {
  pub id: String,
  pub name: String,
  pub to: Option<StatusScheme>,
  pub has_screen: Option<bool>,
  pub is_global: Option<bool>,
  pub is_initial: Option<bool>,
  pub is_available: Option<bool>,
  pub is_conditional: Option<bool>,
}

/// Represents a list of Jira transitions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueTransitionsScheme {
  pub expand: Option<String>,
  pub transitions: Vec<IssueTransitionScheme>,
}

/// Represents a transition request payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// Represents a transition ID for the request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionId {
  pub id: String,
}

/// Represents an issue comment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueCommentScheme {
  pub id: Option<String>,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub author: Option<UserScheme>,
  pub update_author: Option<UserScheme>,
  pub body: Option<AdfNode>,
  pub rendered_body: Option<String>,
  pub created: Option<String>,
  pub updated: Option<String>,
  pub visibility: Option<CommentVisibilityScheme>,
  pub jsd_public: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueCommentPageScheme {
  pub start_at: i64,
  pub max_results: i64,
  pub total: i64,
  pub comments: Vec<IssueCommentScheme>,
}

/// Restricts a comment to a group or project role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentVisibilityScheme {
  /// `group` or `role`
  #[serde(rename = "type")]
  pub visibility_type: String,
  pub value: String,
}

/// Body of a comment creation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentPayloadScheme {
  pub body: AdfNode,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub visibility: Option<CommentVisibilityScheme>,
}

/// Result of a JQL search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueSearchScheme {
  pub expand: Option<String>,
  pub start_at: i64,
  pub max_results: i64,
  pub total: i64,
  pub issues: Vec<IssueScheme>,
  pub warning_messages: Vec<String>,
}

/// Body of a JQL search request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayloadScheme {
  pub jql: String,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub fields: Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub expand: Vec<String>,
  pub start_at: i32,
  pub max_results: i32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub validate_query: Option<String>,
}
