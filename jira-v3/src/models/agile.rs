//! Jira Software boards and sprints.

use serde::{Deserialize, Serialize};

use super::issue::IssueScheme;

/// Represents an agile board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardScheme {
  pub id: i64,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  pub name: String,
  /// `scrum`, `kanban` or `simple`
  #[serde(rename = "type")]
  pub board_type: String,
  pub location: Option<BoardLocationScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardLocationScheme {
  pub project_id: Option<i64>,
  pub display_name: Option<String>,
  pub project_name: Option<String>,
  pub project_key: Option<String>,
  pub project_type_key: Option<String>,
  pub name: Option<String>,
}

/// Filters for the board listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBoardsOptions {
  pub board_type: Option<String>,
  pub board_name: Option<String>,
  pub project_key_or_id: Option<String>,
  pub account_id_location: Option<String>,
  pub filter_id: Option<i64>,
  pub order_by: Option<String>,
  pub expand: Vec<String>,
}

/// Filters for issue listings on a board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueOptionScheme {
  pub jql: Option<String>,
  pub validate_query: bool,
  pub fields: Vec<String>,
  pub expand: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardIssuePageScheme {
  pub expand: Option<String>,
  pub start_at: i64,
  pub max_results: i64,
  pub total: i64,
  pub issues: Vec<IssueScheme>,
}

/// Represents a sprint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SprintScheme {
  pub id: i64,
  #[serde(rename = "self")]
  pub self_url: Option<String>,
  /// `future`, `active` or `closed`
  pub state: String,
  pub name: String,
  pub start_date: Option<String>,
  pub end_date: Option<String>,
  pub complete_date: Option<String>,
  pub origin_board_id: Option<i64>,
  pub goal: Option<String>,
}
