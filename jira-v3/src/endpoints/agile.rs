//! # Jira Software Endpoints
//!
//! Boards and sprints live under a separate API root (`rest/agile/1.0`) but
//! share the site, credentials and HTTP client of the parent [`JiraClient`].

use reqwest::Method;
use tracing::instrument;

use crate::client::JiraClient;
use crate::consts::AGILE_V1;
use crate::error::{Result, require_id};
use crate::models::{BoardIssuePageScheme, BoardScheme, GetBoardsOptions, IssueOptionScheme, Page, SprintScheme};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Jira Software sub-client, borrowed from [`JiraClient::agile`]
#[derive(Clone, Copy)]
pub struct AgileClient<'a> {
  client: &'a JiraClient,
}

pub struct BoardService<'a> {
  client: &'a JiraClient,
}

pub struct SprintService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn agile(&self) -> AgileClient<'_> {
    AgileClient { client: self }
  }
}

impl<'a> AgileClient<'a> {
  pub const fn boards(&self) -> BoardService<'a> {
    BoardService { client: self.client }
  }

  pub const fn sprints(&self) -> SprintService<'a> {
    SprintService { client: self.client }
  }
}

impl BoardService<'_> {
  pub async fn get(&self, board_id: i64) -> Result<(BoardScheme, ResponseScheme)> {
    require_id(board_id, "board id")?;

    let endpoint = format!("{AGILE_V1}/board/{board_id}");
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn gets(
    &self,
    options: &GetBoardsOptions,
    start_at: i32,
    max_results: i32,
  ) -> Result<(Page<BoardScheme>, ResponseScheme)> {
    let mut query = Query::new();
    query
      .page(start_at, max_results)
      .add_opt("type", options.board_type.as_deref())
      .add_opt("name", options.board_name.as_deref())
      .add_opt("projectKeyOrId", options.project_key_or_id.as_deref())
      .add_opt("accountIdLocation", options.account_id_location.as_deref())
      .add_opt("filterId", options.filter_id)
      .add_opt("orderBy", options.order_by.as_deref())
      .add_csv("expand", &options.expand);

    let endpoint = query.endpoint(&format!("{AGILE_V1}/board"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  /// Issues on a board, optionally narrowed by JQL
  pub async fn issues(
    &self,
    board_id: i64,
    options: &IssueOptionScheme,
    start_at: i32,
    max_results: i32,
  ) -> Result<(BoardIssuePageScheme, ResponseScheme)> {
    require_id(board_id, "board id")?;

    let mut query = Query::new();
    query
      .page(start_at, max_results)
      .add_opt("jql", options.jql.as_deref())
      .add_bool("validateQuery", options.validate_query)
      .add_csv("fields", &options.fields)
      .add_csv("expand", &options.expand);

    let endpoint = query.endpoint(&format!("{AGILE_V1}/board/{board_id}/issue"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }
}

impl SprintService<'_> {
  pub async fn get(&self, sprint_id: i64) -> Result<(SprintScheme, ResponseScheme)> {
    require_id(sprint_id, "sprint id")?;

    let endpoint = format!("{AGILE_V1}/sprint/{sprint_id}");
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }
}
