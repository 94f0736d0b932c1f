//! # Jira Project Endpoints

use reqwest::Method;
use tracing::instrument;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require, require_segment};
use crate::models::{
  Page, ProjectCreatedScheme, ProjectPayloadScheme, ProjectScheme, ProjectSearchOptionsScheme, ProjectStatusPageScheme,
};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Project operations, borrowed from [`JiraClient::projects`]
pub struct ProjectService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn projects(&self) -> ProjectService<'_> {
    ProjectService { client: self }
  }
}

impl ProjectService<'_> {
  pub async fn create(&self, payload: &ProjectPayloadScheme) -> Result<(ProjectCreatedScheme, ResponseScheme)> {
    require(payload.key.as_deref().unwrap_or_default(), "project key")?;
    require(payload.name.as_deref().unwrap_or_default(), "project name")?;

    let body = encode_payload(payload)?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/project"), Some(body))?;
    self.client.call_json(request).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn search(
    &self,
    options: &ProjectSearchOptionsScheme,
    start_at: i32,
    max_results: i32,
  ) -> Result<(Page<ProjectScheme>, ResponseScheme)> {
    let mut query = Query::new();
    query
      .page(start_at, max_results)
      .add_opt("orderBy", options.order_by.as_deref())
      .add_all("id", &options.ids)
      .add_all("keys", &options.keys)
      .add_opt("query", options.query.as_deref())
      .add_csv("typeKey", &options.type_keys)
      .add_opt("categoryId", options.category_id)
      .add_opt("action", options.action.as_deref())
      .add_all("status", &options.status)
      .add_csv("expand", &options.expand);

    let endpoint = query.endpoint(&format!("{API_V3}/project/search"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn get(&self, project_key_or_id: &str, expand: &[&str]) -> Result<(ProjectScheme, ResponseScheme)> {
    require_segment(project_key_or_id, "project key or id")?;

    let mut query = Query::new();
    query.add_csv("expand", expand);

    let endpoint = query.endpoint(&format!("{API_V3}/project/{project_key_or_id}"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn update(
    &self,
    project_key_or_id: &str,
    payload: &ProjectPayloadScheme,
  ) -> Result<(ProjectScheme, ResponseScheme)> {
    require_segment(project_key_or_id, "project key or id")?;

    let body = encode_payload(payload)?;
    let endpoint = format!("{API_V3}/project/{project_key_or_id}");
    let request = self.client.new_request(Method::PUT, &endpoint, Some(body))?;
    self.client.call_json(request).await
  }

  /// Delete a project; with `enable_undo` it goes to the recycle bin instead
  pub async fn delete(&self, project_key_or_id: &str, enable_undo: bool) -> Result<ResponseScheme> {
    require_segment(project_key_or_id, "project key or id")?;

    let mut query = Query::new();
    query.add("enableUndo", enable_undo);

    let endpoint = query.endpoint(&format!("{API_V3}/project/{project_key_or_id}"));
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }

  pub async fn archive(&self, project_key_or_id: &str) -> Result<ResponseScheme> {
    require_segment(project_key_or_id, "project key or id")?;

    let endpoint = format!("{API_V3}/project/{project_key_or_id}/archive");
    let request = self.client.new_request(Method::POST, &endpoint, None)?;
    self.client.call(request).await
  }

  /// Restore an archived or deleted project
  pub async fn restore(&self, project_key_or_id: &str) -> Result<(ProjectScheme, ResponseScheme)> {
    require_segment(project_key_or_id, "project key or id")?;

    let endpoint = format!("{API_V3}/project/{project_key_or_id}/restore");
    let request = self.client.new_request(Method::POST, &endpoint, None)?;
    self.client.call_json(request).await
  }

  /// Valid statuses for each issue type of the project
  pub async fn statuses(&self, project_key_or_id: &str) -> Result<(Vec<ProjectStatusPageScheme>, ResponseScheme)> {
    require_segment(project_key_or_id, "project key or id")?;

    let endpoint = format!("{API_V3}/project/{project_key_or_id}/statuses");
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }
}
