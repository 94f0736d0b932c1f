//! # Jira Dashboard Endpoints
//!
//! Listing, searching, creating, copying, updating and deleting dashboards.

use reqwest::Method;
use tracing::instrument;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require, require_segment};
use crate::models::{
  DashboardPayloadScheme, DashboardScheme, DashboardSearchOptionsScheme, Page, PageOfDashboardsScheme,
};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Dashboard operations, borrowed from [`JiraClient::dashboards`]
pub struct DashboardService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn dashboards(&self) -> DashboardService<'_> {
    DashboardService { client: self }
  }
}

impl DashboardService<'_> {
  /// List the dashboards visible to the user, optionally only `favourite` or `my` ones
  #[instrument(skip(self), level = "debug")]
  pub async fn gets(
    &self,
    start_at: i32,
    max_results: i32,
    filter: Option<&str>,
  ) -> Result<(PageOfDashboardsScheme, ResponseScheme)> {
    let mut query = Query::new();
    query.page(start_at, max_results).add_opt("filter", filter);

    let endpoint = query.endpoint(&format!("{API_V3}/dashboard"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  /// Search dashboards by name, owner, group or project
  #[instrument(skip(self), level = "debug")]
  pub async fn search(
    &self,
    options: &DashboardSearchOptionsScheme,
    start_at: i32,
    max_results: i32,
  ) -> Result<(Page<DashboardScheme>, ResponseScheme)> {
    let mut query = Query::new();
    query
      .page(start_at, max_results)
      .add_opt("dashboardName", options.dashboard_name.as_deref())
      .add_opt("accountId", options.owner_account_id.as_deref())
      .add_opt("groupname", options.group_permission_name.as_deref())
      .add_opt("groupId", options.group_id.as_deref())
      .add_opt("projectId", options.project_id)
      .add_opt("orderBy", options.order_by.as_deref())
      .add_opt("status", options.status.as_deref())
      .add_csv("expand", &options.expand);

    let endpoint = query.endpoint(&format!("{API_V3}/dashboard/search"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  /// Get a dashboard by id
  pub async fn get(&self, dashboard_id: &str) -> Result<(DashboardScheme, ResponseScheme)> {
    require_segment(dashboard_id, "dashboard id")?;

    let endpoint = format!("{API_V3}/dashboard/{dashboard_id}");
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn create(&self, payload: &DashboardPayloadScheme) -> Result<(DashboardScheme, ResponseScheme)> {
    require(&payload.name, "dashboard name")?;

    let body = encode_payload(payload)?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/dashboard"), Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn update(
    &self,
    dashboard_id: &str,
    payload: &DashboardPayloadScheme,
  ) -> Result<(DashboardScheme, ResponseScheme)> {
    require_segment(dashboard_id, "dashboard id")?;
    require(&payload.name, "dashboard name")?;

    let body = encode_payload(payload)?;
    let endpoint = format!("{API_V3}/dashboard/{dashboard_id}");
    let request = self.client.new_request(Method::PUT, &endpoint, Some(body))?;
    self.client.call_json(request).await
  }

  /// Copy a dashboard, replacing the details given in `payload`
  pub async fn copy(
    &self,
    dashboard_id: &str,
    payload: &DashboardPayloadScheme,
  ) -> Result<(DashboardScheme, ResponseScheme)> {
    require_segment(dashboard_id, "dashboard id")?;

    let body = encode_payload(payload)?;
    let endpoint = format!("{API_V3}/dashboard/{dashboard_id}/copy");
    let request = self.client.new_request(Method::POST, &endpoint, Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn delete(&self, dashboard_id: &str) -> Result<ResponseScheme> {
    require_segment(dashboard_id, "dashboard id")?;

    let endpoint = format!("{API_V3}/dashboard/{dashboard_id}");
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }
}
