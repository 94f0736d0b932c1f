//! # Jira Filter Endpoints
//!
//! Saved JQL filters and the permissions they are shared with.

use reqwest::Method;
use tracing::instrument;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require, require_id};
use crate::models::{
  AccountIdScheme, FilterPayloadScheme, FilterScheme, FilterSearchOptionScheme, Page, PermissionFilterPayloadScheme,
  SharePermissionScheme, ShareScopeScheme,
};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Filter operations, borrowed from [`JiraClient::filters`]
pub struct FilterService<'a> {
  client: &'a JiraClient,
}

/// Filter share permissions, borrowed from [`JiraClient::filter_shares`]
pub struct FilterShareService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn filters(&self) -> FilterService<'_> {
    FilterService { client: self }
  }

  pub const fn filter_shares(&self) -> FilterShareService<'_> {
    FilterShareService { client: self }
  }
}

impl FilterService<'_> {
  pub async fn create(&self, payload: &FilterPayloadScheme) -> Result<(FilterScheme, ResponseScheme)> {
    require(&payload.name, "filter name")?;

    let body = encode_payload(payload)?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/filter"), Some(body))?;
    self.client.call_json(request).await
  }

  /// Filters the user has marked as favourite
  pub async fn favorites(&self) -> Result<(Vec<FilterScheme>, ResponseScheme)> {
    let request = self
      .client
      .new_request(Method::GET, &format!("{API_V3}/filter/favourite"), None)?;
    self.client.call_json(request).await
  }

  /// Filters owned by the user, plus favourites when `favorites` is set
  pub async fn my(&self, favorites: bool, expand: &[&str]) -> Result<(Vec<FilterScheme>, ResponseScheme)> {
    let mut query = Query::new();
    query.add_bool("includeFavourites", favorites).add_csv("expand", expand);

    let endpoint = query.endpoint(&format!("{API_V3}/filter/my"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn search(
    &self,
    options: &FilterSearchOptionScheme,
    start_at: i32,
    max_results: i32,
  ) -> Result<(Page<FilterScheme>, ResponseScheme)> {
    let mut query = Query::new();
    query
      .page(start_at, max_results)
      .add_opt("filterName", options.name.as_deref())
      .add_opt("accountId", options.account_id.as_deref())
      .add_opt("groupname", options.group.as_deref())
      .add_opt("projectId", options.project_id)
      .add_all("id", &options.ids)
      .add_opt("orderBy", options.order_by.as_deref())
      .add_csv("expand", &options.expand);

    let endpoint = query.endpoint(&format!("{API_V3}/filter/search"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn get(&self, filter_id: i64, expand: &[&str]) -> Result<(FilterScheme, ResponseScheme)> {
    require_id(filter_id, "filter id")?;

    let mut query = Query::new();
    query.add_csv("expand", expand);

    let endpoint = query.endpoint(&format!("{API_V3}/filter/{filter_id}"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn update(&self, filter_id: i64, payload: &FilterPayloadScheme) -> Result<(FilterScheme, ResponseScheme)> {
    require_id(filter_id, "filter id")?;
    require(&payload.name, "filter name")?;

    let body = encode_payload(payload)?;
    let endpoint = format!("{API_V3}/filter/{filter_id}");
    let request = self.client.new_request(Method::PUT, &endpoint, Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn delete(&self, filter_id: i64) -> Result<ResponseScheme> {
    require_id(filter_id, "filter id")?;

    let endpoint = format!("{API_V3}/filter/{filter_id}");
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }

  /// Transfer ownership of a filter to another account
  pub async fn change_owner(&self, filter_id: i64, account_id: &str) -> Result<ResponseScheme> {
    require_id(filter_id, "filter id")?;
    require(account_id, "account id")?;

    let body = encode_payload(&AccountIdScheme {
      account_id: account_id.to_string(),
    })?;
    let endpoint = format!("{API_V3}/filter/{filter_id}/owner");
    let request = self.client.new_request(Method::PUT, &endpoint, Some(body))?;
    self.client.call(request).await
  }
}

impl FilterShareService<'_> {
  /// Default share scope for new filters
  pub async fn scope(&self) -> Result<(ShareScopeScheme, ResponseScheme)> {
    let request = self
      .client
      .new_request(Method::GET, &format!("{API_V3}/filter/defaultShareScope"), None)?;
    self.client.call_json(request).await
  }

  pub async fn set_scope(&self, scope: &str) -> Result<(ShareScopeScheme, ResponseScheme)> {
    require(scope, "share scope")?;

    let body = encode_payload(&ShareScopeScheme {
      scope: scope.to_string(),
    })?;
    let request = self
      .client
      .new_request(Method::PUT, &format!("{API_V3}/filter/defaultShareScope"), Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn gets(&self, filter_id: i64) -> Result<(Vec<SharePermissionScheme>, ResponseScheme)> {
    require_id(filter_id, "filter id")?;

    let endpoint = format!("{API_V3}/filter/{filter_id}/permission");
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn get(&self, filter_id: i64, permission_id: i64) -> Result<(SharePermissionScheme, ResponseScheme)> {
    require_id(filter_id, "filter id")?;
    require_id(permission_id, "share permission id")?;

    let endpoint = format!("{API_V3}/filter/{filter_id}/permission/{permission_id}");
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  /// Share a filter; returns every share permission of the filter afterwards
  pub async fn add(
    &self,
    filter_id: i64,
    payload: &PermissionFilterPayloadScheme,
  ) -> Result<(Vec<SharePermissionScheme>, ResponseScheme)> {
    require_id(filter_id, "filter id")?;
    require(&payload.share_type, "share permission type")?;

    let body = encode_payload(payload)?;
    let endpoint = format!("{API_V3}/filter/{filter_id}/permission");
    let request = self.client.new_request(Method::POST, &endpoint, Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn delete(&self, filter_id: i64, permission_id: i64) -> Result<ResponseScheme> {
    require_id(filter_id, "filter id")?;
    require_id(permission_id, "share permission id")?;

    let endpoint = format!("{API_V3}/filter/{filter_id}/permission/{permission_id}");
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path, query_param};
  use wiremock::{Mock, ResponseTemplate};

  use super::*;
  use crate::error::JiraError;
  use crate::test_support::{expect_no_requests, setup};

  #[tokio::test]
  async fn test_get_filter_with_expand() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/filter/10000"))
      .and(query_param("expand", "sharedUsers,subscriptions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": "10000",
          "name": "All Open Bugs",
          "jql": "type = Bug and resolution is empty",
          "favourite": true,
          "sharePermissions": [{ "id": 10050, "type": "global" }]
      })))
      .mount(&mock_server)
      .await;

    let (filter, _) = client
      .filters()
      .get(10000, &["sharedUsers", "subscriptions"])
      .await?;

    assert_eq!(filter.name, "All Open Bugs");
    assert_eq!(filter.jql.as_deref(), Some("type = Bug and resolution is empty"));
    assert_eq!(filter.share_permissions[0].share_type, "global");
    assert_eq!(filter.share_permissions[0].id, Some(10050));

    Ok(())
  }

  #[tokio::test]
  async fn test_search_filters_repeats_ids() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/filter/search"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0, "maxResults": 50, "total": 0, "isLast": true, "values": []
      })))
      .mount(&mock_server)
      .await;

    let options = FilterSearchOptionScheme {
      name: Some("Bugs".to_string()),
      ids: vec![10000, 10001],
      ..Default::default()
    };
    let (page, response) = client.filters().search(&options, 0, 50).await?;

    assert!(page.values.is_empty());
    assert!(
      response
        .endpoint
        .ends_with("/rest/api/3/filter/search?filterName=Bugs&id=10000&id=10001&maxResults=50&startAt=0")
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_my_filters_and_favorites() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/filter/my"))
      .and(query_param("includeFavourites", "true"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "1", "name": "Mine" }])))
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/rest/api/3/filter/favourite"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "2", "name": "Starred" }])))
      .mount(&mock_server)
      .await;

    let (mine, _) = client.filters().my(true, &[]).await?;
    let (favorites, _) = client.filters().favorites().await?;

    assert_eq!(mine[0].name, "Mine");
    assert_eq!(favorites[0].name, "Starred");

    Ok(())
  }

  #[tokio::test]
  async fn test_change_owner() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/filter/10000/owner"))
      .and(body_json(json!({ "accountId": "5b10a2844c20165700ede21g" })))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let response = client
      .filters()
      .change_owner(10000, "5b10a2844c20165700ede21g")
      .await?;
    assert_eq!(response.code, 204);

    Ok(())
  }

  #[tokio::test]
  async fn test_add_share_permission() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/filter/10000/permission"))
      .and(body_json(json!({ "type": "group", "groupname": "jira-administrators", "rights": 1 })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!([
          { "id": 10049, "type": "group", "group": { "name": "jira-administrators" } }
      ])))
      .mount(&mock_server)
      .await;

    let payload = PermissionFilterPayloadScheme {
      share_type: "group".to_string(),
      group_name: Some("jira-administrators".to_string()),
      rights: Some(1),
      ..Default::default()
    };
    let (permissions, response) = client.filter_shares().add(10000, &payload).await?;

    assert_eq!(response.code, 201);
    assert_eq!(
      permissions[0].group.as_ref().unwrap().name.as_deref(),
      Some("jira-administrators")
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_share_scope() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/filter/defaultShareScope"))
      .and(body_json(json!({ "scope": "AUTHENTICATED" })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "scope": "AUTHENTICATED" })))
      .mount(&mock_server)
      .await;

    let (scope, _) = client.filter_shares().set_scope("AUTHENTICATED").await?;
    assert_eq!(scope.scope, "AUTHENTICATED");

    Ok(())
  }

  #[tokio::test]
  async fn test_filter_validation() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    assert!(matches!(client.filters().get(0, &[]).await, Err(JiraError::Validation("filter id"))));
    assert!(matches!(client.filters().delete(0).await, Err(JiraError::Validation("filter id"))));
    assert!(matches!(
      client.filters().change_owner(10000, "").await,
      Err(JiraError::Validation("account id"))
    ));
    assert!(matches!(
      client.filter_shares().get(10000, 0).await,
      Err(JiraError::Validation("share permission id"))
    ));
    assert!(matches!(
      client.filter_shares().set_scope("").await,
      Err(JiraError::Validation("share scope"))
    ));

    Ok(())
  }
}
