//! # Jira Search Endpoints
//!
//! JQL searches, either as a query string (`GET`) or a JSON body (`POST`).
//! Long queries should use [`SearchService::post`] to stay under URL limits.

use reqwest::Method;
use tracing::instrument;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require};
use crate::models::{IssueSearchScheme, SearchPayloadScheme};
use crate::query::Query;
use crate::response::ResponseScheme;

/// JQL search, borrowed from [`JiraClient::search`]
pub struct SearchService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn search(&self) -> SearchService<'_> {
    SearchService { client: self }
  }
}

impl SearchService<'_> {
  #[instrument(skip(self), level = "debug")]
  pub async fn post(
    &self,
    jql: &str,
    fields: &[&str],
    expand: &[&str],
    start_at: i32,
    max_results: i32,
  ) -> Result<(IssueSearchScheme, ResponseScheme)> {
    require(jql, "jql")?;

    let payload = SearchPayloadScheme {
      jql: jql.to_string(),
      fields: fields.iter().map(ToString::to_string).collect(),
      expand: expand.iter().map(ToString::to_string).collect(),
      start_at,
      max_results,
      validate_query: Some("strict".to_string()),
    };

    let body = encode_payload(&payload)?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/search"), Some(body))?;
    self.client.call_json(request).await
  }

  #[instrument(skip(self), level = "debug")]
  pub async fn get(
    &self,
    jql: &str,
    fields: &[&str],
    expand: &[&str],
    start_at: i32,
    max_results: i32,
  ) -> Result<(IssueSearchScheme, ResponseScheme)> {
    require(jql, "jql")?;

    let mut query = Query::new();
    query
      .add("jql", jql)
      .add("validateQuery", "strict")
      .add_csv("fields", fields)
      .add_csv("expand", expand)
      .page(start_at, max_results);

    let endpoint = query.endpoint(&format!("{API_V3}/search"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
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

  fn search_result() -> serde_json::Value {
    json!({
        "expand": "names,schema",
        "startAt": 0,
        "maxResults": 50,
        "total": 2,
        "issues": [
            { "id": "10001", "key": "KP-1", "fields": { "summary": "First" } },
            { "id": "10002", "key": "KP-2", "fields": { "summary": "Second" } }
        ]
    })
  }

  #[tokio::test]
  async fn test_search_post() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/search"))
      .and(body_json(json!({
          "jql": "project = KP order by created",
          "fields": ["summary"],
          "startAt": 0,
          "maxResults": 50,
          "validateQuery": "strict"
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(search_result()))
      .mount(&mock_server)
      .await;

    let (result, _) = client
      .search()
      .post("project = KP order by created", &["summary"], &[], 0, 50)
      .await?;

    assert_eq!(result.total, 2);
    assert_eq!(result.issues[1].key.as_deref(), Some("KP-2"));

    Ok(())
  }

  #[tokio::test]
  async fn test_search_get_encodes_jql() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/search"))
      .and(query_param("jql", "project = KP"))
      .and(query_param("fields", "summary,status"))
      .respond_with(ResponseTemplate::new(200).set_body_json(search_result()))
      .mount(&mock_server)
      .await;

    let (result, response) = client
      .search()
      .get("project = KP", &["summary", "status"], &[], 0, 50)
      .await?;

    assert_eq!(result.issues.len(), 2);
    assert!(response.endpoint.contains("jql=project+%3D+KP"));

    Ok(())
  }

  #[tokio::test]
  async fn test_search_invalid_jql() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/search"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({
          "errorMessages": ["Error in the JQL Query: Expecting a field name but got 'order'."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let err = client.search().post("order", &[], &[], 0, 50).await.unwrap_err();
    let api_error = err.response().unwrap().api_error().unwrap();

    assert_eq!(err.status_code(), Some(400));
    assert!(api_error.to_string().starts_with("Error in the JQL Query"));

    Ok(())
  }

  #[tokio::test]
  async fn test_search_requires_jql() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    assert!(matches!(client.search().get("", &[], &[], 0, 50).await, Err(JiraError::Validation("jql"))));
    assert!(matches!(client.search().post("  ", &[], &[], 0, 50).await, Err(JiraError::Validation("jql"))));

    Ok(())
  }
}
