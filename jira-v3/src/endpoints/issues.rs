//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations,
//! including fetching, creating, editing, assigning and transitioning issues.

use reqwest::Method;
use tracing::{debug, instrument};

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require, require_segment};
use crate::models::{
  AccountIdScheme, IssueBulkPayloadScheme, IssueBulkResponseScheme, IssuePayloadScheme, IssueResponseScheme,
  IssueScheme, IssueTransitionsScheme, TransitionId, TransitionRequest,
};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Issue operations, borrowed from [`JiraClient::issues`]
pub struct IssueService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn issues(&self) -> IssueService<'_> {
    IssueService { client: self }
  }
}

impl IssueService<'_> {
  pub async fn create(&self, payload: &IssuePayloadScheme) -> Result<(IssueResponseScheme, ResponseScheme)> {
    let body = encode_payload(payload)?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/issue"), Some(body))?;
    self.client.call_json(request).await
  }

  /// Create up to 50 issues in one request
  pub async fn creates(&self, payloads: Vec<IssuePayloadScheme>) -> Result<(IssueBulkResponseScheme, ResponseScheme)> {
    let body = encode_payload(&IssueBulkPayloadScheme {
      issue_updates: payloads,
    })?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/issue/bulk"), Some(body))?;
    self.client.call_json(request).await
  }

  /// Get an issue by key or id, limited to `fields` when given
  #[instrument(skip(self), level = "debug")]
  pub async fn get(&self, issue_key: &str, fields: &[&str], expand: &[&str]) -> Result<(IssueScheme, ResponseScheme)> {
    require_segment(issue_key, "issue key")?;

    let mut query = Query::new();
    query.add_csv("fields", fields).add_csv("expand", expand);

    let endpoint = query.endpoint(&format!("{API_V3}/issue/{issue_key}"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  /// Edit an issue; `notify` controls whether watchers are emailed
  pub async fn update(&self, issue_key: &str, notify: bool, payload: &IssuePayloadScheme) -> Result<ResponseScheme> {
    require_segment(issue_key, "issue key")?;

    let mut query = Query::new();
    query.add("notifyUsers", notify);

    let body = encode_payload(payload)?;
    let endpoint = query.endpoint(&format!("{API_V3}/issue/{issue_key}"));
    let request = self.client.new_request(Method::PUT, &endpoint, Some(body))?;
    self.client.call(request).await
  }

  pub async fn delete(&self, issue_key: &str, delete_subtasks: bool) -> Result<ResponseScheme> {
    require_segment(issue_key, "issue key")?;

    let mut query = Query::new();
    query.add("deleteSubtasks", delete_subtasks);

    let endpoint = query.endpoint(&format!("{API_V3}/issue/{issue_key}"));
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }

  pub async fn assign(&self, issue_key: &str, account_id: &str) -> Result<ResponseScheme> {
    require_segment(issue_key, "issue key")?;
    require(account_id, "account id")?;

    let body = encode_payload(&AccountIdScheme {
      account_id: account_id.to_string(),
    })?;
    let endpoint = format!("{API_V3}/issue/{issue_key}/assignee");
    let request = self.client.new_request(Method::PUT, &endpoint, Some(body))?;
    self.client.call(request).await
  }

  /// Transitions available to the user for an issue
  pub async fn transitions(&self, issue_key: &str) -> Result<(IssueTransitionsScheme, ResponseScheme)> {
    require_segment(issue_key, "issue key")?;

    let endpoint = format!("{API_V3}/issue/{issue_key}/transitions");
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  /// Move an issue through the transition with `transition_id`
  pub async fn transition(&self, issue_key: &str, transition_id: &str) -> Result<ResponseScheme> {
    require_segment(issue_key, "issue key")?;
    require(transition_id, "transition id")?;

    debug!("Transitioning issue {} with transition {}", issue_key, transition_id);

    let body = encode_payload(&TransitionRequest {
      transition: TransitionId {
        id: transition_id.to_string(),
      },
    })?;
    let endpoint = format!("{API_V3}/issue/{issue_key}/transitions");
    let request = self.client.new_request(Method::POST, &endpoint, Some(body))?;
    self.client.call(request).await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{body_json, header, method, path, query_param};
  use wiremock::{Mock, ResponseTemplate};

  use super::*;
  use crate::error::JiraError;
  use crate::models::{AdfNode, IssueFieldsScheme, IssueTypeScheme, ProjectScheme};
  use crate::test_support::{BASIC_HEADER, expect_no_requests, setup};

  fn task_payload(summary: &str) -> IssuePayloadScheme {
    IssuePayloadScheme {
      fields: IssueFieldsScheme {
        summary: Some(summary.to_string()),
        project: Some(ProjectScheme {
          key: Some("KP".to_string()),
          ..Default::default()
        }),
        issue_type: Some(IssueTypeScheme {
          name: Some("Task".to_string()),
          ..Default::default()
        }),
        ..Default::default()
      },
      ..Default::default()
    }
  }

  #[tokio::test]
  async fn test_get_issue() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/TEST-123"))
      .and(query_param("fields", "summary,status"))
      .and(header("Authorization", BASIC_HEADER))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": "10000",
          "key": "TEST-123",
          "fields": {
              "summary": "Test issue",
              "description": {
                  "type": "doc",
                  "version": 1,
                  "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "This is a test issue" }] }]
              },
              "status": {
                  "id": "10001",
                  "name": "In Progress",
                  "statusCategory": { "id": 4, "key": "indeterminate", "name": "In Progress" }
              }
          }
      })))
      .mount(&mock_server)
      .await;

    let (issue, response) = client.issues().get("TEST-123", &["summary", "status"], &[]).await?;
    let fields = issue.fields.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(issue.key.as_deref(), Some("TEST-123"));
    assert_eq!(fields.summary.as_deref(), Some("Test issue"));
    assert_eq!(fields.description.unwrap().plain_text(), "This is a test issue");
    assert_eq!(fields.status.unwrap().name, "In Progress");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_not_found() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/TEST-404"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "errorMessages": ["Issue does not exist or you do not have permission to see it."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let err = client.issues().get("TEST-404", &[], &[]).await.unwrap_err();
    assert!(matches!(err, JiraError::Status(_)));
    assert_eq!(err.status_code(), Some(404));

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    let mut payload = task_payload("Write the release notes");
    payload.fields.description = Some(AdfNode::from_plain_text("Cover every crate"));

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue"))
      .and(body_json(json!({
          "fields": {
              "summary": "Write the release notes",
              "description": {
                  "type": "doc",
                  "version": 1,
                  "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "Cover every crate" }] }]
              },
              "project": { "key": "KP" },
              "issuetype": { "name": "Task" }
          }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "id": "10002",
          "key": "KP-24",
          "self": "https://your-domain.atlassian.net/rest/api/3/issue/10002"
      })))
      .mount(&mock_server)
      .await;

    let (created, response) = client.issues().create(&payload).await?;

    assert_eq!(response.code, 201);
    assert_eq!(created.key, "KP-24");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issues_in_bulk() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/bulk"))
      .and(body_json(json!({
          "issueUpdates": [
              { "fields": { "summary": "First", "project": { "key": "KP" }, "issuetype": { "name": "Task" } } },
              { "fields": { "summary": "Second", "project": { "key": "KP" }, "issuetype": { "name": "Task" } } }
          ]
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "issues": [
              { "id": "1", "key": "KP-1", "self": "https://x/1" },
              { "id": "2", "key": "KP-2", "self": "https://x/2" }
          ],
          "errors": []
      })))
      .mount(&mock_server)
      .await;

    let (result, _) = client
      .issues()
      .creates(vec![task_payload("First"), task_payload("Second")])
      .await?;

    assert_eq!(result.issues.len(), 2);
    assert_eq!(result.issues[1].key, "KP-2");
    assert!(result.errors.is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_update_and_delete_issue() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/issue/KP-1"))
      .and(query_param("notifyUsers", "false"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;
    Mock::given(method("DELETE"))
      .and(path("/rest/api/3/issue/KP-1"))
      .and(query_param("deleteSubtasks", "true"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let payload = IssuePayloadScheme {
      fields: IssueFieldsScheme {
        summary: Some("Renamed".to_string()),
        ..Default::default()
      },
      ..Default::default()
    };
    let updated = client.issues().update("KP-1", false, &payload).await?;
    let deleted = client.issues().delete("KP-1", true).await?;

    assert_eq!(updated.code, 204);
    assert_eq!(deleted.code, 204);

    Ok(())
  }

  #[tokio::test]
  async fn test_assign_issue() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/issue/KP-1/assignee"))
      .and(body_json(json!({ "accountId": "5b10ac8d82e05b22cc7d4ef5" })))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let response = client.issues().assign("KP-1", "5b10ac8d82e05b22cc7d4ef5").await?;
    assert_eq!(response.code, 204);

    Ok(())
  }

  #[tokio::test]
  async fn test_get_transitions() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/TEST-123/transitions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "transitions": [
              { "id": "11", "name": "To Do" },
              { "id": "21", "name": "In Progress" },
              { "id": "31", "name": "Done" }
          ]
      })))
      .mount(&mock_server)
      .await;

    let (transitions, _) = client.issues().transitions("TEST-123").await?;

    assert_eq!(transitions.transitions.len(), 3);
    assert_eq!(transitions.transitions[0].id, "11");
    assert_eq!(transitions.transitions[1].name, "In Progress");

    Ok(())
  }

  #[tokio::test]
  async fn test_transition_issue() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/TEST-123/transitions"))
      .and(body_json(json!({ "transition": { "id": "21" } })))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let response = client.issues().transition("TEST-123", "21").await?;
    assert_eq!(response.code, 204);

    Ok(())
  }

  #[tokio::test]
  async fn test_transition_rejected() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/TEST-123/transitions"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({
          "errorMessages": [],
          "errors": { "transition": "Transition id '99' is not valid for this issue." }
      })))
      .mount(&mock_server)
      .await;

    let err = client.issues().transition("TEST-123", "99").await.unwrap_err();
    let api_error = err.response().unwrap().api_error().unwrap();

    assert_eq!(err.status_code(), Some(400));
    assert!(api_error.errors["transition"].contains("not valid"));

    Ok(())
  }

  #[tokio::test]
  async fn test_missing_issue_key() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    let issues = client.issues();

    assert!(matches!(issues.get("", &[], &[]).await, Err(JiraError::Validation("issue key"))));
    assert!(matches!(issues.delete(" ", false).await, Err(JiraError::Validation("issue key"))));
    assert!(matches!(issues.transitions("").await, Err(JiraError::Validation("issue key"))));
    assert!(matches!(
      issues.transition("KP-1", "").await,
      Err(JiraError::Validation("transition id"))
    ));
    assert!(matches!(
      issues.assign("KP-1", "").await,
      Err(JiraError::Validation("account id"))
    ));

    Ok(())
  }
}
