//! # Jira Workflow Endpoints
//!
//! Classic workflows and the workflow schemes mapping them to issue types.

use reqwest::Method;
use tracing::instrument;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require, require_id, require_segment};
use crate::models::{
  Page, WorkflowPayloadScheme, WorkflowPublishedIdScheme, WorkflowScheme, WorkflowSchemePayloadScheme,
  WorkflowSchemeScheme, WorkflowSearchOptions,
};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Workflow operations, borrowed from [`JiraClient::workflows`]
pub struct WorkflowService<'a> {
  client: &'a JiraClient,
}

/// Workflow scheme operations, borrowed from [`JiraClient::workflow_schemes`]
pub struct WorkflowSchemeService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn workflows(&self) -> WorkflowService<'_> {
    WorkflowService { client: self }
  }

  pub const fn workflow_schemes(&self) -> WorkflowSchemeService<'_> {
    WorkflowSchemeService { client: self }
  }
}

impl WorkflowService<'_> {
  #[instrument(skip(self), level = "debug")]
  pub async fn search(
    &self,
    options: &WorkflowSearchOptions,
    start_at: i32,
    max_results: i32,
  ) -> Result<(Page<WorkflowScheme>, ResponseScheme)> {
    let mut query = Query::new();
    query
      .page(start_at, max_results)
      .add_all("workflowName", &options.workflow_name)
      .add_csv("expand", &options.expand)
      .add_opt("queryString", options.query_string.as_deref())
      .add_opt("orderBy", options.order_by.as_deref())
      .add_opt("isActive", options.is_active);

    let endpoint = query.endpoint(&format!("{API_V3}/workflow/search"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn create(&self, payload: &WorkflowPayloadScheme) -> Result<(WorkflowPublishedIdScheme, ResponseScheme)> {
    require(&payload.name, "workflow name")?;

    let body = encode_payload(payload)?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/workflow"), Some(body))?;
    self.client.call_json(request).await
  }

  /// Delete an inactive workflow by entity id
  pub async fn delete(&self, entity_id: &str) -> Result<ResponseScheme> {
    require_segment(entity_id, "workflow entity id")?;

    let endpoint = format!("{API_V3}/workflow/{entity_id}");
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }
}

impl WorkflowSchemeService<'_> {
  pub async fn gets(&self, start_at: i32, max_results: i32) -> Result<(Page<WorkflowSchemeScheme>, ResponseScheme)> {
    let mut query = Query::new();
    query.page(start_at, max_results);

    let endpoint = query.endpoint(&format!("{API_V3}/workflowscheme"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  /// Get a scheme, or its draft when `return_draft` is set and one exists
  pub async fn get(&self, scheme_id: i64, return_draft: bool) -> Result<(WorkflowSchemeScheme, ResponseScheme)> {
    require_id(scheme_id, "workflow scheme id")?;

    let mut query = Query::new();
    query.add_bool("returnDraftIfExists", return_draft);

    let endpoint = query.endpoint(&format!("{API_V3}/workflowscheme/{scheme_id}"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn create(
    &self,
    payload: &WorkflowSchemePayloadScheme,
  ) -> Result<(WorkflowSchemeScheme, ResponseScheme)> {
    require(&payload.name, "workflow scheme name")?;

    let body = encode_payload(payload)?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/workflowscheme"), Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn delete(&self, scheme_id: i64) -> Result<ResponseScheme> {
    require_id(scheme_id, "workflow scheme id")?;

    let endpoint = format!("{API_V3}/workflowscheme/{scheme_id}");
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeMap;

  use serde_json::json;
  use wiremock::matchers::{body_json, method, path, query_param};
  use wiremock::{Mock, ResponseTemplate};

  use super::*;
  use crate::error::JiraError;
  use crate::models::{WorkflowStatusPayloadScheme, WorkflowTransitionPayloadScheme};
  use crate::test_support::{expect_no_requests, setup};

  #[tokio::test]
  async fn test_search_workflows() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/workflow/search"))
      .and(query_param("isActive", "true"))
      .and(query_param("expand", "statuses"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0,
          "maxResults": 50,
          "total": 1,
          "isLast": true,
          "values": [{
              "id": { "name": "SCRUM Workflow", "entityId": "5ed312c5-f7a6-4a78-a1f6-8ff7f307d063" },
              "description": "A workflow used for Software projects",
              "statuses": [{ "id": "3", "name": "In Progress" }],
              "isDefault": false
          }]
      })))
      .mount(&mock_server)
      .await;

    let options = WorkflowSearchOptions {
      expand: vec!["statuses".to_string()],
      is_active: Some(true),
      ..Default::default()
    };
    let (page, _) = client.workflows().search(&options, 0, 50).await?;
    let workflow = &page.values[0];

    assert_eq!(workflow.id.as_ref().unwrap().name, "SCRUM Workflow");
    assert_eq!(workflow.statuses[0].name, "In Progress");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_and_delete_workflow() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/workflow"))
      .and(body_json(json!({
          "name": "Workflow 1",
          "statuses": [{ "id": "1", "properties": { "jira.issue.editable": "false" } }, { "id": "2" }],
          "transitions": [
              { "name": "Created", "to": "1", "type": "initial" },
              { "name": "Close", "from": ["1"], "to": "2", "type": "directed" }
          ]
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "name": "Workflow 1",
          "entityId": "d7178e8d-bf6c-4e86-8e41-2c7b8cd0d2ad"
      })))
      .mount(&mock_server)
      .await;
    Mock::given(method("DELETE"))
      .and(path("/rest/api/3/workflow/d7178e8d-bf6c-4e86-8e41-2c7b8cd0d2ad"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let payload = WorkflowPayloadScheme {
      name: "Workflow 1".to_string(),
      description: None,
      statuses: vec![
        WorkflowStatusPayloadScheme {
          id: "1".to_string(),
          properties: BTreeMap::from([("jira.issue.editable".to_string(), "false".to_string())]),
        },
        WorkflowStatusPayloadScheme {
          id: "2".to_string(),
          ..Default::default()
        },
      ],
      transitions: vec![
        WorkflowTransitionPayloadScheme {
          name: "Created".to_string(),
          to: "1".to_string(),
          transition_type: "initial".to_string(),
          ..Default::default()
        },
        WorkflowTransitionPayloadScheme {
          name: "Close".to_string(),
          from: vec!["1".to_string()],
          to: "2".to_string(),
          transition_type: "directed".to_string(),
          ..Default::default()
        },
      ],
    };
    let (created, _) = client.workflows().create(&payload).await?;
    let entity_id = created.entity_id.unwrap_or_default();

    assert_eq!(client.workflows().delete(&entity_id).await?.code, 204);

    Ok(())
  }

  #[tokio::test]
  async fn test_workflow_schemes() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/workflowscheme"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0,
          "maxResults": 50,
          "total": 1,
          "isLast": true,
          "values": [{
              "id": 101010,
              "name": "Example workflow scheme",
              "defaultWorkflow": "jira",
              "issueTypeMappings": { "10000": "scrum workflow" }
          }]
      })))
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/rest/api/3/workflowscheme/101010"))
      .and(query_param("returnDraftIfExists", "true"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 101010, "name": "Draft", "draft": true })))
      .mount(&mock_server)
      .await;

    let (page, _) = client.workflow_schemes().gets(0, 50).await?;
    let (draft, _) = client.workflow_schemes().get(101010, true).await?;

    assert_eq!(page.values[0].issue_type_mappings["10000"], "scrum workflow");
    assert_eq!(draft.draft, Some(true));

    Ok(())
  }

  #[tokio::test]
  async fn test_create_and_delete_workflow_scheme() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/workflowscheme"))
      .and(body_json(json!({ "name": "Example", "defaultWorkflow": "jira" })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 101011, "name": "Example" })))
      .mount(&mock_server)
      .await;
    Mock::given(method("DELETE"))
      .and(path("/rest/api/3/workflowscheme/101011"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let payload = WorkflowSchemePayloadScheme {
      name: "Example".to_string(),
      default_workflow: Some("jira".to_string()),
      ..Default::default()
    };
    let (scheme, _) = client.workflow_schemes().create(&payload).await?;

    assert_eq!(client.workflow_schemes().delete(scheme.id).await?.code, 204);

    Ok(())
  }

  #[tokio::test]
  async fn test_workflow_validation() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    assert!(matches!(
      client.workflows().delete("").await,
      Err(JiraError::Validation("workflow entity id"))
    ));
    assert!(matches!(
      client.workflows().create(&WorkflowPayloadScheme::default()).await,
      Err(JiraError::Validation("workflow name"))
    ));
    assert!(matches!(
      client.workflow_schemes().get(0, false).await,
      Err(JiraError::Validation("workflow scheme id"))
    ));

    Ok(())
  }
}
