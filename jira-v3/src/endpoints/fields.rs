//! # Jira Field Endpoints

use reqwest::Method;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require};
use crate::models::{CustomFieldPayloadScheme, FieldSearchOptionsScheme, IssueFieldScheme, Page};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Field operations, borrowed from [`JiraClient::fields`]
pub struct FieldService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn fields(&self) -> FieldService<'_> {
    FieldService { client: self }
  }
}

impl FieldService<'_> {
  /// Every system and custom field
  pub async fn gets(&self) -> Result<(Vec<IssueFieldScheme>, ResponseScheme)> {
    let request = self
      .client
      .new_request(Method::GET, &format!("{API_V3}/field"), None)?;
    self.client.call_json(request).await
  }

  pub async fn create(&self, payload: &CustomFieldPayloadScheme) -> Result<(IssueFieldScheme, ResponseScheme)> {
    require(&payload.name, "field name")?;
    require(&payload.field_type, "field type")?;

    let body = encode_payload(payload)?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/field"), Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn search(
    &self,
    options: &FieldSearchOptionsScheme,
    start_at: i32,
    max_results: i32,
  ) -> Result<(Page<IssueFieldScheme>, ResponseScheme)> {
    let mut query = Query::new();
    query
      .page(start_at, max_results)
      .add_csv("type", &options.types)
      .add_all("id", &options.ids)
      .add_opt("query", options.query.as_deref())
      .add_opt("orderBy", options.order_by.as_deref())
      .add_csv("expand", &options.expand);

    let endpoint = query.endpoint(&format!("{API_V3}/field/search"));
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

  #[tokio::test]
  async fn test_gets_fields() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/field"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
          {
              "id": "description",
              "name": "Description",
              "custom": false,
              "clauseNames": ["description"],
              "schema": { "type": "string", "system": "description" }
          },
          {
              "id": "customfield_10000",
              "key": "customfield_10000",
              "name": "Story Points",
              "custom": true,
              "clauseNames": ["cf[10000]", "Story Points"],
              "schema": {
                  "type": "number",
                  "custom": "com.atlassian.jira.plugin.system.customfieldtypes:float",
                  "customId": 10000
              }
          }
      ])))
      .mount(&mock_server)
      .await;

    let (fields, _) = client.fields().gets().await?;
    let story_points = &fields[1];

    assert_eq!(fields.len(), 2);
    assert_eq!(story_points.custom, Some(true));
    assert_eq!(story_points.schema.as_ref().unwrap().custom_id, Some(10000));
    assert_eq!(story_points.clause_names[1], "Story Points");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_custom_field() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/field"))
      .and(body_json(json!({
          "name": "New custom field",
          "type": "com.atlassian.jira.plugin.system.customfieldtypes:select",
          "searcherKey": "com.atlassian.jira.plugin.system.customfieldtypes:multiselectsearcher"
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "id": "customfield_10101",
          "name": "New custom field",
          "custom": true
      })))
      .mount(&mock_server)
      .await;

    let payload = CustomFieldPayloadScheme {
      name: "New custom field".to_string(),
      description: None,
      field_type: "com.atlassian.jira.plugin.system.customfieldtypes:select".to_string(),
      searcher_key: Some("com.atlassian.jira.plugin.system.customfieldtypes:multiselectsearcher".to_string()),
    };
    let (field, response) = client.fields().create(&payload).await?;

    assert_eq!(response.code, 201);
    assert_eq!(field.id, "customfield_10101");

    Ok(())
  }

  #[tokio::test]
  async fn test_search_custom_fields() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/field/search"))
      .and(query_param("type", "custom"))
      .and(query_param("query", "story"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0,
          "maxResults": 50,
          "total": 1,
          "isLast": true,
          "values": [{ "id": "customfield_10000", "name": "Story Points" }]
      })))
      .mount(&mock_server)
      .await;

    let options = FieldSearchOptionsScheme {
      types: vec!["custom".to_string()],
      query: Some("story".to_string()),
      ..Default::default()
    };
    let (page, _) = client.fields().search(&options, 0, 50).await?;

    assert_eq!(page.values[0].name, "Story Points");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_requires_type() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;
    expect_no_requests(&mock_server).await;

    let payload = CustomFieldPayloadScheme {
      name: "Unnamed type".to_string(),
      ..Default::default()
    };

    assert!(matches!(client.fields().create(&payload).await, Err(JiraError::Validation("field type"))));

    Ok(())
  }
}
