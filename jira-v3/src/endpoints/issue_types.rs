//! # Jira Issue Type Endpoints

use reqwest::Method;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require, require_segment};
use crate::models::{IssueTypePayloadScheme, IssueTypeScheme};
use crate::response::ResponseScheme;

/// Issue type operations, borrowed from [`JiraClient::issue_types`]
pub struct IssueTypeService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn issue_types(&self) -> IssueTypeService<'_> {
    IssueTypeService { client: self }
  }
}

impl IssueTypeService<'_> {
  pub async fn gets(&self) -> Result<(Vec<IssueTypeScheme>, ResponseScheme)> {
    let request = self
      .client
      .new_request(Method::GET, &format!("{API_V3}/issuetype"), None)?;
    self.client.call_json(request).await
  }

  pub async fn get(&self, issue_type_id: &str) -> Result<(IssueTypeScheme, ResponseScheme)> {
    require_segment(issue_type_id, "issue type id")?;

    let endpoint = format!("{API_V3}/issuetype/{issue_type_id}");
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn create(&self, payload: &IssueTypePayloadScheme) -> Result<(IssueTypeScheme, ResponseScheme)> {
    require(payload.name.as_deref().unwrap_or_default(), "issue type name")?;

    let body = encode_payload(payload)?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/issuetype"), Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn update(
    &self,
    issue_type_id: &str,
    payload: &IssueTypePayloadScheme,
  ) -> Result<(IssueTypeScheme, ResponseScheme)> {
    require_segment(issue_type_id, "issue type id")?;

    let body = encode_payload(payload)?;
    let endpoint = format!("{API_V3}/issuetype/{issue_type_id}");
    let request = self.client.new_request(Method::PUT, &endpoint, Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn delete(&self, issue_type_id: &str) -> Result<ResponseScheme> {
    require_segment(issue_type_id, "issue type id")?;

    let endpoint = format!("{API_V3}/issuetype/{issue_type_id}");
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }

  /// Issue types that can replace `issue_type_id` for its issues
  pub async fn alternatives(&self, issue_type_id: &str) -> Result<(Vec<IssueTypeScheme>, ResponseScheme)> {
    require_segment(issue_type_id, "issue type id")?;

    let endpoint = format!("{API_V3}/issuetype/{issue_type_id}/alternatives");
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }
}
