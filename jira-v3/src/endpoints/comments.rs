//! # Jira Comment Endpoints
//!
//! Reading, adding and removing comments on an issue.

use reqwest::Method;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require_segment};
use crate::models::{CommentPayloadScheme, IssueCommentPageScheme, IssueCommentScheme};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Comment operations, borrowed from [`JiraClient::comments`]
pub struct CommentService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn comments(&self) -> CommentService<'_> {
    CommentService { client: self }
  }
}

impl CommentService<'_> {
  /// Page through the comments of an issue, `order_by` being `created` or `-created`
  pub async fn gets(
    &self,
    issue_key: &str,
    order_by: Option<&str>,
    expand: &[&str],
    start_at: i32,
    max_results: i32,
  ) -> Result<(IssueCommentPageScheme, ResponseScheme)> {
    require_segment(issue_key, "issue key")?;

    let mut query = Query::new();
    query
      .page(start_at, max_results)
      .add_opt("orderBy", order_by)
      .add_csv("expand", expand);

    let endpoint = query.endpoint(&format!("{API_V3}/issue/{issue_key}/comment"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn get(&self, issue_key: &str, comment_id: &str) -> Result<(IssueCommentScheme, ResponseScheme)> {
    require_segment(issue_key, "issue key")?;
    require_segment(comment_id, "comment id")?;

    let endpoint = format!("{API_V3}/issue/{issue_key}/comment/{comment_id}");
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn add(
    &self,
    issue_key: &str,
    payload: &CommentPayloadScheme,
    expand: &[&str],
  ) -> Result<(IssueCommentScheme, ResponseScheme)> {
    require_segment(issue_key, "issue key")?;

    let mut query = Query::new();
    query.add_csv("expand", expand);

    let body = encode_payload(payload)?;
    let endpoint = query.endpoint(&format!("{API_V3}/issue/{issue_key}/comment"));
    let request = self.client.new_request(Method::POST, &endpoint, Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn delete(&self, issue_key: &str, comment_id: &str) -> Result<ResponseScheme> {
    require_segment(issue_key, "issue key")?;
    require_segment(comment_id, "comment id")?;

    let endpoint = format!("{API_V3}/issue/{issue_key}/comment/{comment_id}");
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }
}
