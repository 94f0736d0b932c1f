//! # Jira User Endpoints
//!
//! Users are addressed by Atlassian account id. [`MySelfService`] covers the
//! account the client is authenticated as.

use reqwest::Method;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{JiraError, Result, require};
use crate::models::{Page, UserGroupScheme, UserPayloadScheme, UserScheme};
use crate::query::Query;
use crate::response::ResponseScheme;

/// User operations, borrowed from [`JiraClient::users`]
pub struct UserService<'a> {
  client: &'a JiraClient,
}

/// The authenticated user, borrowed from [`JiraClient::myself`]
pub struct MySelfService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn users(&self) -> UserService<'_> {
    UserService { client: self }
  }

  pub const fn myself(&self) -> MySelfService<'_> {
    MySelfService { client: self }
  }
}

impl UserService<'_> {
  pub async fn get(&self, account_id: &str, expand: &[&str]) -> Result<(UserScheme, ResponseScheme)> {
    require(account_id, "account id")?;

    let mut query = Query::new();
    query.add("accountId", account_id).add_csv("expand", expand);

    let endpoint = query.endpoint(&format!("{API_V3}/user"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn create(&self, payload: &UserPayloadScheme) -> Result<(UserScheme, ResponseScheme)> {
    require(&payload.email_address, "email address")?;

    let body = encode_payload(payload)?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/user"), Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn delete(&self, account_id: &str) -> Result<ResponseScheme> {
    require(account_id, "account id")?;

    let mut query = Query::new();
    query.add("accountId", account_id);

    let endpoint = query.endpoint(&format!("{API_V3}/user"));
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }

  /// Look up several users at once
  pub async fn find(
    &self,
    account_ids: &[&str],
    start_at: i32,
    max_results: i32,
  ) -> Result<(Page<UserScheme>, ResponseScheme)> {
    if account_ids.is_empty() {
      return Err(JiraError::Validation("account ids"));
    }

    let mut query = Query::new();
    query.add_all("accountId", account_ids).page(start_at, max_results);

    let endpoint = query.endpoint(&format!("{API_V3}/user/bulk"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn groups(&self, account_id: &str) -> Result<(Vec<UserGroupScheme>, ResponseScheme)> {
    require(account_id, "account id")?;

    let mut query = Query::new();
    query.add("accountId", account_id);

    let endpoint = query.endpoint(&format!("{API_V3}/user/groups"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  /// All users, active and inactive
  pub async fn gets(&self, start_at: i32, max_results: i32) -> Result<(Vec<UserScheme>, ResponseScheme)> {
    let mut query = Query::new();
    query.page(start_at, max_results);

    let endpoint = query.endpoint(&format!("{API_V3}/users/search"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  /// Users matching `query` against display name and email, or a single `account_id`
  pub async fn search(
    &self,
    account_id: Option<&str>,
    query_text: Option<&str>,
    start_at: i32,
    max_results: i32,
  ) -> Result<(Vec<UserScheme>, ResponseScheme)> {
    let account_id = account_id.filter(|id| !id.trim().is_empty());
    let query_text = query_text.filter(|text| !text.trim().is_empty());
    if account_id.is_none() && query_text.is_none() {
      return Err(JiraError::Validation("account id or query"));
    }

    let mut query = Query::new();
    query
      .add_opt("accountId", account_id)
      .add_opt("query", query_text)
      .page(start_at, max_results);

    let endpoint = query.endpoint(&format!("{API_V3}/user/search"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }
}

impl MySelfService<'_> {
  /// Details of the authenticated user
  pub async fn details(&self, expand: &[&str]) -> Result<(UserScheme, ResponseScheme)> {
    let mut query = Query::new();
    query.add_csv("expand", expand);

    let endpoint = query.endpoint(&format!("{API_V3}/myself"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }
}
