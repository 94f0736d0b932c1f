//! # Jira Group Endpoints

use reqwest::Method;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require};
use crate::models::{
  AccountIdScheme, GroupBulkOptionsScheme, GroupDetailScheme, GroupPayloadScheme, GroupScheme, Page, UserScheme,
};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Group operations, borrowed from [`JiraClient::groups`]
pub struct GroupService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn groups(&self) -> GroupService<'_> {
    GroupService { client: self }
  }
}

impl GroupService<'_> {
  pub async fn create(&self, group_name: &str) -> Result<(GroupScheme, ResponseScheme)> {
    require(group_name, "group name")?;

    let body = encode_payload(&GroupPayloadScheme {
      name: group_name.to_string(),
    })?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/group"), Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn delete(&self, group_name: &str) -> Result<ResponseScheme> {
    require(group_name, "group name")?;

    let mut query = Query::new();
    query.add("groupname", group_name);

    let endpoint = query.endpoint(&format!("{API_V3}/group"));
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }

  /// Page through groups, optionally restricted to the given ids or names
  pub async fn bulk(
    &self,
    options: &GroupBulkOptionsScheme,
    start_at: i32,
    max_results: i32,
  ) -> Result<(Page<GroupDetailScheme>, ResponseScheme)> {
    let mut query = Query::new();
    query
      .page(start_at, max_results)
      .add_all("groupId", &options.group_ids)
      .add_all("groupName", &options.group_names);

    let endpoint = query.endpoint(&format!("{API_V3}/group/bulk"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn members(
    &self,
    group_name: &str,
    inactive: bool,
    start_at: i32,
    max_results: i32,
  ) -> Result<(Page<UserScheme>, ResponseScheme)> {
    require(group_name, "group name")?;

    let mut query = Query::new();
    query
      .add("groupname", group_name)
      .add_bool("includeInactiveUsers", inactive)
      .page(start_at, max_results);

    let endpoint = query.endpoint(&format!("{API_V3}/group/member"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn add(&self, group_name: &str, account_id: &str) -> Result<(GroupScheme, ResponseScheme)> {
    require(group_name, "group name")?;
    require(account_id, "account id")?;

    let mut query = Query::new();
    query.add("groupname", group_name);

    let body = encode_payload(&AccountIdScheme {
      account_id: account_id.to_string(),
    })?;
    let endpoint = query.endpoint(&format!("{API_V3}/group/user"));
    let request = self.client.new_request(Method::POST, &endpoint, Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn remove(&self, group_name: &str, account_id: &str) -> Result<ResponseScheme> {
    require(group_name, "group name")?;
    require(account_id, "account id")?;

    let mut query = Query::new();
    query.add("groupname", group_name).add("accountId", account_id);

    let endpoint = query.endpoint(&format!("{API_V3}/group/user"));
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }
}
