//! # Jira Screen Endpoints

use reqwest::Method;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require, require_id, require_segment};
use crate::models::{AvailableScreenFieldScheme, Page, ScreenPayloadScheme, ScreenScheme, ScreenSearchOptions};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Screen operations, borrowed from [`JiraClient::screens`]
pub struct ScreenService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn screens(&self) -> ScreenService<'_> {
    ScreenService { client: self }
  }
}

impl ScreenService<'_> {
  pub async fn gets(
    &self,
    options: &ScreenSearchOptions,
    start_at: i32,
    max_results: i32,
  ) -> Result<(Page<ScreenScheme>, ResponseScheme)> {
    let mut query = Query::new();
    query
      .page(start_at, max_results)
      .add_all("id", &options.ids)
      .add_opt("queryString", options.query_string.as_deref())
      .add_all("scope", &options.scope)
      .add_opt("orderBy", options.order_by.as_deref());

    let endpoint = query.endpoint(&format!("{API_V3}/screens"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn create(&self, name: &str, description: Option<&str>) -> Result<(ScreenScheme, ResponseScheme)> {
    require(name, "screen name")?;

    let body = encode_payload(&ScreenPayloadScheme {
      name: Some(name.to_string()),
      description: description.map(ToString::to_string),
    })?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/screens"), Some(body))?;
    self.client.call_json(request).await
  }

  /// Rename or re-describe a screen; `None` leaves the value untouched
  pub async fn update(
    &self,
    screen_id: i64,
    name: Option<&str>,
    description: Option<&str>,
  ) -> Result<(ScreenScheme, ResponseScheme)> {
    require_id(screen_id, "screen id")?;

    let body = encode_payload(&ScreenPayloadScheme {
      name: name.map(ToString::to_string),
      description: description.map(ToString::to_string),
    })?;
    let endpoint = format!("{API_V3}/screens/{screen_id}");
    let request = self.client.new_request(Method::PUT, &endpoint, Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn delete(&self, screen_id: i64) -> Result<ResponseScheme> {
    require_id(screen_id, "screen id")?;

    let endpoint = format!("{API_V3}/screens/{screen_id}");
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }

  /// Add a field to the default tab of the default screen
  pub async fn add_to_default(&self, field_id: &str) -> Result<ResponseScheme> {
    require_segment(field_id, "field id")?;

    let endpoint = format!("{API_V3}/screens/addToDefault/{field_id}");
    let request = self.client.new_request(Method::POST, &endpoint, None)?;
    self.client.call(request).await
  }

  pub async fn available_fields(&self, screen_id: i64) -> Result<(Vec<AvailableScreenFieldScheme>, ResponseScheme)> {
    require_id(screen_id, "screen id")?;

    let endpoint = format!("{API_V3}/screens/{screen_id}/availableFields");
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }
}
