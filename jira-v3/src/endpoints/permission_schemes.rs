//! # Jira Permission Scheme Endpoints
//!
//! Permission schemes and the individual grants they are made of.

use reqwest::Method;

use crate::client::{JiraClient, encode_payload};
use crate::consts::API_V3;
use crate::error::{Result, require, require_id};
use crate::models::{
  PermissionGrantPayloadScheme, PermissionGrantScheme, PermissionGrantsScheme, PermissionSchemePageScheme,
  PermissionSchemePayloadScheme, PermissionSchemeScheme,
};
use crate::query::Query;
use crate::response::ResponseScheme;

/// Permission scheme operations, borrowed from [`JiraClient::permission_schemes`]
pub struct PermissionSchemeService<'a> {
  client: &'a JiraClient,
}

/// Grants inside a permission scheme, borrowed from [`JiraClient::permission_grants`]
pub struct PermissionGrantService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn permission_schemes(&self) -> PermissionSchemeService<'_> {
    PermissionSchemeService { client: self }
  }

  pub const fn permission_grants(&self) -> PermissionGrantService<'_> {
    PermissionGrantService { client: self }
  }
}

impl PermissionSchemeService<'_> {
  pub async fn gets(&self) -> Result<(PermissionSchemePageScheme, ResponseScheme)> {
    let request = self
      .client
      .new_request(Method::GET, &format!("{API_V3}/permissionscheme"), None)?;
    self.client.call_json(request).await
  }

  pub async fn get(&self, scheme_id: i64, expand: &[&str]) -> Result<(PermissionSchemeScheme, ResponseScheme)> {
    require_id(scheme_id, "permission scheme id")?;

    let mut query = Query::new();
    query.add_csv("expand", expand);

    let endpoint = query.endpoint(&format!("{API_V3}/permissionscheme/{scheme_id}"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn create(
    &self,
    payload: &PermissionSchemePayloadScheme,
  ) -> Result<(PermissionSchemeScheme, ResponseScheme)> {
    require(&payload.name, "permission scheme name")?;

    let body = encode_payload(payload)?;
    let request = self
      .client
      .new_request(Method::POST, &format!("{API_V3}/permissionscheme"), Some(body))?;
    self.client.call_json(request).await
  }

  /// Replace a scheme; grants in `payload` overwrite the existing ones
  pub async fn update(
    &self,
    scheme_id: i64,
    payload: &PermissionSchemePayloadScheme,
  ) -> Result<(PermissionSchemeScheme, ResponseScheme)> {
    require_id(scheme_id, "permission scheme id")?;

    let body = encode_payload(payload)?;
    let endpoint = format!("{API_V3}/permissionscheme/{scheme_id}");
    let request = self.client.new_request(Method::PUT, &endpoint, Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn delete(&self, scheme_id: i64) -> Result<ResponseScheme> {
    require_id(scheme_id, "permission scheme id")?;

    let endpoint = format!("{API_V3}/permissionscheme/{scheme_id}");
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }
}

impl PermissionGrantService<'_> {
  pub async fn gets(&self, scheme_id: i64, expand: &[&str]) -> Result<(PermissionGrantsScheme, ResponseScheme)> {
    require_id(scheme_id, "permission scheme id")?;

    let mut query = Query::new();
    query.add_csv("expand", expand);

    let endpoint = query.endpoint(&format!("{API_V3}/permissionscheme/{scheme_id}/permission"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn get(
    &self,
    scheme_id: i64,
    grant_id: i64,
    expand: &[&str],
  ) -> Result<(PermissionGrantScheme, ResponseScheme)> {
    require_id(scheme_id, "permission scheme id")?;
    require_id(grant_id, "permission grant id")?;

    let mut query = Query::new();
    query.add_csv("expand", expand);

    let endpoint = query.endpoint(&format!("{API_V3}/permissionscheme/{scheme_id}/permission/{grant_id}"));
    let request = self.client.new_request(Method::GET, &endpoint, None)?;
    self.client.call_json(request).await
  }

  pub async fn create(
    &self,
    scheme_id: i64,
    payload: &PermissionGrantPayloadScheme,
  ) -> Result<(PermissionGrantScheme, ResponseScheme)> {
    require_id(scheme_id, "permission scheme id")?;
    require(&payload.permission, "permission")?;

    let body = encode_payload(payload)?;
    let endpoint = format!("{API_V3}/permissionscheme/{scheme_id}/permission");
    let request = self.client.new_request(Method::POST, &endpoint, Some(body))?;
    self.client.call_json(request).await
  }

  pub async fn delete(&self, scheme_id: i64, grant_id: i64) -> Result<ResponseScheme> {
    require_id(scheme_id, "permission scheme id")?;
    require_id(grant_id, "permission grant id")?;

    let endpoint = format!("{API_V3}/permissionscheme/{scheme_id}/permission/{grant_id}");
    let request = self.client.new_request(Method::DELETE, &endpoint, None)?;
    self.client.call(request).await
  }
}
