//! # Jira HTTP Client
//!
//! Shared request and response plumbing: endpoint resolution against the
//! site URL, credential and header injection, payload encoding, and status
//! classification of responses. Every service funnels through
//! [`JiraClient::new_request`] and [`JiraClient::call`].

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace, warn};
use url::Url;

use crate::auth::Authentication;
use crate::consts::{API_V3, APPLICATION_JSON};
use crate::error::{JiraError, Result};
use crate::response::ResponseScheme;

/// Represents a Jira API client
#[derive(Debug, Clone)]
pub struct JiraClient {
  pub(crate) http: Client,
  pub(crate) site: Url,
  pub(crate) auth: Authentication,
}

impl JiraClient {
  /// Create a new Jira client for `site`.
  ///
  /// When `http` is `None` a default `reqwest::Client` is used. A trailing
  /// slash is added to the site so relative endpoints resolve beneath it.
  pub fn new(http: Option<Client>, site: &str) -> Result<Self> {
    Ok(Self {
      http: http.unwrap_or_default(),
      site: parse_site(site)?,
      auth: Authentication::default(),
    })
  }

  /// Start building a client with credentials, user agent and timeout
  pub fn builder(site: &str) -> JiraClientBuilder {
    JiraClientBuilder {
      site: site.to_string(),
      http: None,
      auth: Authentication::default(),
      timeout: None,
    }
  }

  /// The base site every endpoint is resolved against
  pub const fn site(&self) -> &Url {
    &self.site
  }

  pub const fn auth(&self) -> &Authentication {
    &self.auth
  }

  /// Credentials set here apply to this client and every sub-client
  /// borrowed from it afterwards.
  pub const fn auth_mut(&mut self) -> &mut Authentication {
    &mut self.auth
  }

  /// Build a fully addressed request for a relative `endpoint`.
  ///
  /// # Errors
  ///
  /// Returns [`JiraError::Url`] when the endpoint cannot be resolved and
  /// [`JiraError::Transport`] when the request cannot be assembled.
  pub fn new_request(&self, method: Method, endpoint: &str, body: Option<Vec<u8>>) -> Result<Request> {
    let url = self.site.join(endpoint).map_err(|source| JiraError::Url {
      endpoint: endpoint.to_string(),
      source,
    })?;

    let mut builder = self.http.request(method, url).header(ACCEPT, APPLICATION_JSON);

    if let Some(body) = body {
      builder = builder.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
    }

    if let Some(basic) = self.auth.basic_auth() {
      builder = builder.basic_auth(&basic.username, Some(&basic.token));
    }

    if let Some(user_agent) = self.auth.user_agent() {
      builder = builder.header(USER_AGENT, user_agent);
    }

    Ok(builder.build()?)
  }

  /// Send a request and classify the response by status code.
  ///
  /// # Errors
  ///
  /// Transport failures are returned as [`JiraError::Transport`]; statuses
  /// outside 200-299 as [`JiraError::Status`] carrying the raw response.
  #[instrument(skip_all, level = "debug", fields(method = %request.method(), url = %request.url()))]
  pub async fn call(&self, request: Request) -> Result<ResponseScheme> {
    let method = request.method().clone();
    debug!("Sending Jira API request");

    let response = self.http.execute(request).await?;
    transform_response(method, response).await
  }

  /// Send a request and decode the JSON body into `T`
  pub async fn call_json<T: DeserializeOwned>(&self, request: Request) -> Result<(T, ResponseScheme)> {
    let response = self.call(request).await?;

    match serde_json::from_slice::<T>(&response.bytes) {
      Ok(value) => Ok((value, response)),
      Err(source) => {
        warn!("Failed to decode Jira API response from {}: {}", response.endpoint, source);
        Err(JiraError::Decode {
          response: Box::new(response),
          source,
        })
      }
    }
  }

  /// Test the Jira connection by fetching the current user
  pub async fn test_connection(&self) -> Result<bool> {
    let request = self.new_request(Method::GET, &format!("{API_V3}/myself"), None)?;

    match self.call(request).await {
      Ok(_) => Ok(true),
      Err(JiraError::Status(_)) => Ok(false),
      Err(err) => Err(err),
    }
  }
}

/// Builder for [`JiraClient`]
#[derive(Debug)]
pub struct JiraClientBuilder {
  site: String,
  http: Option<Client>,
  auth: Authentication,
  timeout: Option<Duration>,
}

impl JiraClientBuilder {
  pub fn basic_auth(mut self, username: &str, token: &str) -> Self {
    self.auth.set_basic_auth(username, token);
    self
  }

  pub fn user_agent(mut self, user_agent: &str) -> Self {
    self.auth.set_user_agent(user_agent);
    self
  }

  /// Overall request timeout. Ignored when a custom client is supplied.
  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// Use a caller-configured `reqwest::Client`
  pub fn http_client(mut self, http: Client) -> Self {
    self.http = Some(http);
    self
  }

  pub fn build(self) -> Result<JiraClient> {
    let http = match (self.http, self.timeout) {
      (Some(http), _) => http,
      (None, Some(timeout)) => Client::builder().timeout(timeout).build()?,
      (None, None) => Client::new(),
    };

    Ok(JiraClient {
      http,
      site: parse_site(&self.site)?,
      auth: self.auth,
    })
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  JiraClient::builder(base_url).basic_auth(username, api_token).build()
}

/// JSON-encode a payload for a request body
pub fn encode_payload<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>> {
  serde_json::to_vec(payload).map_err(JiraError::Encode)
}

/// Read the full body of `response` and classify it by status code.
///
/// The body of a failed response is kept as-is; it is not required to be
/// JSON.
pub async fn transform_response(method: Method, response: Response) -> Result<ResponseScheme> {
  let code = response.status().as_u16();
  let endpoint = response.url().to_string();
  debug!("Jira API response status: {}", code);

  let bytes = response.bytes().await?.to_vec();
  trace!("Jira API response body: {}", String::from_utf8_lossy(&bytes));

  let scheme = ResponseScheme {
    code,
    endpoint,
    method,
    bytes,
  };

  if scheme.is_success() {
    Ok(scheme)
  } else {
    match scheme.api_error() {
      Some(api_error) => warn!("Jira API error: HTTP {} - {}", code, api_error),
      None => warn!("Unexpected Jira API error: HTTP {}", code),
    }
    Err(JiraError::Status(Box::new(scheme)))
  }
}

fn parse_site(site: &str) -> Result<Url> {
  let mut site = site.trim().to_string();
  if !site.ends_with('/') {
    site.push('/');
  }

  let url = Url::parse(&site).map_err(|source| JiraError::Url {
    endpoint: site.clone(),
    source,
  })?;

  if url.cannot_be_a_base() {
    return Err(JiraError::Url {
      endpoint: site,
      source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
    });
  }

  Ok(url)
}
