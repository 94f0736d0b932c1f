//! # Jira Cloud API Client
//!
//! Typed access to the Jira Cloud REST API v3 and the Jira Software agile
//! API. Services borrowed from [`JiraClient`] format endpoints, validate
//! identifiers and return the decoded result together with the raw
//! [`ResponseScheme`].
//!
//! ```no_run
//! # async fn run() -> jira_v3::Result<()> {
//! let client = jira_v3::create_jira_client("https://example.atlassian.net", "me@example.com", "api-token")?;
//! let (issue, response) = client.issues().get("KP-1", &["summary"], &[]).await?;
//! assert_eq!(response.code, 200);
//! # let _ = issue;
//! # Ok(())
//! # }
//! ```

pub mod auth;
mod client;
pub mod connect;
pub mod consts;
pub mod endpoints;
mod error;
pub mod models;
pub mod query;
mod response;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{Authentication, BasicAuth};
pub use client::{JiraClient, JiraClientBuilder, create_jira_client, encode_payload, transform_response};
pub use error::{JiraError, Result};
pub use query::Query;
pub use response::{ApiErrorScheme, ResponseScheme};
