//! Constants for the jira-v3 client.

/// User-Agent header value applied when callers do not configure their own
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Media type sent in the `Accept` and `Content-Type` headers
pub const APPLICATION_JSON: &str = "application/json";

/// Path prefix of the Jira platform REST API
pub const API_V3: &str = "rest/api/3";

/// Path prefix of the Jira Software (agile) REST API
pub const AGILE_V1: &str = "rest/agile/1.0";
