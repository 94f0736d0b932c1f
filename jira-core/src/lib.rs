//! # Jira Core Library
//!
//! Host resolution, credential lookup and on-disk configuration shared by
//! the Jira client crate and the `jira` command line tool. Nothing in here
//! talks to the network.

pub mod config;
pub mod creds;
pub mod url;

pub use config::JiraConfig;
pub use creds::{Credentials, get_jira_credentials, get_jira_credentials_with};
pub use crate::url::{ENV_JIRA_HOST, ensure_url_scheme, resolve_jira_base_url};
