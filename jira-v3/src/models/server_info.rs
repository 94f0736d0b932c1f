use serde::{Deserialize, Serialize};

/// Information about the Jira instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerInformationScheme {
  pub base_url: String,
  pub version: String,
  pub version_numbers: Vec<i32>,
  pub deployment_type: Option<String>,
  pub build_number: Option<i64>,
  pub build_date: Option<String>,
  pub server_time: Option<String>,
  pub scm_info: Option<String>,
  pub server_title: Option<String>,
}
