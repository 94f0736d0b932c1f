//! Shapes shared by several resource families.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of a `startAt`/`maxResults` paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
  #[serde(rename = "self", default)]
  pub self_url: Option<String>,
  #[serde(default)]
  pub next_page: Option<String>,
  #[serde(default)]
  pub start_at: i64,
  #[serde(default)]
  pub max_results: i64,
  #[serde(default)]
  pub total: i64,
  #[serde(default)]
  pub is_last: bool,
  #[serde(default = "Vec::new")]
  pub values: Vec<T>,
}

/// Links to the avatar of a user or project at each size
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarUrlScheme {
  #[serde(rename = "16x16", default)]
  pub x16: Option<String>,
  #[serde(rename = "24x24", default)]
  pub x24: Option<String>,
  #[serde(rename = "32x32", default)]
  pub x32: Option<String>,
  #[serde(rename = "48x48", default)]
  pub x48: Option<String>,
}

/// `{"accountId": "..."}` body used by assign, owner change and group membership
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountIdScheme {
  pub account_id: String,
}

/// A node of the Atlassian Document Format used for rich text fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdfNode {
  #[serde(rename = "type")]
  pub node_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content: Option<Vec<AdfNode>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attrs: Option<Map<String, Value>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub marks: Option<Vec<AdfMark>>,
}

/// Formatting applied to an ADF text node (strong, em, link, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdfMark {
  #[serde(rename = "type")]
  pub mark_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attrs: Option<Map<String, Value>>,
}

impl AdfNode {
  /// Root `doc` node wrapping `content`
  pub fn doc(content: Vec<AdfNode>) -> Self {
    Self {
      node_type: "doc".to_string(),
      version: Some(1),
      content: Some(content),
      ..Default::default()
    }
  }

  pub fn paragraph(content: Vec<AdfNode>) -> Self {
    Self {
      node_type: "paragraph".to_string(),
      content: Some(content),
      ..Default::default()
    }
  }

  pub fn text(text: &str) -> Self {
    Self {
      node_type: "text".to_string(),
      text: Some(text.to_string()),
      ..Default::default()
    }
  }

  /// A document made of one paragraph per line of `text`
  pub fn from_plain_text(text: &str) -> Self {
    let paragraphs = text
      .lines()
      .map(|line| {
        if line.is_empty() {
          Self::paragraph(Vec::new())
        } else {
          Self::paragraph(vec![Self::text(line)])
        }
      })
      .collect();
    Self::doc(paragraphs)
  }

  /// Concatenated text of the node tree, paragraphs separated by newlines
  pub fn plain_text(&self) -> String {
    let mut out = String::new();
    self.collect_text(&mut out);
    out.trim_end_matches('\n').to_string()
  }

  fn collect_text(&self, out: &mut String) {
    if let Some(text) = &self.text {
      out.push_str(text);
    }
    if let Some(children) = &self.content {
      for child in children {
        child.collect_text(out);
      }
    }
    if matches!(self.node_type.as_str(), "paragraph" | "heading" | "codeBlock") {
      out.push('\n');
    }
  }
}
