//! Authentication holder shared by the client and its sub-clients.

use std::fmt;

/// Basic credentials: an Atlassian account email and API token
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
  pub username: String,
  pub token: String,
}

impl fmt::Debug for BasicAuth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BasicAuth")
      .field("username", &self.username)
      .field("token", &"<redacted>")
      .finish()
  }
}

/// Optional credentials and user agent applied to every outgoing request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authentication {
  basic: Option<BasicAuth>,
  user_agent: Option<String>,
}

impl Authentication {
  pub fn set_basic_auth(&mut self, username: &str, token: &str) {
    self.basic = Some(BasicAuth {
      username: username.to_string(),
      token: token.to_string(),
    });
  }

  pub const fn has_basic_auth(&self) -> bool {
    self.basic.is_some()
  }

  pub const fn basic_auth(&self) -> Option<&BasicAuth> {
    self.basic.as_ref()
  }

  pub fn set_user_agent(&mut self, user_agent: &str) {
    self.user_agent = Some(user_agent.to_string());
  }

  pub const fn has_user_agent(&self) -> bool {
    self.user_agent.is_some()
  }

  pub fn user_agent(&self) -> Option<&str> {
    self.user_agent.as_deref()
  }
}
