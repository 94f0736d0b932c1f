use reqwest::Method;

use crate::client::JiraClient;
use crate::consts::API_V3;
use crate::error::Result;
use crate::models::ServerInformationScheme;
use crate::response::ResponseScheme;

/// Instance information, borrowed from [`JiraClient::server_info`]
pub struct ServerInformationService<'a> {
  client: &'a JiraClient,
}

impl JiraClient {
  pub const fn server_info(&self) -> ServerInformationService<'_> {
    ServerInformationService { client: self }
  }
}

impl ServerInformationService<'_> {
  pub async fn get(&self) -> Result<(ServerInformationScheme, ResponseScheme)> {
    let request = self
      .client
      .new_request(Method::GET, &format!("{API_V3}/serverInfo"), None)?;
    self.client.call_json(request).await
  }
}
