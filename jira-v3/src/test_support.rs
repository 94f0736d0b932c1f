//! Shared fixtures for the endpoint tests.

use wiremock::MockServer;

use crate::client::JiraClient;

/// `Authorization` header for test_user:test_token
pub(crate) const BASIC_HEADER: &str = "Basic dGVzdF91c2VyOnRlc3RfdG9rZW4=";

/// Start a mock server and a client authenticated against it
pub(crate) async fn setup() -> (MockServer, JiraClient) {
  let mock_server = MockServer::start().await;
  let client = JiraClient::builder(&mock_server.uri())
    .basic_auth("test_user", "test_token")
    .build()
    .expect("mock server uri is a valid site");
  (mock_server, client)
}

/// Fail the test if any request reaches the server
pub(crate) async fn expect_no_requests(mock_server: &MockServer) {
  wiremock::Mock::given(wiremock::matchers::any())
    .respond_with(wiremock::ResponseTemplate::new(200))
    .expect(0)
    .mount(mock_server)
    .await;
}
