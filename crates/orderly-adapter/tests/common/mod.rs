/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for orderly-adapter tests

use orderly_adapter::{ClientConfig, Credentials, OrderlyClient};
use wiremock::MockServer;

/// Secret key whose derived public key is [`TEST_API_KEY`].
pub const TEST_SECRET_KEY: &str = "5Hd7DLap5XV5qP3tkTYKwrbkiB1mzc2v9gk5U1K52FDq";
pub const TEST_API_KEY: &str = "6Nn7hUFANgm2wbvy3A43ckuqFKqDCeggnae3219T7Yyq";
pub const TEST_ACCOUNT_ID: &str =
    "0xd8bc14ea4e7ab8c6ce4e832b1b7ee03f982295002312904d56b169ffb560f3db";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Complete test credentials
pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_SECRET_KEY, TEST_ACCOUNT_ID)
}

/// Client pointed at a mock server
pub fn test_client(server: &MockServer) -> OrderlyClient {
    OrderlyClient::with_config(test_credentials(), ClientConfig::default(), &server.uri())
        .expect("client should build against mock server uri")
}

/// Standard success envelope around endpoint data
pub fn success_body(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "success": true, "data": data })
}
