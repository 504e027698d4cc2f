//! Service tests against a mock provider
//!
//! WireMock stands in for the upstream API so status handling and URL shape
//! are exercised over real HTTP.

pub mod completion_client;

use wiremock::MockServer;

use crate::config::ProviderEndpoint;

pub const TEST_KEY: &str = "mock_api_key_for_testing";

pub fn endpoint_for(server: &MockServer) -> ProviderEndpoint {
    ProviderEndpoint::new(server.uri(), TEST_KEY)
}
