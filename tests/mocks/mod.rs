//! Centralized mocks and fixtures for testing
//!
//! Builds applications backed by the in-memory search client, spawns real
//! servers on ephemeral ports and provides upstream JSON bodies for wiremock.

pub mod api_fixtures;
pub mod test_server;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use api_fixtures::ApiFixtures;
#[allow(unused_imports)]
pub use test_server::TestServer;
