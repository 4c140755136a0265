//! Test server for integration tests
//!
//! Spawns the full application on an ephemeral port

use std::sync::Arc;

use axum::Router;
use sec_filings::{mocks::MockSearchClient, FilingsAppBuilder, Settings};
use tokio::task::JoinHandle;

use super::api_fixtures::ApiFixtures;

/// Test server instance
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
	/// Spawn a test server backed by the demo mock client
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_client(MockSearchClient::demo()).await
	}

	pub async fn spawn_with_client(
		client: MockSearchClient,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _state) = FilingsAppBuilder::new()
			.with_settings(ApiFixtures::settings())
			.with_search_client(Arc::new(client))
			.start()
			.await?;
		Self::spawn_server_with_app(app).await
	}

	/// Spawn a test server that talks to a fake search service at `search_url`
	/// through the real EDGAR adapter
	pub async fn spawn_against_upstream(
		search_url: &str,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let mut settings: Settings = ApiFixtures::settings();
		settings.upstream.search_url = search_url.to_string();
		settings.upstream.timeout_ms = Some(2_000);

		let (app, _state) = FilingsAppBuilder::new()
			.with_settings(settings)
			.start()
			.await?;
		Self::spawn_server_with_app(app).await
	}

	/// Common server spawning logic
	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}
