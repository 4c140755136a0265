//! Tests for the application builder

mod mocks;

use std::sync::Arc;

use mocks::ApiFixtures;
use sec_filings::{
	config::{LogFormat, LoggingSettings, ServerSettings},
	mocks::MockSearchClient,
	FilingsAppBuilder, Settings,
};

fn create_test_settings() -> Settings {
	Settings {
		server: ServerSettings {
			host: "127.0.0.1".to_string(),
			port: 3001,
		},
		logging: LoggingSettings {
			level: "debug".to_string(),
			format: LogFormat::Compact,
			structured: false,
		},
		..ApiFixtures::settings()
	}
}

#[tokio::test]
async fn test_builder_with_defaults_uses_edgar_adapter() {
	// No request is made while building
	let (_router, state) = FilingsAppBuilder::new().start().await.unwrap();

	assert_eq!(state.resolver.client().name(), "efts.sec.gov");
	assert_eq!(state.settings.bind_address(), "0.0.0.0:3000");
}

#[tokio::test]
async fn test_builder_with_settings_and_client() {
	let builder = FilingsAppBuilder::new()
		.with_settings(create_test_settings())
		.with_search_client(Arc::new(MockSearchClient::demo()));
	assert_eq!(builder.settings().unwrap().server.port, 3001);

	let (_router, state) = builder.start().await.unwrap();
	assert_eq!(state.resolver.client().name(), "mock");
	assert_eq!(state.settings.site.base_url, "https://filings.test");

	let result = state.resolver.resolve_filings("AAPL", None).await.unwrap();
	assert_eq!(result.filings.len(), 3);
}

#[tokio::test]
async fn test_builder_rejects_invalid_settings() {
	let mut settings = create_test_settings();
	settings.site.sitemap_tickers = vec!["NOT A TICKER".to_string()];

	let err = FilingsAppBuilder::new()
		.with_settings(settings)
		.with_search_client(Arc::new(MockSearchClient::new()))
		.start()
		.await
		.err()
		.unwrap();
	assert!(err.to_string().contains("NOT A TICKER"));

	let mut settings = create_test_settings();
	settings.upstream.search_url = "not a url".to_string();
	assert!(FilingsAppBuilder::new()
		.with_settings(settings)
		.start()
		.await
		.is_err());
}
