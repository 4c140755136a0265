//! SEC Filings Viewer Library
//!
//! Resolves stock tickers to their recent SEC filings through the EDGAR
//! full-text search service and serves them as HTML pages with SEO metadata,
//! a JSON API and a sitemap.

// Core domain types - the most commonly used types
pub use sec_filings_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	DateRange,
	FilingQuery,
	FilingRecord,
	FilingResult,
	// Search client seam
	FilingSearchClient,
	Issuer,
	ResolutionError,
	ResolutionResult,
	DEFAULT_FORM_TYPES,
};

// Service layer
pub use sec_filings_service::{
	build_sitemap, clean_company_name, FilingResolver, PageMetadata, SitemapEntry,
};

// API layer
pub use sec_filings_api::{create_router, AppState, PageRenderer};

// Adapters
pub use sec_filings_adapters::EdgarSearchAdapter;

// Config
pub use sec_filings_config::{load_config, log_service_info, log_startup_complete, Settings};

pub mod types {
	pub use sec_filings_types::*;
}

pub mod config {
	pub use sec_filings_config::*;
}

pub mod adapters {
	pub use sec_filings_adapters::*;
}

pub mod api {
	pub use sec_filings_api::*;
}

pub mod service {
	pub use sec_filings_service::*;
}

pub mod mocks;

use sec_filings_config::{log_service_shutdown, log_settings_summary, LogFormat};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

// Re-export external dependencies for demos and tests
pub use async_trait;
pub use reqwest;

/// Builder for the filings web application
#[derive(Default)]
pub struct FilingsAppBuilder {
	settings: Option<Settings>,
	search_client: Option<Arc<dyn FilingSearchClient>>,
}

impl FilingsAppBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Replace the EDGAR search adapter, e.g. with [`mocks::MockSearchClient`]
	pub fn with_search_client(mut self, client: Arc<dyn FilingSearchClient>) -> Self {
		self.search_client = Some(client);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
		// RUST_LOG wins over the configured level
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		let result = match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
		};
		result.map_err(|e| format!("Failed to initialize tracing: {}", e))?;

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Build the router and the shared state behind it
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings.validate()?;

		let search_client: Arc<dyn FilingSearchClient> = match self.search_client {
			Some(client) => client,
			None => Arc::new(EdgarSearchAdapter::new(&settings.upstream)?),
		};
		info!("Filing search backend: {}", search_client.name());

		let renderer = PageRenderer::new(&settings.site)?;

		let app_state = AppState {
			resolver: Arc::new(FilingResolver::new(search_client)),
			renderer: Arc::new(renderer),
			settings: Arc::new(settings),
		};

		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Binding and serving the application until Ctrl+C
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let mut load_error = None;
		let (settings, source) = match self.settings.take() {
			Some(settings) => (settings, "provided settings"),
			None => match load_config() {
				Ok(settings) => (settings, "config file and environment"),
				Err(e) => {
					load_error = Some(e);
					(Settings::default(), "defaults")
				},
			},
		};

		Self::init_tracing_from_settings(&settings)?;
		log_service_info();

		if let Some(e) = load_error {
			warn!("Failed to load configuration, falling back to defaults: {}", e);
		}
		info!("Using configuration: loaded from {}", source);
		log_settings_summary(&settings);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("Endpoints available:");
		info!("  GET  /");
		info!("  GET  /filings?ticker={{ticker}}");
		info!("  GET  /filings/{{ticker}}");
		info!("  GET  /api/v1/filings/{{ticker}}");
		info!("  GET  /sitemap.xml");
		info!("  GET  /robots.txt");
		info!("  GET  /health");
		info!("  GET  /ready");
		if cfg!(feature = "openapi") {
			info!("  GET  /swagger-ui");
			info!("  GET  /api-docs/openapi.json");
		}

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		log_service_shutdown();
		Ok(())
	}
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		warn!("Failed to listen for shutdown signal: {}", e);
		std::future::pending::<()>().await;
	}
}
