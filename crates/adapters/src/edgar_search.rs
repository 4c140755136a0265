//! Full-text search adapter for efts.sec.gov
//!
//! One pooled `reqwest::Client` carries the browser header set for every
//! request. The search service blocks default HTTP client user agents, so the
//! headers are a hard compatibility requirement rather than decoration.

use async_trait::async_trait;
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT},
	Client,
};
use sec_filings_config::UpstreamSettings;
use sec_filings_types::{
	FilingSearchClient, FilingSearchParams, FilingSource, LookupSource, ResolutionError,
	ResolutionResult, SearchResponse,
};
use serde::de::DeserializeOwned;
use std::{str::FromStr, time::Duration};
use tracing::{debug, warn};
use url::Url;

/// Symbol used by the readiness probe
const HEALTH_CHECK_SYMBOL: &str = "AAPL";

/// Client for the SEC full-text filing search service
#[derive(Debug, Clone)]
pub struct EdgarSearchAdapter {
	client: Client,
	search_url: Url,
}

impl EdgarSearchAdapter {
	/// Create an adapter from upstream settings
	pub fn new(settings: &UpstreamSettings) -> ResolutionResult<Self> {
		let search_url =
			Url::parse(&settings.search_url).map_err(|e| ResolutionError::Client {
				reason: format!("Invalid search URL '{}': {}", settings.search_url, e),
			})?;

		let mut builder = Client::builder().default_headers(Self::default_headers(settings)?);
		if let Some(timeout_ms) = settings.timeout_ms {
			builder = builder.timeout(Duration::from_millis(timeout_ms));
		}
		let client = builder.build().map_err(|e| ResolutionError::Client {
			reason: format!("Failed to create HTTP client: {}", e),
		})?;

		Ok(Self { client, search_url })
	}

	/// Create an adapter against the public search endpoint
	pub fn with_default_config() -> ResolutionResult<Self> {
		Self::new(&UpstreamSettings::default())
	}

	pub fn search_url(&self) -> &Url {
		&self.search_url
	}

	/// Browser header set plus any configured extras
	fn default_headers(settings: &UpstreamSettings) -> ResolutionResult<HeaderMap> {
		let mut headers = HeaderMap::new();
		headers.insert(
			HeaderName::from_static("authority"),
			header_value("authority", &settings.authority)?,
		);
		headers.insert(ACCEPT, header_value("accept", &settings.accept)?);
		headers.insert(USER_AGENT, header_value("user-agent", &settings.user_agent)?);

		if let Some(extra) = &settings.headers {
			for (key, value) in extra {
				match (HeaderName::from_str(key), HeaderValue::from_str(value)) {
					(Ok(name), Ok(value)) => {
						headers.insert(name, value);
					},
					_ => warn!("Skipping invalid upstream header '{}'", key),
				}
			}
		}

		Ok(headers)
	}

	/// GET the search endpoint with the given query and decode the JSON body
	async fn get_json<T: DeserializeOwned>(
		&self,
		query: &[(&str, String)],
		operation: &str,
	) -> ResolutionResult<T> {
		debug!("Search {} request to {} with {:?}", operation, self.search_url, query);

		let response = self
			.client
			.get(self.search_url.clone())
			.query(query)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			warn!("Search {} endpoint returned status {}", operation, status);
			return Err(ResolutionError::from_http_failure(status.as_u16()));
		}

		let body = response.text().await?;
		debug!(
			"Search {} endpoint responded successfully with {} bytes",
			operation,
			body.len()
		);

		serde_json::from_str(&body).map_err(|e| {
			ResolutionError::parse(format!("Failed to parse search {} response: {}", operation, e))
		})
	}
}

fn header_value(name: &str, value: &str) -> ResolutionResult<HeaderValue> {
	HeaderValue::from_str(value).map_err(|e| ResolutionError::Client {
		reason: format!("Invalid value for header '{}': {}", name, e),
	})
}

#[async_trait]
impl FilingSearchClient for EdgarSearchAdapter {
	async fn lookup(&self, symbol: &str) -> ResolutionResult<SearchResponse<LookupSource>> {
		self.get_json(&[("keysTyped", symbol.to_string())], "lookup")
			.await
	}

	async fn search(
		&self,
		params: &FilingSearchParams,
	) -> ResolutionResult<SearchResponse<FilingSource>> {
		self.get_json(&params.query_pairs(), "filings").await
	}

	/// One live lookup per call, backing `/ready`.
	///
	/// Nothing is cached: readiness reflects whether efts.sec.gov currently
	/// accepts our requests. Keep orchestrator readiness probes infrequent
	/// (tens of seconds) and point liveness probes at `/health`, which never
	/// leaves the process.
	async fn health_check(&self) -> bool {
		match self.lookup(HEALTH_CHECK_SYMBOL).await {
			Ok(_) => true,
			Err(e) => {
				warn!("Search service health check failed: {}", e);
				false
			},
		}
	}

	fn name(&self) -> &str {
		"efts.sec.gov"
	}
}
