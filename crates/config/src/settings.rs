//! Configuration settings structures

use sec_filings_types::is_valid_ticker;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use url::Url;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub upstream: UpstreamSettings,
	pub site: SiteSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Full-text search service configuration
///
/// The search service rejects requests carrying a default HTTP client user
/// agent, so `user_agent`, `authority` and `accept` reproduce the header set of
/// a mobile browser. Changing them can make every lookup fail.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamSettings {
	/// Search endpoint used for both the symbol lookup and the filing search
	pub search_url: String,
	pub user_agent: String,
	pub authority: String,
	pub accept: String,
	/// Extra headers sent with every request
	pub headers: Option<HashMap<String, String>>,
	/// Request timeout; transport defaults apply when unset
	pub timeout_ms: Option<u64>,
}

/// Public site configuration used for links, SEO metadata and the sitemap
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SiteSettings {
	/// Absolute base URL of the deployed site, without trailing slash
	pub base_url: String,
	pub name: String,
	/// Tickers listed in the sitemap and featured on the home page
	pub sitemap_tickers: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Validation errors for loaded settings
#[derive(Error, Debug, PartialEq)]
pub enum ConfigValidationError {
	#[error("Invalid search URL '{url}': {reason}")]
	InvalidSearchUrl { url: String, reason: String },

	#[error("Invalid site base URL '{url}': {reason}")]
	InvalidBaseUrl { url: String, reason: String },

	#[error("Invalid sitemap ticker: '{ticker}'")]
	InvalidTicker { ticker: String },

	#[error("Missing required field: {field}")]
	MissingRequiredField { field: String },
}

pub const DEFAULT_SEARCH_URL: &str = "https://efts.sec.gov/LATEST/search-index";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 6.0; Nexus 5 Build/MRA58N) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Mobile Safari/537.36";
pub const DEFAULT_AUTHORITY: &str = "www.sec.gov";
pub const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";
pub const DEFAULT_SITEMAP_TICKERS: [&str; 7] = ["AAPL", "TSLA", "MSFT", "NVDA", "GOOGL", "AMZN", "META"];

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3000,
		}
	}
}

impl Default for UpstreamSettings {
	fn default() -> Self {
		Self {
			search_url: DEFAULT_SEARCH_URL.to_string(),
			user_agent: DEFAULT_USER_AGENT.to_string(),
			authority: DEFAULT_AUTHORITY.to_string(),
			accept: DEFAULT_ACCEPT.to_string(),
			headers: None,
			timeout_ms: None,
		}
	}
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			base_url: "https://sec-tool-delta.vercel.app".to_string(),
			name: "SEC Filings Viewer".to_string(),
			sitemap_tickers: DEFAULT_SITEMAP_TICKERS
				.iter()
				.map(|t| t.to_string())
				.collect(),
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Validate the settings that cannot be checked by deserialization alone
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		Url::parse(&self.upstream.search_url).map_err(|e| {
			ConfigValidationError::InvalidSearchUrl {
				url: self.upstream.search_url.clone(),
				reason: e.to_string(),
			}
		})?;

		if self.upstream.user_agent.trim().is_empty() {
			return Err(ConfigValidationError::MissingRequiredField {
				field: "upstream.user_agent".to_string(),
			});
		}

		if self.site.base_url.trim().is_empty() {
			return Err(ConfigValidationError::MissingRequiredField {
				field: "site.base_url".to_string(),
			});
		}
		Url::parse(&self.site.base_url).map_err(|e| ConfigValidationError::InvalidBaseUrl {
			url: self.site.base_url.clone(),
			reason: e.to_string(),
		})?;

		if let Some(ticker) = self
			.site
			.sitemap_tickers
			.iter()
			.find(|t| !is_valid_ticker(t))
		{
			return Err(ConfigValidationError::InvalidTicker {
				ticker: ticker.clone(),
			});
		}

		Ok(())
	}

	/// Site base URL without trailing slash
	pub fn site_base_url(&self) -> &str {
		self.site.root_url()
	}
}

impl SiteSettings {
	/// Base URL without trailing slash, ready for path concatenation
	pub fn root_url(&self) -> &str {
		self.base_url.trim_end_matches('/')
	}

	/// Absolute URL for a site path such as `/filings/AAPL`
	pub fn absolute_url(&self, path: &str) -> String {
		format!("{}/{}", self.root_url(), path.trim_start_matches('/'))
	}
}
