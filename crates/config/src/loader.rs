//! Configuration loading utilities

use crate::Settings;
use config::{Config, Environment, File};

pub use config::ConfigError;

/// Prefix of environment overrides, e.g. `SEC_FILINGS__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "SEC_FILINGS";

const DEFAULT_CONFIG_PATH: &str = "config/config";

/// Load configuration from `CONFIG_PATH` (default `config/config`) and the environment
///
/// The file is optional; every missing key falls back to `Settings::default()`.
pub fn load_config() -> Result<Settings, ConfigError> {
	let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
	load_config_from(&path)
}

/// Load configuration from the given file stem plus environment overrides
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__")
				.list_separator(",")
				.with_list_parse_key("site.sitemap_tickers")
				.try_parsing(true),
		)
		.build()?;

	s.try_deserialize()
}
