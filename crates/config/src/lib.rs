//! SEC Filings Configuration
//!
//! Configuration management and startup utilities for the SEC filings viewer.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, load_config_from, ConfigError, ENV_PREFIX};
pub use settings::{
	ConfigValidationError, LogFormat, LoggingSettings, ServerSettings, Settings, SiteSettings,
	UpstreamSettings,
};
pub use startup_logger::{
	log_service_info, log_service_shutdown, log_settings_summary, log_startup_complete,
};
