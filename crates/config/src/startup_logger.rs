//! Service startup logging for the SEC filings viewer
//!
//! This module provides logging for service startup, including service
//! information, environment details, and system information.

use std::env;
use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info() {
	// Use the root package name, not the current crate
	let service_name = "sec-filings";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== SEC Filings Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);

	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	if let Ok(config_path) = env::var("CONFIG_PATH") {
		info!("📋 Config Path: {}", config_path);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs the upstream and site settings the server runs with
pub fn log_settings_summary(settings: &Settings) {
	info!("🔎 Search endpoint: {}", settings.upstream.search_url);
	match settings.upstream.timeout_ms {
		Some(ms) => info!("⏱️ Upstream timeout: {}ms", ms),
		None => info!("⏱️ Upstream timeout: transport default"),
	}
	info!("🌍 Site base URL: {}", settings.site.base_url);
	info!(
		"🗺️ Sitemap tickers: {}",
		settings.site.sitemap_tickers.join(", ")
	);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 SEC Filings Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ SEC Filings Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}
