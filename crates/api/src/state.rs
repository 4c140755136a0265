use std::sync::Arc;

use sec_filings_config::Settings;
use sec_filings_service::FilingResolver;

use crate::render::PageRenderer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub resolver: Arc<FilingResolver>,
	pub renderer: Arc<PageRenderer>,
	pub settings: Arc<Settings>,
}
