//! Crawler-facing endpoints

use axum::{
	extract::State,
	http::{header, StatusCode},
	response::{IntoResponse, Response},
};
use tracing::error;

use crate::state::AppState;
use sec_filings_service::build_sitemap;

/// GET /sitemap.xml - Home page plus the configured tickers, stamped with the request time
pub async fn sitemap(State(state): State<AppState>) -> Response {
	let entries = build_sitemap(&state.settings.site, chrono::Utc::now());
	match state.renderer.sitemap(&entries) {
		Ok(xml) => ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml).into_response(),
		Err(e) => {
			error!("Sitemap rendering failed: {}", e);
			StatusCode::INTERNAL_SERVER_ERROR.into_response()
		},
	}
}

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
	let body = format!(
		"User-agent: *\nAllow: /\n\nSitemap: {}\n",
		state.settings.site.absolute_url("/sitemap.xml")
	);
	([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}
