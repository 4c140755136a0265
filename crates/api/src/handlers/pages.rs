//! HTML page handlers

use axum::{
	extract::{rejection::QueryRejection, Path, Query, State},
	http::{header, StatusCode},
	response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::handlers::common::{html_response, FormsQuery};
use crate::state::AppState;
use sec_filings_service::PageMetadata;
use sec_filings_types::normalize_ticker;

const STYLESHEET: &str = include_str!("../../assets/styles.css");

/// Query string of the header search form
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
	pub ticker: Option<String>,
}

/// GET / - Home page with the ticker search form
pub async fn home(State(state): State<AppState>) -> Response {
	let site = &state.settings.site;
	let meta = PageMetadata::for_home(site);
	html_response(
		StatusCode::OK,
		state.renderer.home(&meta, &site.sitemap_tickers, None),
	)
}

/// GET /filings?ticker=X - Redirect the search form to the ticker page
pub async fn search_redirect(
	State(state): State<AppState>,
	query: Result<Query<SearchQuery>, QueryRejection>,
) -> Response {
	let raw = match query {
		Ok(Query(query)) => query.ticker.unwrap_or_default(),
		Err(rejection) => {
			debug!("Rejecting search form query: {}", rejection);
			return search_form_error(&state, "Enter a single ticker symbol to search.");
		},
	};
	let raw = raw.trim();

	let error = if raw.is_empty() {
		"Enter a ticker symbol to search.".to_string()
	} else if let Some(ticker) = normalize_ticker(raw) {
		return Redirect::to(&format!("/filings/{}", ticker)).into_response();
	} else {
		format!(
			"\"{}\" is not a ticker symbol. Use 1 to 10 letters, digits, dots or dashes.",
			raw
		)
	};

	debug!("Rejecting search form submission: {}", error);
	search_form_error(&state, &error)
}

fn search_form_error(state: &AppState, error: &str) -> Response {
	let site = &state.settings.site;
	let meta = PageMetadata::for_home(site);
	html_response(
		StatusCode::BAD_REQUEST,
		state.renderer.home(&meta, &site.sitemap_tickers, Some(error)),
	)
}

/// GET /filings/{ticker} - Recent filings for one ticker
pub async fn filings_page(
	State(state): State<AppState>,
	Path(raw_ticker): Path<String>,
	forms: Result<Query<FormsQuery>, QueryRejection>,
) -> Response {
	let site = &state.settings.site;

	let Some(ticker) = normalize_ticker(&raw_ticker) else {
		debug!("Rejecting malformed ticker '{}'", raw_ticker);
		let shown = raw_ticker.trim().to_uppercase();
		let meta = PageMetadata::for_filings(&shown, None, site);
		return html_response(
			StatusCode::NOT_FOUND,
			state.renderer.notice(
				&meta,
				"Ticker not found",
				"That does not look like a ticker symbol. Tickers use 1 to 10 letters, digits, dots or dashes.",
			),
		);
	};

	let forms = match forms {
		Ok(Query(forms)) => forms,
		Err(rejection) => {
			debug!("Rejecting forms filter for {}: {}", ticker, rejection);
			let mut meta = PageMetadata::for_home(site);
			meta.title = format!("Invalid filter | {}", site.name);
			return html_response(
				StatusCode::BAD_REQUEST,
				state.renderer.notice(
					&meta,
					"Invalid filter",
					"Pass form types once, as a comma-separated list, e.g. ?forms=10-K,8-K",
				),
			);
		},
	};

	let query = forms.to_filing_query(&ticker);
	let result = state.resolver.resolve_query(&query).await;
	let meta = PageMetadata::for_filings(&ticker, result.as_ref(), site);

	match result {
		Some(result) => {
			info!(
				"Rendering {} filings for {}",
				result.filings.len(),
				ticker
			);
			html_response(
				StatusCode::OK,
				state.renderer.filings(&meta, &query, &result),
			)
		},
		None => html_response(
			StatusCode::NOT_FOUND,
			state.renderer.notice(
				&meta,
				&format!("No filings found for {}", ticker),
				"We could not find SEC filing data for this ticker. Check the symbol and try again.",
			),
		),
	}
}

/// Fallback for unknown paths
pub async fn not_found(State(state): State<AppState>) -> Response {
	let mut meta = PageMetadata::for_home(&state.settings.site);
	meta.title = format!("Page not found | {}", state.settings.site.name);
	html_response(
		StatusCode::NOT_FOUND,
		state.renderer.notice(
			&meta,
			"Page not found",
			"The page you requested does not exist.",
		),
	)
}

/// GET /assets/styles.css
pub async fn stylesheet() -> impl IntoResponse {
	(
		[
			(header::CONTENT_TYPE, "text/css; charset=utf-8"),
			(header::CACHE_CONTROL, "public, max-age=86400"),
		],
		STYLESHEET,
	)
}
