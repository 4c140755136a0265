//! Filings JSON API handlers

use axum::{
	extract::{rejection::QueryRejection, Path, Query, State},
	http::StatusCode,
	response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::handlers::common::{ErrorResponse, FormsQuery};
use crate::state::AppState;
use sec_filings_service::clean_company_name;
use sec_filings_types::{normalize_ticker, DateRange, FilingRecord};

/// One filing plus its sec.gov link
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct FilingEntry {
	#[serde(flatten)]
	pub record: FilingRecord,
	pub document_url: Option<String>,
}

impl From<FilingRecord> for FilingEntry {
	fn from(record: FilingRecord) -> Self {
		let document_url = record.document_url();
		Self {
			record,
			document_url,
		}
	}
}

/// Response for GET /api/v1/filings/{ticker}
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct FilingsResponse {
	pub ticker: String,
	/// Entity name as the search service reports it
	pub company_name: String,
	/// Entity name with the trailing ticker list removed
	pub display_name: String,
	pub date_range: DateRange,
	pub form_types: Vec<String>,
	pub total_filings: usize,
	pub filings: Vec<FilingEntry>,
	pub timestamp: i64,
}

/// GET /api/v1/filings/{ticker} - Recent filings for one ticker
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/api/v1/filings/{ticker}",
	params(
		("ticker" = String, Path, description = "Ticker symbol, 1-10 of A-Z, 0-9, '.', '-'", example = "AAPL"),
		FormsQuery
	),
	responses(
		(status = 200, description = "Filings from the last 12 months", body = FilingsResponse),
		(status = 404, description = "No filings could be resolved", body = ErrorResponse)
	),
	tag = "filings"
))]
pub async fn get_filings(
	State(state): State<AppState>,
	Path(raw_ticker): Path<String>,
	forms: Result<Query<FormsQuery>, QueryRejection>,
) -> Result<Json<FilingsResponse>, (StatusCode, Json<ErrorResponse>)> {
	let Query(forms) = forms.map_err(|rejection| {
		(
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new("INVALID_QUERY", rejection.body_text())),
		)
	})?;

	let ticker = normalize_ticker(&raw_ticker).ok_or_else(|| {
		debug!("Rejecting malformed ticker '{}'", raw_ticker);
		(
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"FILINGS_NOT_FOUND",
				format!("'{}' is not a ticker symbol", raw_ticker.trim()),
			)),
		)
	})?;

	let query = forms.to_filing_query(&ticker);
	let result = state.resolver.resolve_query(&query).await.ok_or_else(|| {
		(
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"FILINGS_NOT_FOUND",
				format!("No filings found for {}", ticker),
			)),
		)
	})?;

	let response = FilingsResponse {
		display_name: clean_company_name(&result.company_name),
		company_name: result.company_name,
		date_range: query.date_range,
		form_types: query.form_types,
		total_filings: result.filings.len(),
		filings: result.filings.into_iter().map(FilingEntry::from).collect(),
		timestamp: chrono::Utc::now().timestamp(),
		ticker,
	};
	Ok(Json(response))
}
