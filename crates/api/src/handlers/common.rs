use axum::{
	http::StatusCode,
	response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

use crate::render::RenderResult;
use sec_filings_types::FilingQuery;

/// Error response format shared by handlers
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

impl ErrorResponse {
	pub fn new(error: &str, message: impl Into<String>) -> Self {
		Self {
			error: error.to_string(),
			message: message.into(),
			timestamp: chrono::Utc::now().timestamp(),
		}
	}
}

/// Optional form filter shared by the page and the JSON API, e.g. `?forms=10-K,8-K`
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct FormsQuery {
	/// Comma-separated form types replacing the default list
	pub forms: Option<String>,
}

impl FormsQuery {
	/// Resolver query for `ticker` with the form override applied
	pub fn to_filing_query(&self, ticker: &str) -> FilingQuery {
		let query = FilingQuery::new(ticker);
		match self.forms.as_deref() {
			Some(forms) => query.with_form_types(forms.split(',')),
			None => query,
		}
	}
}

/// HTML response for a rendered page; render failures become a bare 500
pub fn html_response(status: StatusCode, rendered: RenderResult<String>) -> Response {
	match rendered {
		Ok(html) => (status, Html(html)).into_response(),
		Err(e) => {
			error!("Page rendering failed: {}", e);
			(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
		},
	}
}
