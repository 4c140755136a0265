use crate::handlers::{common::ErrorResponse, filings, health};
use utoipa::OpenApi;

use crate::handlers::filings::{FilingEntry, FilingsResponse};
use crate::handlers::health::ReadinessResponse;
use sec_filings_types::{DateRange, FilingRecord};

#[derive(OpenApi)]
#[openapi(
	paths(health::health, health::ready, filings::get_filings,),
	components(schemas(
		FilingsResponse,
		FilingEntry,
		FilingRecord,
		DateRange,
		ErrorResponse,
		ReadinessResponse
	)),
	tags(
		(name = "filings", description = "Recent SEC filings by ticker"),
		(name = "health", description = "Health and readiness endpoints")
	)
)]
pub struct ApiDoc;
