use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check endpoint
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/health",
	responses((status = 200, description = "Service healthy", body = String)),
	tag = "health"
))]
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ReadinessResponse {
	pub status: String,
	/// Name of the filing search backend
	pub upstream: String,
	pub upstream_healthy: bool,
}

/// GET /ready - Readiness probe that performs one symbol lookup upstream
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/ready",
	responses(
		(status = 200, description = "Upstream reachable", body = ReadinessResponse),
		(status = 503, description = "Upstream unreachable", body = ReadinessResponse)
	),
	tag = "health"
))]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let client = state.resolver.client();
	let upstream_healthy = client.health_check().await;

	let body = ReadinessResponse {
		status: if upstream_healthy { "ready" } else { "degraded" }.to_string(),
		upstream: client.name().to_string(),
		upstream_healthy,
	};
	let code = if upstream_healthy {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};
	(code, Json(body))
}
