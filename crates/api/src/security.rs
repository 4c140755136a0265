//! Security-related HTTP response headers setup

use axum::{
	http::header::{HeaderName, HeaderValue},
	Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

/// Pages load only same-origin styles; the JSON-LD block is a data script and never executes
const CONTENT_SECURITY_POLICY: &str =
	"default-src 'self'; img-src 'self' data:; base-uri 'self'; form-action 'self'; frame-ancestors 'none'";

/// Apply a stack of default security headers to the provided router.
pub fn add_security_headers<S>(router: Router<S>) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	router.layer(
		ServiceBuilder::new()
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("strict-transport-security"),
				HeaderValue::from_static("max-age=31536000; includeSubDomains; preload"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("x-content-type-options"),
				HeaderValue::from_static("nosniff"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("x-frame-options"),
				HeaderValue::from_static("DENY"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("referrer-policy"),
				HeaderValue::from_static("strict-origin-when-cross-origin"),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("content-security-policy"),
				HeaderValue::from_static(CONTENT_SECURITY_POLICY),
			))
			.layer(SetResponseHeaderLayer::if_not_present(
				HeaderName::from_static("cache-control"),
				HeaderValue::from_static("no-cache"),
			)),
	)
}
