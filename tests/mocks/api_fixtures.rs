//! Application and upstream fixtures

use std::sync::Arc;

use axum::{
	body::Body,
	http::{Request, Response},
	Router,
};
use sec_filings::{
	mocks::{days_ago, MockSearchClient},
	serde_json::{json, Value},
	FilingsAppBuilder, Settings,
};
use tower::ServiceExt;

pub const TEST_BASE_URL: &str = "https://filings.test";

pub struct ApiFixtures;

#[allow(dead_code)]
impl ApiFixtures {
	/// Default settings pointed at a test site URL
	pub fn settings() -> Settings {
		let mut settings = Settings::default();
		settings.site.base_url = TEST_BASE_URL.to_string();
		settings
	}

	/// Router backed by [`MockSearchClient::demo`]
	pub async fn demo_app() -> (Router, Arc<MockSearchClient>) {
		Self::app_with(MockSearchClient::demo()).await
	}

	/// Router backed by the given mock, which is returned for call assertions
	pub async fn app_with(client: MockSearchClient) -> (Router, Arc<MockSearchClient>) {
		let client = Arc::new(client);
		let (router, _state) = FilingsAppBuilder::new()
			.with_settings(Self::settings())
			.with_search_client(client.clone())
			.start()
			.await
			.expect("application should start");
		(router, client)
	}

	pub async fn get(app: Router, uri: &str) -> Response<Body> {
		app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
			.await
			.unwrap()
	}

	pub async fn body_string(response: Response<Body>) -> String {
		let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.unwrap();
		String::from_utf8(bytes.to_vec()).unwrap()
	}

	pub async fn body_json(response: Response<Body>) -> Value {
		let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.unwrap();
		serde_json::from_slice(&bytes).unwrap()
	}

	/// Symbol lookup body as efts.sec.gov returns it
	pub fn lookup_body(raw_cik: &str, entity: &str) -> Value {
		json!({
			"hits": {
				"total": {"value": 1, "relation": "eq"},
				"hits": [{
					"_id": raw_cik,
					"_source": {"entity": entity, "tickers": "AAPL"}
				}]
			}
		})
	}

	pub fn empty_lookup_body() -> Value {
		json!({"hits": {"total": {"value": 0, "relation": "eq"}, "hits": []}})
	}

	/// Filing search body with a recent 10-Q, an 8-K, and one filing older
	/// than the requested window
	pub fn filings_body() -> Value {
		json!({
			"hits": {
				"total": {"value": 3, "relation": "eq"},
				"hits": [
					{
						"_id": "0000320193-24-000080:form8-k.htm",
						"_source": {
							"form": "8-K",
							"file_date": days_ago(45),
							"adsh": "0000320193-24-000080",
							"ciks": ["0000320193"],
							"file_num": ["001-36743"],
							"display_names": ["Apple Inc.  (AAPL)  (CIK 0000320193)"],
							"file_description": "Current report"
						}
					},
					{
						"_id": "0000320193-24-000081:aapl-20240629.htm",
						"_source": {
							"form": "10-Q",
							"file_date": days_ago(20),
							"adsh": "0000320193-24-000081",
							"ciks": ["0000320193"],
							"file_num": "001-36743",
							"display_names": ["Apple Inc.  (AAPL)  (CIK 0000320193)"]
						}
					},
					{
						"_id": "0000320193-22-000108:aapl-20220924.htm",
						"_source": {
							"form": "10-K",
							"file_date": days_ago(800),
							"adsh": "0000320193-22-000108",
							"ciks": ["0000320193"],
							"file_num": ["001-36743"]
						}
					}
				]
			}
		})
	}
}
