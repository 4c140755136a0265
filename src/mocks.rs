//! Mock search client for demos and testing
//!
//! Serves canned lookup and filing responses from memory so the whole
//! application can run without reaching efts.sec.gov.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sec_filings_types::chrono::{Duration, Utc};
use sec_filings_types::test_utils::{empty_lookup_response, filing_response, lookup_response};
use sec_filings_types::{
	pad_cik, FilingSearchClient, FilingSearchParams, FilingSource, LookupSource, ResolutionError,
	ResolutionResult, SearchResponse, DATE_FORMAT,
};

pub use sec_filings_types::test_utils::FilingRecordBuilder;

/// A company known to the mock client
#[derive(Debug, Clone)]
pub struct MockCompany {
	pub symbol: String,
	pub raw_cik: String,
	pub entity: String,
	pub filings: Vec<FilingRecordBuilder>,
}

/// In-memory `FilingSearchClient`
///
/// Unknown symbols produce an empty lookup. Symbols registered with
/// [`MockSearchClient::with_failure`] fail with an upstream status error.
#[derive(Debug)]
pub struct MockSearchClient {
	companies: Vec<MockCompany>,
	failing: HashSet<String>,
	healthy: bool,
	lookups: AtomicUsize,
	searches: AtomicUsize,
}

impl Default for MockSearchClient {
	fn default() -> Self {
		Self::new()
	}
}

impl MockSearchClient {
	/// Client that knows no companies
	pub fn new() -> Self {
		Self {
			companies: Vec::new(),
			failing: HashSet::new(),
			healthy: true,
			lookups: AtomicUsize::new(0),
			searches: AtomicUsize::new(0),
		}
	}

	/// Apple with three recent filings, Microsoft with one, and a quiet shell
	/// company with none
	pub fn demo() -> Self {
		Self::new()
			.with_company(
				"AAPL",
				"320193",
				"Apple Inc.  (AAPL)",
				vec![
					FilingRecordBuilder::new()
						.record_id("0000320193-24-000081:aapl-20240629.htm")
						.form("10-Q")
						.file_date(days_ago(20))
						.accession("0000320193-24-000081")
						.description(Some("Quarterly report")),
					FilingRecordBuilder::new()
						.record_id("0000320193-24-000080:form8-k.htm")
						.form("8-K")
						.file_date(days_ago(45))
						.accession("0000320193-24-000080")
						.description(Some("Current report")),
					FilingRecordBuilder::new().file_date(days_ago(200)),
				],
			)
			.with_company(
				"MSFT",
				"789019",
				"MICROSOFT CORP  (MSFT)",
				vec![FilingRecordBuilder::new()
					.record_id("0000950170-24-087843:msft-10k_20240630.htm")
					.file_date(days_ago(90))
					.accession("0000950170-24-087843")
					.ciks(["0000789019"])
					.file_number("001-37845")
					.display_names(Some(vec![
						"MICROSOFT CORP  (MSFT)  (CIK 0000789019)".to_string()
					]))],
			)
			.with_company("QUIET", "1999999", "Quiet Holdings Corp  (QUIET)", vec![])
	}

	pub fn with_company(
		mut self,
		symbol: &str,
		raw_cik: &str,
		entity: &str,
		filings: Vec<FilingRecordBuilder>,
	) -> Self {
		self.companies.push(MockCompany {
			symbol: symbol.to_uppercase(),
			raw_cik: raw_cik.to_string(),
			entity: entity.to_string(),
			filings,
		});
		self
	}

	/// Make every lookup for `symbol` fail with a 503
	pub fn with_failure(mut self, symbol: &str) -> Self {
		self.failing.insert(symbol.to_uppercase());
		self
	}

	/// Report the upstream as unreachable from `health_check`
	pub fn unhealthy(mut self) -> Self {
		self.healthy = false;
		self
	}

	pub fn lookup_count(&self) -> usize {
		self.lookups.load(Ordering::SeqCst)
	}

	pub fn search_count(&self) -> usize {
		self.searches.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl FilingSearchClient for MockSearchClient {
	async fn lookup(&self, symbol: &str) -> ResolutionResult<SearchResponse<LookupSource>> {
		self.lookups.fetch_add(1, Ordering::SeqCst);
		let symbol = symbol.to_uppercase();

		if self.failing.contains(&symbol) {
			return Err(ResolutionError::from_http_failure(503));
		}

		Ok(self
			.companies
			.iter()
			.find(|c| c.symbol == symbol)
			.map(|c| lookup_response(&c.raw_cik, &c.entity))
			.unwrap_or_else(empty_lookup_response))
	}

	async fn search(
		&self,
		params: &FilingSearchParams,
	) -> ResolutionResult<SearchResponse<FilingSource>> {
		self.searches.fetch_add(1, Ordering::SeqCst);

		Ok(self
			.companies
			.iter()
			.find(|c| pad_cik(&c.raw_cik) == params.ciks)
			.map(|c| filing_response(c.filings.clone()))
			.unwrap_or_else(|| filing_response(Vec::new())))
	}

	async fn health_check(&self) -> bool {
		self.healthy
	}

	fn name(&self) -> &str {
		"mock"
	}
}

/// `YYYY-MM-DD` for `days` days before today
pub fn days_ago(days: i64) -> String {
	(Utc::now().date_naive() - Duration::days(days))
		.format(DATE_FORMAT)
		.to_string()
}
