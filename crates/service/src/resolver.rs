//! Ticker to filing list resolution
//!
//! Two sequential search calls: the symbol lookup yields the issuer, the
//! filtered search yields its filings. Callers of [`FilingResolver::resolve_filings`]
//! get a value or nothing; the failure reason only ever reaches the logs.

use sec_filings_types::{
	DateRange, FilingQuery, FilingRecord, FilingResult, FilingSearchClient, FilingSearchParams,
	ResolutionError, ResolutionResult,
};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Resolves ticker symbols to recent filings through a search client
#[derive(Debug, Clone)]
pub struct FilingResolver {
	client: Arc<dyn FilingSearchClient>,
}

impl FilingResolver {
	pub fn new(client: Arc<dyn FilingSearchClient>) -> Self {
		Self { client }
	}

	pub fn client(&self) -> &Arc<dyn FilingSearchClient> {
		&self.client
	}

	/// Recent filings for `symbol`, or `None` when anything goes wrong
	///
	/// `form_types` overrides the default form list. The date window is the
	/// trailing year ending at the moment of the call.
	pub async fn resolve_filings(
		&self,
		symbol: &str,
		form_types: Option<&[String]>,
	) -> Option<FilingResult> {
		let mut query = FilingQuery::new(symbol);
		if let Some(forms) = form_types {
			query = query.with_form_types(forms);
		}
		self.resolve_query(&query).await
	}

	/// Same as [`Self::resolve_filings`] for a prepared query
	pub async fn resolve_query(&self, query: &FilingQuery) -> Option<FilingResult> {
		match self.resolve(query).await {
			Ok(result) => Some(result),
			Err(e) if e.is_not_found() => {
				info!(symbol = %query.symbol, "{}", e);
				None
			},
			Err(e) => {
				error!(
					symbol = %query.symbol,
					kind = e.kind(),
					"SEC search failed: {}",
					e
				);
				None
			},
		}
	}

	/// Resolve a query, keeping the failure kind
	pub async fn resolve(&self, query: &FilingQuery) -> ResolutionResult<FilingResult> {
		let lookup = self.client.lookup(&query.symbol).await?;

		let first_hit = lookup
			.first_hit()
			.ok_or_else(|| ResolutionError::not_found(query.symbol.clone()))?;
		let issuer = first_hit.to_issuer().ok_or_else(|| {
			ResolutionError::parse(format!(
				"lookup hit '{}' for {} has no usable id or entity name",
				first_hit.id, query.symbol
			))
		})?;

		debug!(
			"Resolved {} to {} (CIK {})",
			query.symbol, issuer.display_name, issuer.cik
		);

		let params = FilingSearchParams::new(&issuer, query);
		let hits = self
			.client
			.search(&params)
			.await?
			.into_hit_list()
			.ok_or_else(|| {
				ResolutionError::parse(format!(
					"filing search for CIK {} returned no hits object",
					issuer.cik
				))
			})?;

		let records: Vec<FilingRecord> = hits.into_iter().map(FilingRecord::from).collect();
		let received = records.len();
		let filings = within_range(records, &query.date_range);

		info!(
			"Resolved {} filings for {} ({} dropped outside {}..{})",
			filings.len(),
			query.symbol,
			received - filings.len(),
			query.date_range.start_param(),
			query.date_range.end_param()
		);

		Ok(FilingResult {
			company_name: issuer.display_name,
			filings,
		})
	}
}

/// Drop records dated outside `range` and order the rest newest first.
///
/// Records whose date does not parse are kept and listed last.
fn within_range(records: Vec<FilingRecord>, range: &DateRange) -> Vec<FilingRecord> {
	let mut kept: Vec<FilingRecord> = records
		.into_iter()
		.filter(|record| match record.filed_on() {
			Some(date) if !range.contains(date) => {
				debug!(
					"Dropping {} {} filed {} outside requested range",
					record.form_type, record.accession_number, record.file_date
				);
				false
			},
			_ => true,
		})
		.collect();

	kept.sort_by(|a, b| b.filed_on().cmp(&a.filed_on()));
	kept
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use sec_filings_types::{
		chrono::{NaiveDate, Utc},
		test_utils::{empty_lookup_response, filing_response, lookup_response, FilingRecordBuilder},
		FilingSource, LookupSource, SearchResponse,
	};
	use std::sync::Mutex;

	/// Search client replaying canned responses and recording search parameters
	#[derive(Debug)]
	struct ScriptedClient {
		lookup: Mutex<Option<ResolutionResult<SearchResponse<LookupSource>>>>,
		search: Mutex<Option<ResolutionResult<SearchResponse<FilingSource>>>>,
		seen_params: Mutex<Vec<FilingSearchParams>>,
	}

	impl ScriptedClient {
		fn new(
			lookup: ResolutionResult<SearchResponse<LookupSource>>,
			search: ResolutionResult<SearchResponse<FilingSource>>,
		) -> Arc<Self> {
			Arc::new(Self {
				lookup: Mutex::new(Some(lookup)),
				search: Mutex::new(Some(search)),
				seen_params: Mutex::new(Vec::new()),
			})
		}

		fn searches(&self) -> Vec<FilingSearchParams> {
			self.seen_params.lock().unwrap().clone()
		}
	}

	#[async_trait]
	impl FilingSearchClient for ScriptedClient {
		async fn lookup(&self, _symbol: &str) -> ResolutionResult<SearchResponse<LookupSource>> {
			self.lookup
				.lock()
				.unwrap()
				.take()
				.expect("lookup called more than once")
		}

		async fn search(
			&self,
			params: &FilingSearchParams,
		) -> ResolutionResult<SearchResponse<FilingSource>> {
			self.seen_params.lock().unwrap().push(params.clone());
			self.search
				.lock()
				.unwrap()
				.take()
				.expect("search called more than once")
		}
	}

	fn today() -> String {
		Utc::now().date_naive().format("%Y-%m-%d").to_string()
	}

	fn days_ago(days: i64) -> String {
		(Utc::now().date_naive() - sec_filings_types::chrono::Duration::days(days))
			.format("%Y-%m-%d")
			.to_string()
	}

	#[tokio::test]
	async fn test_resolves_company_and_filings() {
		let client = ScriptedClient::new(
			Ok(lookup_response("320193", "Apple Inc.  (AAPL)")),
			Ok(filing_response(vec![
				FilingRecordBuilder::new().form("10-Q").file_date(days_ago(10)),
				FilingRecordBuilder::new().form("8-K").file_date(days_ago(40)),
			])),
		);
		let resolver = FilingResolver::new(client.clone());

		let result = resolver.resolve_filings("AAPL", None).await.unwrap();
		assert_eq!(result.company_name, "Apple Inc.  (AAPL)");
		assert_eq!(result.filings.len(), 2);
		assert_eq!(result.lead_form_type(), Some("10-Q"));

		let searches = client.searches();
		assert_eq!(searches.len(), 1);
		let params = &searches[0];
		assert_eq!(params.ciks, "0000320193");
		assert_eq!(params.entity_name, "Apple Inc.  (AAPL) (CIK 0000320193)");
		assert_eq!(params.end_date, today());
		assert_eq!(params.forms, "10-K,10-Q,8-K,20-F,S-1,4,424B5,SC 13D,SC 13G");
	}

	#[tokio::test]
	async fn test_date_range_is_one_calendar_year() {
		let client = ScriptedClient::new(
			Ok(lookup_response("1318605", "Tesla, Inc.  (TSLA)")),
			Ok(filing_response(vec![])),
		);
		let resolver = FilingResolver::new(client.clone());
		resolver.resolve_filings("TSLA", None).await.unwrap();

		let params = &client.searches()[0];
		let end = NaiveDate::parse_from_str(&params.end_date, "%Y-%m-%d").unwrap();
		let start = NaiveDate::parse_from_str(&params.start_date, "%Y-%m-%d").unwrap();
		assert_eq!(DateRange::trailing_year(end).start, start);
	}

	#[tokio::test]
	async fn test_form_override_is_forwarded() {
		let client = ScriptedClient::new(
			Ok(lookup_response("789019", "MICROSOFT CORP  (MSFT)")),
			Ok(filing_response(vec![])),
		);
		let resolver = FilingResolver::new(client.clone());
		let forms = vec!["10-K".to_string(), "8-K".to_string()];

		let result = resolver.resolve_filings("MSFT", Some(&forms)).await.unwrap();
		assert!(result.is_empty());
		assert_eq!(client.searches()[0].forms, "10-K,8-K");
	}

	#[tokio::test]
	async fn test_no_hits_resolves_to_none() {
		let client = ScriptedClient::new(Ok(empty_lookup_response()), Ok(filing_response(vec![])));
		let resolver = FilingResolver::new(client.clone());

		assert!(resolver.resolve_filings("ZZZZZ", None).await.is_none());
		assert!(client.searches().is_empty());

		let client = ScriptedClient::new(Ok(empty_lookup_response()), Ok(filing_response(vec![])));
		let err = FilingResolver::new(client)
			.resolve(&FilingQuery::new("ZZZZZ"))
			.await
			.unwrap_err();
		assert!(err.is_not_found());
	}

	#[tokio::test]
	async fn test_missing_hits_envelope_resolves_to_none() {
		let client = ScriptedClient::new(
			Ok(SearchResponse { hits: None }),
			Ok(filing_response(vec![])),
		);
		assert!(FilingResolver::new(client)
			.resolve_filings("AAPL", None)
			.await
			.is_none());

		// Second call without a hits object is a shape error, not an empty list
		let client = ScriptedClient::new(
			Ok(lookup_response("320193", "Apple Inc.")),
			Ok(SearchResponse { hits: None }),
		);
		let err = FilingResolver::new(client)
			.resolve(&FilingQuery::new("AAPL"))
			.await
			.unwrap_err();
		assert_eq!(err.kind(), "parse");
	}

	#[tokio::test]
	async fn test_lookup_failure_resolves_to_none() {
		let client = ScriptedClient::new(
			Err(ResolutionError::from_http_failure(503)),
			Ok(filing_response(vec![])),
		);
		let resolver = FilingResolver::new(client.clone());
		assert!(resolver.resolve_filings("AAPL", None).await.is_none());
		assert!(client.searches().is_empty());
	}

	#[tokio::test]
	async fn test_search_failure_resolves_to_none() {
		let client = ScriptedClient::new(
			Ok(lookup_response("320193", "Apple Inc.")),
			Err(ResolutionError::parse("unexpected token")),
		);
		let resolver = FilingResolver::new(client.clone());
		assert!(resolver.resolve_filings("AAPL", None).await.is_none());
		assert_eq!(client.searches().len(), 1);
	}

	#[tokio::test]
	async fn test_hit_without_entity_resolves_to_none() {
		let lookup = SearchResponse::from_hits(vec![sec_filings_types::SearchHit {
			id: "320193".to_string(),
			source: LookupSource::default(),
		}]);
		let client = ScriptedClient::new(Ok(lookup), Ok(filing_response(vec![])));
		let err = FilingResolver::new(client)
			.resolve(&FilingQuery::new("AAPL"))
			.await
			.unwrap_err();
		assert_eq!(err.kind(), "parse");
	}

	#[test]
	fn test_within_range_filters_and_orders() {
		let range = DateRange::trailing_year(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
		let records = vec![
			FilingRecordBuilder::new().record_id("old").file_date("2023-05-31").build(),
			FilingRecordBuilder::new().record_id("mid").file_date("2023-12-01").build(),
			FilingRecordBuilder::new().record_id("undated").file_date("").build(),
			FilingRecordBuilder::new().record_id("new").file_date("2024-06-01").build(),
			FilingRecordBuilder::new().record_id("future").file_date("2024-06-02").build(),
			FilingRecordBuilder::new().record_id("first").file_date("2023-06-01").build(),
		];

		let ids: Vec<String> = within_range(records, &range)
			.into_iter()
			.map(|r| r.record_id)
			.collect();
		assert_eq!(ids, vec!["new", "mid", "first", "undated"]);
	}
}
