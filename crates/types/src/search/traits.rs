//! Client trait for the full-text filing search service

use async_trait::async_trait;
use std::fmt::Debug;

use super::{FilingSearchParams, FilingSource, LookupSource, SearchResponse};
use crate::filings::ResolutionResult;

/// Core trait for search service clients
///
/// The resolver only talks to the search service through this trait, so the
/// HTTP implementation can be swapped for a mock in tests and demos.
#[async_trait]
pub trait FilingSearchClient: Send + Sync + Debug {
	/// Free-text lookup of a ticker symbol (`keysTyped`)
	async fn lookup(&self, symbol: &str) -> ResolutionResult<SearchResponse<LookupSource>>;

	/// Filtered filing search for a single issuer
	async fn search(
		&self,
		params: &FilingSearchParams,
	) -> ResolutionResult<SearchResponse<FilingSource>>;

	/// Whether the search service is reachable
	///
	/// Default implementation reports healthy without a network call.
	async fn health_check(&self) -> bool {
		true
	}

	/// Human-readable client name used in logs
	fn name(&self) -> &str {
		"filing-search"
	}
}
