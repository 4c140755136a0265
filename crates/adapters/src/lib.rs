//! SEC Filings Adapters
//!
//! Clients for the SEC full-text filing search service.

pub mod edgar_search;

pub use edgar_search::EdgarSearchAdapter;
pub use sec_filings_types::{FilingSearchClient, ResolutionError, ResolutionResult};
