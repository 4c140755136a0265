//! SEC Filings Types
//!
//! Shared models and traits for the SEC filings viewer.
//! This crate contains the domain model produced by the filing resolver,
//! the wire models of the full-text search service and the client trait
//! the resolver talks through.

pub mod filings;
pub mod search;
pub mod test_utils;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use filings::{
	accession_without_dashes, document_url, is_valid_ticker, normalize_ticker, pad_cik,
	unpadded_cik, DateRange, FilingQuery, FilingRecord, FilingResult, Issuer, ResolutionError,
	ResolutionResult, CIK_WIDTH, DATE_FORMAT, DEFAULT_FORM_TYPES, EDGAR_ARCHIVES_BASE,
};

pub use search::{
	FilingSearchClient, FilingSearchParams, FilingSource, LookupSource, SearchHit, SearchHits,
	SearchResponse,
};
