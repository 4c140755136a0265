//! Core filing domain model
//!
//! Everything in this module is built fresh for a single request and dropped
//! once the response has been produced.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod documents;
pub mod errors;

pub use documents::{
	accession_without_dashes, document_url, pad_cik, unpadded_cik, CIK_WIDTH, EDGAR_ARCHIVES_BASE,
};
pub use errors::{ResolutionError, ResolutionResult};

/// Form types requested when the caller does not supply an override
pub const DEFAULT_FORM_TYPES: [&str; 9] = [
	"10-K", "10-Q", "8-K", "20-F", "S-1", "4", "424B5", "SC 13D", "SC 13G",
];

/// Date format used by the search service and in rendered pages
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 1-10 characters of ASCII letters, digits, `.` or `-`
pub fn is_valid_ticker(ticker: &str) -> bool {
	!ticker.is_empty()
		&& ticker.len() <= 10
		&& ticker
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

/// Trimmed, upper-cased ticker, `None` when it does not look like a ticker
pub fn normalize_ticker(raw: &str) -> Option<String> {
	let ticker = raw.trim().to_ascii_uppercase();
	is_valid_ticker(&ticker).then_some(ticker)
}

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DateRange {
	pub start: NaiveDate,
	pub end: NaiveDate,
}

impl DateRange {
	/// One calendar year ending at `today`.
	///
	/// Same month and day one year earlier. Feb 29 has no counterpart in the
	/// previous year and rolls forward to Mar 1.
	pub fn trailing_year(today: NaiveDate) -> Self {
		let year = today.year() - 1;
		let start = today
			.with_year(year)
			.or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
			.unwrap_or(NaiveDate::MIN);
		Self { start, end: today }
	}

	/// One calendar year ending today (UTC)
	pub fn current() -> Self {
		Self::trailing_year(Utc::now().date_naive())
	}

	pub fn start_param(&self) -> String {
		self.start.format(DATE_FORMAT).to_string()
	}

	pub fn end_param(&self) -> String {
		self.end.format(DATE_FORMAT).to_string()
	}

	pub fn contains(&self, date: NaiveDate) -> bool {
		date >= self.start && date <= self.end
	}
}

/// A single resolver invocation: which symbol, which forms, which window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingQuery {
	pub symbol: String,
	pub form_types: Vec<String>,
	pub date_range: DateRange,
}

impl FilingQuery {
	/// Query with the default form list over the trailing year ending today
	pub fn new(symbol: impl Into<String>) -> Self {
		Self::at(symbol, Utc::now().date_naive())
	}

	/// Query with the default form list over the trailing year ending at `today`
	pub fn at(symbol: impl Into<String>, today: NaiveDate) -> Self {
		Self {
			symbol: symbol.into(),
			form_types: DEFAULT_FORM_TYPES.iter().map(|f| f.to_string()).collect(),
			date_range: DateRange::trailing_year(today),
		}
	}

	/// Replace the form filter. Blank entries are ignored and an override that
	/// ends up empty keeps the default list.
	pub fn with_form_types<I, S>(mut self, forms: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let forms: Vec<String> = forms
			.into_iter()
			.map(|f| f.as_ref().trim().to_string())
			.filter(|f| !f.is_empty())
			.collect();
		if !forms.is_empty() {
			self.form_types = forms;
		}
		self
	}

	/// Comma-joined form list as sent in the `forms` query parameter
	pub fn forms_param(&self) -> String {
		self.form_types.join(",")
	}
}

/// Filing entity resolved from the first lookup hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
	/// CIK left-padded with zeros to [`CIK_WIDTH`] characters
	pub cik: String,
	pub display_name: String,
}

impl Issuer {
	pub fn new(raw_cik: &str, display_name: impl Into<String>) -> Self {
		Self {
			cik: pad_cik(raw_cik),
			display_name: display_name.into(),
		}
	}

	/// `"{name} (CIK {cik})"`, the entity filter understood by the search service
	pub fn entity_filter(&self) -> String {
		format!("{} (CIK {})", self.display_name, self.cik)
	}
}

/// One filing document as returned by the search service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct FilingRecord {
	pub record_id: String,
	pub form_type: String,
	/// `YYYY-MM-DD`
	pub file_date: String,
	/// Hyphenated accession number, e.g. `0000320193-23-000106`
	pub accession_number: String,
	pub central_index_keys: Vec<String>,
	pub file_number: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub display_names: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub file_description: Option<String>,
}

impl FilingRecord {
	/// Parsed filing date, `None` when the upstream value is not a calendar date
	pub fn filed_on(&self) -> Option<NaiveDate> {
		NaiveDate::parse_from_str(self.file_date.trim(), DATE_FORMAT).ok()
	}

	pub fn primary_cik(&self) -> Option<&str> {
		self.central_index_keys
			.first()
			.map(String::as_str)
			.filter(|cik| !cik.trim().is_empty())
	}

	/// Link to the filing on sec.gov, `None` without a central index key
	pub fn document_url(&self) -> Option<String> {
		self.primary_cik()
			.map(|cik| document_url(cik, &self.accession_number, &self.file_number))
	}
}

/// Result handed to the presentation layer
///
/// Either fully populated or absent: a missing result is expressed as
/// `Option<FilingResult>` by callers, never as a half-filled value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct FilingResult {
	pub company_name: String,
	pub filings: Vec<FilingRecord>,
}

impl FilingResult {
	pub fn is_empty(&self) -> bool {
		self.filings.is_empty()
	}

	/// Form type of the first listed filing
	pub fn lead_form_type(&self) -> Option<&str> {
		self.filings.first().map(|f| f.form_type.as_str())
	}
}
