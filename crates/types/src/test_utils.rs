//! Test utilities for creating common test objects
//!
//! Builders with realistic defaults for filing records and search responses,
//! shared by the unit tests of every crate and the integration tests.

use crate::{
	filings::{FilingRecord, FilingResult},
	search::{FilingSource, LookupSource, SearchHit, SearchResponse},
};

/// Builder for test `FilingRecord` values, defaulting to an Apple 10-K
#[derive(Debug, Clone)]
pub struct FilingRecordBuilder {
	record_id: String,
	form_type: String,
	file_date: String,
	accession_number: String,
	central_index_keys: Vec<String>,
	file_number: String,
	display_names: Option<Vec<String>>,
	file_description: Option<String>,
}

impl Default for FilingRecordBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl FilingRecordBuilder {
	pub fn new() -> Self {
		Self {
			record_id: "0000320193-23-000106:aapl-20230930.htm".to_string(),
			form_type: "10-K".to_string(),
			file_date: "2023-11-03".to_string(),
			accession_number: "0000320193-23-000106".to_string(),
			central_index_keys: vec!["0000320193".to_string()],
			file_number: "001-36743".to_string(),
			display_names: Some(vec!["Apple Inc.  (AAPL)  (CIK 0000320193)".to_string()]),
			file_description: Some("Annual report".to_string()),
		}
	}

	pub fn record_id(mut self, record_id: impl Into<String>) -> Self {
		self.record_id = record_id.into();
		self
	}

	pub fn form(mut self, form_type: impl Into<String>) -> Self {
		self.form_type = form_type.into();
		self
	}

	pub fn file_date(mut self, file_date: impl Into<String>) -> Self {
		self.file_date = file_date.into();
		self
	}

	pub fn accession(mut self, accession_number: impl Into<String>) -> Self {
		self.accession_number = accession_number.into();
		self
	}

	pub fn ciks<I, S>(mut self, ciks: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.central_index_keys = ciks.into_iter().map(Into::into).collect();
		self
	}

	pub fn file_number(mut self, file_number: impl Into<String>) -> Self {
		self.file_number = file_number.into();
		self
	}

	pub fn display_names(mut self, names: Option<Vec<String>>) -> Self {
		self.display_names = names;
		self
	}

	pub fn description(mut self, description: Option<&str>) -> Self {
		self.file_description = description.map(str::to_string);
		self
	}

	pub fn build(self) -> FilingRecord {
		FilingRecord {
			record_id: self.record_id,
			form_type: self.form_type,
			file_date: self.file_date,
			accession_number: self.accession_number,
			central_index_keys: self.central_index_keys,
			file_number: self.file_number,
			display_names: self.display_names,
			file_description: self.file_description,
		}
	}

	/// Same record as a search hit, the shape the search service returns
	pub fn build_hit(self) -> SearchHit<FilingSource> {
		SearchHit {
			id: self.record_id,
			source: FilingSource {
				form_type: self.form_type,
				file_date: self.file_date,
				accession_number: self.accession_number,
				ciks: self.central_index_keys,
				file_num: vec![self.file_number],
				display_names: self.display_names,
				file_description: self.file_description,
			},
		}
	}
}

/// Lookup response with a single issuer hit
pub fn lookup_response(raw_cik: &str, entity: &str) -> SearchResponse<LookupSource> {
	SearchResponse::from_hits(vec![SearchHit {
		id: raw_cik.to_string(),
		source: LookupSource {
			entity: Some(entity.to_string()),
			tickers: None,
		},
	}])
}

/// Lookup response without hits
pub fn empty_lookup_response() -> SearchResponse<LookupSource> {
	SearchResponse::from_hits(Vec::new())
}

/// Filing search response built from test records
pub fn filing_response(records: Vec<FilingRecordBuilder>) -> SearchResponse<FilingSource> {
	SearchResponse::from_hits(records.into_iter().map(FilingRecordBuilder::build_hit).collect())
}

/// Populated result with the given records
pub fn filing_result(company_name: &str, records: Vec<FilingRecordBuilder>) -> FilingResult {
	FilingResult {
		company_name: company_name.to_string(),
		filings: records.into_iter().map(FilingRecordBuilder::build).collect(),
	}
}
