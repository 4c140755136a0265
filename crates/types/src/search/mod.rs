//! Wire models of the full-text filing search service
//!
//! Responses follow an Elasticsearch-style envelope:
//! `{"hits": {"hits": [{"_id": "...", "_source": {...}}]}}`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::filings::{FilingQuery, FilingRecord, Issuer};

pub mod traits;

pub use traits::FilingSearchClient;

/// Top-level search response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse<T> {
	#[serde(default)]
	pub hits: Option<SearchHits<T>>,
}

impl<T> SearchResponse<T> {
	pub fn from_hits(hits: Vec<SearchHit<T>>) -> Self {
		Self {
			hits: Some(SearchHits { total: None, hits }),
		}
	}

	/// Hit list, `None` when the envelope has no `hits` object
	pub fn hit_list(&self) -> Option<&[SearchHit<T>]> {
		self.hits.as_ref().map(|h| h.hits.as_slice())
	}

	pub fn first_hit(&self) -> Option<&SearchHit<T>> {
		self.hit_list().and_then(|hits| hits.first())
	}

	pub fn into_hit_list(self) -> Option<Vec<SearchHit<T>>> {
		self.hits.map(|h| h.hits)
	}
}

/// `hits` object of the response envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHits<T> {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub total: Option<TotalHits>,
	#[serde(default)]
	pub hits: Vec<SearchHit<T>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TotalHits {
	pub value: u64,
	#[serde(default)]
	pub relation: Option<String>,
}

/// Single hit: identifier plus typed source document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit<T> {
	#[serde(rename = "_id")]
	pub id: String,
	#[serde(rename = "_source")]
	pub source: T,
}

/// Source document of a symbol lookup hit; the hit `_id` is the raw CIK
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LookupSource {
	#[serde(default)]
	pub entity: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tickers: Option<String>,
}

impl SearchHit<LookupSource> {
	/// Issuer described by this hit, `None` when the id or the entity name is missing
	pub fn to_issuer(&self) -> Option<Issuer> {
		let raw_cik = self.id.trim();
		let entity = self.source.entity.as_deref()?.trim();
		if raw_cik.is_empty() || entity.is_empty() {
			return None;
		}
		Some(Issuer::new(raw_cik, entity))
	}
}

/// Source document of a filing hit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilingSource {
	#[serde(rename = "form")]
	pub form_type: String,
	pub file_date: String,
	#[serde(rename = "adsh")]
	pub accession_number: String,
	#[serde(default)]
	pub ciks: Vec<String>,
	#[serde(default, deserialize_with = "one_or_many")]
	pub file_num: Vec<String>,
	#[serde(default)]
	pub display_names: Option<Vec<String>>,
	#[serde(default)]
	pub file_description: Option<String>,
}

impl From<SearchHit<FilingSource>> for FilingRecord {
	fn from(hit: SearchHit<FilingSource>) -> Self {
		let source = hit.source;
		Self {
			record_id: hit.id,
			form_type: source.form_type,
			file_date: source.file_date,
			accession_number: source.accession_number,
			central_index_keys: source.ciks,
			file_number: source.file_num.into_iter().next().unwrap_or_default(),
			display_names: source.display_names,
			file_description: source.file_description,
		}
	}
}

/// `file_num` arrives either as a plain string or as a list of strings
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum OneOrMany {
		One(String),
		Many(Vec<String>),
	}

	Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
		Some(OneOrMany::One(value)) => vec![value],
		Some(OneOrMany::Many(values)) => values,
		None => Vec::new(),
	})
}

/// Parameters of the filtered filing search (request #2)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingSearchParams {
	/// Zero-padded CIK
	pub ciks: String,
	/// `"{entity} (CIK {cik})"`
	pub entity_name: String,
	pub start_date: String,
	pub end_date: String,
	/// Comma-joined form list
	pub forms: String,
}

impl FilingSearchParams {
	pub fn new(issuer: &Issuer, query: &FilingQuery) -> Self {
		Self {
			ciks: issuer.cik.clone(),
			entity_name: issuer.entity_filter(),
			start_date: query.date_range.start_param(),
			end_date: query.date_range.end_param(),
			forms: query.forms_param(),
		}
	}

	/// Query string pairs in the order the search UI sends them
	pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
		vec![
			("dateRange", "custom".to_string()),
			("category", "custom".to_string()),
			("ciks", self.ciks.clone()),
			("entityName", self.entity_name.clone()),
			("startdt", self.start_date.clone()),
			("enddt", self.end_date.clone()),
			("forms", self.forms.clone()),
		]
	}
}
