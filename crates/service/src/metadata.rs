//! Page metadata for filing pages
//!
//! Derives everything a page needs besides its body: title, description,
//! canonical URL, Open Graph tags and the JSON-LD structured-data block.

use regex::Regex;
use sec_filings_config::SiteSettings;
use sec_filings_types::{FilingRecord, FilingResult};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::LazyLock;

/// Trailing ticker suffix as the search service appends it: `"Apple Inc.  (AAPL)"`,
/// `"Alphabet Inc.  (GOOGL, GOOG)"`
static TICKER_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\s*\([A-Z0-9.\-]+(?:,\s*[A-Z0-9.\-]+)*\)\s*$")
		.expect("ticker suffix pattern is valid")
});

/// Strip the trailing parenthetical ticker list from a company name
pub fn clean_company_name(name: &str) -> String {
	TICKER_SUFFIX.replace(name, "").trim().to_string()
}

/// Which view a filing page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
	/// At least one filing to list
	Listing,
	/// Company resolved but nothing filed in range
	Empty,
	/// Nothing resolved for the ticker
	NotFound,
}

impl PageState {
	pub fn of(result: Option<&FilingResult>) -> Self {
		match result {
			None => Self::NotFound,
			Some(result) if result.is_empty() => Self::Empty,
			Some(_) => Self::Listing,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraphTag {
	pub property: String,
	pub content: String,
}

impl OpenGraphTag {
	fn new(property: &str, content: impl Into<String>) -> Self {
		Self {
			property: property.to_string(),
			content: content.into(),
		}
	}
}

/// SEO metadata for one rendered page
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
	pub title: String,
	pub description: String,
	pub canonical_url: String,
	pub open_graph: Vec<OpenGraphTag>,
	pub json_ld: Value,
}

impl PageMetadata {
	/// Metadata for `/filings/{ticker}`
	///
	/// The title leads with the most recent form type when there are filings,
	/// and the empty and not-found states each get their own wording.
	pub fn for_filings(ticker: &str, result: Option<&FilingResult>, site: &SiteSettings) -> Self {
		let canonical_url = site.absolute_url(&format!("/filings/{}", ticker));

		let (title, description, about) = match (PageState::of(result), result) {
			(PageState::Listing, Some(result)) => {
				let company = clean_company_name(&result.company_name);
				let lead = result.lead_form_type().unwrap_or("filing");
				(
					format!("{} ({}) SEC Filings: Latest {} | {}", company, ticker, lead, site.name),
					format!(
						"Browse {} recent SEC filings from {} ({}), including the latest {}, with direct links to the original documents on sec.gov.",
						result.filings.len(),
						company,
						ticker,
						lead
					),
					Some(company),
				)
			},
			(PageState::Empty, Some(result)) => {
				let company = clean_company_name(&result.company_name);
				(
					format!("{} ({}) SEC Filings | {}", company, ticker, site.name),
					format!(
						"No SEC filings from {} ({}) matched the selected form types in the last 12 months.",
						company, ticker
					),
					Some(company),
				)
			},
			_ => (
				format!("{} Filings Not Found | {}", ticker, site.name),
				format!(
					"No SEC filing data could be found for {}. Check the ticker symbol and try again.",
					ticker
				),
				None,
			),
		};

		let mut json_ld = json!({
			"@context": "https://schema.org",
			"@type": "WebPage",
			"name": title,
			"description": description,
			"url": canonical_url,
		});
		if let Some(company) = about {
			json_ld["about"] = json!({
				"@type": "Corporation",
				"name": company,
				"tickerSymbol": ticker,
			});
		}
		if let Some(latest) = result.and_then(|r| r.filings.first()) {
			json_ld["dateModified"] = Value::String(latest.file_date.clone());
		}

		Self::assemble(title, description, canonical_url, "article", site, json_ld)
	}

	/// Metadata for the home page
	pub fn for_home(site: &SiteSettings) -> Self {
		let title = format!("{}: Recent SEC Filings by Ticker", site.name);
		let description = "Look up recent 10-K, 10-Q, 8-K and other SEC filings for any public company by ticker symbol.".to_string();
		let canonical_url = site.absolute_url("/");

		let json_ld = json!({
			"@context": "https://schema.org",
			"@type": "WebSite",
			"name": site.name,
			"description": description,
			"url": canonical_url,
			"potentialAction": {
				"@type": "SearchAction",
				"target": format!("{}/filings/{{ticker}}", site.root_url()),
				"query-input": "required name=ticker",
			},
		});

		Self::assemble(title, description, canonical_url, "website", site, json_ld)
	}

	fn assemble(
		title: String,
		description: String,
		canonical_url: String,
		og_type: &str,
		site: &SiteSettings,
		json_ld: Value,
	) -> Self {
		let open_graph = vec![
			OpenGraphTag::new("og:title", title.clone()),
			OpenGraphTag::new("og:description", description.clone()),
			OpenGraphTag::new("og:url", canonical_url.clone()),
			OpenGraphTag::new("og:type", og_type),
			OpenGraphTag::new("og:site_name", site.name.clone()),
		];

		Self {
			title,
			description,
			canonical_url,
			open_graph,
			json_ld,
		}
	}

	/// JSON-LD serialized for embedding inside a `<script>` element
	///
	/// Markup characters only ever occur inside JSON strings, where the
	/// `\u` escapes decode to the same text.
	pub fn json_ld_script(&self) -> String {
		self.json_ld
			.to_string()
			.replace('&', "\\u0026")
			.replace('<', "\\u003c")
			.replace('>', "\\u003e")
	}
}

/// One filing card as the page templates consume it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilingView {
	pub form_type: String,
	pub file_date: String,
	pub accession_number: String,
	pub description: Option<String>,
	pub display_names: Vec<String>,
	pub document_url: Option<String>,
}

impl FilingView {
	pub fn list(result: &FilingResult) -> Vec<Self> {
		result.filings.iter().map(Self::from).collect()
	}
}

impl From<&FilingRecord> for FilingView {
	fn from(record: &FilingRecord) -> Self {
		Self {
			form_type: record.form_type.clone(),
			file_date: record.file_date.clone(),
			accession_number: record.accession_number.clone(),
			description: record
				.file_description
				.as_deref()
				.map(str::trim)
				.filter(|d| !d.is_empty())
				.map(str::to_string),
			display_names: record.display_names.clone().unwrap_or_default(),
			document_url: record.document_url(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use sec_filings_types::test_utils::{filing_result, FilingRecordBuilder};

	fn site() -> SiteSettings {
		SiteSettings {
			base_url: "https://filings.example.com/".to_string(),
			..SiteSettings::default()
		}
	}

	fn og<'a>(meta: &'a PageMetadata, property: &str) -> Option<&'a str> {
		meta.open_graph
			.iter()
			.find(|t| t.property == property)
			.map(|t| t.content.as_str())
	}

	#[test]
	fn test_clean_company_name() {
		assert_eq!(clean_company_name("Apple Inc. (AAPL)"), "Apple Inc.");
		assert_eq!(clean_company_name("Apple Inc.  (AAPL)"), "Apple Inc.");
		assert_eq!(clean_company_name("Alphabet Inc. (GOOGL, GOOG)"), "Alphabet Inc.");
		assert_eq!(clean_company_name("Berkshire Hathaway (BRK-B, BRK.A)"), "Berkshire Hathaway");
		assert_eq!(clean_company_name("Tesla, Inc."), "Tesla, Inc.");
		assert_eq!(clean_company_name("  MICROSOFT CORP  "), "MICROSOFT CORP");
		// Only a trailing suffix is stripped
		assert_eq!(
			clean_company_name("Acme (Holdings) Corp"),
			"Acme (Holdings) Corp"
		);
	}

	#[test]
	fn test_page_state() {
		let listing = filing_result("Apple Inc.", vec![FilingRecordBuilder::new()]);
		let empty = filing_result("Apple Inc.", vec![]);
		assert_eq!(PageState::of(Some(&listing)), PageState::Listing);
		assert_eq!(PageState::of(Some(&empty)), PageState::Empty);
		assert_eq!(PageState::of(None), PageState::NotFound);
	}

	#[test]
	fn test_listing_metadata_uses_lead_form_and_clean_name() {
		let result = filing_result(
			"Apple Inc.  (AAPL)",
			vec![
				FilingRecordBuilder::new().form("10-Q").file_date("2024-05-03"),
				FilingRecordBuilder::new().form("8-K").file_date("2024-05-02"),
			],
		);
		let meta = PageMetadata::for_filings("AAPL", Some(&result), &site());

		assert_eq!(
			meta.title,
			"Apple Inc. (AAPL) SEC Filings: Latest 10-Q | SEC Filings Viewer"
		);
		assert!(meta.description.starts_with("Browse 2 recent SEC filings from Apple Inc. (AAPL)"));
		assert_eq!(meta.canonical_url, "https://filings.example.com/filings/AAPL");
		assert_eq!(og(&meta, "og:title"), Some(meta.title.as_str()));
		assert_eq!(og(&meta, "og:url"), Some("https://filings.example.com/filings/AAPL"));
		assert_eq!(og(&meta, "og:type"), Some("article"));

		assert_eq!(meta.json_ld["@type"], "WebPage");
		assert_eq!(meta.json_ld["about"]["@type"], "Corporation");
		assert_eq!(meta.json_ld["about"]["name"], "Apple Inc.");
		assert_eq!(meta.json_ld["about"]["tickerSymbol"], "AAPL");
		assert_eq!(meta.json_ld["dateModified"], "2024-05-03");
	}

	#[test]
	fn test_empty_and_not_found_metadata_differ() {
		let empty = filing_result("Tesla, Inc.  (TSLA)", vec![]);
		let empty_meta = PageMetadata::for_filings("TSLA", Some(&empty), &site());
		let missing_meta = PageMetadata::for_filings("TSLA", None, &site());

		assert_eq!(empty_meta.title, "Tesla, Inc. (TSLA) SEC Filings | SEC Filings Viewer");
		assert!(empty_meta.description.contains("No SEC filings from Tesla, Inc. (TSLA)"));
		assert_eq!(missing_meta.title, "TSLA Filings Not Found | SEC Filings Viewer");
		assert_ne!(empty_meta.description, missing_meta.description);
		assert!(missing_meta.json_ld.get("about").is_none());
		assert!(missing_meta.json_ld.get("dateModified").is_none());
	}

	#[test]
	fn test_home_metadata() {
		let meta = PageMetadata::for_home(&site());
		assert_eq!(meta.canonical_url, "https://filings.example.com/");
		assert_eq!(meta.json_ld["@type"], "WebSite");
		assert_eq!(
			meta.json_ld["potentialAction"]["target"],
			"https://filings.example.com/filings/{ticker}"
		);
		assert_eq!(og(&meta, "og:type"), Some("website"));
	}

	#[test]
	fn test_json_ld_script_escapes_closing_tags() {
		let result = filing_result("Evil </script> Corp", vec![]);
		let meta = PageMetadata::for_filings("EVIL", Some(&result), &site());
		let script = meta.json_ld_script();
		assert!(!script.contains("</script>"));
		assert!(script.contains("\\u003c/script\\u003e"));
	}

	#[test]
	fn test_json_ld_script_escapes_comment_openers() {
		let meta = PageMetadata::for_filings("<!--<SCRIPT>", None, &site());
		let script = meta.json_ld_script();
		assert!(!script.contains('<'));
		assert!(!script.contains('>'));
		assert!(script.contains("\\u003c!--\\u003cSCRIPT\\u003e"));

		// Still valid JSON carrying the original text
		let parsed: serde_json::Value = serde_json::from_str(&script).unwrap();
		assert_eq!(parsed, meta.json_ld);
	}

	#[test]
	fn test_filing_view_from_record() {
		let record = FilingRecordBuilder::new()
			.description(Some("  "))
			.display_names(Some(vec!["Apple Inc.  (AAPL)  (CIK 0000320193)".to_string()]))
			.build();
		let view = FilingView::from(&record);

		assert_eq!(view.form_type, "10-K");
		assert_eq!(view.description, None);
		assert_eq!(view.display_names.len(), 1);
		assert_eq!(
			view.document_url.as_deref(),
			Some("https://www.sec.gov/Archives/edgar/data/320193/000032019323000106/001-36743")
		);

		let result = filing_result("Apple Inc.", vec![FilingRecordBuilder::new(), FilingRecordBuilder::new()]);
		assert_eq!(FilingView::list(&result).len(), 2);
	}
}
