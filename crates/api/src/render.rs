//! Handlebars page rendering
//!
//! Templates are compiled into the binary and registered once at startup.
//! Every HTML page is rendered in two passes: the page body, then the shared
//! layout carrying the head metadata.

use handlebars::{
	html_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext, TemplateError,
};
use sec_filings_config::SiteSettings;
use sec_filings_service::{FilingView, PageMetadata, SitemapEntry};
use sec_filings_types::{FilingQuery, FilingResult};
use serde::Serialize;
use thiserror::Error;

const LAYOUT: &str = "layout";
const HOME: &str = "home";
const FILINGS: &str = "filings";
const NOTICE: &str = "notice";
const SITEMAP: &str = "sitemap.xml";

const TEMPLATES: [(&str, &str); 5] = [
	(LAYOUT, include_str!("../templates/layout.hbs")),
	(HOME, include_str!("../templates/home.hbs")),
	(FILINGS, include_str!("../templates/filings.hbs")),
	(NOTICE, include_str!("../templates/notice.hbs")),
	(SITEMAP, include_str!("../templates/sitemap.xml.hbs")),
];

#[derive(Error, Debug)]
pub enum RenderError {
	#[error("Invalid template: {0}")]
	Template(#[from] Box<TemplateError>),

	#[error("Failed to render {template}: {reason}")]
	Render { template: String, reason: String },
}

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Serialize)]
struct LayoutContext<'a> {
	meta: &'a PageMetadata,
	json_ld: String,
	site_name: &'a str,
	body: String,
}

#[derive(Serialize)]
struct HomeContext<'a> {
	featured: &'a [String],
	error: Option<&'a str>,
}

#[derive(Serialize)]
struct FilingsContext<'a> {
	ticker: &'a str,
	company_name: String,
	start_date: String,
	end_date: String,
	forms: String,
	count: usize,
	filings: Vec<FilingView>,
}

#[derive(Serialize)]
struct NoticeContext<'a> {
	heading: &'a str,
	message: &'a str,
}

#[derive(Serialize)]
struct SitemapUrl {
	loc: String,
	lastmod: String,
	changefreq: &'static str,
	priority: String,
}

#[derive(Serialize)]
struct SitemapContext {
	entries: Vec<SitemapUrl>,
}

/// Compiled page templates
#[derive(Debug)]
pub struct PageRenderer {
	registry: Handlebars<'static>,
	site_name: String,
}

impl PageRenderer {
	pub fn new(site: &SiteSettings) -> RenderResult<Self> {
		let mut registry = Handlebars::new();
		registry.register_helper("join", Box::new(join_helper));

		for (name, source) in TEMPLATES {
			registry
				.register_template_string(name, source)
				.map_err(Box::new)?;
		}

		Ok(Self {
			registry,
			site_name: site.name.clone(),
		})
	}

	pub fn home(
		&self,
		meta: &PageMetadata,
		featured: &[String],
		error: Option<&str>,
	) -> RenderResult<String> {
		let body = self.render(HOME, &HomeContext { featured, error })?;
		self.page(meta, body)
	}

	/// Filing list, or the empty state when the result has no filings
	pub fn filings(
		&self,
		meta: &PageMetadata,
		query: &FilingQuery,
		result: &FilingResult,
	) -> RenderResult<String> {
		let context = FilingsContext {
			ticker: &query.symbol,
			company_name: sec_filings_service::clean_company_name(&result.company_name),
			start_date: query.date_range.start_param(),
			end_date: query.date_range.end_param(),
			forms: query.form_types.join(", "),
			count: result.filings.len(),
			filings: FilingView::list(result),
		};
		let body = self.render(FILINGS, &context)?;
		self.page(meta, body)
	}

	/// Simple heading plus message page, used for the not-found and error states
	pub fn notice(&self, meta: &PageMetadata, heading: &str, message: &str) -> RenderResult<String> {
		let body = self.render(NOTICE, &NoticeContext { heading, message })?;
		self.page(meta, body)
	}

	pub fn sitemap(&self, entries: &[SitemapEntry]) -> RenderResult<String> {
		let context = SitemapContext {
			entries: entries
				.iter()
				.map(|entry| SitemapUrl {
					loc: entry.url.clone(),
					lastmod: entry.lastmod(),
					changefreq: entry.change_frequency.as_str(),
					priority: entry.priority_param(),
				})
				.collect(),
		};
		self.render(SITEMAP, &context)
	}

	fn page(&self, meta: &PageMetadata, body: String) -> RenderResult<String> {
		let context = LayoutContext {
			meta,
			json_ld: meta.json_ld_script(),
			site_name: &self.site_name,
			body,
		};
		self.render(LAYOUT, &context)
	}

	fn render<T: Serialize>(&self, template: &str, data: &T) -> RenderResult<String> {
		self.registry
			.render(template, data)
			.map_err(|e| RenderError::Render {
				template: template.to_string(),
				reason: e.to_string(),
			})
	}
}

/// `{{join list "; "}}`: escaped string items joined by the separator
fn join_helper(
	h: &Helper,
	_: &Handlebars,
	_: &Context,
	_: &mut RenderContext,
	out: &mut dyn Output,
) -> HelperResult {
	let separator = h.param(1).and_then(|v| v.value().as_str()).unwrap_or(", ");
	let joined = h
		.param(0)
		.and_then(|v| v.value().as_array())
		.map(|items| {
			items
				.iter()
				.filter_map(|item| item.as_str())
				.collect::<Vec<_>>()
				.join(separator)
		})
		.unwrap_or_default();
	out.write(&html_escape(&joined))?;
	Ok(())
}
