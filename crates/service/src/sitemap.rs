//! Sitemap entries for the home page and the featured tickers

use chrono::{DateTime, SecondsFormat, Utc};
use sec_filings_config::SiteSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
	Always,
	Daily,
}

impl ChangeFrequency {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Always => "always",
			Self::Daily => "daily",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
	pub url: String,
	pub last_modified: DateTime<Utc>,
	pub change_frequency: ChangeFrequency,
	pub priority: f32,
}

impl SitemapEntry {
	/// W3C datetime as sitemap consumers expect, e.g. `2024-06-01T12:00:00Z`
	pub fn lastmod(&self) -> String {
		self.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
	}

	pub fn priority_param(&self) -> String {
		format!("{:.1}", self.priority)
	}
}

/// Home page plus one entry per configured ticker, all stamped with `now`
pub fn build_sitemap(site: &SiteSettings, now: DateTime<Utc>) -> Vec<SitemapEntry> {
	let home = SitemapEntry {
		url: site.absolute_url("/"),
		last_modified: now,
		change_frequency: ChangeFrequency::Always,
		priority: 1.0,
	};

	std::iter::once(home)
		.chain(site.sitemap_tickers.iter().map(|ticker| SitemapEntry {
			url: site.absolute_url(&format!("/filings/{}", ticker.trim().to_uppercase())),
			last_modified: now,
			change_frequency: ChangeFrequency::Daily,
			priority: 0.8,
		}))
		.collect()
}
