//! SEC Filings Service
//!
//! Ticker-to-filings resolution plus the presentation logic built on top of
//! it: page metadata for search engines and the sitemap.

pub mod metadata;
pub mod resolver;
pub mod sitemap;

pub use metadata::{clean_company_name, FilingView, OpenGraphTag, PageMetadata, PageState};
pub use resolver::FilingResolver;
pub use sitemap::{build_sitemap, ChangeFrequency, SitemapEntry};
