pub mod common;
pub mod filings;
pub mod health;
pub mod pages;
pub mod seo;

pub use filings::get_filings;
pub use health::{health, ready};
pub use pages::{filings_page, home, not_found, search_redirect, stylesheet};
pub use seo::{robots, sitemap};
