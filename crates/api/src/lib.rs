//! SEC Filings API
//!
//! Axum-based HTTP surface: filing pages, the JSON API, crawler endpoints and
//! the middleware stack shared by all of them.

pub mod handlers;
pub mod render;
pub mod router;
pub mod security;
pub mod state;

pub use render::{PageRenderer, RenderError};
pub use router::create_router;
pub use state::AppState;

#[cfg(feature = "openapi")]
pub mod openapi;
