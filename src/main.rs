//! SEC Filings Viewer Server
//!
//! Main entry point for the filings web server

use sec_filings::FilingsAppBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Configuration, tracing and the EDGAR search adapter are all set up by the builder
	FilingsAppBuilder::new().start_server().await
}
