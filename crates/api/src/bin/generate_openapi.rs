//! # OpenAPI document generator
//!
//! Writes the OpenAPI document of the filings JSON API to disk without
//! starting the server.
//!
//! ```bash
//! # docs/api/openapi.json
//! cargo run -p sec-filings-api --bin generate_openapi --features openapi
//!
//! # custom location
//! cargo run -p sec-filings-api --bin generate_openapi --features openapi -- out/openapi.json
//! ```
#[cfg(feature = "openapi")]
use std::{env, fs, path::Path};

#[cfg(feature = "openapi")]
use sec_filings_api::openapi::ApiDoc;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	#[cfg(not(feature = "openapi"))]
	{
		eprintln!("Error: the 'openapi' feature is required to generate the OpenAPI document.");
		eprintln!("Run with: cargo run -p sec-filings-api --bin generate_openapi --features openapi");
		std::process::exit(1);
	}

	#[cfg(feature = "openapi")]
	{
		let output_path = env::args()
			.nth(1)
			.unwrap_or_else(|| "docs/api/openapi.json".to_string());

		if let Some(parent) = Path::new(&output_path).parent() {
			if !parent.as_os_str().is_empty() && !parent.exists() {
				fs::create_dir_all(parent)?;
			}
		}

		println!("📝 Writing OpenAPI document to {}", output_path);
		let json = serde_json::to_string_pretty(&ApiDoc::openapi())?;
		fs::write(&output_path, json)?;
		println!("✅ OpenAPI document written");
	}

	#[allow(unreachable_code)]
	Ok(())
}
