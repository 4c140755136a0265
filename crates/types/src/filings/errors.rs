//! Error types for filing resolution

use thiserror::Error;

/// Why a ticker could not be resolved to a filing list.
///
/// Every variant ends up as the same "no results" state for end users; the
/// variants exist so operators can tell the cases apart in logs.
#[derive(Error, Debug)]
pub enum ResolutionError {
	#[error("No company found for symbol: {symbol}")]
	NotFound { symbol: String },

	#[error("HTTP request failed: {0}")]
	Upstream(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	UnexpectedStatus { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	Parse { reason: String },

	#[error("HTTP client error: {reason}")]
	Client { reason: String },
}

/// Result alias used by the search client and the resolver
pub type ResolutionResult<T> = Result<T, ResolutionError>;

impl ResolutionError {
	/// Short label for structured log fields
	pub fn kind(&self) -> &'static str {
		match self {
			ResolutionError::NotFound { .. } => "not_found",
			ResolutionError::Upstream(_) => "upstream",
			ResolutionError::UnexpectedStatus { .. } => "unexpected_status",
			ResolutionError::Parse { .. } => "parse",
			ResolutionError::Client { .. } => "client",
		}
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, ResolutionError::NotFound { .. })
	}

	/// Extract HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			ResolutionError::UnexpectedStatus { status_code, .. } => Some(*status_code),
			ResolutionError::Upstream(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	pub fn not_found(symbol: impl Into<String>) -> Self {
		Self::NotFound {
			symbol: symbol.into(),
		}
	}

	pub fn parse(reason: impl Into<String>) -> Self {
		Self::Parse {
			reason: reason.into(),
		}
	}

	/// Create an HTTP failure error from response status with default reason
	pub fn from_http_failure(status_code: u16) -> Self {
		let reason = match status_code {
			400 => "Bad Request".to_string(),
			403 => "Forbidden".to_string(),
			404 => "Not Found".to_string(),
			429 => "Too Many Requests".to_string(),
			500 => "Internal Server Error".to_string(),
			502 => "Bad Gateway".to_string(),
			503 => "Service Unavailable".to_string(),
			504 => "Gateway Timeout".to_string(),
			_ => format!("HTTP Error {}", status_code),
		};

		Self::UnexpectedStatus {
			status_code,
			reason,
		}
	}
}
