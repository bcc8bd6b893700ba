use thiserror::Error;

/// Failures talking to the prediction API.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("{0}")]
	Validation(String),

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("API returned {status}: {}", detail.as_deref().unwrap_or("no detail"))]
	Status { status: u16, detail: Option<String> },

	#[error("Invalid base URL: {0}")]
	BaseUrl(String),

	#[error("Parse error: {0}")]
	Parse(#[from] serde_json::Error),
}

impl ApiError {
	/// Message suitable for showing next to the form that triggered the call.
	pub fn user_message(&self) -> String {
		match self {
			Self::Validation(msg) => msg.clone(),
			Self::Status {
				detail: Some(detail),
				..
			} => detail.clone(),
			Self::Status { .. } | Self::Parse(_) => "Prediction failed".to_string(),
			Self::Http(_) | Self::BaseUrl(_) => "Server error. Check backend.".to_string(),
		}
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::Status { status: 404, .. })
	}
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Pull the `detail` field out of an error body, if there is one.
pub(crate) fn error_detail(body: &str) -> Option<String> {
	let value: serde_json::Value = serde_json::from_str(body).ok()?;
	match value.get("detail")? {
		serde_json::Value::String(s) => Some(s.clone()),
		serde_json::Value::Null => None,
		other => Some(other.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detail_is_read_from_json_body() {
		assert_eq!(
			error_detail(r#"{"detail": "Match not found"}"#).as_deref(),
			Some("Match not found")
		);
		assert_eq!(error_detail("<html>bad gateway</html>"), None);
		assert_eq!(error_detail(r#"{"message": "x"}"#), None);
	}

	#[test]
	fn status_messages_prefer_detail() {
		let err = ApiError::Status {
			status: 400,
			detail: Some("Unknown team: Barnsley".into()),
		};
		assert_eq!(err.user_message(), "Unknown team: Barnsley");
		assert_eq!(err.to_string(), "API returned 400: Unknown team: Barnsley");

		let bare = ApiError::Status {
			status: 500,
			detail: None,
		};
		assert_eq!(bare.user_message(), "Prediction failed");
		assert!(!bare.is_not_found());
	}
}
