use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// Everything that can go wrong while talking to the backend.
#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Request failed with status code {}", .status.as_u16())]
	Status { status: StatusCode, message: Option<String> },
	#[error("Request timed out after {0:?}")]
	Timeout(Duration),
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
	#[error("Failed to encode request body: {0}")]
	Encode(serde_json::Error),
	#[error(transparent)]
	Config(#[from] crate::config::ConfigError),
}

impl Error {
	pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
		let message = serde_json::from_str::<ServerMessage>(body).ok().and_then(ServerMessage::into_message);
		Self::Status { status, message }
	}

	pub fn status(&self) -> Option<StatusCode> {
		match self {
			Self::Status { status, .. } => Some(*status),
			Self::Transport(err) => err.status(),
			_ => None,
		}
	}

	pub fn is_unauthorized(&self) -> bool {
		self.status() == Some(StatusCode::UNAUTHORIZED)
	}

	/// The single line shown to the user in an error banner.
	pub fn user_message(&self) -> String {
		match self {
			Self::Status {
				message: Some(message), ..
			} => message.clone(),
			_ => self.to_string(),
		}
	}
}

/// The fields the backend uses to explain a failure, in order of preference.
#[derive(Deserialize, Default)]
struct ServerMessage {
	message: Option<serde_json::Value>,
	error: Option<serde_json::Value>,
	detail: Option<serde_json::Value>,
}
impl ServerMessage {
	fn into_message(self) -> Option<String> {
		[self.message, self.error, self.detail]
			.into_iter()
			.flatten()
			.find_map(|value| match value {
				serde_json::Value::String(text) if !text.is_empty() => Some(text),
				serde_json::Value::String(_) | serde_json::Value::Null => None,
				other => Some(other.to_string()),
			})
	}
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prefers_message_over_error() {
		let err = Error::from_response(StatusCode::BAD_REQUEST, r#"{"message":"first","error":"second"}"#);
		assert_eq!(err.user_message(), "first");
	}

	#[test]
	fn falls_back_to_error_then_detail() {
		let err = Error::from_response(StatusCode::BAD_REQUEST, r#"{"error":"Email already in use"}"#);
		assert_eq!(err.user_message(), "Email already in use");

		let err = Error::from_response(
			StatusCode::UNAUTHORIZED,
			r#"{"detail":"Authentication credentials were not provided."}"#,
		);
		assert_eq!(err.user_message(), "Authentication credentials were not provided.");
		assert!(err.is_unauthorized());
	}

	#[test]
	fn non_json_body_uses_status_line() {
		let err = Error::from_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
		assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
		assert_eq!(err.user_message(), "Request failed with status code 500");
	}

	#[test]
	fn empty_message_is_skipped() {
		let err = Error::from_response(StatusCode::FORBIDDEN, r#"{"message":"","error":"Not yours"}"#);
		assert_eq!(err.user_message(), "Not yours");
	}

	#[test]
	fn timeout_message() {
		let err = Error::Timeout(Duration::from_secs(10));
		assert_eq!(err.user_message(), "Request timed out after 10s");
		assert!(!err.is_unauthorized());
	}
}
