use std::time::Duration;
use url::Url;

pub static DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub static DEFAULT_TIMEOUT_MS: u64 = 10_000;

static API_URL: Option<&str> = option_env!("WEFEED_API_URL");
static TIMEOUT_MS: Option<&str> = option_env!("WEFEED_REQUEST_TIMEOUT_MS");

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
	#[error("invalid api url {0:?}: {1}")]
	InvalidUrl(String, url::ParseError),
	#[error("api url {0:?} must use http or https")]
	UnsupportedScheme(String),
	#[error("invalid request timeout {0:?}")]
	InvalidTimeout(String),
}

/// Where the backend lives and how long a single round trip may take.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	base_url: String,
	pub timeout: Duration,
}

impl Config {
	pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
		let parsed = Url::parse(base_url).map_err(|err| ConfigError::InvalidUrl(base_url.to_owned(), err))?;
		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(ConfigError::UnsupportedScheme(base_url.to_owned()));
		}
		Ok(Self {
			base_url: base_url.trim_end_matches('/').to_owned(),
			timeout,
		})
	}

	/// Reads the values baked in at compile time, falling back to the local development backend.
	pub fn from_env() -> Result<Self, ConfigError> {
		let timeout = match TIMEOUT_MS {
			Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidTimeout(raw.to_owned()))?,
			None => DEFAULT_TIMEOUT_MS,
		};
		Self::new(API_URL.unwrap_or(DEFAULT_API_URL), Duration::from_millis(timeout))
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn endpoint(&self, path: &str) -> String {
		match path.starts_with('/') {
			true => format!("{}{path}", self.base_url),
			false => format!("{}/{path}", self.base_url),
		}
	}
}
