use crate::{
	config::Config,
	error::Error,
	response::{Request, RequestParts},
	session::{AccessToken, RefreshToken, StoredValue},
	storage::StorageBackend,
};
use futures_util::future::LocalBoxFuture;
use reqwest::{header, Method, RequestBuilder, StatusCode};
use std::rc::Rc;

pub mod auth;
pub mod canvas;
pub mod comment;
pub mod feedback;
pub mod project;
pub mod webhook;
pub mod workspace;

/// Exchanges a refresh token for a fresh access token.
pub trait TokenRefresh {
	fn refresh<'a>(&'a self, client: &'a ApiClient, refresh_token: &'a str) -> LocalBoxFuture<'a, Option<String>>;
}

/// The backend exposes no refresh endpoint, so a 401 always fails through.
#[derive(Debug, Default, Clone, Copy)]
pub struct RefreshUnsupported;
impl TokenRefresh for RefreshUnsupported {
	fn refresh<'a>(&'a self, _client: &'a ApiClient, _refresh_token: &'a str) -> LocalBoxFuture<'a, Option<String>> {
		log::debug!(target: "api", "Refresh token present, but token refresh is not supported");
		Box::pin(futures_util::future::ready(None))
	}
}

/// The one HTTP client every service goes through.
///
/// Outgoing calls get the base url, json headers and the bearer token (when signed in).
/// Incoming failures are logged and normalized into [`Error`]. Each call is attempted once;
/// the only exception is a 401 whose token the [`TokenRefresh`] hook manages to renew, which
/// is replayed a single time.
#[derive(Clone)]
pub struct ApiClient {
	http: reqwest::Client,
	config: Rc<Config>,
	storage: Rc<dyn StorageBackend>,
	refresh: Rc<dyn TokenRefresh>,
}
impl PartialEq for ApiClient {
	fn eq(&self, other: &Self) -> bool {
		self.config == other.config && Rc::ptr_eq(&self.storage, &other.storage)
	}
}
impl std::fmt::Debug for ApiClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ApiClient").field("config", &self.config).finish()
	}
}

impl ApiClient {
	pub fn new(config: Config, storage: Rc<dyn StorageBackend>) -> Result<Self, Error> {
		Ok(Self {
			http: reqwest::Client::builder().build()?,
			config: Rc::new(config),
			storage,
			refresh: Rc::new(RefreshUnsupported),
		})
	}

	pub fn with_token_refresh(mut self, refresh: impl TokenRefresh + 'static) -> Self {
		self.refresh = Rc::new(refresh);
		self
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn storage(&self) -> &dyn StorageBackend {
		&*self.storage
	}

	pub fn request<T>(&self, method: Method, path: impl Into<String>) -> Request<T> {
		Request::new(self.clone(), method, path.into())
	}

	pub fn get<T>(&self, path: impl Into<String>) -> Request<T> {
		self.request(Method::GET, path)
	}

	pub fn post<T>(&self, path: impl Into<String>) -> Request<T> {
		self.request(Method::POST, path)
	}

	pub fn put<T>(&self, path: impl Into<String>) -> Request<T> {
		self.request(Method::PUT, path)
	}

	pub fn delete<T>(&self, path: impl Into<String>) -> Request<T> {
		self.request(Method::DELETE, path)
	}

	pub(crate) async fn execute(&self, request: &mut RequestParts) -> Result<reqwest::Response, Error> {
		loop {
			let response = self.dispatch(request).await?;
			let status = response.status();
			if status.is_success() {
				return Ok(response);
			}
			if status == StatusCode::UNAUTHORIZED && !request.retried {
				request.retried = true;
				if self.try_refresh().await {
					log::debug!(target: "api", "Replaying {} {} with a refreshed token", request.method, request.path);
					continue;
				}
			}
			log_failure(status, request);
			let body = response.text().await.unwrap_or_default();
			return Err(Error::from_response(status, &body));
		}
	}

	async fn dispatch(&self, request: &RequestParts) -> Result<reqwest::Response, Error> {
		let builder = self.http.request(request.method.clone(), self.config.endpoint(&request.path));
		let builder = builder.header(header::ACCEPT, "application/json");
		let builder = self.authorize(request.apply_body(builder)?);
		log::debug!(target: "api", "{} {}", request.method, request.path);
		self.send_with_timeout(builder).await
	}

	fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
		match AccessToken::load(self.storage()) {
			Some(AccessToken(token)) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
			None => builder,
		}
	}

	async fn try_refresh(&self) -> bool {
		let Some(RefreshToken(refresh_token)) = RefreshToken::load(self.storage()) else {
			return false;
		};
		match self.refresh.refresh(self, &refresh_token).await {
			Some(access_token) => {
				AccessToken(access_token).save(self.storage());
				true
			}
			None => false,
		}
	}

	#[cfg(not(target_arch = "wasm32"))]
	async fn send_with_timeout(&self, builder: RequestBuilder) -> Result<reqwest::Response, Error> {
		let timeout = self.config.timeout;
		builder.timeout(timeout).send().await.map_err(|err| match err.is_timeout() {
			true => Error::Timeout(timeout),
			false => Error::Transport(err),
		})
	}

	#[cfg(target_arch = "wasm32")]
	async fn send_with_timeout(&self, builder: RequestBuilder) -> Result<reqwest::Response, Error> {
		use futures_util::future::{select, Either};
		let timeout = self.config.timeout;
		let send = builder.send();
		let timer = gloo_timers::future::sleep(timeout);
		futures_util::pin_mut!(send, timer);
		match select(send, timer).await {
			Either::Left((result, _)) => Ok(result?),
			Either::Right(_) => Err(Error::Timeout(timeout)),
		}
	}
}

fn log_failure(status: StatusCode, request: &RequestParts) {
	let target = "api";
	match status {
		StatusCode::UNAUTHORIZED => log::warn!(target: target, "Unauthorized: {} {}", request.method, request.path),
		StatusCode::FORBIDDEN => {
			log::error!(target: target, "Forbidden: You do not have permission to access this resource")
		}
		StatusCode::NOT_FOUND => log::error!(target: target, "Not Found: The requested resource does not exist"),
		StatusCode::INTERNAL_SERVER_ERROR => {
			log::error!(target: target, "Server Error: Something went wrong on the server")
		}
		_ => log::debug!(target: target, "{} {} failed with {status}", request.method, request.path),
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod test_util {
	use super::*;
	use crate::storage::MemoryStorage;
	use std::time::Duration;

	pub fn client(server: &httpmock::MockServer) -> (ApiClient, Rc<MemoryStorage>) {
		client_with_timeout(server, Duration::from_secs(5))
	}

	pub fn client_with_timeout(server: &httpmock::MockServer, timeout: Duration) -> (ApiClient, Rc<MemoryStorage>) {
		let storage = Rc::new(MemoryStorage::default());
		let config = Config::new(&server.base_url(), timeout).unwrap();
		let client = ApiClient::new(config, storage.clone()).unwrap();
		(client, storage)
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::{test_util::client, *};
	use crate::{data::MessageResponse, response::Upload};
	use httpmock::prelude::*;
	use serde_json::json;
	use std::{cell::Cell, time::Duration};

	#[tokio::test]
	async fn attaches_bearer_token_when_signed_in() {
		let server = MockServer::start_async().await;
		let (client, storage) = client(&server);
		AccessToken("tok-1".into()).save(&*storage);
		let mock = server
			.mock_async(|when, then| {
				when.method(GET)
					.path("/ping/")
					.header("authorization", "Bearer tok-1")
					.header("accept", "application/json");
				then.status(200).json_body(json!({ "message": "pong" }));
			})
			.await;

		let reply = client.get::<MessageResponse>("/ping/").send().await.unwrap();
		assert_eq!(reply.message, "pong");
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn omits_authorization_when_signed_out() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		let mock = server
			.mock_async(|when, then| {
				when.method(POST)
					.path("/echo/")
					.header("content-type", "application/json")
					.header_missing("authorization")
					.json_body(json!({ "name": "Design review" }));
				then.status(201).json_body(json!({ "message": "ok" }));
			})
			.await;

		client
			.post::<MessageResponse>("/echo/")
			.with_json(&json!({ "name": "Design review" }))
			.unwrap()
			.send()
			.await
			.unwrap();
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn failures_are_attempted_once_and_carry_server_message() {
		for (status, body) in [
			(403, json!({ "error": "Not a member" })),
			(404, json!({ "message": "No such workspace" })),
			(500, json!({ "error": "Database unavailable" })),
		] {
			let server = MockServer::start_async().await;
			let (client, _storage) = client(&server);
			let mock = server
				.mock_async(|when, then| {
					when.method(GET).path("/workspaces/9/");
					then.status(status).json_body(body.clone());
				})
				.await;

			let err = client.get::<serde_json::Value>("/workspaces/9/").send().await.unwrap_err();
			assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
			let expected = body.get("message").or(body.get("error")).and_then(|v| v.as_str()).unwrap();
			assert_eq!(err.user_message(), expected);
			mock.assert_async().await;
		}
	}

	#[tokio::test]
	async fn unauthorized_without_refresh_fails_after_one_attempt() {
		let server = MockServer::start_async().await;
		let (client, storage) = client(&server);
		AccessToken("expired".into()).save(&*storage);
		RefreshToken("refresh-me".into()).save(&*storage);
		let mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/projects/list/");
				then.status(401).json_body(json!({ "detail": "Token expired" }));
			})
			.await;

		let err = client.get::<serde_json::Value>("/projects/list/").send().await.unwrap_err();
		assert!(err.is_unauthorized());
		assert_eq!(err.user_message(), "Token expired");
		mock.assert_async().await;

		// the wrapper never clears the session on its own
		assert_eq!(AccessToken::load(&*storage), Some(AccessToken("expired".into())));
	}

	struct CountingRefresh(Rc<Cell<usize>>);
	impl TokenRefresh for CountingRefresh {
		fn refresh<'a>(&'a self, _client: &'a ApiClient, refresh_token: &'a str) -> LocalBoxFuture<'a, Option<String>> {
			assert_eq!(refresh_token, "refresh-me");
			self.0.set(self.0.get() + 1);
			Box::pin(futures_util::future::ready(Some("fresh".to_owned())))
		}
	}

	#[tokio::test]
	async fn retried_call_never_refreshes_again() {
		let server = MockServer::start_async().await;
		let (client, storage) = client(&server);
		let refreshes = Rc::new(Cell::new(0));
		let client = client.with_token_refresh(CountingRefresh(refreshes.clone()));
		RefreshToken("refresh-me".into()).save(&*storage);
		server
			.mock_async(|when, then| {
				when.method(DELETE).path("/canvas/3");
				then.status(401);
			})
			.await;

		let mut parts = RequestParts::new(reqwest::Method::DELETE, "/canvas/3".into());
		assert!(client.execute(&mut parts).await.unwrap_err().is_unauthorized());
		assert!(parts.retried);
		assert_eq!(refreshes.get(), 1);

		assert!(client.execute(&mut parts).await.unwrap_err().is_unauthorized());
		assert_eq!(refreshes.get(), 1);
	}

	#[tokio::test]
	async fn refreshed_token_is_replayed_at_most_once() {
		let server = MockServer::start_async().await;
		let (client, storage) = client(&server);
		let refreshes = Rc::new(Cell::new(0));
		let client = client.with_token_refresh(CountingRefresh(refreshes.clone()));
		AccessToken("stale".into()).save(&*storage);
		RefreshToken("refresh-me".into()).save(&*storage);
		let stale = server
			.mock_async(|when, then| {
				when.method(GET).path("/sessions/5").header("authorization", "Bearer stale");
				then.status(401);
			})
			.await;
		let fresh = server
			.mock_async(|when, then| {
				when.method(GET).path("/sessions/5").header("authorization", "Bearer fresh");
				then.status(401).json_body(json!({ "detail": "Still no" }));
			})
			.await;

		let err = client.get::<serde_json::Value>("/sessions/5").send().await.unwrap_err();
		assert!(err.is_unauthorized());
		assert_eq!(err.user_message(), "Still no");
		assert_eq!(refreshes.get(), 1);
		assert_eq!(AccessToken::load(&*storage), Some(AccessToken("fresh".into())));
		stale.assert_async().await;
		fresh.assert_async().await;
	}

	#[tokio::test]
	async fn refreshed_token_recovers_the_call() {
		let server = MockServer::start_async().await;
		let (client, storage) = client(&server);
		let client = client.with_token_refresh(CountingRefresh(Rc::new(Cell::new(0))));
		AccessToken("stale".into()).save(&*storage);
		RefreshToken("refresh-me".into()).save(&*storage);
		server
			.mock_async(|when, then| {
				when.method(GET).path("/users/1/detail/").header("authorization", "Bearer stale");
				then.status(401);
			})
			.await;
		server
			.mock_async(|when, then| {
				when.method(GET).path("/users/1/detail/").header("authorization", "Bearer fresh");
				then.status(200).json_body(json!({ "message": "welcome back" }));
			})
			.await;

		let reply = client.get::<MessageResponse>("/users/1/detail/").send().await.unwrap();
		assert_eq!(reply.message, "welcome back");
	}

	#[tokio::test]
	async fn slow_responses_time_out() {
		let server = MockServer::start_async().await;
		let (client, _storage) = super::test_util::client_with_timeout(&server, Duration::from_millis(50));
		server
			.mock_async(|when, then| {
				when.method(GET).path("/slow/");
				then.status(200).delay(Duration::from_millis(1_000)).json_body(json!({ "message": "late" }));
			})
			.await;

		let err = client.get::<MessageResponse>("/slow/").send().await.unwrap_err();
		assert!(matches!(err, Error::Timeout(timeout) if timeout == Duration::from_millis(50)));
	}

	#[tokio::test]
	async fn invalid_json_is_reported_with_body() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		server
			.mock_async(|when, then| {
				when.method(GET).path("/broken/");
				then.status(200).body("not json");
			})
			.await;

		let err = client.get::<MessageResponse>("/broken/").send().await.unwrap_err();
		let Error::InvalidJson(invalid) = err else {
			panic!("expected invalid json, got {err:?}");
		};
		assert_eq!(invalid.0, "not json");
	}

	#[tokio::test]
	async fn uploads_are_multipart() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		let mock = server
			.mock_async(|when, then| {
				when.method(POST)
					.path("/comments/upload/")
					.header_exists("content-type")
					.body_includes("name=\"attachment\"")
					.body_includes("shot.png");
				then.status(201).json_body(json!({ "message": "stored" }));
			})
			.await;

		let upload = Upload {
			file_name: "shot.png".into(),
			mime: "image/png".into(),
			bytes: vec![1, 2, 3],
		};
		client
			.post::<MessageResponse>("/comments/upload/")
			.with_upload("attachment", upload)
			.send()
			.await
			.unwrap();
		mock.assert_async().await;
	}
}
