use crate::{
	data::User,
	storage::{BrowserStorage, StorageBackend},
};
use yewdux::store::Store;

/// What the browser remembers between visits.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
	pub access_token: Option<AccessToken>,
	pub refresh_token: Option<RefreshToken>,
	pub user: Option<User>,
}
impl Session {
	pub fn get(storage: &dyn StorageBackend) -> Self {
		Self {
			access_token: AccessToken::load(storage),
			refresh_token: RefreshToken::load(storage),
			user: User::load(storage),
		}
	}

	pub fn delete(storage: &dyn StorageBackend) {
		AccessToken::delete(storage);
		RefreshToken::delete(storage);
		User::delete(storage);
	}
}

pub trait StoredValue: Sized {
	fn id() -> &'static str;

	fn encode(&self) -> Option<String>;

	fn decode(raw: String) -> Option<Self>;

	fn load(storage: &dyn StorageBackend) -> Option<Self> {
		storage.read(Self::id()).and_then(Self::decode)
	}

	fn save(&self, storage: &dyn StorageBackend) {
		match self.encode() {
			Some(raw) => storage.write(Self::id(), &raw),
			None => log::error!(target: "session", "Failed to encode {:?}", Self::id()),
		}
	}

	fn delete(storage: &dyn StorageBackend) {
		storage.remove(Self::id());
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccessToken(pub String);
impl StoredValue for AccessToken {
	fn id() -> &'static str {
		"access_token"
	}

	fn encode(&self) -> Option<String> {
		Some(self.0.clone())
	}

	fn decode(raw: String) -> Option<Self> {
		(!raw.is_empty()).then_some(Self(raw))
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefreshToken(pub String);
impl StoredValue for RefreshToken {
	fn id() -> &'static str {
		"refresh_token"
	}

	fn encode(&self) -> Option<String> {
		Some(self.0.clone())
	}

	fn decode(raw: String) -> Option<Self> {
		(!raw.is_empty()).then_some(Self(raw))
	}
}

impl StoredValue for User {
	fn id() -> &'static str {
		"user"
	}

	fn encode(&self) -> Option<String> {
		serde_json::to_string(self).ok()
	}

	fn decode(raw: String) -> Option<Self> {
		serde_json::from_str(&raw).ok()
	}
}

/// The signed-in user as seen by the views.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
	pub user: Option<User>,
}
impl AuthState {
	pub fn is_authenticated(&self) -> bool {
		self.user.is_some()
	}

	/// The state after a sign-in response, or `None` when the backend handed out no token.
	pub fn signed_in(user: User, storage: &dyn StorageBackend) -> Option<Self> {
		AccessToken::load(storage).map(|_| Self { user: Some(user) })
	}
}
impl Store for AuthState {
	fn new(_cx: &yewdux::Context) -> Self {
		let user = User::load(&BrowserStorage);
		log::debug!(target: "session", "restored session for {:?}", user.as_ref().map(|user| &user.email));
		Self { user }
	}

	fn should_notify(&self, old: &Self) -> bool {
		self != old
	}
}
