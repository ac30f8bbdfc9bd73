use super::ApiClient;
use crate::{
	data::{
		ChangePasswordRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
		TwoStepSetup, User, UserId,
	},
	error::Error,
	response::Upload,
	session::{AccessToken, RefreshToken, Session, StoredValue},
};
use serde::Serialize;

/// Sign-in, sign-up and account endpoints.
///
/// Successful sign-ins persist the access token and the user so the next page load starts
/// signed in. Nothing here expires or validates the token; the backend decides.
pub struct AuthService<'a>(&'a ApiClient);

impl ApiClient {
	pub fn auth(&self) -> AuthService<'_> {
		AuthService(self)
	}
}

#[derive(Serialize)]
struct Email<'a> {
	email: &'a str,
}

impl AuthService<'_> {
	pub async fn register(&self, data: &RegisterRequest) -> Result<RegisterResponse, Error> {
		let response: RegisterResponse = self.0.post("/users/register/").with_json(data)?.send().await?;
		self.remember(&response.token, &response.user, None);
		Ok(response)
	}

	pub async fn login(&self, data: &LoginRequest) -> Result<LoginResponse, Error> {
		let response: LoginResponse = self.0.post("/users/login/").with_json(data)?.send().await?;
		self.remember(&response.token, &response.user, response.refresh_token.as_deref());
		Ok(response)
	}

	pub async fn google_login(&self, token_id: &str) -> Result<LoginResponse, Error> {
		#[derive(Serialize)]
		struct Google<'a> {
			token: &'a str,
		}
		let response: LoginResponse = self.0.post("/users/google/").with_json(&Google { token: token_id })?.send().await?;
		self.remember(&response.token, &response.user, None);
		Ok(response)
	}

	fn remember(&self, token: &str, user: &User, refresh_token: Option<&str>) {
		if token.is_empty() {
			return;
		}
		let storage = self.0.storage();
		AccessToken(token.to_owned()).save(storage);
		user.save(storage);
		if let Some(refresh_token) = refresh_token {
			RefreshToken(refresh_token.to_owned()).save(storage);
		}
		log::info!(target: "auth", "Signed in as {}", user.email);
	}

	pub fn logout(&self) {
		Session::delete(self.0.storage());
		log::info!(target: "auth", "Signed out");
	}

	pub fn current_user(&self) -> Option<User> {
		User::load(self.0.storage())
	}

	pub fn is_authenticated(&self) -> bool {
		AccessToken::load(self.0.storage()).is_some()
	}

	pub async fn user_detail(&self, id: UserId) -> Result<User, Error> {
		self.0.get(format!("/users/{id}/detail/")).send().await
	}

	pub async fn change_password(&self, id: UserId, data: &ChangePasswordRequest) -> Result<(), Error> {
		self.0.put::<()>(format!("/users/{id}/password/")).with_json(data)?.send_empty().await
	}

	/// Uploads a new avatar and mirrors the new url into the cached user.
	pub async fn upload_avatar(&self, id: UserId, upload: Upload) -> Result<User, Error> {
		let updated: User = self.0.post(format!("/users/{id}/avatar/")).with_upload("avatar", upload).send().await?;
		let storage = self.0.storage();
		if let Some(mut cached) = User::load(storage) {
			cached.avatar_url = updated.avatar_url.clone();
			cached.save(storage);
		}
		Ok(updated)
	}

	pub async fn send_otp(&self, email: &str) -> Result<MessageResponse, Error> {
		self.0.post("/auth/send-otp/").with_json(&Email { email })?.send().await
	}

	pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<MessageResponse, Error> {
		#[derive(Serialize)]
		struct Otp<'a> {
			email: &'a str,
			otp: &'a str,
		}
		self.0.post("/auth/verify-otp/").with_json(&Otp { email, otp })?.send().await
	}

	pub async fn setup_two_step(&self) -> Result<TwoStepSetup, Error> {
		self.0.post("/auth/2step/setup/").send().await
	}

	pub async fn verify_two_step(&self, code: &str) -> Result<MessageResponse, Error> {
		#[derive(Serialize)]
		struct Code<'a> {
			code: &'a str,
		}
		self.0.post("/auth/2step/verify/").with_json(&Code { code })?.send().await
	}

	pub async fn reset_password_request(&self, email: &str) -> Result<MessageResponse, Error> {
		self.0.post("/auth/reset-password/").with_json(&Email { email })?.send().await
	}
}
