use super::UserId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
	#[default]
	Default,
	Google,
	Sso,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
	pub id: UserId,
	pub name: String,
	pub email: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avatar_url: Option<String>,
	#[serde(default)]
	pub auth_type: AuthType,
	// the backend spells it this way
	#[serde(default)]
	pub two_stept_auth: bool,
	#[serde(default)]
	pub created_day: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
	pub email: String,
	pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
	pub name: String,
	pub email: String,
	pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangePasswordRequest {
	pub old_password: String,
	pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
	pub user: User,
	#[serde(default)]
	pub token: String,
	#[serde(default)]
	pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisterResponse {
	pub user: User,
	#[serde(default)]
	pub token: String,
	#[serde(default)]
	pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TwoStepSetup {
	pub qr_code: String,
	pub secret: String,
}
