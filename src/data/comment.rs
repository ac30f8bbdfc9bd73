use super::{SessionId, UserId};
use serde::{Deserialize, Serialize};

pub type CommentId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
	pub id: CommentId,
	pub session: SessionId,
	pub user: UserId,
	pub content: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub position_x: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub position_y: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tag_user: Option<UserId>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mention_user: Option<Vec<UserId>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attachment_url: Option<String>,
	#[serde(default)]
	pub created_day: String,
	#[serde(default)]
	pub updated_day: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CommentCreateRequest {
	pub session: SessionId,
	pub content: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub position_x: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub position_y: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag_user: Option<UserId>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mention_user: Option<Vec<UserId>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub attachment_url: Option<String>,
}
