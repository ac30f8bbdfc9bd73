use super::{CanvasId, UserId};
use serde::{Deserialize, Serialize};

pub type SessionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
	#[default]
	Canvas,
	Shoot,
}

/// A review pass over a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSession {
	pub id: SessionId,
	#[serde(default)]
	pub user: Option<UserId>,
	pub canvas: CanvasId,
	pub session_type: SessionType,
	#[serde(default)]
	pub created_day: String,
	#[serde(default)]
	pub updated_day: String,
}
