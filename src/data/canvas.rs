use super::ProjectId;
use serde::{Deserialize, Serialize};

pub type CanvasId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
	pub id: CanvasId,
	pub project: ProjectId,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub iframe_url: Option<String>,
	#[serde(default)]
	pub created_day: String,
	#[serde(default)]
	pub updated_day: String,
}
