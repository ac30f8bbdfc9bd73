use super::WorkspaceId;
use serde::{Deserialize, Serialize};

pub type WebhookId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookEvent {
	Create,
	Read,
	Update,
	Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookModel {
	Project,
	Comment,
	User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
	pub id: WebhookId,
	pub workspace: WorkspaceId,
	pub endpoint_url: String,
	pub event_type: WebhookEvent,
	pub model: WebhookModel,
	#[serde(default)]
	pub created_day: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookCreateRequest {
	pub workspace: WorkspaceId,
	pub endpoint_url: String,
	pub event_type: WebhookEvent,
	pub model: WebhookModel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WebhookUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub endpoint_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub event_type: Option<WebhookEvent>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub model: Option<WebhookModel>,
}
