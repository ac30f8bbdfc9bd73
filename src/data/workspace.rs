use super::UserId;
use serde::{Deserialize, Serialize};

pub type WorkspaceId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
	#[default]
	Free,
	Pro,
	Enterprise,
}
impl SubscriptionPlan {
	pub fn label(&self) -> &'static str {
		match self {
			Self::Free => "Free",
			Self::Pro => "Pro",
			Self::Enterprise => "Enterprise",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
	pub id: WorkspaceId,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub owner: UserId,
	#[serde(default)]
	pub subscription_plan: SubscriptionPlan,
	#[serde(default)]
	pub created_day: String,
}
impl crate::collection::Keyed for Workspace {
	fn key(&self) -> u64 {
		self.id
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
	Owner,
	Admin,
	#[default]
	Member,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceMember {
	pub id: u64,
	pub workspace: WorkspaceId,
	pub user: UserId,
	pub role: MemberRole,
	#[serde(default)]
	pub joined_day: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WorkspaceCreateRequest {
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

/// Only the fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WorkspaceUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}
