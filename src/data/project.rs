use super::WorkspaceId;
use serde::{Deserialize, Serialize};

pub type ProjectId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
	#[default]
	Canvas,
	Shoot,
}
impl ProjectKind {
	pub fn value(&self) -> &'static str {
		match self {
			Self::Canvas => "canvas",
			Self::Shoot => "shoot",
		}
	}

	pub fn help_info(&self) -> &'static str {
		match self {
			Self::Canvas => "Collect feedback on a live website",
			Self::Shoot => "Collect feedback on screenshots and images",
		}
	}
}
impl std::str::FromStr for ProjectKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"canvas" => Ok(Self::Canvas),
			"shoot" => Ok(Self::Shoot),
			_ => Err(format!("unknown project type {s:?}")),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
	pub id: ProjectId,
	pub name: String,
	pub workspace: WorkspaceId,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub domain_url: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub thumbnail_url: Option<String>,
	#[serde(rename = "type")]
	pub kind: ProjectKind,
	#[serde(default)]
	pub created_day: String,
}
impl crate::collection::Keyed for Project {
	fn key(&self) -> u64 {
		self.id
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCreateRequest {
	pub name: String,
	pub workspace: WorkspaceId,
	#[serde(rename = "type")]
	pub kind: ProjectKind,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub domain_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProjectUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub workspace: Option<WorkspaceId>,
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<ProjectKind>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub domain_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail_url: Option<String>,
}
