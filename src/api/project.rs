use super::ApiClient;
use crate::{
	data::{Project, ProjectCreateRequest, ProjectId, ProjectUpdate, WorkspaceId},
	error::Error,
};

pub struct ProjectService<'a>(&'a ApiClient);

impl ApiClient {
	pub fn projects(&self) -> ProjectService<'_> {
		ProjectService(self)
	}
}

impl ProjectService<'_> {
	pub async fn create(&self, data: &ProjectCreateRequest) -> Result<Project, Error> {
		self.0.post("/projects/").with_json(data)?.send().await
	}

	pub async fn get(&self, id: ProjectId) -> Result<Project, Error> {
		self.0.get(format!("/projects/{id}/")).send().await
	}

	pub async fn update(&self, id: ProjectId, data: &ProjectUpdate) -> Result<Project, Error> {
		self.0.put(format!("/projects/{id}/")).with_json(data)?.send().await
	}

	pub async fn delete(&self, id: ProjectId) -> Result<(), Error> {
		self.0.delete::<()>(format!("/projects/{id}/")).send_empty().await
	}

	pub async fn list(&self) -> Result<Vec<Project>, Error> {
		self.0.get("/projects/list/").send().await
	}

	pub async fn by_workspace(&self, workspace: WorkspaceId) -> Result<Vec<Project>, Error> {
		self.0.get("/projects/list/").with_query("workspace", workspace).send().await
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use crate::{api::test_util::client, data::*};
	use httpmock::prelude::*;
	use serde_json::json;

	#[tokio::test]
	async fn create_serializes_type_field() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		let mock = server
			.mock_async(|when, then| {
				when.method(POST).path("/projects/").json_body(json!({
					"name": "Landing page",
					"workspace": 2,
					"type": "shoot",
					"domain_url": "https://example.com"
				}));
				then.status(201).json_body(json!({
					"id": 40,
					"name": "Landing page",
					"workspace": 2,
					"domain_url": "https://example.com",
					"type": "shoot",
					"created_day": "2025-03-01T09:00:00"
				}));
			})
			.await;

		let request = ProjectCreateRequest {
			name: "Landing page".into(),
			workspace: 2,
			kind: ProjectKind::Shoot,
			domain_url: Some("https://example.com".into()),
			thumbnail_url: None,
		};
		let project = client.projects().create(&request).await.unwrap();
		assert_eq!(project.kind, ProjectKind::Shoot);
		assert_eq!(project.thumbnail_url, None);
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn by_workspace_filters_with_query() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		let mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/projects/list/").query_param("workspace", "7");
				then.status(200).json_body(json!([]));
			})
			.await;

		assert!(client.projects().by_workspace(7).await.unwrap().is_empty());
		mock.assert_async().await;
	}
}
