use super::ApiClient;
use crate::{
	data::{Canvas, CanvasId, ProjectId},
	error::Error,
};
use serde::Serialize;

pub struct CanvasService<'a>(&'a ApiClient);

impl ApiClient {
	pub fn canvases(&self) -> CanvasService<'_> {
		CanvasService(self)
	}
}

#[derive(Serialize)]
struct CanvasBody<'a> {
	#[serde(skip_serializing_if = "Option::is_none")]
	project: Option<ProjectId>,
	#[serde(skip_serializing_if = "Option::is_none")]
	iframe_url: Option<&'a str>,
}

impl CanvasService<'_> {
	pub async fn create(&self, project: ProjectId, iframe_url: Option<&str>) -> Result<Canvas, Error> {
		let body = CanvasBody {
			project: Some(project),
			iframe_url,
		};
		self.0.post("/canvas/").with_json(&body)?.send().await
	}

	pub async fn get(&self, id: CanvasId) -> Result<Canvas, Error> {
		self.0.get(format!("/canvas/{id}")).send().await
	}

	pub async fn update(&self, id: CanvasId, iframe_url: &str) -> Result<Canvas, Error> {
		let body = CanvasBody {
			project: None,
			iframe_url: Some(iframe_url),
		};
		self.0.put(format!("/canvas/{id}")).with_json(&body)?.send().await
	}

	pub async fn delete(&self, id: CanvasId) -> Result<(), Error> {
		self.0.delete::<()>(format!("/canvas/{id}")).send_empty().await
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use crate::api::test_util::client;
	use httpmock::prelude::*;
	use serde_json::json;

	#[tokio::test]
	async fn create_without_iframe_only_sends_project() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		let mock = server
			.mock_async(|when, then| {
				when.method(POST).path("/canvas/").json_body(json!({ "project": 5 }));
				then.status(201).json_body(json!({
					"id": 9,
					"project": 5,
					"created_day": "2025-03-01",
					"updated_day": "2025-03-01"
				}));
			})
			.await;

		let canvas = client.canvases().create(5, None).await.unwrap();
		assert_eq!((canvas.id, canvas.iframe_url), (9, None));
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn update_sends_iframe_url() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		let mock = server
			.mock_async(|when, then| {
				when.method(PUT).path("/canvas/9").json_body(json!({ "iframe_url": "https://example.com/a" }));
				then.status(200).json_body(json!({ "id": 9, "project": 5, "iframe_url": "https://example.com/a" }));
			})
			.await;

		let canvas = client.canvases().update(9, "https://example.com/a").await.unwrap();
		assert_eq!(canvas.iframe_url.as_deref(), Some("https://example.com/a"));
		mock.assert_async().await;
	}
}
