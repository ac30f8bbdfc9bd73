use super::ApiClient;
use crate::{
	data::{Comment, CommentCreateRequest, CommentId, SessionId, UserId},
	error::Error,
	response::Upload,
};
use serde::{Deserialize, Serialize};

pub struct CommentService<'a>(&'a ApiClient);

impl ApiClient {
	pub fn comments(&self) -> CommentService<'_> {
		CommentService(self)
	}
}

#[derive(Serialize)]
struct Content<'a> {
	content: &'a str,
}

impl CommentService<'_> {
	pub async fn create(&self, data: &CommentCreateRequest) -> Result<Comment, Error> {
		self.0.post("/comments/create/").with_json(data)?.send().await
	}

	pub async fn get(&self, id: CommentId) -> Result<Comment, Error> {
		self.0.get(format!("/comments/{id}/detail/")).send().await
	}

	pub async fn update(&self, id: CommentId, content: &str) -> Result<Comment, Error> {
		self.0.put(format!("/comments/{id}/detail/")).with_json(&Content { content })?.send().await
	}

	pub async fn delete(&self, id: CommentId) -> Result<(), Error> {
		self.0.delete::<()>(format!("/comments/{id}/detail/")).send_empty().await
	}

	pub async fn reply(&self, id: CommentId, content: &str) -> Result<Comment, Error> {
		self.0.post(format!("/comments/{id}/reply/")).with_json(&Content { content })?.send().await
	}

	pub async fn mention(&self, id: CommentId, users: &[UserId]) -> Result<Comment, Error> {
		#[derive(Serialize)]
		struct Mention<'a> {
			mention_user: &'a [UserId],
		}
		let body = Mention { mention_user: users };
		self.0.post(format!("/comments/{id}/mention/")).with_json(&body)?.send().await
	}

	pub async fn by_session(&self, session: SessionId) -> Result<Vec<Comment>, Error> {
		self.0.get(format!("/sessions/{session}/comments/")).send().await
	}

	/// Stores a file and returns the url to put in `attachment_url`.
	pub async fn upload_attachment(&self, upload: Upload) -> Result<String, Error> {
		#[derive(Deserialize)]
		struct Uploaded {
			url: String,
		}
		let uploaded = self
			.0
			.post::<Uploaded>("/comments/upload/")
			.with_upload("attachment", upload)
			.send()
			.await?;
		Ok(uploaded.url)
	}
}
