use super::ApiClient;
use crate::{
	data::{CanvasId, FeedbackSession, ProjectId, SessionId, SessionType, UserId},
	error::Error,
};
use serde::Serialize;

/// Feedback sessions: review passes over a canvas.
pub struct SessionService<'a>(&'a ApiClient);

impl ApiClient {
	pub fn sessions(&self) -> SessionService<'_> {
		SessionService(self)
	}
}

impl SessionService<'_> {
	pub async fn create(
		&self,
		canvas: CanvasId,
		session_type: SessionType,
		user: Option<UserId>,
	) -> Result<FeedbackSession, Error> {
		#[derive(Serialize)]
		struct Create {
			canvas: CanvasId,
			session_type: SessionType,
			#[serde(skip_serializing_if = "Option::is_none")]
			user: Option<UserId>,
		}
		let body = Create {
			canvas,
			session_type,
			user,
		};
		self.0.post("/sessions/").with_json(&body)?.send().await
	}

	pub async fn get(&self, id: SessionId) -> Result<FeedbackSession, Error> {
		self.0.get(format!("/sessions/{id}")).send().await
	}

	pub async fn update(&self, id: SessionId, session_type: Option<SessionType>) -> Result<FeedbackSession, Error> {
		#[derive(Serialize)]
		struct Update {
			#[serde(skip_serializing_if = "Option::is_none")]
			session_type: Option<SessionType>,
		}
		self.0.put(format!("/sessions/{id}")).with_json(&Update { session_type })?.send().await
	}

	pub async fn delete(&self, id: SessionId) -> Result<(), Error> {
		self.0.delete::<()>(format!("/sessions/{id}")).send_empty().await
	}

	pub async fn by_project(&self, project: ProjectId) -> Result<Vec<FeedbackSession>, Error> {
		self.0.get(format!("/projects/{project}/sessions/")).send().await
	}
}
