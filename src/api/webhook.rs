use super::ApiClient;
use crate::{
	data::{Webhook, WebhookCreateRequest, WebhookId, WebhookUpdate},
	error::Error,
};
use serde::Serialize;

pub struct WebhookService<'a>(&'a ApiClient);

impl ApiClient {
	pub fn webhooks(&self) -> WebhookService<'_> {
		WebhookService(self)
	}
}

impl WebhookService<'_> {
	pub async fn create(&self, data: &WebhookCreateRequest) -> Result<Webhook, Error> {
		self.0.post("/webhooks/").with_json(data)?.send().await
	}

	pub async fn get(&self, id: WebhookId) -> Result<Webhook, Error> {
		self.0.get(format!("/webhooks/{id}/detail/")).send().await
	}

	pub async fn update(&self, id: WebhookId, data: &WebhookUpdate) -> Result<Webhook, Error> {
		self.0.put(format!("/webhooks/{id}/detail/")).with_json(data)?.send().await
	}

	pub async fn delete(&self, id: WebhookId) -> Result<(), Error> {
		self.0.delete::<()>(format!("/webhooks/{id}/detail/")).send_empty().await
	}

	/// Fires an event by hand, for testing a receiver. The delivery report is passed back as-is.
	pub async fn trigger_event<E>(&self, event: &E) -> Result<serde_json::Value, Error>
	where
		E: Serialize + ?Sized,
	{
		self.0.post("/events/").with_json(event)?.send().await
	}
}
