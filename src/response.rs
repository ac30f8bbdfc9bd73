use crate::{
	api::ApiClient,
	error::{Error, InvalidJson},
};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};

/// A file picked in the browser, ready to be sent as one multipart field.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
	pub file_name: String,
	pub mime: String,
	pub bytes: Vec<u8>,
}
impl Upload {
	pub async fn read(file: &web_sys::File) -> anyhow::Result<Self> {
		let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
			.await
			.map_err(|err| anyhow::anyhow!("Failed to read {:?}: {err:?}", file.name()))?;
		Ok(Self {
			file_name: file.name(),
			mime: file.type_(),
			bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
		})
	}

	pub fn size(&self) -> usize {
		self.bytes.len()
	}

	/// Inline `data:` URL, used for project thumbnails.
	pub fn to_data_url(&self) -> String {
		use base64::Engine;
		let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
		format!("data:{};base64,{encoded}", self.mime)
	}

	fn to_form(&self, field: &'static str) -> Result<reqwest::multipart::Form, Error> {
		let part = reqwest::multipart::Part::bytes(self.bytes.clone())
			.file_name(self.file_name.clone())
			.mime_str(&self.mime)?;
		Ok(reqwest::multipart::Form::new().part(field, part))
	}
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Body {
	Empty,
	Json(Vec<u8>),
	Multipart { field: &'static str, upload: Upload },
}

/// Everything needed to (re)send one call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParts {
	pub method: Method,
	pub path: String,
	pub(crate) query: Vec<(&'static str, String)>,
	pub(crate) body: Body,
	/// Set once a 401 has been seen, so the call is never refreshed twice.
	pub retried: bool,
}
impl RequestParts {
	pub(crate) fn new(method: Method, path: String) -> Self {
		Self {
			method,
			path,
			query: Vec::new(),
			body: Body::Empty,
			retried: false,
		}
	}

	pub(crate) fn apply_body(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder, Error> {
		use reqwest::header::CONTENT_TYPE;
		let builder = match self.query.is_empty() {
			true => builder,
			false => builder.query(&self.query),
		};
		Ok(match &self.body {
			Body::Empty => builder.header(CONTENT_TYPE, "application/json"),
			Body::Json(bytes) => builder.header(CONTENT_TYPE, "application/json").body(bytes.clone()),
			Body::Multipart { field, upload } => builder.multipart(upload.to_form(field)?),
		})
	}
}

/// A call that has not been sent yet; `T` is what the body decodes into.
pub struct Request<T> {
	client: ApiClient,
	parts: RequestParts,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Request<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.parts.fmt(f)
	}
}
impl<T> Request<T> {
	pub(crate) fn new(client: ApiClient, method: Method, path: String) -> Self {
		Self {
			client,
			parts: RequestParts::new(method, path),
			marker: Default::default(),
		}
	}

	pub fn parts(&self) -> &RequestParts {
		&self.parts
	}

	pub fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
		self.parts.query.push((key, value.to_string()));
		self
	}

	pub fn with_json<B>(mut self, json: &B) -> Result<Self, Error>
	where
		B: Serialize + ?Sized,
	{
		let bytes = serde_json::to_vec(json).map_err(Error::Encode)?;
		self.parts.body = Body::Json(bytes);
		Ok(self)
	}

	pub fn with_upload(mut self, field: &'static str, upload: Upload) -> Self {
		self.parts.body = Body::Multipart { field, upload };
		self
	}

	/// Sends the call and ignores whatever body comes back.
	pub async fn send_empty(mut self) -> Result<(), Error> {
		self.client.execute(&mut self.parts).await?;
		Ok(())
	}
}
impl<T> Request<T>
where
	T: DeserializeOwned,
{
	pub async fn send(mut self) -> Result<T, Error> {
		let response = self.client.execute(&mut self.parts).await?;
		let text = response.text().await?;
		let output = match serde_json::from_str(&text) {
			Ok(data) => data,
			Err(err) => {
				return Err(InvalidJson(text, err))?;
			}
		};
		Ok(output)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn data_url_embeds_mime_and_base64() {
		let upload = Upload {
			file_name: "dot.png".into(),
			mime: "image/png".into(),
			bytes: b"hi".to_vec(),
		};
		assert_eq!(upload.size(), 2);
		assert_eq!(upload.to_data_url(), "data:image/png;base64,aGk=");
	}
}
