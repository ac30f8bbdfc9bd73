//! Records mirrored from the backend schema.
//!
//! Relationships are plain integer ids; nothing here checks that a referenced record exists.

mod user;
pub use user::*;
mod workspace;
pub use workspace::*;
mod project;
pub use project::*;
mod canvas;
pub use canvas::*;
mod feedback;
pub use feedback::*;
mod comment;
pub use comment::*;
mod webhook;
pub use webhook::*;

pub type UserId = u64;

/// Bodies like `{"message": "..."}` returned by action endpoints.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
	pub message: String,
}
