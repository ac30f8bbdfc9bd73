//! Client-side form checks, run before anything is sent.
//!
//! Each field reports only its first failing rule. Lengths count characters and nothing is trimmed.

use crate::{
	data::{
		LoginRequest, ProjectCreateRequest, ProjectKind, ProjectUpdate, RegisterRequest, WorkspaceCreateRequest,
		WorkspaceId, WorkspaceUpdate,
	},
	response::Upload,
};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;

lazy_static! {
	static ref URL: Regex = Regex::new(r"^https?://.+").expect("url pattern is valid");
	static ref EMAIL: Regex = RegexBuilder::new(r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
		.case_insensitive(true)
		.build()
		.expect("email pattern is valid");
}

pub const MAX_THUMBNAIL_BYTES: usize = 5 * 1024 * 1024;

type Rule = Result<(), &'static str>;

/// Per-field messages for a rejected form, keyed by field name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);
impl FieldErrors {
	/// Records the first failing rule for `field`; later failures for the same field are ignored.
	pub fn check(&mut self, field: &'static str, rules: impl IntoIterator<Item = Rule>) {
		if self.0.contains_key(field) {
			return;
		}
		if let Some(Err(message)) = rules.into_iter().find(Result::is_err) {
			self.0.insert(field, message);
		}
	}

	pub fn get(&self, field: &str) -> Option<&'static str> {
		self.0.get(field).copied()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
		match self.is_empty() {
			true => Ok(value()),
			false => Err(self),
		}
	}
}

pub fn required(value: &str, message: &'static str) -> Rule {
	match value.is_empty() {
		true => Err(message),
		false => Ok(()),
	}
}

pub fn min_chars(value: &str, min: usize, message: &'static str) -> Rule {
	match value.chars().count() < min {
		true => Err(message),
		false => Ok(()),
	}
}

pub fn max_chars(value: &str, max: usize, message: &'static str) -> Rule {
	match value.chars().count() > max {
		true => Err(message),
		false => Ok(()),
	}
}

/// Empty values pass; optional url fields are only checked when filled in.
pub fn optional_url(value: &str) -> Rule {
	match value.is_empty() || URL.is_match(value) {
		true => Ok(()),
		false => Err("Please enter a valid URL (http:// or https://)"),
	}
}

pub fn email(value: &str) -> Rule {
	match EMAIL.is_match(value) {
		true => Ok(()),
		false => Err("Invalid email address"),
	}
}

pub fn thumbnail(upload: &Upload) -> Rule {
	if !upload.mime.starts_with("image/") {
		return Err("Please select an image file");
	}
	if upload.size() > MAX_THUMBNAIL_BYTES {
		return Err("Image size must be less than 5MB");
	}
	Ok(())
}

fn non_empty(value: &str) -> Option<String> {
	(!value.is_empty()).then(|| value.to_owned())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkspaceForm {
	pub name: String,
	pub description: String,
}
impl WorkspaceForm {
	fn errors(&self) -> FieldErrors {
		let mut errors = FieldErrors::default();
		errors.check(
			"name",
			[
				required(&self.name, "Workspace name is required"),
				min_chars(&self.name, 3, "Name must be at least 3 characters"),
				max_chars(&self.name, 50, "Name must not exceed 50 characters"),
			],
		);
		errors.check(
			"description",
			[max_chars(&self.description, 200, "Description must not exceed 200 characters")],
		);
		errors
	}

	pub fn validate_create(&self) -> Result<WorkspaceCreateRequest, FieldErrors> {
		self.errors().into_result(|| WorkspaceCreateRequest {
			name: self.name.clone(),
			description: non_empty(&self.description),
		})
	}

	pub fn validate_update(&self) -> Result<WorkspaceUpdate, FieldErrors> {
		self.errors().into_result(|| WorkspaceUpdate {
			name: Some(self.name.clone()),
			description: Some(self.description.clone()),
		})
	}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectForm {
	pub name: String,
	pub workspace: Option<WorkspaceId>,
	pub kind: ProjectKind,
	pub domain_url: String,
	/// Already-validated image, as a `data:` url.
	pub thumbnail_url: Option<String>,
}
impl ProjectForm {
	fn check_common(&self, errors: &mut FieldErrors) {
		errors.check(
			"name",
			[
				required(&self.name, "Project name is required"),
				min_chars(&self.name, 3, "Name must be at least 3 characters"),
			],
		);
		errors.check("domain_url", [optional_url(&self.domain_url)]);
	}

	pub fn validate_create(&self) -> Result<ProjectCreateRequest, FieldErrors> {
		let mut errors = FieldErrors::default();
		self.check_common(&mut errors);
		let workspace = self.workspace.ok_or("Workspace is required").map(|_| ());
		errors.check("workspace", [workspace]);
		errors.into_result(|| ProjectCreateRequest {
			name: self.name.clone(),
			workspace: self.workspace.unwrap_or_default(),
			kind: self.kind,
			domain_url: non_empty(&self.domain_url),
			thumbnail_url: self.thumbnail_url.clone(),
		})
	}

	/// The owning workspace cannot be changed once a project exists.
	pub fn validate_update(&self) -> Result<ProjectUpdate, FieldErrors> {
		let mut errors = FieldErrors::default();
		self.check_common(&mut errors);
		errors.into_result(|| ProjectUpdate {
			name: Some(self.name.clone()),
			workspace: None,
			kind: Some(self.kind),
			// an empty string clears the url on the server
			domain_url: Some(self.domain_url.clone()),
			thumbnail_url: self.thumbnail_url.clone(),
		})
	}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterForm {
	pub name: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}
impl RegisterForm {
	pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
		let mut errors = FieldErrors::default();
		errors.check(
			"name",
			[
				required(&self.name, "Name is required"),
				min_chars(&self.name, 2, "Name must be at least 2 characters"),
			],
		);
		errors.check("email", [required(&self.email, "Email is required"), email(&self.email)]);
		errors.check(
			"password",
			[
				required(&self.password, "Password is required"),
				min_chars(&self.password, 8, "Password must be at least 8 characters"),
			],
		);
		let matches = match self.confirm_password == self.password {
			true => Ok(()),
			false => Err("Passwords do not match"),
		};
		errors.check(
			"confirm_password",
			[required(&self.confirm_password, "Please confirm your password"), matches],
		);
		errors.into_result(|| RegisterRequest {
			name: self.name.clone(),
			email: self.email.clone(),
			password: self.password.clone(),
		})
	}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
	pub email: String,
	pub password: String,
}
impl LoginForm {
	pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
		let mut errors = FieldErrors::default();
		errors.check("email", [required(&self.email, "Email is required"), email(&self.email)]);
		errors.check("password", [required(&self.password, "Password is required")]);
		errors.into_result(|| LoginRequest {
			email: self.email.clone(),
			password: self.password.clone(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn workspace(name: &str, description: &str) -> WorkspaceForm {
		WorkspaceForm {
			name: name.into(),
			description: description.into(),
		}
	}

	#[test]
	fn workspace_name_rules_report_first_failure() {
		let err = workspace("", "").validate_create().unwrap_err();
		assert_eq!(err.get("name"), Some("Workspace name is required"));
		assert_eq!(err.len(), 1);

		let err = workspace("ab", "").validate_create().unwrap_err();
		assert_eq!(err.get("name"), Some("Name must be at least 3 characters"));

		let err = workspace(&"x".repeat(51), "").validate_update().unwrap_err();
		assert_eq!(err.get("name"), Some("Name must not exceed 50 characters"));

		assert!(workspace(&"x".repeat(50), "").validate_create().is_ok());
	}

	#[test]
	fn workspace_description_limit() {
		let err = workspace("Design", &"d".repeat(201)).validate_create().unwrap_err();
		assert_eq!(err.get("description"), Some("Description must not exceed 200 characters"));
		assert_eq!(err.get("name"), None);

		let request = workspace("Design", &"d".repeat(200)).validate_create().unwrap();
		assert_eq!(request.description.map(|d| d.len()), Some(200));
	}

	#[test]
	fn lengths_count_characters_not_bytes() {
		assert!(workspace("été", "").validate_create().is_ok());
		assert!(workspace(&"é".repeat(50), "").validate_create().is_ok());
	}

	#[test]
	fn values_are_not_trimmed() {
		let request = workspace("  Ops  ", "").validate_create().unwrap();
		assert_eq!(request.name, "  Ops  ");
		assert_eq!(request.description, None);
	}

	#[test]
	fn project_create_requires_workspace_and_valid_url() {
		let form = ProjectForm {
			name: "Landing".into(),
			domain_url: "example.com".into(),
			..Default::default()
		};
		let err = form.validate_create().unwrap_err();
		assert_eq!(err.get("workspace"), Some("Workspace is required"));
		assert_eq!(err.get("domain_url"), Some("Please enter a valid URL (http:// or https://)"));

		let form = ProjectForm {
			workspace: Some(3),
			domain_url: "https://example.com".into(),
			..form
		};
		let request = form.validate_create().unwrap();
		assert_eq!(request.workspace, 3);
		assert_eq!(request.domain_url.as_deref(), Some("https://example.com"));
		assert_eq!(request.kind, ProjectKind::Canvas);
	}

	#[test]
	fn project_update_ignores_workspace() {
		let form = ProjectForm {
			name: "Pr".into(),
			..Default::default()
		};
		let err = form.validate_update().unwrap_err();
		assert_eq!(err.get("name"), Some("Name must be at least 3 characters"));
		assert_eq!(err.get("workspace"), None);

		let update = ProjectForm {
			name: "Promo".into(),
			..Default::default()
		}
		.validate_update()
		.unwrap();
		assert_eq!(update.workspace, None);
		assert_eq!(update.domain_url.as_deref(), Some(""));
	}

	#[test]
	fn clearing_domain_url_on_edit_is_sent() {
		let form = ProjectForm {
			name: "Landing".into(),
			workspace: Some(2),
			domain_url: String::new(),
			thumbnail_url: None,
			kind: ProjectKind::Canvas,
		};
		let body = serde_json::to_value(form.validate_update().unwrap()).unwrap();
		assert_eq!(body["domain_url"], "");
		assert_eq!(body.get("workspace"), None);
		assert_eq!(body["name"], "Landing");
	}

	#[test]
	fn register_rules() {
		let form = RegisterForm {
			name: "M".into(),
			email: "mai@example".into(),
			password: "short".into(),
			confirm_password: "shorter".into(),
		};
		let err = form.validate().unwrap_err();
		assert_eq!(err.get("name"), Some("Name must be at least 2 characters"));
		assert_eq!(err.get("email"), Some("Invalid email address"));
		assert_eq!(err.get("password"), Some("Password must be at least 8 characters"));
		assert_eq!(err.get("confirm_password"), Some("Passwords do not match"));

		let err = RegisterForm::default().validate().unwrap_err();
		assert_eq!(err.get("name"), Some("Name is required"));
		assert_eq!(err.get("email"), Some("Email is required"));
		assert_eq!(err.get("password"), Some("Password is required"));
		assert_eq!(err.get("confirm_password"), Some("Please confirm your password"));

		let form = RegisterForm {
			name: "Mai".into(),
			email: "Mai.Tran+qa@Example.COM".into(),
			password: "hunter2222".into(),
			confirm_password: "hunter2222".into(),
		};
		assert_eq!(form.validate().unwrap().email, "Mai.Tran+qa@Example.COM");
	}

	#[test]
	fn login_rules() {
		let err = LoginForm::default().validate().unwrap_err();
		assert_eq!(err.get("email"), Some("Email is required"));
		assert_eq!(err.get("password"), Some("Password is required"));

		let form = LoginForm {
			email: "mai@example.com".into(),
			password: "x".into(),
		};
		assert!(form.validate().is_ok());
	}

	#[test]
	fn thumbnail_rules() {
		let mut upload = Upload {
			file_name: "notes.txt".into(),
			mime: "text/plain".into(),
			bytes: vec![0; 10],
		};
		assert_eq!(thumbnail(&upload), Err("Please select an image file"));

		upload.mime = "image/jpeg".into();
		assert_eq!(thumbnail(&upload), Ok(()));

		upload.bytes = vec![0; MAX_THUMBNAIL_BYTES + 1];
		assert_eq!(thumbnail(&upload), Err("Image size must be less than 5MB"));
	}
}
