use super::ApiClient;
use crate::{
	data::{
		MemberRole, MessageResponse, SubscriptionPlan, UserId, Workspace, WorkspaceCreateRequest, WorkspaceId,
		WorkspaceMember, WorkspaceUpdate,
	},
	error::Error,
};
use serde::Serialize;

pub struct WorkspaceService<'a>(&'a ApiClient);

impl ApiClient {
	pub fn workspaces(&self) -> WorkspaceService<'_> {
		WorkspaceService(self)
	}
}

impl WorkspaceService<'_> {
	pub async fn create(&self, data: &WorkspaceCreateRequest) -> Result<Workspace, Error> {
		self.0.post("/workspaces/").with_json(data)?.send().await
	}

	pub async fn list(&self) -> Result<Vec<Workspace>, Error> {
		self.0.get("/workspaces/list/").send().await
	}

	pub async fn get(&self, id: WorkspaceId) -> Result<Workspace, Error> {
		self.0.get(format!("/workspaces/{id}/")).send().await
	}

	pub async fn update(&self, id: WorkspaceId, data: &WorkspaceUpdate) -> Result<Workspace, Error> {
		self.0.put(format!("/workspaces/{id}/")).with_json(data)?.send().await
	}

	pub async fn delete(&self, id: WorkspaceId) -> Result<(), Error> {
		self.0.delete::<()>(format!("/workspaces/{id}/")).send_empty().await
	}

	pub async fn upgrade(&self, id: WorkspaceId, plan: SubscriptionPlan) -> Result<Workspace, Error> {
		#[derive(Serialize)]
		struct Upgrade {
			subscription_plan: SubscriptionPlan,
		}
		let body = Upgrade { subscription_plan: plan };
		self.0.put(format!("/workspaces/{id}/upgrade/")).with_json(&body)?.send().await
	}

	pub async fn members(&self, id: WorkspaceId) -> Result<Vec<WorkspaceMember>, Error> {
		self.0.get(format!("/workspaces/{id}/members/")).send().await
	}

	pub async fn add_member(&self, id: WorkspaceId, user: UserId, role: MemberRole) -> Result<WorkspaceMember, Error> {
		#[derive(Serialize)]
		struct AddMember {
			user: UserId,
			role: MemberRole,
		}
		let body = AddMember { user, role };
		self.0.post(format!("/workspaces/{id}/members/")).with_json(&body)?.send().await
	}

	pub async fn invite_by_email(&self, id: WorkspaceId, email: &str, role: MemberRole) -> Result<MessageResponse, Error> {
		#[derive(Serialize)]
		struct Invite<'a> {
			email: &'a str,
			role: MemberRole,
		}
		let body = Invite { email, role };
		self.0.post(format!("/workspaces/{id}/members/invite/")).with_json(&body)?.send().await
	}

	pub async fn update_member_role(
		&self,
		id: WorkspaceId,
		user: UserId,
		role: MemberRole,
	) -> Result<WorkspaceMember, Error> {
		#[derive(Serialize)]
		struct Role {
			role: MemberRole,
		}
		self.0.put(format!("/workspaces/{id}/members/{user}/role/")).with_json(&Role { role })?.send().await
	}

	pub async fn remove_member(&self, id: WorkspaceId, user: UserId) -> Result<(), Error> {
		self.0.delete::<()>(format!("/workspaces/{id}/members/{user}")).send_empty().await
	}

	pub async fn member(&self, id: WorkspaceId, user: UserId) -> Result<WorkspaceMember, Error> {
		self.0.get(format!("/workspaces/{id}/members/{user}/")).send().await
	}

	pub async fn leave(&self, id: WorkspaceId) -> Result<(), Error> {
		self.0.post::<()>(format!("/workspaces/{id}/members/leave/")).send_empty().await
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use crate::{api::test_util::client, data::*};
	use httpmock::prelude::*;
	use serde_json::json;

	fn workspace_json(id: u64, name: &str) -> serde_json::Value {
		json!({
			"id": id,
			"name": name,
			"description": "Client sites",
			"owner": 1,
			"subscription_plan": "pro",
			"created_day": "2025-01-10T14:30:00"
		})
	}

	#[tokio::test]
	async fn create_posts_name_and_description() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		let mock = server
			.mock_async(|when, then| {
				when.method(POST)
					.path("/workspaces/")
					.json_body(json!({ "name": "Agency", "description": "Client sites" }));
				then.status(201).json_body(workspace_json(12, "Agency"));
			})
			.await;

		let request = WorkspaceCreateRequest {
			name: "Agency".into(),
			description: Some("Client sites".into()),
		};
		let workspace = client.workspaces().create(&request).await.unwrap();
		assert_eq!(workspace.id, 12);
		assert_eq!(workspace.subscription_plan, SubscriptionPlan::Pro);
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn partial_update_sends_only_set_fields() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		let mock = server
			.mock_async(|when, then| {
				when.method(PUT).path("/workspaces/12/").json_body(json!({ "name": "Renamed" }));
				then.status(200).json_body(workspace_json(12, "Renamed"));
			})
			.await;

		let update = WorkspaceUpdate {
			name: Some("Renamed".into()),
			..Default::default()
		};
		let workspace = client.workspaces().update(12, &update).await.unwrap();
		assert_eq!(workspace.name, "Renamed");
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn delete_accepts_no_content() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		let mock = server
			.mock_async(|when, then| {
				when.method(DELETE).path("/workspaces/12/");
				then.status(204);
			})
			.await;

		client.workspaces().delete(12).await.unwrap();
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn member_management_routes() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		let member = json!({ "id": 3, "workspace": 12, "user": 8, "role": "admin", "joined_day": "2025-02-01" });
		let add = server
			.mock_async(|when, then| {
				when.method(POST).path("/workspaces/12/members/").json_body(json!({ "user": 8, "role": "member" }));
				then.status(201).json_body(member.clone());
			})
			.await;
		let role = server
			.mock_async(|when, then| {
				when.method(PUT).path("/workspaces/12/members/8/role/").json_body(json!({ "role": "admin" }));
				then.status(200).json_body(member.clone());
			})
			.await;
		let invite = server
			.mock_async(|when, then| {
				when.method(POST)
					.path("/workspaces/12/members/invite/")
					.json_body(json!({ "email": "lan@example.com", "role": "member" }));
				then.status(200).json_body(json!({ "message": "Invitation sent" }));
			})
			.await;
		let remove = server
			.mock_async(|when, then| {
				when.method(DELETE).path("/workspaces/12/members/8");
				then.status(204);
			})
			.await;
		let leave = server
			.mock_async(|when, then| {
				when.method(POST).path("/workspaces/12/members/leave/");
				then.status(200).json_body(json!({ "message": "Left" }));
			})
			.await;

		let workspaces = client.workspaces();
		assert_eq!(workspaces.add_member(12, 8, MemberRole::default()).await.unwrap().user, 8);
		assert_eq!(workspaces.update_member_role(12, 8, MemberRole::Admin).await.unwrap().role, MemberRole::Admin);
		let reply = workspaces.invite_by_email(12, "lan@example.com", MemberRole::Member).await.unwrap();
		assert_eq!(reply.message, "Invitation sent");
		workspaces.remove_member(12, 8).await.unwrap();
		workspaces.leave(12).await.unwrap();
		for mock in [add, role, invite, remove, leave] {
			mock.assert_async().await;
		}
	}

	#[tokio::test]
	async fn upgrade_sends_plan() {
		let server = MockServer::start_async().await;
		let (client, _storage) = client(&server);
		let mock = server
			.mock_async(|when, then| {
				when.method(PUT)
					.path("/workspaces/12/upgrade/")
					.json_body(json!({ "subscription_plan": "enterprise" }));
				then.status(200).json_body(workspace_json(12, "Agency"));
			})
			.await;

		client.workspaces().upgrade(12, SubscriptionPlan::Enterprise).await.unwrap();
		mock.assert_async().await;
	}
}
