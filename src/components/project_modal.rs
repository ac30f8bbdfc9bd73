use crate::{
	components::{reducer, ErrorBanner, FormState, TextField},
	data::{Project, ProjectKind, Workspace, WorkspaceId},
	error::Error,
	hooks::{use_client, use_request_errors},
	response::Upload,
	util::web_ext::{CallbackExt, InputExt},
	validation::{self, FieldErrors, ProjectForm},
};
use futures_util::future::LocalBoxFuture;
use std::{rc::Rc, str::FromStr};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ProjectModalProps {
	/// The project being edited; `None` creates a new one.
	#[prop_or_default]
	pub editing: Option<Project>,
	/// Workspaces offered when creating.
	#[prop_or_default]
	pub workspaces: Rc<Vec<Workspace>>,
	/// Preselected workspace for new projects.
	#[prop_or_default]
	pub workspace: Option<WorkspaceId>,
	pub on_close: Callback<()>,
	pub on_saved: Callback<Project>,
}

#[function_component]
pub fn ProjectModal(props: &ProjectModalProps) -> Html {
	let client = use_client();
	let errors = use_request_errors();
	let form = use_reducer({
		let editing = props.editing.clone();
		let workspace = props.workspace;
		move || {
			FormState::from(match editing {
				Some(project) => ProjectForm {
					name: project.name,
					workspace: Some(project.workspace),
					kind: project.kind,
					domain_url: project.domain_url.unwrap_or_default(),
					thumbnail_url: project.thumbnail_url,
				},
				None => ProjectForm {
					workspace,
					..Default::default()
				},
			})
		}
	});
	let field_errors = use_state(FieldErrors::default);
	let thumbnail_error = use_state(|| None::<&'static str>);
	let saving = use_state(|| false);

	let pick_thumbnail = {
		let form = form.dispatcher();
		let thumbnail_error = thumbnail_error.clone();
		Callback::from(move |evt: Event| {
			let Some(file) = evt.selected_file() else {
				return;
			};
			let form = form.clone();
			let thumbnail_error = thumbnail_error.clone();
			crate::util::spawn_local("project", async move {
				let upload = Upload::read(&file).await?;
				match validation::thumbnail(&upload) {
					Ok(()) => {
						let data_url = upload.to_data_url();
						form.dispatch(Box::new(move |form: &mut ProjectForm| form.thumbnail_url = Some(data_url)));
						thumbnail_error.set(None);
					}
					Err(message) => thumbnail_error.set(Some(message)),
				}
				Ok(()) as anyhow::Result<()>
			});
		})
	};

	let submit = {
		let form = form.clone();
		let field_errors = field_errors.clone();
		let saving = saving.clone();
		let errors = errors.clone();
		let editing = props.editing.as_ref().map(|project| project.id);
		let on_saved = props.on_saved.clone();
		Callback::from(move |evt: SubmitEvent| {
			evt.prevent_default();
			let client = client.clone();
			let request: Result<LocalBoxFuture<'static, Result<Project, Error>>, FieldErrors> = match editing {
				None => form.validate_create().map(|data| {
					Box::pin(async move { client.projects().create(&data).await }) as LocalBoxFuture<'static, _>
				}),
				Some(id) => form.validate_update().map(|data| {
					Box::pin(async move { client.projects().update(id, &data).await }) as LocalBoxFuture<'static, _>
				}),
			};
			let request = match request {
				Ok(request) => request,
				Err(invalid) => {
					field_errors.set(invalid);
					return;
				}
			};
			field_errors.set(FieldErrors::default());
			errors.clear();
			saving.set(true);
			let saving = saving.clone();
			let errors = errors.clone();
			let on_saved = on_saved.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let result = request.await;
				saving.set(false);
				match result {
					Ok(project) => {
						log::info!(target: "project", "Saved project {}", project.id);
						on_saved.emit(project);
					}
					Err(err) => errors.report(err),
				}
			});
		})
	};

	let select_workspace = reducer(&form, |form, value| form.workspace = WorkspaceId::from_str(&value).ok());
	let select_kind = reducer(&form, |form, value| {
		if let Ok(kind) = ProjectKind::from_str(&value) {
			form.kind = kind;
		}
	});
	let close = props.on_close.reform(|_: MouseEvent| ());
	let title = match props.editing {
		Some(_) => "Edit Project",
		None => "Create Project",
	};
	let workspace_error = field_errors.get("workspace");

	html! {<>
		<div class="modal d-block" tabindex="-1" role="dialog">
			<div class="modal-dialog">
				<form class="modal-content" onsubmit={submit}>
					<div class="modal-header">
						<h5 class="modal-title">{title}</h5>
						<button type="button" class="btn-close" aria-label="Close" onclick={close.clone()} />
					</div>
					<div class="modal-body">
						<ErrorBanner message={errors.message()} on_dismiss={errors.dismiss_callback()} />
						<TextField
							name="name" label="Name"
							value={form.name.clone()}
							update={reducer(&form, |form, value| form.name = value)}
							error={field_errors.get("name")}
							placeholder="Ex: Landing page"
						/>
						if props.editing.is_none() {
							<div class="mb-3">
								<label for="field-workspace" class="form-label">{"Workspace"}</label>
								<select
									id="field-workspace"
									class={classes!("form-select", workspace_error.is_some().then_some("is-invalid"))}
									onchange={select_workspace.from_input::<Event>()}
								>
									<option value="" selected={form.workspace.is_none()}>{"Select a workspace"}</option>
									{props.workspaces.iter().map(|workspace| html! {
										<option
											key={workspace.id}
											value={workspace.id.to_string()}
											selected={form.workspace == Some(workspace.id)}
										>
											{&workspace.name}
										</option>
									}).collect::<Html>()}
								</select>
								if let Some(error) = workspace_error {
									<div class="invalid-feedback">{error}</div>
								}
							</div>
						}
						<div class="mb-3">
							<label for="field-kind" class="form-label">{"Type"}</label>
							<select id="field-kind" class="form-select" onchange={select_kind.from_input::<Event>()}>
								{[ProjectKind::Canvas, ProjectKind::Shoot].into_iter().map(|kind| html! {
									<option value={kind.value()} selected={form.kind == kind}>{kind.value()}</option>
								}).collect::<Html>()}
							</select>
							<div class="form-text">{form.kind.help_info()}</div>
						</div>
						<TextField
							name="domain_url" label="Domain URL"
							value={form.domain_url.clone()}
							update={reducer(&form, |form, value| form.domain_url = value)}
							error={field_errors.get("domain_url")}
							placeholder="https://example.com"
						/>
						<div class="mb-3">
							<label for="field-thumbnail" class="form-label">{"Thumbnail"}</label>
							<input
								id="field-thumbnail" type="file" accept="image/*"
								class={classes!("form-control", thumbnail_error.is_some().then_some("is-invalid"))}
								onchange={pick_thumbnail}
							/>
							if let Some(error) = *thumbnail_error {
								<div class="invalid-feedback">{error}</div>
							}
							if let Some(src) = form.thumbnail_url.clone() {
								<img class="img-thumbnail mt-2" style="max-height: 120px;" {src} alt="Thumbnail preview" />
							}
						</div>
					</div>
					<div class="modal-footer">
						<button type="button" class="btn btn-secondary" onclick={close}>{"Cancel"}</button>
						<button type="submit" class="btn btn-primary" disabled={*saving}>
							{if *saving { "Saving..." } else { "Save" }}
						</button>
					</div>
				</form>
			</div>
		</div>
		<div class="modal-backdrop show" />
	</>}
}
