use crate::{
	components::{reducer, ErrorBanner, FormState, TextField},
	data::Workspace,
	error::Error,
	hooks::{use_client, use_request_errors},
	validation::{FieldErrors, WorkspaceForm},
};
use futures_util::future::LocalBoxFuture;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct WorkspaceModalProps {
	/// The workspace being edited; `None` creates a new one.
	#[prop_or_default]
	pub editing: Option<Workspace>,
	pub on_close: Callback<()>,
	pub on_saved: Callback<Workspace>,
}

#[function_component]
pub fn WorkspaceModal(props: &WorkspaceModalProps) -> Html {
	let client = use_client();
	let errors = use_request_errors();
	let form = use_reducer({
		let editing = props.editing.clone();
		move || {
			FormState::from(match editing {
				Some(workspace) => WorkspaceForm {
					name: workspace.name,
					description: workspace.description.unwrap_or_default(),
				},
				None => WorkspaceForm::default(),
			})
		}
	});
	let field_errors = use_state(FieldErrors::default);
	let saving = use_state(|| false);

	let submit = {
		let form = form.clone();
		let field_errors = field_errors.clone();
		let saving = saving.clone();
		let errors = errors.clone();
		let editing = props.editing.as_ref().map(|workspace| workspace.id);
		let on_saved = props.on_saved.clone();
		Callback::from(move |evt: SubmitEvent| {
			evt.prevent_default();
			let client = client.clone();
			let request: Result<LocalBoxFuture<'static, Result<Workspace, Error>>, FieldErrors> = match editing {
				None => form.validate_create().map(|data| {
					Box::pin(async move { client.workspaces().create(&data).await }) as LocalBoxFuture<'static, _>
				}),
				Some(id) => form.validate_update().map(|data| {
					Box::pin(async move { client.workspaces().update(id, &data).await }) as LocalBoxFuture<'static, _>
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
					Ok(workspace) => {
						log::info!(target: "workspace", "Saved workspace {}", workspace.id);
						on_saved.emit(workspace);
					}
					Err(err) => errors.report(err),
				}
			});
		})
	};
	let close = props.on_close.reform(|_: MouseEvent| ());
	let title = match props.editing {
		Some(_) => "Edit Workspace",
		None => "Create Workspace",
	};

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
							placeholder="Ex: Marketing"
						/>
						<TextField
							name="description" label="Description"
							value={form.description.clone()}
							update={reducer(&form, |form, value| form.description = value)}
							error={field_errors.get("description")}
							multiline=true
						/>
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
