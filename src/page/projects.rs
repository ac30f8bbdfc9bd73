use crate::{
	collection::{ItemList, ListAction},
	components::{project_modal::ProjectModal, ErrorBanner},
	data::{Project, Workspace},
	error::Error,
	hooks::{use_async, use_client, use_request_errors},
	Route,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Modal {
	Create,
	Edit(u64),
}

#[function_component]
pub fn Projects() -> Html {
	let client = use_client();
	let errors = use_request_errors();
	let projects = use_reducer(ItemList::<Project>::default);
	let workspaces = use_state(|| Rc::new(Vec::<Workspace>::new()));
	let modal = use_state(|| None::<Modal>);

	let load = use_async(true, &errors, {
		let client = client.clone();
		let projects = projects.dispatcher();
		let workspaces = workspaces.clone();
		move || {
			let client = client.clone();
			let projects = projects.clone();
			let workspaces = workspaces.clone();
			Box::pin(async move {
				projects.dispatch(ListAction::Load(client.projects().list().await?));
				workspaces.set(Rc::new(client.workspaces().list().await?));
				Ok(()) as Result<(), Error>
			})
		}
	});

	let open_create = {
		let modal = modal.clone();
		Callback::from(move |_: MouseEvent| modal.set(Some(Modal::Create)))
	};
	let close = {
		let modal = modal.clone();
		Callback::from(move |_| modal.set(None))
	};
	let on_saved = |action: fn(Project) -> ListAction<Project>| {
		let modal = modal.clone();
		let projects = projects.dispatcher();
		Callback::from(move |project: Project| {
			projects.dispatch(action(project));
			modal.set(None);
		})
	};
	let edit = {
		let modal = modal.clone();
		Callback::from(move |project: Project| modal.set(Some(Modal::Edit(project.id))))
	};
	let delete = {
		let errors = errors.clone();
		let projects = projects.dispatcher();
		Callback::from(move |project: Project| {
			if !crate::util::confirm(&format!("Delete project \"{}\"?", project.name)) {
				return;
			}
			let client = client.clone();
			let errors = errors.clone();
			let projects = projects.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match client.projects().delete(project.id).await {
					Ok(()) => projects.dispatch(ListAction::Deleted(project.id)),
					Err(err) => errors.report(err),
				}
			});
		})
	};

	let modal_html = match *modal {
		None => html! {},
		Some(Modal::Create) => html! {
			<ProjectModal
				workspaces={(*workspaces).clone()}
				on_close={close}
				on_saved={on_saved(ListAction::Created)}
			/>
		},
		Some(Modal::Edit(id)) => match projects.by_key(id) {
			Some(project) => html! {
				<ProjectModal editing={project.clone()} on_close={close} on_saved={on_saved(ListAction::Updated)} />
			},
			None => html! {},
		},
	};

	let content = match (load.loading(), projects.is_empty()) {
		(true, _) => html! {
			<div class="text-center py-5">
				<div class="spinner-border" role="status" />
				<p class="mt-2">{"Loading projects"}</p>
			</div>
		},
		(false, true) => html! {
			<p class="text-muted">{"No projects yet."}</p>
		},
		(false, false) => html! {
			<div class="row g-3">
				{projects.iter().map(|project| html! {
					<ProjectCard
						key={project.id}
						project={project.clone()}
						workspace={workspaces.iter().find(|ws| ws.id == project.workspace).map(|ws| AttrValue::from(ws.name.clone()))}
						on_edit={edit.clone()}
						on_delete={delete.clone()}
					/>
				}).collect::<Html>()}
			</div>
		},
	};

	html! {<>
		<div class="d-flex align-items-center mb-3">
			<h2 class="me-auto">{"Projects"}</h2>
			<button class="btn btn-success btn-sm" onclick={open_create}>
				<i class="bi bi-plus" />
				{"New Project"}
			</button>
		</div>
		<ErrorBanner message={errors.message()} on_dismiss={errors.dismiss_callback()} />
		{content}
		{modal_html}
	</>}
}

#[derive(Clone, PartialEq, Properties)]
pub struct ProjectCardProps {
	pub project: Project,
	/// Name of the owning workspace, when known.
	#[prop_or_default]
	pub workspace: Option<AttrValue>,
	pub on_edit: Callback<Project>,
	pub on_delete: Callback<Project>,
}

#[function_component]
pub fn ProjectCard(props: &ProjectCardProps) -> Html {
	let project = &props.project;
	let with_project = |callback: &Callback<Project>| {
		let project = project.clone();
		callback.reform(move |_: MouseEvent| project.clone())
	};
	html! {
		<div class="col-md-4">
			<div class="card h-100">
				if let Some(src) = project.thumbnail_url.clone() {
					<img class="card-img-top" {src} alt={project.name.clone()} />
				}
				<div class="card-body">
					<h5 class="card-title">{&project.name}</h5>
					<span class="badge bg-info text-dark">{project.kind.value()}</span>
					if let Some(workspace) = props.workspace.clone() {
						<p class="card-text mt-2">
							<Link<Route> to={Route::Workspace { id: project.workspace }}>{workspace}</Link<Route>>
						</p>
					}
					if let Some(url) = project.domain_url.clone() {
						<p class="card-text"><a href={url.clone()} target="_blank" rel="noopener">{url}</a></p>
					}
				</div>
				<div class="card-footer d-flex">
					<button class="btn btn-outline-primary btn-sm me-auto" onclick={with_project(&props.on_edit)}>{"Edit"}</button>
					<button class="btn btn-outline-danger btn-sm" onclick={with_project(&props.on_delete)}>
						<i class="bi bi-trash" />
					</button>
				</div>
			</div>
		</div>
	}
}
