use crate::{
	collection::{ItemList, ListAction},
	components::{project_modal::ProjectModal, workspace_modal::WorkspaceModal, ErrorBanner},
	data::{Project, Workspace, WorkspaceId},
	error::Error,
	hooks::{use_async, use_client, use_request_errors},
	page::projects::ProjectCard,
	Route,
};
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Modal {
	EditWorkspace,
	CreateProject,
	EditProject(u64),
}

#[derive(Clone, PartialEq, Properties)]
pub struct WorkspaceDetailProps {
	pub id: WorkspaceId,
}

#[function_component]
pub fn WorkspaceDetail(props: &WorkspaceDetailProps) -> Html {
	let client = use_client();
	let errors = use_request_errors();
	let navigator = use_navigator().expect_throw("WorkspaceDetail is rendered inside the router");
	let workspace = use_state(|| None::<Workspace>);
	let projects = use_reducer(ItemList::<Project>::default);
	let modal = use_state(|| None::<Modal>);

	let load = use_async(true, &errors, {
		let client = client.clone();
		let id = props.id;
		let workspace = workspace.clone();
		let projects = projects.dispatcher();
		move || {
			let client = client.clone();
			let workspace = workspace.clone();
			let projects = projects.clone();
			Box::pin(async move {
				workspace.set(Some(client.workspaces().get(id).await?));
				projects.dispatch(ListAction::Load(client.projects().by_workspace(id).await?));
				Ok(()) as Result<(), Error>
			})
		}
	});

	let open = |which: Modal| {
		let modal = modal.clone();
		Callback::from(move |_: MouseEvent| modal.set(Some(which)))
	};
	let close = {
		let modal = modal.clone();
		Callback::from(move |_| modal.set(None))
	};
	let on_workspace_saved = {
		let modal = modal.clone();
		let workspace = workspace.clone();
		Callback::from(move |updated: Workspace| {
			workspace.set(Some(updated));
			modal.set(None);
		})
	};
	let on_project_created = {
		let modal = modal.clone();
		let projects = projects.dispatcher();
		Callback::from(move |project: Project| {
			projects.dispatch(ListAction::Created(project));
			modal.set(None);
		})
	};
	let on_project_updated = {
		let modal = modal.clone();
		let projects = projects.dispatcher();
		Callback::from(move |project: Project| {
			projects.dispatch(ListAction::Updated(project));
			modal.set(None);
		})
	};
	let edit_project = {
		let modal = modal.clone();
		Callback::from(move |project: Project| modal.set(Some(Modal::EditProject(project.id))))
	};
	let delete_project = {
		let client = client.clone();
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
	let delete_workspace = {
		let errors = errors.clone();
		let workspace = workspace.clone();
		Callback::from(move |_: MouseEvent| {
			let Some(current) = (*workspace).clone() else {
				return;
			};
			if !crate::util::confirm(&format!("Delete workspace \"{}\" and all of its projects?", current.name)) {
				return;
			}
			let client = client.clone();
			let errors = errors.clone();
			let navigator = navigator.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match client.workspaces().delete(current.id).await {
					Ok(()) => navigator.push(&Route::Workspaces),
					Err(err) => errors.report(err),
				}
			});
		})
	};

	let banner = html! { <ErrorBanner message={errors.message()} on_dismiss={errors.dismiss_callback()} /> };
	let Some(current) = (*workspace).clone() else {
		return html! {<>
			{banner}
			if load.loading() {
				<div class="text-center py-5">
					<div class="spinner-border" role="status" />
					<p class="mt-2">{"Loading workspace"}</p>
				</div>
			} else {
				<Link<Route> to={Route::Workspaces}>{"Back to workspaces"}</Link<Route>>
			}
		</>};
	};

	let modal_html = match *modal {
		None => html! {},
		Some(Modal::EditWorkspace) => html! {
			<WorkspaceModal editing={current.clone()} on_close={close} on_saved={on_workspace_saved} />
		},
		Some(Modal::CreateProject) => html! {
			<ProjectModal
				workspace={current.id}
				workspaces={std::rc::Rc::new(vec![current.clone()])}
				on_close={close}
				on_saved={on_project_created}
			/>
		},
		Some(Modal::EditProject(id)) => match projects.by_key(id) {
			Some(project) => html! {
				<ProjectModal editing={project.clone()} on_close={close} on_saved={on_project_updated} />
			},
			None => html! {},
		},
	};

	html! {<>
		<nav aria-label="breadcrumb">
			<ol class="breadcrumb">
				<li class="breadcrumb-item"><Link<Route> to={Route::Workspaces}>{"Workspaces"}</Link<Route>></li>
				<li class="breadcrumb-item active" aria-current="page">{&current.name}</li>
			</ol>
		</nav>
		{banner}
		<div class="d-flex align-items-center mb-2">
			<h2 class="me-auto">{&current.name}</h2>
			<span class="badge bg-secondary me-3">{current.subscription_plan.label()}</span>
			<button class="btn btn-outline-primary btn-sm me-2" onclick={open(Modal::EditWorkspace)}>{"Edit"}</button>
			<button class="btn btn-outline-danger btn-sm" onclick={delete_workspace}>{"Delete"}</button>
		</div>
		<p class="text-muted">{current.description.clone().unwrap_or_default()}</p>
		<div class="d-flex align-items-center mt-4 mb-3">
			<h4 class="me-auto">{"Projects"}</h4>
			<button class="btn btn-success btn-sm" onclick={open(Modal::CreateProject)}>
				<i class="bi bi-plus" />
				{"New Project"}
			</button>
		</div>
		if projects.is_empty() {
			<p class="text-muted">{"This workspace has no projects yet."}</p>
		} else {
			<div class="row g-3">
				{projects.iter().map(|project| html! {
					<ProjectCard
						key={project.id}
						project={project.clone()}
						on_edit={edit_project.clone()}
						on_delete={delete_project.clone()}
					/>
				}).collect::<Html>()}
			</div>
		}
		{modal_html}
	</>}
}
