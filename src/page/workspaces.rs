use crate::{
	collection::{ItemList, ListAction},
	components::{workspace_modal::WorkspaceModal, ErrorBanner},
	data::Workspace,
	error::Error,
	hooks::{use_async, use_client, use_request_errors},
	Route,
};
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component]
pub fn Workspaces() -> Html {
	let client = use_client();
	let errors = use_request_errors();
	let workspaces = use_reducer(ItemList::<Workspace>::default);
	let creating = use_state(|| false);

	let load = use_async(true, &errors, {
		let client = client.clone();
		let workspaces = workspaces.dispatcher();
		move || {
			let client = client.clone();
			let workspaces = workspaces.clone();
			Box::pin(async move {
				let list = client.workspaces().list().await?;
				log::debug!(target: "workspace", "Loaded {} workspaces", list.len());
				workspaces.dispatch(ListAction::Load(list));
				Ok(()) as Result<(), Error>
			})
		}
	});

	let open_create = {
		let creating = creating.clone();
		Callback::from(move |_: MouseEvent| creating.set(true))
	};
	let close_create = {
		let creating = creating.clone();
		Callback::from(move |_| creating.set(false))
	};
	let on_created = {
		let creating = creating.clone();
		let workspaces = workspaces.dispatcher();
		Callback::from(move |workspace: Workspace| {
			workspaces.dispatch(ListAction::Created(workspace));
			creating.set(false);
		})
	};
	let delete = {
		let errors = errors.clone();
		let workspaces = workspaces.dispatcher();
		Callback::from(move |workspace: Workspace| {
			if !crate::util::confirm(&format!("Delete workspace \"{}\"? This cannot be undone.", workspace.name)) {
				return;
			}
			let client = client.clone();
			let errors = errors.clone();
			let workspaces = workspaces.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match client.workspaces().delete(workspace.id).await {
					Ok(()) => workspaces.dispatch(ListAction::Deleted(workspace.id)),
					Err(err) => errors.report(err),
				}
			});
		})
	};

	let content = match (load.loading(), workspaces.is_empty()) {
		(true, _) => html! {
			<div class="text-center py-5">
				<div class="spinner-border" role="status" />
				<p class="mt-2">{"Loading workspaces"}</p>
			</div>
		},
		(false, true) => html! {
			<p class="text-muted">{"No workspaces yet. Create one to start collecting feedback."}</p>
		},
		(false, false) => html! {
			<div class="row g-3">
				{workspaces.iter().map(|workspace| html! {
					<WorkspaceCard key={workspace.id} workspace={workspace.clone()} on_delete={delete.clone()} />
				}).collect::<Html>()}
			</div>
		},
	};

	html! {<>
		<div class="d-flex align-items-center mb-3">
			<h2 class="me-auto">{"Workspaces"}</h2>
			<button class="btn btn-success btn-sm" onclick={open_create}>
				<i class="bi bi-plus" />
				{"Create Workspace"}
			</button>
		</div>
		<ErrorBanner message={errors.message()} on_dismiss={errors.dismiss_callback()} />
		{content}
		if *creating {
			<WorkspaceModal on_close={close_create} on_saved={on_created} />
		}
	</>}
}

#[derive(Clone, PartialEq, Properties)]
struct WorkspaceCardProps {
	workspace: Workspace,
	on_delete: Callback<Workspace>,
}

#[function_component]
fn WorkspaceCard(props: &WorkspaceCardProps) -> Html {
	let workspace = &props.workspace;
	let on_delete = {
		let workspace = workspace.clone();
		props.on_delete.reform(move |_: MouseEvent| workspace.clone())
	};
	html! {
		<div class="col-md-4">
			<div class="card h-100">
				<div class="card-header d-flex align-items-center">
					<span class="me-auto">{&workspace.name}</span>
					<span class="badge bg-secondary">{workspace.subscription_plan.label()}</span>
				</div>
				<div class="card-body">
					<p class="card-text">{workspace.description.clone().unwrap_or_default()}</p>
				</div>
				<div class="card-footer d-flex">
					<Link<Route> classes="btn btn-primary btn-sm me-auto" to={Route::Workspace { id: workspace.id }}>
						{"Open"}
					</Link<Route>>
					<button class="btn btn-outline-danger btn-sm" onclick={on_delete}>
						<i class="bi bi-trash" />
					</button>
				</div>
			</div>
		</div>
	}
}
