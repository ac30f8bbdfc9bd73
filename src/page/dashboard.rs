use crate::{
	components::ErrorBanner,
	data::{Project, Workspace},
	error::Error,
	hooks::{use_async, use_client, use_request_errors},
	session::AuthState,
	Route,
};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store_value;

const RECENT_PROJECTS: usize = 5;

#[function_component]
pub fn Dashboard() -> Html {
	let client = use_client();
	let errors = use_request_errors();
	let auth = use_store_value::<AuthState>();
	let workspaces = use_state(Vec::<Workspace>::new);
	let projects = use_state(Vec::<Project>::new);

	let load = use_async(true, &errors, {
		let workspaces = workspaces.clone();
		let projects = projects.clone();
		move || {
			let client = client.clone();
			let workspaces = workspaces.clone();
			let projects = projects.clone();
			Box::pin(async move {
				workspaces.set(client.workspaces().list().await?);
				projects.set(client.projects().list().await?);
				Ok(()) as Result<(), Error>
			})
		}
	});

	let name = auth.user.as_ref().map(|user| user.name.as_str()).unwrap_or("there");
	let summary = match load.loading() {
		true => html! { <div class="spinner-border spinner-border-sm" role="status" /> },
		false => html! {
			<div class="row g-3">
				<div class="col-md-6">
					<div class="card text-center">
						<div class="card-body">
							<h3 class="card-title">{workspaces.len()}</h3>
							<Link<Route> classes="card-link" to={Route::Workspaces}>{"Workspaces"}</Link<Route>>
						</div>
					</div>
				</div>
				<div class="col-md-6">
					<div class="card text-center">
						<div class="card-body">
							<h3 class="card-title">{projects.len()}</h3>
							<Link<Route> classes="card-link" to={Route::Projects}>{"Projects"}</Link<Route>>
						</div>
					</div>
				</div>
			</div>
		},
	};
	// newest first; the list endpoint returns them in creation order
	let recent = projects.iter().rev().take(RECENT_PROJECTS).map(|project| html! {
		<li class="list-group-item d-flex" key={project.id}>
			<Link<Route> classes="me-auto" to={Route::Workspace { id: project.workspace }}>{&project.name}</Link<Route>>
			<span class="text-muted small">{&project.created_day}</span>
		</li>
	});

	html! {<>
		<h2 class="mb-3">{format!("Welcome back, {name}")}</h2>
		<ErrorBanner message={errors.message()} on_dismiss={errors.dismiss_callback()} />
		{summary}
		if !projects.is_empty() {
			<h4 class="mt-4">{"Recent projects"}</h4>
			<ul class="list-group">{recent.collect::<Html>()}</ul>
		}
	</>}
}
