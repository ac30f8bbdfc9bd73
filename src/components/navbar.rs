use crate::{components::AuthSwitch, hooks::use_client, session::AuthState, Route};
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};
use yewdux::prelude::use_store;

#[function_component]
pub fn Navbar() -> Html {
	let client = use_client();
	let navigator = use_navigator().expect_throw("Navbar is rendered inside the router");
	let (auth, dispatch) = use_store::<AuthState>();
	let sign_out = Callback::from(move |_: MouseEvent| {
		client.auth().logout();
		dispatch.set(AuthState::default());
		navigator.push(&Route::Login);
	});
	let user_name = auth.user.as_ref().map(|user| user.name.clone()).unwrap_or_default();

	html! {
		<nav class="navbar navbar-expand navbar-dark bg-dark px-3">
			<Link<Route> classes="navbar-brand" to={Route::Dashboard}>{"WeFeed"}</Link<Route>>
			<AuthSwitch
				identified={html! {<>
					<ul class="navbar-nav me-auto">
						<li class="nav-item">
							<Link<Route> classes="nav-link" to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
						</li>
						<li class="nav-item">
							<Link<Route> classes="nav-link" to={Route::Workspaces}>{"Workspaces"}</Link<Route>>
						</li>
						<li class="nav-item">
							<Link<Route> classes="nav-link" to={Route::Projects}>{"Projects"}</Link<Route>>
						</li>
					</ul>
					<span class="navbar-text me-3">{user_name}</span>
					<button class="btn btn-outline-light btn-sm" onclick={sign_out}>{"Sign Out"}</button>
				</>}}
				anonymous={html! {
					<ul class="navbar-nav ms-auto">
						<li class="nav-item">
							<Link<Route> classes="nav-link" to={Route::Login}>{"Sign In"}</Link<Route>>
						</li>
						<li class="nav-item">
							<Link<Route> classes="nav-link" to={Route::Register}>{"Register"}</Link<Route>>
						</li>
					</ul>
				}}
			/>
		</nav>
	}
}
