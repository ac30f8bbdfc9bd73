use crate::{
	components::{reducer, ErrorBanner, FormState, TextField},
	hooks::{use_client, use_request_errors},
	session::AuthState,
	validation::{FieldErrors, LoginForm},
	Route,
};
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link, Redirect};
use yewdux::prelude::use_store;

#[function_component]
pub fn Login() -> Html {
	let client = use_client();
	let errors = use_request_errors();
	let navigator = use_navigator().expect_throw("Login is rendered inside the router");
	let (auth, dispatch) = use_store::<AuthState>();
	let form = use_reducer(FormState::<LoginForm>::default);
	let field_errors = use_state(FieldErrors::default);
	let submitting = use_state(|| false);

	let submit = {
		let form = form.clone();
		let field_errors = field_errors.clone();
		let submitting = submitting.clone();
		let errors = errors.clone();
		Callback::from(move |evt: SubmitEvent| {
			evt.prevent_default();
			let request = match form.validate() {
				Ok(request) => request,
				Err(invalid) => {
					field_errors.set(invalid);
					return;
				}
			};
			field_errors.set(FieldErrors::default());
			errors.clear();
			submitting.set(true);
			let client = client.clone();
			let errors = errors.clone();
			let submitting = submitting.clone();
			let dispatch = dispatch.clone();
			let navigator = navigator.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let result = client.auth().login(&request).await;
				submitting.set(false);
				match result {
					Ok(response) => match AuthState::signed_in(response.user, client.storage()) {
						Some(state) => {
							dispatch.set(state);
							navigator.push(&Route::Dashboard);
						}
						None => errors.show("Sign in did not return a session, please try again"),
					},
					Err(err) => errors.report(err),
				}
			});
		})
	};

	if auth.is_authenticated() {
		return html! { <Redirect<Route> to={Route::Dashboard} /> };
	}

	html! {
		<div class="row justify-content-center">
			<div class="col-md-5">
				<h2 class="mb-4">{"Sign In"}</h2>
				<ErrorBanner message={errors.message()} on_dismiss={errors.dismiss_callback()} />
				<form onsubmit={submit} novalidate=true>
					<TextField
						name="email" label="Email" input_type="email"
						value={form.email.clone()}
						update={reducer(&form, |form, value| form.email = value)}
						error={field_errors.get("email")}
					/>
					<TextField
						name="password" label="Password" input_type="password"
						value={form.password.clone()}
						update={reducer(&form, |form, value| form.password = value)}
						error={field_errors.get("password")}
					/>
					<button type="submit" class="btn btn-primary w-100" disabled={*submitting}>
						{if *submitting { "Signing in..." } else { "Sign In" }}
					</button>
				</form>
				<p class="mt-3 text-center">
					{"No account yet? "}
					<Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
				</p>
			</div>
		</div>
	}
}
