use crate::{
	components::{reducer, ErrorBanner, FormState, TextField},
	hooks::{use_client, use_request_errors},
	session::AuthState,
	validation::{FieldErrors, RegisterForm},
	Route,
};
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link, Redirect};
use yewdux::prelude::use_store;

#[function_component]
pub fn Register() -> Html {
	let client = use_client();
	let errors = use_request_errors();
	let navigator = use_navigator().expect_throw("Register is rendered inside the router");
	let (auth, dispatch) = use_store::<AuthState>();
	let form = use_reducer(FormState::<RegisterForm>::default);
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
				let result = client.auth().register(&request).await;
				submitting.set(false);
				match result {
					Ok(response) => match AuthState::signed_in(response.user, client.storage()) {
						Some(state) => {
							dispatch.set(state);
							navigator.push(&Route::Dashboard);
						}
						// the account exists but still has to sign in
						None => navigator.push(&Route::Login),
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
				<h2 class="mb-4">{"Create an account"}</h2>
				<ErrorBanner message={errors.message()} on_dismiss={errors.dismiss_callback()} />
				<form onsubmit={submit} novalidate=true>
					<TextField
						name="name" label="Name"
						value={form.name.clone()}
						update={reducer(&form, |form, value| form.name = value)}
						error={field_errors.get("name")}
					/>
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
					<TextField
						name="confirm_password" label="Confirm password" input_type="password"
						value={form.confirm_password.clone()}
						update={reducer(&form, |form, value| form.confirm_password = value)}
						error={field_errors.get("confirm_password")}
					/>
					<button type="submit" class="btn btn-primary w-100" disabled={*submitting}>
						{if *submitting { "Creating account..." } else { "Register" }}
					</button>
				</form>
				<p class="mt-3 text-center">
					{"Already registered? "}
					<Link<Route> to={Route::Login}>{"Sign In"}</Link<Route>>
				</p>
			</div>
		</div>
	}
}
