use crate::{api::ApiClient, error::Error, session::AuthState, Route};
use std::rc::Rc;
use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::use_navigator;
use yewdux::prelude::Dispatch;

#[hook]
pub fn use_client() -> ApiClient {
	use_context::<ApiClient>().expect_throw("ApiClient is provided by App")
}

/// The banner message of a screen, plus the one place request failures are reported.
#[derive(Clone, PartialEq)]
pub struct RequestErrors {
	message: UseStateHandle<Option<AttrValue>>,
	report: Callback<Error>,
}
impl RequestErrors {
	pub fn message(&self) -> Option<AttrValue> {
		(*self.message).clone()
	}

	pub fn report(&self, err: Error) {
		self.report.emit(err);
	}

	pub fn show(&self, message: impl Into<AttrValue>) {
		self.message.set(Some(message.into()));
	}

		pub fn clear(&self) {
		self.message.set(None);
	}

	pub fn dismiss_callback(&self) -> Callback<MouseEvent> {
		let message = self.message.clone();
		Callback::from(move |_| message.set(None))
	}
}

/// A 401 means the stored token is no good: sign out locally and go back to the login screen.
#[hook]
pub fn use_request_errors() -> RequestErrors {
	let client = use_client();
	let navigator = use_navigator();
	let message = use_state(|| None::<AttrValue>);
	let report = {
		let message = message.clone();
		Callback::from(move |err: Error| {
			log::warn!(target: "ui", "{err}");
			message.set(Some(err.user_message().into()));
			if err.is_unauthorized() {
				client.auth().logout();
				#[cfg(target_arch = "wasm32")]
				let dispatch = Dispatch::<AuthState>::global();
				// yewdux has no global context off wasm; the UI only runs in the browser.
				#[cfg(not(target_arch = "wasm32"))]
				let dispatch = Dispatch::<AuthState>::new(&yewdux::Context::new());
				dispatch.set(AuthState::default());
				if let Some(navigator) = &navigator {
					navigator.push(&Route::Login);
				}
			}
		})
	};
	RequestErrors { message, report }
}

pub struct AsyncHandle {
	loading: UseStateHandle<bool>,
	run: Rc<dyn Fn()>,
}
impl AsyncHandle {
	pub fn run(&self) {
		(*self.run)();
	}

	pub fn loading(&self) -> bool {
		*self.loading
	}
}

/// Runs `make_future` in the background (once on mount, if asked), reporting failures through `errors`.
#[hook]
pub fn use_async<F>(run_first_mount: bool, errors: &RequestErrors, make_future: F) -> AsyncHandle
where
	F: Fn() -> futures_util::future::LocalBoxFuture<'static, Result<(), Error>> + 'static,
{
	let loading = use_state(|| run_first_mount);
	let make_future = Rc::new(make_future);
	let run = {
		let loading = loading.clone();
		let errors = errors.clone();
		Rc::new(move || {
			loading.set(true);
			let loading = loading.clone();
			let errors = errors.clone();
			let future = make_future();
			wasm_bindgen_futures::spawn_local(async move {
				let result = future.await;
				loading.set(false);
				if let Err(err) = result {
					errors.report(err);
				}
			});
		})
	};
	let run_on_mount = run.clone();
	use_mount(move || {
		if run_first_mount {
			run_on_mount();
		}
	});
	AsyncHandle { loading, run }
}
