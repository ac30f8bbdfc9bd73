use crate::{
	api::ApiClient,
	config::Config,
	data::WorkspaceId,
	error::Error,
	storage::BrowserStorage,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::{prelude::Redirect, BrowserRouter, Routable};

pub mod api;
pub mod collection;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod page;
pub mod response;
pub mod route;
pub mod session;
pub mod storage;
pub mod util;
pub mod validation;

fn build_client() -> Result<ApiClient, Error> {
	let config = Config::from_env()?;
	log::info!(target: "wefeed", "Using api at {}", config.base_url());
	ApiClient::new(config, Rc::new(BrowserStorage))
}

#[function_component]
pub fn App() -> Html {
	let client = use_memo((), |_| build_client());
	let client = match &*client {
		Ok(client) => client.clone(),
		Err(err) => {
			log::error!(target: "wefeed", "Failed to start: {err}");
			return html! {
				<div class="container py-5">
					<div class="alert alert-danger">{format!("WeFeed could not start: {err}")}</div>
				</div>
			};
		}
	};
	html! {
		<BrowserRouter>
			<ContextProvider<ApiClient> context={client}>
				<components::Navbar />
				<main class="container py-4">
					{ <Route as route::Route>::switch() }
				</main>
			</ContextProvider<ApiClient>>
		</BrowserRouter>
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Root,
	#[at("/login")]
	Login,
	#[at("/register")]
	Register,
	#[at("/dashboard")]
	Dashboard,
	#[at("/workspaces")]
	Workspaces,
	#[at("/workspaces/:id")]
	Workspace { id: WorkspaceId },
	#[at("/projects")]
	Projects,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl route::Route for Route {
	fn html(self) -> Html {
		match self {
			Self::Root | Self::NotFound => html! { <Redirect<Route> to={Route::Dashboard} /> },
			Self::Login => html! { <page::Login /> },
			Self::Register => html! { <page::Register /> },
			Self::Dashboard => html! { <page::Dashboard /> },
			Self::Workspaces => html! { <page::Workspaces /> },
			Self::Workspace { id } => html! { <page::WorkspaceDetail key={id} {id} /> },
			Self::Projects => html! { <page::Projects /> },
		}
	}

	fn requires_auth(&self) -> bool {
		!matches!(self, Self::Login | Self::Register)
	}

	fn sign_in() -> Self {
		Self::Login
	}
}
