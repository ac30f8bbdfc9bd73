use crate::session::AuthState;
use yew::prelude::*;
use yew_router::{prelude::Redirect, Routable};
use yewdux::prelude::use_store_value;

/// A routable set of screens, some of which need a signed-in user.
pub trait Route: Routable + Clone + PartialEq + 'static {
	fn html(self) -> Html;

	fn requires_auth(&self) -> bool {
		false
	}

	/// Where anonymous visitors of a protected screen are sent.
	fn sign_in() -> Self;

	fn switch() -> Html {
		html! {
			<yew_router::Switch<Self> render={|route: Self| html! { <Guard<Self> {route} /> }} />
		}
	}
}

#[derive(Properties, PartialEq)]
pub struct GuardProps<T: PartialEq> {
	pub route: T,
}

#[function_component(Guard)]
pub fn guard<T>(props: &GuardProps<T>) -> Html
where
	T: Route,
{
	let auth = use_store_value::<AuthState>();
	if props.route.requires_auth() && !auth.is_authenticated() {
		log::debug!(target: "route", "{} needs a signed in user", props.route.to_path());
		return html! { <Redirect<T> to={T::sign_in()} /> };
	}
	props.route.clone().html()
}
