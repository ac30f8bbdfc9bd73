use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ErrorBannerProps {
	pub message: Option<AttrValue>,
	pub on_dismiss: Callback<MouseEvent>,
}

#[function_component]
pub fn ErrorBanner(props: &ErrorBannerProps) -> Html {
	let Some(message) = &props.message else {
		return html! {};
	};
	html! {
		<div class="alert alert-danger alert-dismissible d-flex align-items-center" role="alert">
			<i class="bi bi-exclamation-triangle me-2" />
			<span>{message}</span>
			<button type="button" class="btn-close" aria-label="Close" onclick={props.on_dismiss.clone()} />
		</div>
	}
}
