use wasm_bindgen::JsCast;
use yew::{Callback, TargetCast};

/// Pulls the current value out of whatever form control fired the event.
pub trait InputExt {
	fn input_value(&self) -> Option<String>;
	fn selected_file(&self) -> Option<web_sys::File>;
}
impl InputExt for web_sys::Event {
	fn input_value(&self) -> Option<String> {
		let target = self.target()?;
		if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
			return Some(input.value());
		}
		if let Some(text_area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
			return Some(text_area.value());
		}
		target.dyn_ref::<web_sys::HtmlSelectElement>().map(|select| select.value())
	}

	fn selected_file(&self) -> Option<web_sys::File> {
		let input = self.target_dyn_into::<web_sys::HtmlInputElement>()?;
		input.files()?.get(0)
	}
}

pub trait CallbackExt {
	/// Adapts a `Callback<String>` so it can be bound directly to `oninput`/`onchange`.
	fn from_input<E>(&self) -> Callback<E>
	where
		E: AsRef<web_sys::Event> + 'static;
}
impl CallbackExt for Callback<String> {
	fn from_input<E>(&self) -> Callback<E>
	where
		E: AsRef<web_sys::Event> + 'static,
	{
		let update = self.clone();
		Callback::from(move |evt: E| {
			if let Some(value) = evt.as_ref().input_value() {
				update.emit(value);
			}
		})
	}
}
