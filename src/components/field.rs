use crate::util::web_ext::CallbackExt;
use std::rc::Rc;
use yew::{prelude::*, Reducible};

#[derive(Clone, PartialEq, Properties)]
pub struct TextFieldProps {
	pub name: AttrValue,
	pub label: AttrValue,
	pub value: AttrValue,
	pub update: Callback<String>,
	#[prop_or_default]
	pub error: Option<&'static str>,
	#[prop_or(AttrValue::Static("text"))]
	pub input_type: AttrValue,
	#[prop_or_default]
	pub placeholder: Option<AttrValue>,
	#[prop_or_default]
	pub multiline: bool,
	#[prop_or_default]
	pub disabled: bool,
}

/// A labelled input with its validation message underneath.
#[function_component]
pub fn TextField(props: &TextFieldProps) -> Html {
	let id = format!("field-{}", props.name);
	let classes = classes!("form-control", props.error.is_some().then_some("is-invalid"));
	let control = match props.multiline {
		true => html! {
			<textarea
				id={id.clone()} name={props.name.clone()} class={classes}
				rows="3"
				value={props.value.clone()}
				placeholder={props.placeholder.clone()}
				disabled={props.disabled}
				oninput={props.update.from_input::<InputEvent>()}
			/>
		},
		false => html! {
			<input
				id={id.clone()} name={props.name.clone()} class={classes}
				type={props.input_type.clone()}
				value={props.value.clone()}
				placeholder={props.placeholder.clone()}
				disabled={props.disabled}
				oninput={props.update.from_input::<InputEvent>()}
			/>
		},
	};
	html! {
		<div class="mb-3">
			<label for={id} class="form-label">{&props.label}</label>
			{control}
			if let Some(error) = props.error {
				<div class="invalid-feedback">{error}</div>
			}
		</div>
	}
}

/// Form values being edited. Every edit is applied to the latest value, so edits that land
/// after an await never roll back fields typed in the meantime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState<T>(T);
impl<T> From<T> for FormState<T> {
	fn from(value: T) -> Self {
		Self(value)
	}
}
impl<T> std::ops::Deref for FormState<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl<T> Reducible for FormState<T>
where
	T: Clone + PartialEq + 'static,
{
	type Action = Box<dyn FnOnce(&mut T) + 'static>;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut value = self.0.clone();
		action(&mut value);
		match value != self.0 {
			true => Rc::new(Self(value)),
			false => self,
		}
	}
}

/// Binds a form-state field to an input's `update` callback.
pub fn reducer<T>(form: &UseReducerHandle<FormState<T>>, apply: impl Fn(&mut T, String) + 'static) -> Callback<String>
where
	T: Clone + PartialEq + 'static,
{
	let dispatcher = form.dispatcher();
	let apply = Rc::new(apply);
	Callback::from(move |value: String| {
		let apply = apply.clone();
		dispatcher.dispatch(Box::new(move |form: &mut T| apply(form, value)));
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validation::ProjectForm;

	#[test]
	fn late_edits_keep_earlier_ones() {
		let form = Rc::new(FormState::from(ProjectForm::default()));
		// a field typed while the thumbnail was still being read
		let form = form.reduce(Box::new(|form: &mut ProjectForm| form.name = "Landing".into()));
		let form = form.reduce(Box::new(|form: &mut ProjectForm| {
			form.thumbnail_url = Some("data:image/png;base64,aGk=".into())
		}));
		assert_eq!(form.name, "Landing");
		assert_eq!(form.thumbnail_url.as_deref(), Some("data:image/png;base64,aGk="));
	}

	#[test]
	fn unchanged_edit_keeps_identity() {
		let form = Rc::new(FormState::from(ProjectForm::default()));
		let same = form.clone().reduce(Box::new(|form: &mut ProjectForm| form.name.clear()));
		assert!(Rc::ptr_eq(&form, &same));
	}
}
