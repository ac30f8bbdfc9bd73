pub mod web_ext;

/// Runs a UI task to completion in the background, logging whatever error it ends with.
pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: futures_util::Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Debug + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err:?}");
		}
	});
}

/// Blocking browser confirmation prompt. Anything other than an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
	gloo_utils::window().confirm_with_message(message).unwrap_or(false)
}
