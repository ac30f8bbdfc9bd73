#[cfg(target_arch = "wasm32")]
fn main() {
	wefeed_web::logging::init();
	yew::Renderer::<wefeed_web::App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
	wefeed_web::logging::init();
	log::error!(target: "wefeed", "wefeed-web runs in the browser; build it for wasm32-unknown-unknown (e.g. `trunk serve`)");
}
