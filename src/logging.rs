#[cfg(target_arch = "wasm32")]
pub fn init() {
	let level = match cfg!(debug_assertions) {
		true => log::Level::Debug,
		false => log::Level::Info,
	};
	wasm_logger::init(wasm_logger::Config::new(level));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
	use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
	// A logger may already be installed when running under a test harness.
	let _ = TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
