//! portfolio-fx: client-side effects for a personal portfolio page.
//!
//! This crate attaches a particle background, scroll reveals, stat counters,
//! a mobile menu, active-section highlighting, a custom cursor and a
//! light/dark switch to an existing static page. Every feature is optional:
//! one whose elements are missing stays off and the rest carry on.

use leptos::prelude::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

// Only pulled in to select the `js` entropy backend for `rand` on wasm32.
use getrandom as _;

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod scheduler;
pub mod storage;

pub use components::theme::{ThemeController, ThemeMode};
pub use config::FxConfig;
pub use dom::Page;
pub use error::{FxError, FxResult};
pub use scheduler::{AnimationFrameClock, Frame, FrameClock, FrameTask, ManualClock};

use components::{counters, cursor, mobile_menu, nav_highlight, particle_field, scroll_reveal, theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Load overrides from a script element with id="fx-config".
/// Falls back to defaults when the element is absent or malformed.
fn load_config(page: &Page) -> FxConfig {
	let Some(json_text) = page
		.document
		.get_element_by_id(config::CONFIG_ELEMENT_ID)
		.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
		.and_then(|script| script.text().ok())
	else {
		return FxConfig::default();
	};

	match FxConfig::from_json(&json_text) {
		Ok(config) => {
			info!("portfolio-fx: loaded configuration overrides");
			config
		}
		Err(e) => {
			warn!("portfolio-fx: failed to parse configuration: {}", e);
			FxConfig::default()
		}
	}
}

/// Wire every feature to `page`. Features that cannot start are logged and
/// skipped.
pub fn install_all(page: &Page, config: &FxConfig) {
	let clock = AnimationFrameClock;
	let features: [(&str, FxResult<()>); 7] = [
		("theme", theme::install(page, &config.theme)),
		(
			"particle field",
			particle_field::install(page, &config.particles, &config.theme.dark_class, &clock),
		),
		("scroll reveal", scroll_reveal::install(page, &config.reveal)),
		("counters", counters::install(page, &config.counters, clock)),
		("mobile menu", mobile_menu::install(page, &config.menu)),
		("nav highlight", nav_highlight::install(page, &config.nav)),
		("cursor", cursor::install(page, &config.cursor)),
	];

	let mut ready = 0;
	for (name, result) in features {
		match result {
			Ok(()) => ready += 1,
			Err(e) => debug!("portfolio-fx: {name} disabled: {e}"),
		}
	}
	info!("portfolio-fx: {ready}/7 features ready");
}

/// Main application component.
/// Renders nothing itself; it enhances the page it is mounted on.
#[component]
pub fn App() -> impl IntoView {
	match Page::current() {
		Ok(page) => {
			let config = load_config(&page);
			install_all(&page, &config);
		}
		Err(e) => warn!("portfolio-fx: {e}"),
	}
}
