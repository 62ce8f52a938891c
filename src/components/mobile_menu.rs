//! Mobile navigation panel toggle.

use std::rc::Rc;

use web_sys::Element;

use crate::config::MenuConfig;
use crate::dom::{self, Page};
use crate::error::FxResult;

/// Visibility of the menu panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuState {
	hidden: bool,
}

impl MenuState {
	pub fn new(hidden: bool) -> Self {
		Self { hidden }
	}

	pub fn is_hidden(self) -> bool {
		self.hidden
	}

	/// Toggle button pressed.
	pub fn toggle(self) -> Self {
		Self {
			hidden: !self.hidden,
		}
	}

	/// A link inside the panel was followed.
	pub fn close(self) -> Self {
		Self { hidden: true }
	}
}

struct MenuBinding {
	panel: Element,
	hidden_class: String,
}

impl MenuBinding {
	fn update(&self, next: impl FnOnce(MenuState) -> MenuState) {
		// The panel's class is the source of truth.
		let current = MenuState::new(dom::has_class(&self.panel, &self.hidden_class));
		let state = next(current);
		let _ = dom::set_class(&self.panel, &self.hidden_class, state.is_hidden());
	}
}

/// Wire `#mobile-menu-btn` to show and hide `#mobile-menu`.
pub fn install(page: &Page, config: &MenuConfig) -> FxResult<()> {
	let button = page.by_id(&config.button_id)?;
	let panel = page.by_id(&config.panel_id)?;
	let links = dom::elements(&panel.query_selector_all("a")?);

	let binding = Rc::new(MenuBinding {
		panel,
		hidden_class: config.hidden_class.clone(),
	});

	let on_toggle = binding.clone();
	dom::listen(&button, "click", move |_: web_sys::Event| {
		on_toggle.update(MenuState::toggle);
	})?;

	for link in links {
		let on_link = binding.clone();
		dom::listen(&link, "click", move |_: web_sys::Event| {
			on_link.update(MenuState::close);
		})?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggle_flips_visibility() {
		let state = MenuState::new(true);
		assert!(!state.toggle().is_hidden());
		assert!(state.toggle().toggle().is_hidden());
	}

	#[test]
	fn link_click_always_hides() {
		assert!(MenuState::new(false).close().is_hidden());
		assert!(MenuState::new(true).close().is_hidden());
	}
}
