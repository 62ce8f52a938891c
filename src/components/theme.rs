//! Light/dark theme switch.
//!
//! The mode lives as a class on `<html>` and is persisted to local storage on
//! every toggle. At load the stored preference is read once: exactly
//! `"light"` selects light mode, anything else (including nothing) dark.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;

use crate::config::ThemeConfig;
use crate::dom::{self, Page};
use crate::error::FxResult;
use crate::storage::{LocalStore, MemoryStore, PreferenceStore};

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	Light,
	#[default]
	Dark,
}

impl ThemeMode {
	/// Interpret a stored preference.
	pub fn from_stored(value: Option<&str>) -> Self {
		match value {
			Some("light") => Self::Light,
			_ => Self::Dark,
		}
	}

	/// Current mode as shown by the root element's classes.
	pub fn of_root(root: &Element, dark_class: &str) -> Self {
		if dom::has_class(root, dark_class) {
			Self::Dark
		} else {
			Self::Light
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Self::Dark => Self::Light,
			Self::Light => Self::Dark,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	pub fn is_dark(self) -> bool {
		self == Self::Dark
	}
}

/// Holds the current mode and keeps the store in step with it.
pub struct ThemeController<S> {
	mode: Cell<ThemeMode>,
	store: S,
	key: String,
}

impl<S: PreferenceStore> ThemeController<S> {
	/// Read the persisted preference once. Nothing is written.
	pub fn load(store: S, key: impl Into<String>) -> Self {
		let key = key.into();
		let mode = ThemeMode::from_stored(store.get(&key).as_deref());
		Self {
			mode: Cell::new(mode),
			store,
			key,
		}
	}

	pub fn mode(&self) -> ThemeMode {
		self.mode.get()
	}

	/// Flip the mode and persist the new one. Returns the new mode.
	///
	/// A failed write is logged; the in-page mode still changes.
	pub fn toggle(&self) -> ThemeMode {
		let next = self.mode.get().toggled();
		self.mode.set(next);
		if let Err(e) = self.store.set(&self.key, next.as_str()) {
			warn!("theme: could not persist {:?}: {e}", next.as_str());
		}
		next
	}
}

fn apply(root: &Element, dark_class: &str, mode: ThemeMode) -> FxResult<()> {
	dom::set_class(root, dark_class, mode.is_dark())
}

/// Apply the stored theme and wire the toggle buttons.
pub fn install(page: &Page, config: &ThemeConfig) -> FxResult<()> {
	let root = page.root()?;
	let store: Box<dyn PreferenceStore> = match LocalStore::open(&page.window) {
		Ok(store) => Box::new(store),
		Err(e) => {
			warn!("theme: {e}, preference will not survive a reload");
			Box::new(MemoryStore::new())
		}
	};
	let controller = Rc::new(ThemeController::load(store, config.storage_key.as_str()));
	apply(&root, &config.dark_class, controller.mode())?;

	for id in &config.toggle_ids {
		let Ok(button) = page.by_id(id) else {
			debug!("theme: no #{id}, skipping");
			continue;
		};
		let (controller, root, dark_class) =
			(controller.clone(), root.clone(), config.dark_class.clone());
		dom::listen(&button, "click", move |_: web_sys::Event| {
			let mode = controller.toggle();
			let _ = apply(&root, &dark_class, mode);
		})?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stored_preference_selects_initial_mode() {
		assert_eq!(ThemeMode::from_stored(None), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_stored(Some("")), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
		assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_stored(Some("blue")), ThemeMode::Dark);
		assert_eq!(ThemeMode::from_stored(Some("Light")), ThemeMode::Dark);
	}

	#[test]
	fn load_reads_without_writing() {
		let store = MemoryStore::new();
		let theme = ThemeController::load(&store, "theme");
		assert_eq!(theme.mode(), ThemeMode::Dark);
		assert_eq!(store.get("theme"), None);

		let store = MemoryStore::with("theme", "light");
		assert_eq!(ThemeController::load(&store, "theme").mode(), ThemeMode::Light);
	}

	#[test]
	fn toggle_persists_new_mode() {
		let store = MemoryStore::new();
		let theme = ThemeController::load(&store, "theme");
		assert_eq!(theme.toggle(), ThemeMode::Light);
		assert_eq!(store.get("theme").as_deref(), Some("light"));
		assert_eq!(theme.toggle(), ThemeMode::Dark);
		assert_eq!(store.get("theme").as_deref(), Some("dark"));
	}

	#[test]
	fn double_toggle_restores_mode_and_store_matches() {
		for initial in [None, Some("light"), Some("blue")] {
			let store = match initial {
				Some(v) => MemoryStore::with("theme", v),
				None => MemoryStore::new(),
			};
			let theme = ThemeController::load(&store, "theme");
			let start = theme.mode();
			theme.toggle();
			theme.toggle();
			assert_eq!(theme.mode(), start);
			assert_eq!(store.get("theme").as_deref(), Some(start.as_str()));
		}
	}

	#[test]
	fn unknown_stored_value_toggles_to_light() {
		let store = MemoryStore::with("theme", "blue");
		let theme = ThemeController::load(&store, "theme");
		assert_eq!(theme.toggle(), ThemeMode::Light);
	}
}
