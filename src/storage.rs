//! Durable key-value storage for user preferences.
//!
//! [`LocalStore`] is backed by `window.localStorage`. [`MemoryStore`] keeps
//! values in a map and stands in for it in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{FxError, FxResult};

/// String key-value store.
pub trait PreferenceStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str) -> FxResult<()>;
}

/// `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStore {
	storage: web_sys::Storage,
}

impl LocalStore {
	/// Open the window's local storage. Fails when the browser denies access
	/// (private mode, disabled cookies).
	pub fn open(window: &web_sys::Window) -> FxResult<Self> {
		let storage = window
			.local_storage()
			.map_err(|_| FxError::StorageUnavailable)?
			.ok_or(FxError::StorageUnavailable)?;
		Ok(Self { storage })
	}
}

impl PreferenceStore for LocalStore {
	fn get(&self, key: &str) -> Option<String> {
		self.storage.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) -> FxResult<()> {
		self.storage.set_item(key, value)?;
		Ok(())
	}
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
	values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store pre-populated with one entry.
	pub fn with(key: &str, value: &str) -> Self {
		let store = Self::new();
		store
			.values
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		store
	}
}

impl PreferenceStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.values.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) -> FxResult<()> {
		self.values
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}

	fn set(&self, key: &str, value: &str) -> FxResult<()> {
		(**self).set(key, value)
	}
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}

	fn set(&self, key: &str, value: &str) -> FxResult<()> {
		(**self).set(key, value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn memory_store_round_trips_values() {
		let store = MemoryStore::new();
		assert_eq!(store.get("theme"), None);
		store.set("theme", "light").unwrap();
		assert_eq!(store.get("theme").as_deref(), Some("light"));
		store.set("theme", "dark").unwrap();
		assert_eq!(store.get("theme").as_deref(), Some("dark"));
	}

	#[test]
	fn references_delegate_to_the_store() {
		let store = MemoryStore::with("theme", "light");
		let borrowed = &store;
		borrowed.set("other", "x").unwrap();
		assert_eq!(store.get("other").as_deref(), Some("x"));
		assert_eq!(borrowed.get("theme").as_deref(), Some("light"));
	}
}
