use std::{cell::RefCell, collections::HashMap};

/// A string key-value store that outlives the page.
///
/// Values are opaque strings. There is no locking: the browser runs this code on one thread,
/// so every write simply replaces whatever was there.
pub trait StorageBackend {
	fn read(&self, key: &str) -> Option<String>;
	fn write(&self, key: &str, value: &str);
	fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;
impl StorageBackend for BrowserStorage {
	fn read(&self, key: &str) -> Option<String> {
		use gloo_storage::{LocalStorage, Storage};
		LocalStorage::raw().get_item(key).ok().flatten()
	}

	fn write(&self, key: &str, value: &str) {
		use gloo_storage::{LocalStorage, Storage};
		if let Err(err) = LocalStorage::raw().set_item(key, value) {
			log::error!(target: "storage", "Failed to write {key:?}: {err:?}");
		}
	}

	fn remove(&self, key: &str) {
		use gloo_storage::{LocalStorage, Storage};
		let _ = LocalStorage::raw().remove_item(key);
	}
}

#[derive(Debug, Default)]
pub struct MemoryStorage(RefCell<HashMap<String, String>>);
impl MemoryStorage {
	pub fn len(&self) -> usize {
		self.0.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.borrow().is_empty()
	}
}
impl StorageBackend for MemoryStorage {
	fn read(&self, key: &str) -> Option<String> {
		self.0.borrow().get(key).cloned()
	}

	fn write(&self, key: &str, value: &str) {
		self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
	}

	fn remove(&self, key: &str) {
		self.0.borrow_mut().remove(key);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn memory_storage_is_last_write_wins() {
		let storage = MemoryStorage::default();
		assert!(storage.is_empty());
		storage.write("access_token", "first");
		storage.write("access_token", "second");
		assert_eq!(storage.read("access_token").as_deref(), Some("second"));
		assert_eq!(storage.len(), 1);
		storage.remove("access_token");
		assert_eq!(storage.read("access_token"), None);
	}
}
