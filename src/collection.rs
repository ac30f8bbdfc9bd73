use std::rc::Rc;
use yew::Reducible;

/// Records that carry a server-assigned id.
pub trait Keyed {
	fn key(&self) -> u64;
}

/// The records a screen is currently showing, in the order the server returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemList<T> {
	items: Vec<T>,
}
impl<T> Default for ItemList<T> {
	fn default() -> Self {
		Self { items: Vec::new() }
	}
}
impl<T> std::ops::Deref for ItemList<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.items
	}
}
impl<T> From<Vec<T>> for ItemList<T> {
	fn from(items: Vec<T>) -> Self {
		Self { items }
	}
}

impl<T: Keyed> ItemList<T> {
	pub fn by_key(&self, key: u64) -> Option<&T> {
		self.items.iter().find(|item| item.key() == key)
	}

	pub fn append(&mut self, item: T) {
		self.items.push(item);
	}

	/// Swaps in the updated record where the old one was. Returns false if nothing had that id.
	pub fn replace(&mut self, item: T) -> bool {
		let Some(slot) = self.items.iter_mut().find(|existing| existing.key() == item.key()) else {
			return false;
		};
		*slot = item;
		true
	}

	/// Drops every record with this id and returns how many were dropped.
	pub fn remove(&mut self, key: u64) -> usize {
		let before = self.items.len();
		self.items.retain(|item| item.key() != key);
		before - self.items.len()
	}
}

pub enum ListAction<T> {
	Load(Vec<T>),
	Created(T),
	Updated(T),
	Deleted(u64),
}

impl<T> Reducible for ItemList<T>
where
	T: Keyed + Clone,
{
	type Action = ListAction<T>;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut list = (*self).clone();
		match action {
			ListAction::Load(items) => list = Self::from(items),
			ListAction::Created(item) => list.append(item),
			ListAction::Updated(item) => {
				if !list.replace(item) {
					return self;
				}
			}
			ListAction::Deleted(key) => {
				if list.remove(key) == 0 {
					return self;
				}
			}
		}
		Rc::new(list)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Clone, PartialEq)]
	struct Row(u64, &'static str);
	impl Keyed for Row {
		fn key(&self) -> u64 {
			self.0
		}
	}

	fn rows() -> Rc<ItemList<Row>> {
		Rc::new(ItemList::from(vec![Row(1, "alpha"), Row(2, "beta"), Row(3, "gamma")]))
	}

	#[test]
	fn update_replaces_in_place() {
		let list = rows().reduce(ListAction::Updated(Row(2, "beta v2")));
		assert_eq!(&list[..], &[Row(1, "alpha"), Row(2, "beta v2"), Row(3, "gamma")]);
	}

	#[test]
	fn update_of_unknown_id_keeps_identity() {
		let before = rows();
		let after = before.clone().reduce(ListAction::Updated(Row(9, "ghost")));
		assert!(Rc::ptr_eq(&before, &after));
	}

	#[test]
	fn create_appends_once() {
		let list = rows().reduce(ListAction::Created(Row(4, "delta")));
		assert_eq!(list.len(), 4);
		assert_eq!(list.last(), Some(&Row(4, "delta")));
		assert_eq!(list.by_key(1), Some(&Row(1, "alpha")));
	}

	#[test]
	fn delete_removes_only_matching_id() {
		let list = rows().reduce(ListAction::Deleted(2));
		assert_eq!(&list[..], &[Row(1, "alpha"), Row(3, "gamma")]);

		let unchanged = list.clone().reduce(ListAction::Deleted(42));
		assert!(Rc::ptr_eq(&list, &unchanged));
	}

	#[test]
	fn load_replaces_everything() {
		let list = rows().reduce(ListAction::Load(vec![Row(7, "new")]));
		assert_eq!(&list[..], &[Row(7, "new")]);
	}
}
