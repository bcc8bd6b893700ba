//! Selection state shared by the list and team pickers.
//!
//! Pure data: no DOM access, so filtering and selection rules can be tested
//! natively. Components keep one `PickerState` per picker instance.

use std::fmt::Display;

/// One row of the filtered dropdown.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerEntry<T> {
	pub item: T,
	pub label: String,
	/// True when the item is the sibling picker's current selection.
	pub disabled: bool,
}

/// Open flag, search text and carousel position over a fixed item list.
#[derive(Clone, Debug)]
pub struct PickerState<T> {
	items: Vec<T>,
	open: bool,
	search: String,
	cursor: usize,
}

impl<T: Clone + PartialEq + Display> PickerState<T> {
	pub fn new(items: Vec<T>) -> Self {
		Self {
			items,
			open: false,
			search: String::new(),
			cursor: 0,
		}
	}

	pub fn items(&self) -> &[T] {
		&self.items
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn search(&self) -> &str {
		&self.search
	}

	pub fn toggle(&mut self) {
		if self.open {
			self.dismiss();
		} else {
			self.open = true;
		}
	}

	/// Close the dropdown and forget the search text.
	pub fn dismiss(&mut self) {
		self.open = false;
		self.search.clear();
	}

	pub fn set_search(&mut self, text: impl Into<String>) {
		self.search = text.into();
	}

	/// Items whose label contains the search text, case-insensitively.
	pub fn entries(&self, sibling: Option<&T>) -> Vec<PickerEntry<T>> {
		let needle = self.search.to_lowercase();
		self.items
			.iter()
			.filter_map(|item| {
				let label = item.to_string();
				label.to_lowercase().contains(&needle).then(|| PickerEntry {
					item: item.clone(),
					disabled: sibling == Some(item),
					label,
				})
			})
			.collect()
	}

	/// Pick `item` from the collection.
	///
	/// Returns the stored item and closes the dropdown, or `None` without any
	/// state change if the item is missing or equals `sibling`.
	pub fn select(&mut self, item: &T, sibling: Option<&T>) -> Option<T> {
		if sibling == Some(item) {
			return None;
		}
		let idx = self.items.iter().position(|i| i == item)?;
		self.cursor = idx;
		self.dismiss();
		Some(self.items[idx].clone())
	}

	/// Item currently shown by the carousel.
	pub fn visible(&self) -> Option<&T> {
		self.items.get(self.cursor)
	}

	/// Move the carousel by `delta` with wraparound and close the dropdown.
	///
	/// An item equal to `sibling` is skipped over. Returns `None` when no
	/// other item is selectable.
	pub fn step(&mut self, delta: isize, sibling: Option<&T>) -> Option<T> {
		self.dismiss();
		let len = self.items.len() as isize;
		let mut idx = self.cursor as isize;
		for _ in 0..len {
			idx = (idx + delta).rem_euclid(len);
			let item = &self.items[idx as usize];
			if sibling != Some(item) {
				self.cursor = idx as usize;
				return Some(item.clone());
			}
		}
		None
	}

	/// Point the carousel at `selected` if it is present.
	///
	/// A stale selection that is no longer in the list is left for the
	/// caller to deal with.
	pub fn sync_selected(&mut self, selected: Option<&T>) {
		if let Some(idx) = selected.and_then(|s| self.items.iter().position(|i| i == s)) {
			self.cursor = idx;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn teams() -> PickerState<String> {
		PickerState::new(
			["Arsenal", "Aston Villa", "Chelsea", "Everton"]
				.into_iter()
				.map(String::from)
				.collect(),
		)
	}

	#[test]
	fn unique_substring_leaves_one_entry() {
		let mut p = teams();
		p.set_search("ELS");
		let entries = p.entries(None);
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].item, "Chelsea");
	}

	#[test]
	fn shared_substring_keeps_order() {
		let mut p = teams();
		p.set_search("a");
		let labels: Vec<_> = p.entries(None).into_iter().map(|e| e.label).collect();
		assert_eq!(labels, ["Arsenal", "Aston Villa", "Chelsea"]);
	}

	#[test]
	fn no_match_and_empty_list_render_nothing() {
		let mut p = teams();
		p.set_search("zzz");
		assert!(p.entries(None).is_empty());

		let empty: PickerState<String> = PickerState::new(vec![]);
		assert!(empty.entries(None).is_empty());
		assert!(empty.visible().is_none());
	}

	#[test]
	fn select_returns_item_and_resets() {
		let mut p = teams();
		p.toggle();
		p.set_search("ever");
		let picked = p.select(&"Everton".to_string(), None);
		assert_eq!(picked.as_deref(), Some("Everton"));
		assert!(!p.is_open());
		assert_eq!(p.search(), "");
		assert_eq!(p.visible().map(String::as_str), Some("Everton"));
	}

	#[test]
	fn sibling_selection_is_never_selectable() {
		let mut p = teams();
		p.toggle();
		p.set_search("chel");
		let sibling = "Chelsea".to_string();
		let entries = p.entries(Some(&sibling));
		assert!(entries[0].disabled);
		assert_eq!(p.select(&sibling, Some(&sibling)), None);
		assert!(p.is_open());
		assert_eq!(p.search(), "chel");
	}

	#[test]
	fn unknown_item_is_rejected() {
		let mut p = teams();
		assert_eq!(p.select(&"Barnsley".to_string(), None), None);
	}

	#[test]
	fn carousel_wraps_both_ways() {
		let mut p = teams();
		assert_eq!(p.step(-1, None).as_deref(), Some("Everton"));
		assert_eq!(p.step(1, None).as_deref(), Some("Arsenal"));
		assert_eq!(p.step(1, None).as_deref(), Some("Aston Villa"));

		let mut empty: PickerState<String> = PickerState::new(vec![]);
		assert_eq!(empty.step(1, None), None);
	}

	#[test]
	fn carousel_skips_the_sibling() {
		let mut p = teams();
		let sibling = "Aston Villa".to_string();
		p.toggle();
		assert_eq!(p.step(1, Some(&sibling)).as_deref(), Some("Chelsea"));
		assert!(!p.is_open());
		assert_eq!(p.step(-1, Some(&sibling)).as_deref(), Some("Arsenal"));

		let mut lone = PickerState::new(vec!["Arsenal".to_string()]);
		assert_eq!(lone.step(1, Some(&"Arsenal".to_string())), None);
	}

	#[test]
	fn stale_selection_is_ignored() {
		let mut p = teams();
		p.sync_selected(Some(&"Chelsea".to_string()));
		p.sync_selected(Some(&"Barnsley".to_string()));
		assert_eq!(p.visible().map(String::as_str), Some("Chelsea"));
	}

	#[test]
	fn numbers_filter_by_their_text() {
		let mut p = PickerState::new((1..=38u32).collect());
		p.set_search("3");
		let items: Vec<u32> = p.entries(None).into_iter().map(|e| e.item).collect();
		assert_eq!(items, [3, 13, 23, 30, 31, 32, 33, 34, 35, 36, 37, 38]);
	}
}
