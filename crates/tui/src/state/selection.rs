//! Multi-select of character records, independent of pagination.

use indexmap::IndexMap;
use rolodex_core::Character;

/// The user's current selection, keyed by record id.
///
/// Selections survive page and search changes until explicitly cleared.
/// Membership is decided by id alone; toggling a record that is already
/// present removes it, and toggling it back in stores the most recent
/// snapshot of the record.
#[derive(Debug, Default)]
pub struct SelectionStore {
	records: IndexMap<u64, Character>,
}

impl SelectionStore {
	/// Add `record` if its id is absent, remove it otherwise.
	pub fn toggle(&mut self, record: Character) {
		if self.records.shift_remove(&record.id).is_none() {
			self.records.insert(record.id, record);
		}
	}

	/// Empty the selection unconditionally.
	pub fn clear(&mut self) {
		self.records.clear();
	}

	#[must_use]
	pub fn is_selected(&self, id: u64) -> bool {
		self.records.contains_key(&id)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Selected records in the order they were toggled in.
	#[must_use]
	pub fn records(&self) -> Vec<Character> {
		self.records.values().cloned().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn character(id: u64, name: &str) -> Character {
		Character {
			id,
			name: name.to_string(),
			status: "Alive".to_string(),
			species: "Human".to_string(),
			image: String::new(),
		}
	}

	#[test]
	fn double_toggle_restores_the_previous_set() {
		let mut selection = SelectionStore::default();
		selection.toggle(character(1, "Rick Sanchez"));
		let before: Vec<_> = selection.records();

		selection.toggle(character(2, "Morty Smith"));
		selection.toggle(character(2, "Morty Smith"));

		assert_eq!(selection.records(), before);
	}

	#[test]
	fn membership_is_by_id_not_value() {
		let mut selection = SelectionStore::default();
		selection.toggle(character(1, "Rick Sanchez"));
		// Same id, different snapshot: toggles the record out.
		selection.toggle(character(1, "Rick (older snapshot)"));
		assert!(selection.is_empty());
	}

	#[test]
	fn retoggle_stores_the_latest_snapshot() {
		let mut selection = SelectionStore::default();
		selection.toggle(character(1, "Rick Sanchez"));
		selection.toggle(character(1, "Rick Sanchez"));
		selection.toggle(character(1, "Rick, renamed"));
		assert_eq!(selection.records()[0].name, "Rick, renamed");
	}

	#[test]
	fn clear_empties_unconditionally() {
		let mut selection = SelectionStore::default();
		selection.toggle(character(1, "Rick Sanchez"));
		selection.toggle(character(2, "Morty Smith"));
		selection.clear();
		assert!(selection.is_empty());
		selection.clear();
		assert!(selection.is_empty());
	}

	#[test]
	fn records_keep_insertion_order() {
		let mut selection = SelectionStore::default();
		selection.toggle(character(3, "Summer Smith"));
		selection.toggle(character(1, "Rick Sanchez"));
		let ids: Vec<u64> = selection.records().iter().map(|r| r.id).collect();
		assert_eq!(ids, vec![3, 1]);
	}
}
