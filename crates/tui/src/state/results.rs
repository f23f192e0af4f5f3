/// Cursor over the currently visible list of records.
#[derive(Debug, Default)]
pub struct ResultsState {
	cursor: usize,
}

impl ResultsState {
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn move_up(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn move_down(&mut self, len: usize) {
		if self.cursor + 1 < len {
			self.cursor += 1;
		}
	}

	/// Keep the cursor valid after the visible list changed.
	pub fn clamp(&mut self, len: usize) {
		if len == 0 {
			self.cursor = 0;
		} else if self.cursor >= len {
			self.cursor = len - 1;
		}
	}

	pub fn reset(&mut self) {
		self.cursor = 0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cursor_stays_inside_the_list() {
		let mut results = ResultsState::default();
		results.move_down(3);
		results.move_down(3);
		results.move_down(3);
		assert_eq!(results.cursor(), 2);
		results.move_up();
		assert_eq!(results.cursor(), 1);
	}

	#[test]
	fn clamp_pulls_the_cursor_back_after_shrink() {
		let mut results = ResultsState::default();
		results.move_down(20);
		results.move_down(20);
		results.clamp(1);
		assert_eq!(results.cursor(), 0);
	}
}
