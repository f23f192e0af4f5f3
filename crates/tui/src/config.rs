/// Textual configuration used when rendering the browse screen and the
/// surrounding chrome.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Placeholder text displayed while the search input is empty.
	pub input_placeholder: String,
	/// Title rendered above the table of records.
	pub table_title: String,
	/// Noun used when summarizing the number of matches.
	pub count_label: String,
	/// Title used for the detail pane.
	pub detail_title: String,
	/// Key hints rendered in the footer.
	pub footer_hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			input_placeholder: "Search characters by name".to_string(),
			table_title: "Characters".to_string(),
			count_label: "characters".to_string(),
			detail_title: "Character details".to_string(),
			footer_hint: "enter search  tab select  pgup/pgdn page  ^d detail  ^r refresh  ^e export  esc quit"
				.to_string(),
		}
	}
}
