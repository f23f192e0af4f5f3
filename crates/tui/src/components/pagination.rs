//! Page-strip control and the window arithmetic behind it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Upper bound on the number of page buttons shown at once.
pub const MAX_VISIBLE: u64 = 5;

/// Compute the consecutive run of page numbers shown around `current`.
///
/// Callers guarantee `1 <= current <= total`; the function computes the
/// window for valid input and does not clamp out-of-range pages.
#[must_use]
pub fn visible_window(current: u64, total: u64, max_visible: u64) -> Vec<u64> {
	if total <= max_visible {
		return (1..=total).collect();
	}

	let half = max_visible / 2;
	let (start, end) = if current <= half + 1 {
		(1, max_visible)
	} else if current >= total - half {
		(total - max_visible + 1, total)
	} else {
		(current - half, current + half)
	};
	(start..=end).collect()
}

/// Render the page strip: prev/next arrows, the visible window, and the
/// leading/trailing edge affordances when the window does not touch the
/// edges. Renders nothing when there is a single page.
pub fn render_strip(frame: &mut Frame, area: Rect, current: u64, total: u64, theme: &Theme) {
	if total <= 1 {
		return;
	}

	let window = visible_window(current, total, MAX_VISIBLE);
	let mut spans: Vec<Span> = Vec::new();

	let arrow_style = if current > 1 { theme.prompt } else { theme.empty };
	spans.push(Span::styled("← prev ", arrow_style));

	if window.first().is_some_and(|first| *first > 1) {
		spans.push(Span::styled("1 ", theme.prompt));
		if window.first().is_some_and(|first| *first > 2) {
			spans.push(Span::styled("… ", theme.empty));
		}
	}

	for page in &window {
		if *page == current {
			spans.push(Span::styled(format!("[{page}] "), theme.highlight));
		} else {
			spans.push(Span::styled(format!("{page} "), theme.prompt));
		}
	}

	if window.last().is_some_and(|last| *last < total) {
		if window.last().is_some_and(|last| *last < total - 1) {
			spans.push(Span::styled("… ", theme.empty));
		}
		spans.push(Span::styled(format!("{total} "), theme.prompt));
	}

	let arrow_style = if current < total { theme.prompt } else { theme.empty };
	spans.push(Span::styled("next →", arrow_style));

	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn small_totals_show_every_page() {
		for total in 1..=5 {
			for current in 1..=total {
				let expected: Vec<u64> = (1..=total).collect();
				assert_eq!(visible_window(current, total, MAX_VISIBLE), expected);
			}
		}
	}

	#[test]
	fn early_pages_pin_the_window_to_the_start() {
		for current in 1..=3 {
			assert_eq!(visible_window(current, 42, MAX_VISIBLE), vec![1, 2, 3, 4, 5]);
		}
	}

	#[test]
	fn late_pages_pin_the_window_to_the_end() {
		for current in 40..=42 {
			assert_eq!(
				visible_window(current, 42, MAX_VISIBLE),
				vec![38, 39, 40, 41, 42]
			);
		}
	}

	#[test]
	fn middle_pages_center_the_window() {
		assert_eq!(visible_window(7, 42, MAX_VISIBLE), vec![5, 6, 7, 8, 9]);
		assert_eq!(visible_window(4, 42, MAX_VISIBLE), vec![2, 3, 4, 5, 6]);
		assert_eq!(visible_window(39, 42, MAX_VISIBLE), vec![37, 38, 39, 40, 41]);
	}

	#[test]
	fn boundary_between_pinned_and_centered_is_seamless() {
		// total > 5: current 3 is pinned, current 4 is the first centered
		// window; they overlap by four pages.
		assert_eq!(visible_window(3, 6, MAX_VISIBLE), vec![1, 2, 3, 4, 5]);
		assert_eq!(visible_window(4, 6, MAX_VISIBLE), vec![2, 3, 4, 5, 6]);
	}
}
