//! Application runtime and event loop.

use std::collections::VecDeque;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::error;

use crate::app::{App, BrowseOutcome};

/// Run `app` to completion and return what the user walked away with.
pub fn run(mut app: App) -> Result<BrowseOutcome> {
	let mut terminal = ratatui::init();
	terminal.clear()?;

	app.hydrate();

	let (event_tx, event_rx) = mpsc::channel();
	let event_loop_running = Arc::new(AtomicBool::new(true));
	let event_loop_flag = Arc::clone(&event_loop_running);

	let event_thread = thread::spawn(move || -> Result<()> {
		while event_loop_flag.load(Ordering::Relaxed) {
			if event::poll(Duration::from_millis(50))? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	let mut pending_events = VecDeque::new();

	let result: Result<BrowseOutcome> = 'event_loop: loop {
		loop {
			match event_rx.try_recv() {
				Ok(event) => pending_events.push_back(event),
				Err(mpsc::TryRecvError::Empty) => break,
				Err(mpsc::TryRecvError::Disconnected) => {
					break 'event_loop Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		let mut maybe_outcome = None;
		while let Some(event) = pending_events.pop_front() {
			match event {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = app.handle_key(key) {
						maybe_outcome = Some(outcome);
						break;
					}
				}
				_ => {}
			}
		}

		if let Some(outcome) = maybe_outcome {
			break Ok(outcome);
		}

		app.pump_fetch_results();
		app.throbber_state.calc_next();

		// A panic while drawing becomes the fallback screen instead of a
		// crashed terminal.
		let draw_outcome = catch_unwind(AssertUnwindSafe(|| {
			terminal.draw(|frame| app.draw(frame)).map(|_| ())
		}));
		match draw_outcome {
			Ok(Ok(())) => {}
			Ok(Err(err)) => break Err(err.into()),
			Err(panic) => {
				let message = panic_message(panic.as_ref());
				error!(message, "panic while rendering");
				app.note_render_fault(message.to_string());
			}
		}

		thread::sleep(Duration::from_millis(16));
	};

	ratatui::restore();

	event_loop_running.store(false, Ordering::Relaxed);
	match event_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}

	result
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
	if let Some(message) = panic.downcast_ref::<&str>() {
		message
	} else if let Some(message) = panic.downcast_ref::<String>() {
		message.as_str()
	} else {
		"unknown rendering panic"
	}
}
