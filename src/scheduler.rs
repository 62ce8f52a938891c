//! Per-frame scheduling.
//!
//! Animated features express their per-frame work as a [`FrameTask`] and hand
//! it to a [`FrameClock`]. In the browser the clock is
//! [`AnimationFrameClock`], which runs one tick per `requestAnimationFrame`.
//! Tests drive the same tasks with [`ManualClock`], one frame at a time.

use std::cell::RefCell;

use leptos::prelude::request_animation_frame;

/// What a task wants after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
	/// Run again on the next frame.
	Continue,
	/// Finished; do not reschedule.
	Done,
}

/// Work performed once per display frame.
pub trait FrameTask {
	fn tick(&mut self) -> Frame;
}

impl<F: FnMut() -> Frame> FrameTask for F {
	fn tick(&mut self) -> Frame {
		self()
	}
}

/// Source of display frames.
pub trait FrameClock {
	/// Run `task` on the next frame, and on every following frame while it
	/// returns [`Frame::Continue`].
	fn schedule(&self, task: Box<dyn FrameTask>);

	/// Tick `task` immediately, then hand it to the clock if it continues.
	fn start<T: FrameTask + 'static>(&self, mut task: T)
	where
		Self: Sized,
	{
		if task.tick() == Frame::Continue {
			self.schedule(Box::new(task));
		}
	}
}

/// Browser clock backed by `window.requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrameClock;

impl FrameClock for AnimationFrameClock {
	fn schedule(&self, mut task: Box<dyn FrameTask>) {
		request_animation_frame(move || {
			if task.tick() == Frame::Continue {
				AnimationFrameClock.schedule(task);
			}
		});
	}
}

/// Deterministic clock that only advances when told to.
#[derive(Default)]
pub struct ManualClock {
	pending: RefCell<Vec<Box<dyn FrameTask>>>,
}

impl ManualClock {
	pub fn new() -> Self {
		Self::default()
	}

	/// Deliver one frame to every scheduled task. Returns how many tasks are
	/// still scheduled afterwards.
	pub fn advance(&self) -> usize {
		let due = std::mem::take(&mut *self.pending.borrow_mut());
		let mut still_running = Vec::with_capacity(due.len());
		for mut task in due {
			if task.tick() == Frame::Continue {
				still_running.push(task);
			}
		}
		let mut pending = self.pending.borrow_mut();
		// Tasks scheduled during this frame run on the next one.
		still_running.append(&mut pending);
		*pending = still_running;
		pending.len()
	}

	/// Advance until nothing is scheduled or `max_frames` have elapsed.
	/// Returns the number of frames delivered.
	pub fn run_until_idle(&self, max_frames: usize) -> usize {
		let mut frames = 0;
		while self.pending() > 0 && frames < max_frames {
			self.advance();
			frames += 1;
		}
		frames
	}

	/// Number of tasks waiting for the next frame.
	pub fn pending(&self) -> usize {
		self.pending.borrow().len()
	}
}

impl FrameClock for ManualClock {
	fn schedule(&self, task: Box<dyn FrameTask>) {
		self.pending.borrow_mut().push(task);
	}
}
