//! Count-up animation for the stats section.
//!
//! The first time the stats section's top enters the viewport, every counter
//! in it starts counting from zero to its `data-target`. Each counter runs
//! its own frame task and stops once it shows the exact target.

use log::debug;
use web_sys::Element;

use crate::config::CounterConfig;
use crate::dom::{self, Page};
use crate::error::FxResult;
use crate::scheduler::{AnimationFrameClock, Frame, FrameClock, FrameTask};

/// Parse a counter's target attribute.
///
/// Missing or blank means zero; anything unparseable becomes NaN and is
/// displayed as such.
pub fn parse_target(attr: Option<&str>) -> f64 {
	match attr.map(str::trim) {
		None | Some("") => 0.0,
		Some(text) => text.parse().unwrap_or(f64::NAN),
	}
}

/// Text for `value`: rounded up to an integer for whole targets, two
/// decimals otherwise.
pub fn format_count(value: f64, whole: bool) -> String {
	if whole {
		format!("{}", value.ceil())
	} else {
		format!("{value:.2}")
	}
}

/// Linear count-up towards a target.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
	target: f64,
	increment: f64,
	current: f64,
	whole: bool,
}

impl CounterAnimation {
	/// Reach `target` in roughly `duration_ms / frame_interval_ms` frames.
	pub fn new(target: f64, duration_ms: f64, frame_interval_ms: f64) -> Self {
		Self {
			target,
			increment: target / (duration_ms / frame_interval_ms),
			current: 0.0,
			whole: target % 1.0 == 0.0,
		}
	}

	pub fn current(&self) -> f64 {
		self.current
	}

	/// Step once and return the text to show.
	pub fn advance(&mut self) -> (String, Frame) {
		self.current += self.increment;
		if self.current < self.target {
			(format_count(self.current, self.whole), Frame::Continue)
		} else if self.whole {
			(format!("{}", self.target), Frame::Done)
		} else {
			(format_count(self.target, false), Frame::Done)
		}
	}
}

/// Where a counter's text goes.
pub trait CounterDisplay {
	fn show(&mut self, text: &str);
}

impl CounterDisplay for Element {
	fn show(&mut self, text: &str) {
		self.set_text_content(Some(text));
	}
}

impl CounterDisplay for Vec<String> {
	fn show(&mut self, text: &str) {
		self.push(text.to_string());
	}
}

/// Frame task driving one counter.
pub struct CounterTask<D> {
	animation: CounterAnimation,
	display: D,
}

impl<D: CounterDisplay> CounterTask<D> {
	pub fn new(animation: CounterAnimation, display: D) -> Self {
		Self { animation, display }
	}
}

impl<D: CounterDisplay> FrameTask for CounterTask<D> {
	fn tick(&mut self) -> Frame {
		let (text, frame) = self.animation.advance();
		self.display.show(&text);
		frame
	}
}

/// Run-once guard for the whole counter group.
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterTrigger {
	fired: bool,
}

impl CounterTrigger {
	/// True the first time the section's top is inside the viewport, never again.
	pub fn should_start(&mut self, section_top: f64, viewport_height: f64) -> bool {
		if self.fired || section_top >= viewport_height {
			return false;
		}
		self.fired = true;
		true
	}

	pub fn has_fired(&self) -> bool {
		self.fired
	}
}

/// Start every counter's animation on `clock`.
pub fn start_all<C: FrameClock>(clock: &C, counters: &[Element], config: &CounterConfig) {
	for counter in counters {
		let target = parse_target(counter.get_attribute(&config.target_attribute).as_deref());
		let animation = CounterAnimation::new(target, config.duration_ms, config.frame_interval_ms);
		clock.start(CounterTask::new(animation, counter.clone()));
	}
}

/// Watch scrolling for the stats section and start the counters once.
pub fn install(page: &Page, config: &CounterConfig, clock: AnimationFrameClock) -> FxResult<()> {
	let counters = page.query_all(&config.counter_selector)?;
	let mut trigger = CounterTrigger::default();
	let (page_scroll, config) = (page.clone(), config.clone());

	dom::listen(&page.window, "scroll", move |_: web_sys::Event| {
		if trigger.has_fired() {
			return;
		}
		let Ok(section) = page_scroll.query(&config.section_selector) else {
			return;
		};
		let top = section.get_bounding_client_rect().top();
		let (_, viewport_height) = page_scroll.viewport();
		if trigger.should_start(top, viewport_height) {
			debug!("counters: starting {} animations", counters.len());
			start_all(&clock, &counters, &config);
		}
	})
}
