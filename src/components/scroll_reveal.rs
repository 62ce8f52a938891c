//! Reveal elements as they scroll into view.

use log::debug;
use web_sys::Element;

use crate::config::RevealConfig;
use crate::dom::{self, Page};
use crate::error::FxResult;

/// One-way reveal flags for a fixed list of elements.
#[derive(Clone, Debug)]
pub struct RevealTracker {
	revealed: Vec<bool>,
	margin: f64,
}

impl RevealTracker {
	pub fn new(len: usize, margin: f64) -> Self {
		Self {
			revealed: vec![false; len],
			margin,
		}
	}

	/// Feed each element's viewport-relative top and return the indices that
	/// became visible just now. Revealed elements stay revealed.
	pub fn observe(&mut self, tops: impl IntoIterator<Item = f64>, viewport_height: f64) -> Vec<usize> {
		let threshold = viewport_height - self.margin;
		let mut newly = Vec::new();
		for (i, top) in tops.into_iter().enumerate().take(self.revealed.len()) {
			if !self.revealed[i] && top < threshold {
				self.revealed[i] = true;
				newly.push(i);
			}
		}
		newly
	}

	pub fn is_revealed(&self, index: usize) -> bool {
		self.revealed.get(index).copied().unwrap_or(false)
	}

	pub fn revealed_count(&self) -> usize {
		self.revealed.iter().filter(|r| **r).count()
	}
}

fn reveal_pass(page: &Page, elements: &[Element], tracker: &mut RevealTracker, class: &str) {
	let (_, viewport_height) = page.viewport();
	let tops = elements.iter().map(|el| el.get_bounding_client_rect().top());
	for i in tracker.observe(tops, viewport_height) {
		let _ = dom::set_class(&elements[i], class, true);
	}
}

/// Track every `.reveal` element: once at load and again on every scroll.
pub fn install(page: &Page, config: &RevealConfig) -> FxResult<()> {
	let elements = page.query_all(&config.selector)?;
	if elements.is_empty() {
		debug!("reveal: nothing matches {}", config.selector);
		return Ok(());
	}
	let mut tracker = RevealTracker::new(elements.len(), config.margin);
	reveal_pass(page, &elements, &mut tracker, &config.active_class);

	let (page_scroll, class) = (page.clone(), config.active_class.clone());
	dom::listen(&page.window, "scroll", move |_: web_sys::Event| {
		reveal_pass(&page_scroll, &elements, &mut tracker, &class);
	})
}
