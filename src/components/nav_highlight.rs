//! Highlight the navigation link of the section being read.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::NavConfig;
use crate::dom::{self, Page};
use crate::error::FxResult;

/// A page section's id and its offset from the top of the document.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionAnchor {
	pub id: String,
	pub top: f64,
}

/// Id of the last section (in document order) that starts at or above
/// `scroll_y + lookahead`. Empty when no section qualifies.
pub fn current_section(sections: &[SectionAnchor], scroll_y: f64, lookahead: f64) -> &str {
	sections
		.iter()
		.filter(|s| scroll_y >= s.top - lookahead)
		.last()
		.map_or("", |s| s.id.as_str())
}

/// Whether a link pointing at `href` belongs to section `current`.
///
/// Matches textually, so an empty `current` matches every link.
pub fn link_is_active(href: &str, current: &str) -> bool {
	href.contains(current)
}

fn anchors(sections: &[Element]) -> Vec<SectionAnchor> {
	sections
		.iter()
		.map(|section| SectionAnchor {
			id: section.id(),
			top: section
				.dyn_ref::<HtmlElement>()
				.map_or(0.0, |el| f64::from(el.offset_top())),
		})
		.collect()
}

fn recolor(links: &[Element], current: &str, config: &NavConfig) {
	for link in links {
		let href = link.get_attribute("href").unwrap_or_default();
		let active = link_is_active(&href, current);
		let _ = dom::set_class(link, &config.active_class, active);
		let _ = dom::set_class(link, &config.inactive_class, !active);
	}
}

/// Recolor `nav ul li a` on every scroll.
pub fn install(page: &Page, config: &NavConfig) -> FxResult<()> {
	let sections = page.query_all(&config.section_selector)?;
	let links = page.query_all(&config.link_selector)?;
	if links.is_empty() {
		debug!("nav: nothing matches {}", config.link_selector);
		return Ok(());
	}

	let (page_scroll, config) = (page.clone(), config.clone());
	dom::listen(&page.window, "scroll", move |_: web_sys::Event| {
		// Layout can shift after load; read offsets per event.
		let offsets = anchors(&sections);
		let current = current_section(&offsets, page_scroll.scroll_y(), config.lookahead);
		recolor(&links, current, &config);
	})
}
