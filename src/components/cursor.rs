//! Custom cursor: two follower elements and a hover state on `<body>`.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::config::CursorConfig;
use crate::dom::{self, Page};
use crate::error::{FxError, FxResult};

/// CSS pixel length.
pub fn px(value: impl std::fmt::Display) -> String {
	format!("{value}px")
}

fn follower(page: &Page, id: &str) -> FxResult<HtmlElement> {
	page.by_id(id)?
		.dyn_into()
		.map_err(|_| FxError::MissingElement(format!("#{id}")))
}

fn place(el: &HtmlElement, x: i32, y: i32) {
	let style = el.style();
	let _ = style.set_property("left", &px(x));
	let _ = style.set_property("top", &px(y));
}

/// Requires both `#cursor-dot` and `#cursor-outline`; otherwise does nothing.
pub fn install(page: &Page, config: &CursorConfig) -> FxResult<()> {
	let dot = follower(page, &config.dot_id)?;
	let outline = follower(page, &config.outline_id)?;
	let body: Element = page.body()?;

	dom::listen(&page.window, "mousemove", move |ev: MouseEvent| {
		let (x, y) = (ev.client_x(), ev.client_y());
		place(&dot, x, y);
		place(&outline, x, y);
	})?;

	for el in page.query_all(&config.interactive_selector)? {
		let (enter_body, enter_class) = (body.clone(), config.hover_class.clone());
		dom::listen(&el, "mouseenter", move |_: MouseEvent| {
			let _ = dom::set_class(&enter_body, &enter_class, true);
		})?;
		let (leave_body, leave_class) = (body.clone(), config.hover_class.clone());
		dom::listen(&el, "mouseleave", move |_: MouseEvent| {
			let _ = dom::set_class(&leave_body, &leave_class, false);
		})?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn px_formats_lengths() {
		assert_eq!(px(0), "0px");
		assert_eq!(px(-12), "-12px");
		assert_eq!(px(640), "640px");
	}
}
