//! Thin helpers over `web_sys` for wiring features to an existing page.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, NodeList, Window};

use crate::error::{FxError, FxResult};

/// The browser window and its document.
#[derive(Clone, Debug)]
pub struct Page {
	pub window: Window,
	pub document: Document,
}

impl Page {
	pub fn current() -> FxResult<Self> {
		let window = web_sys::window().ok_or(FxError::NoWindow)?;
		let document = window.document().ok_or(FxError::NoWindow)?;
		Ok(Self { window, document })
	}

	/// Element with the given id, or [`FxError::MissingElement`].
	pub fn by_id(&self, id: &str) -> FxResult<Element> {
		self.document
			.get_element_by_id(id)
			.ok_or_else(|| FxError::MissingElement(format!("#{id}")))
	}

	/// First element matching `selector`, or [`FxError::MissingElement`].
	pub fn query(&self, selector: &str) -> FxResult<Element> {
		self.document
			.query_selector(selector)?
			.ok_or_else(|| FxError::MissingElement(selector.to_string()))
	}

	/// Every element matching `selector`, in document order.
	pub fn query_all(&self, selector: &str) -> FxResult<Vec<Element>> {
		Ok(elements(&self.document.query_selector_all(selector)?))
	}

	/// The `<html>` element.
	pub fn root(&self) -> FxResult<Element> {
		self.document
			.document_element()
			.ok_or_else(|| FxError::MissingElement("html".into()))
	}

	/// The `<body>` element.
	pub fn body(&self) -> FxResult<Element> {
		self.document
			.body()
			.map(Into::into)
			.ok_or_else(|| FxError::MissingElement("body".into()))
	}

	/// `window.innerWidth` and `window.innerHeight`.
	pub fn viewport(&self) -> (f64, f64) {
		let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		(
			read(self.window.inner_width()),
			read(self.window.inner_height()),
		)
	}

	pub fn scroll_y(&self) -> f64 {
		self.window.scroll_y().unwrap_or(0.0)
	}
}

/// Collect the element nodes of a `NodeList`.
pub fn elements(list: &NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Attach `handler` to `event` on `target` for the life of the page.
///
/// Events that are not an `E` are ignored.
pub fn listen<E>(
	target: &EventTarget,
	event: &str,
	mut handler: impl FnMut(E) + 'static,
) -> FxResult<()>
where
	E: JsCast + 'static,
{
	let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
		if let Ok(ev) = ev.dyn_into::<E>() {
			handler(ev);
		}
	});
	target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
	// Listeners live for the page session; nothing ever removes them.
	callback.forget();
	Ok(())
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, present: bool) -> FxResult<()> {
	element.class_list().toggle_with_force(class, present)?;
	Ok(())
}

pub fn has_class(element: &Element, class: &str) -> bool {
	element.class_list().contains(class)
}
