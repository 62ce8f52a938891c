//! Wires the particle field to the background canvas.
//!
//! The canvas is sized to the viewport and the field regenerated on every
//! window resize. A frame task clears and redraws the field on every display
//! frame for the life of the page.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::palette::Palette;
use super::particles::ParticleField;
use super::render::Painter;
use crate::components::theme::ThemeMode;
use crate::config::ParticleConfig;
use crate::dom::{self, Page};
use crate::error::{FxError, FxResult};
use crate::scheduler::{Frame, FrameClock, FrameTask};

/// Redraws the shared field once per frame, never finishing.
pub struct ParticleLoop<P> {
	field: Rc<RefCell<ParticleField>>,
	painter: P,
	mode: Box<dyn Fn() -> ThemeMode>,
}

impl<P: Painter> ParticleLoop<P> {
	/// `mode` is consulted every frame so theme switches recolor immediately.
	pub fn new(
		field: Rc<RefCell<ParticleField>>,
		painter: P,
		mode: impl Fn() -> ThemeMode + 'static,
	) -> Self {
		Self {
			field,
			painter,
			mode: Box::new(mode),
		}
	}
}

impl<P: Painter> FrameTask for ParticleLoop<P> {
	fn tick(&mut self) -> Frame {
		let palette = Palette::for_mode((self.mode)());
		self.field.borrow_mut().frame(&self.painter, &palette);
		Frame::Continue
	}
}

fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);
}

/// Start the background animation on `#bg-canvas` (or the configured id).
pub fn install(
	page: &Page,
	config: &ParticleConfig,
	dark_class: &str,
	clock: &impl FrameClock,
) -> FxResult<()> {
	let canvas: HtmlCanvasElement = page
		.by_id(&config.canvas_id)?
		.dyn_into()
		.map_err(|_| FxError::MissingElement(format!("canvas#{}", config.canvas_id)))?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or_else(|| FxError::Js("2d context unavailable".into()))?
		.dyn_into()
		.map_err(|_| FxError::Js("2d context unavailable".into()))?;

	let (w, h) = page.viewport();
	size_canvas(&canvas, w, h);
	let field = Rc::new(RefCell::new(ParticleField::new(
		config,
		w,
		h,
		&mut rand::thread_rng(),
	)));
	debug!("particle field: {} particles on {w}x{h}", config.count);

	let (page_resize, field_resize) = (page.clone(), field.clone());
	dom::listen(&page.window, "resize", move |_: web_sys::Event| {
		let (nw, nh) = page_resize.viewport();
		size_canvas(&canvas, nw, nh);
		field_resize
			.borrow_mut()
			.regenerate(nw, nh, &mut rand::thread_rng());
	})?;

	let root: Element = page.root()?;
	let dark_class = dark_class.to_string();
	clock.start(ParticleLoop::new(field, ctx, move || {
		ThemeMode::of_root(&root, &dark_class)
	}));
	Ok(())
}
