//! Drawing seam between the particle field and the canvas.

use std::f64::consts::PI;
use std::rc::Rc;

use web_sys::CanvasRenderingContext2d;

use super::palette::Color;

/// The few drawing primitives a particle frame needs.
pub trait Painter {
	fn clear(&self, width: f64, height: f64);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

impl Painter for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.begin_path();
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

impl<P: Painter + ?Sized> Painter for Rc<P> {
	fn clear(&self, width: f64, height: f64) {
		(**self).clear(width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) {
		(**self).fill_circle(x, y, radius, color);
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		(**self).stroke_line(from, to, width, color);
	}
}

#[cfg(test)]
pub(crate) use recording::{DrawOp, RecordingPainter};
