//! Particle and link colors for each theme mode.

use crate::components::theme::ThemeMode;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors used for one frame of the particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
	/// Fill for particle dots.
	pub particle: Color,
	/// Stroke for connecting lines. Alpha is replaced per line.
	pub link: Color,
}

impl Palette {
	/// Cyan 400 on dark backgrounds.
	pub const DARK: Self = Self {
		particle: Color::rgba(34, 211, 238, 0.3),
		link: Color::rgb(34, 211, 238),
	};

	/// Cyan 500 on light backgrounds.
	pub const LIGHT: Self = Self {
		particle: Color::rgba(6, 182, 212, 0.3),
		link: Color::rgb(6, 182, 212),
	};

	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Dark => Self::DARK,
			ThemeMode::Light => Self::LIGHT,
		}
	}
}
