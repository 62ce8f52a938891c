//! Tunables and element selectors for every feature.
//!
//! Defaults match the portfolio page markup. A page can override any subset
//! through a JSON data island:
//!
//! ```html
//! <script id="fx-config" type="application/json">
//!   { "particles": { "count": 80 }, "nav": { "lookahead": 120 } }
//! </script>
//! ```

use serde::Deserialize;

/// Id of the optional configuration data island.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Complete configuration, one section per feature.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FxConfig {
	pub particles: ParticleConfig,
	pub reveal: RevealConfig,
	pub counters: CounterConfig,
	pub menu: MenuConfig,
	pub nav: NavConfig,
	pub cursor: CursorConfig,
	pub theme: ThemeConfig,
}

impl FxConfig {
	/// Parse a (possibly partial) JSON document. Missing fields keep defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

/// Background particle field.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
	/// Id of the `<canvas>` to draw on.
	pub canvas_id: String,
	/// Number of particles generated on every (re)initialization.
	pub count: usize,
	/// Particles closer than this (in pixels) are joined by a line.
	pub link_distance: f64,
	/// Line opacity at zero distance.
	pub link_alpha: f64,
	/// Velocity components are drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	pub size_min: f64,
	pub size_max: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			canvas_id: "bg-canvas".into(),
			count: 50,
			link_distance: 150.0,
			link_alpha: 0.1,
			max_speed: 0.25,
			size_min: 1.0,
			size_max: 3.0,
		}
	}
}

/// Scroll-triggered reveal.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	pub selector: String,
	pub active_class: String,
	/// How far above the viewport bottom an element's top must be.
	pub margin: f64,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: ".reveal".into(),
			active_class: "active".into(),
			margin: 100.0,
		}
	}
}

/// Animated stat counters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
	pub section_selector: String,
	pub counter_selector: String,
	/// Attribute holding each counter's numeric target.
	pub target_attribute: String,
	pub duration_ms: f64,
	/// Assumed time between display frames, used to size the increment.
	pub frame_interval_ms: f64,
}

impl Default for CounterConfig {
	fn default() -> Self {
		Self {
			section_selector: "#stats".into(),
			counter_selector: ".counter-value".into(),
			target_attribute: "data-target".into(),
			duration_ms: 2000.0,
			frame_interval_ms: 16.0,
		}
	}
}

/// Mobile navigation panel.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
	pub button_id: String,
	pub panel_id: String,
	pub hidden_class: String,
}

impl Default for MenuConfig {
	fn default() -> Self {
		Self {
			button_id: "mobile-menu-btn".into(),
			panel_id: "mobile-menu".into(),
			hidden_class: "hidden".into(),
		}
	}
}

/// Active-section highlighting in the top navigation.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NavConfig {
	pub section_selector: String,
	pub link_selector: String,
	/// A section counts as current this many pixels before it reaches the top.
	pub lookahead: f64,
	pub active_class: String,
	pub inactive_class: String,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			section_selector: "section".into(),
			link_selector: "nav ul li a".into(),
			lookahead: 200.0,
			active_class: "text-cyan-400".into(),
			inactive_class: "text-gray-300".into(),
		}
	}
}

/// Custom cursor followers.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
	pub dot_id: String,
	pub outline_id: String,
	pub interactive_selector: String,
	pub hover_class: String,
}

impl Default for CursorConfig {
	fn default() -> Self {
		Self {
			dot_id: "cursor-dot".into(),
			outline_id: "cursor-outline".into(),
			interactive_selector: "a, button, .cursor-pointer".into(),
			hover_class: "hovering".into(),
		}
	}
}

/// Light/dark theme switch.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
	/// `localStorage` key holding `"light"` or `"dark"`.
	pub storage_key: String,
	/// Class on `<html>` that marks dark mode.
	pub dark_class: String,
	/// Buttons that toggle the theme (desktop and mobile). Each is optional.
	pub toggle_ids: Vec<String>,
}

impl Default for ThemeConfig {
	fn default() -> Self {
		Self {
			storage_key: "theme".into(),
			dark_class: "dark".into(),
			toggle_ids: vec!["theme-toggle".into(), "theme-toggle-mobile".into()],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_page_markup() {
		let config = FxConfig::default();
		assert_eq!(config.particles.count, 50);
		assert_eq!(config.particles.link_distance, 150.0);
		assert_eq!(config.reveal.margin, 100.0);
		assert_eq!(config.counters.duration_ms / config.counters.frame_interval_ms, 125.0);
		assert_eq!(config.nav.lookahead, 200.0);
		assert_eq!(config.theme.storage_key, "theme");
		assert_eq!(config.theme.toggle_ids.len(), 2);
	}

	#[test]
	fn partial_json_overrides_only_named_fields() {
		let config =
			FxConfig::from_json(r#"{ "particles": { "count": 80 }, "nav": { "lookahead": 120 } }"#)
				.unwrap();
		assert_eq!(config.particles.count, 80);
		assert_eq!(config.particles.link_distance, 150.0);
		assert_eq!(config.particles.canvas_id, "bg-canvas");
		assert_eq!(config.nav.lookahead, 120.0);
		assert_eq!(config.nav.active_class, "text-cyan-400");
		assert_eq!(config.menu.panel_id, "mobile-menu");
	}

	#[test]
	fn empty_object_is_all_defaults() {
		let config = FxConfig::from_json("{}").unwrap();
		assert_eq!(config.cursor.hover_class, "hovering");
		assert_eq!(config.counters.target_attribute, "data-target");
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(FxConfig::from_json("{ particles: 3 ").is_err());
		assert!(FxConfig::from_json(r#"{ "particles": { "count": "many" } }"#).is_err());
	}
}
