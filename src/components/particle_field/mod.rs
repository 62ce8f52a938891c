//! Animated background of drifting, connected particles.
//!
//! - [`ParticleField`] owns the particles and advances/draws them per frame
//! - [`Painter`] is the drawing seam, implemented for the 2D canvas context
//! - [`Palette`] picks colors for the current theme mode

mod component;
mod palette;
mod particles;
mod render;

pub use component::{ParticleLoop, install};
pub use palette::{Color, Palette};
pub use particles::{Link, Particle, ParticleField, link_opacity};
pub use render::Painter;
