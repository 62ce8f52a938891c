//! Drifting background particles joined by proximity lines.

use rand::Rng;

use super::palette::Palette;
use super::render::Painter;
use crate::config::ParticleConfig;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
}

impl Particle {
	/// Random particle somewhere on a `width` x `height` canvas.
	pub fn random<R: Rng>(
		style: &ParticleConfig,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let unit = |rng: &mut R| rng.gen_range(0.0..1.0);
		Self {
			x: unit(rng) * width,
			y: unit(rng) * height,
			vx: (unit(rng) - 0.5) * 2.0 * style.max_speed,
			vy: (unit(rng) - 0.5) * 2.0 * style.max_speed,
			size: style.size_min + unit(rng) * (style.size_max - style.size_min),
		}
	}

	/// Move one step and bounce off the canvas edges.
	///
	/// The velocity flips after the move, so a particle may sit up to one
	/// step outside the canvas for a frame before heading back in.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}

	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Opacity of the line joining two particles `distance` apart.
///
/// Falls linearly from `max_alpha` at zero distance to nothing at
/// `threshold`; no line is drawn at or beyond it.
pub fn link_opacity(distance: f64, threshold: f64, max_alpha: f64) -> Option<f64> {
	if distance < threshold {
		Some(max_alpha - distance / threshold * max_alpha)
	} else {
		None
	}
}

/// A line to draw between particles `from` and `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub from: usize,
	pub to: usize,
	pub opacity: f64,
}

/// The full set of particles on the background canvas.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	style: ParticleConfig,
	width: f64,
	height: f64,
}

impl ParticleField {
	pub fn new<R: Rng>(style: &ParticleConfig, width: f64, height: f64, rng: &mut R) -> Self {
		let mut field = Self {
			particles: Vec::with_capacity(style.count),
			style: style.clone(),
			width,
			height,
		};
		field.regenerate(width, height, rng);
		field
	}

	/// Throw away every particle and scatter a fresh batch over the new bounds.
	pub fn regenerate<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.width = width;
		self.height = height;
		self.particles.clear();
		for _ in 0..self.style.count {
			self.particles
				.push(Particle::random(&self.style, width, height, rng));
		}
	}

	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Advance every particle without drawing.
	pub fn step(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			p.advance(w, h);
		}
	}

	/// Links from particle `i` to every later particle within range, using
	/// their current positions.
	pub fn links_from(&self, i: usize) -> impl Iterator<Item = Link> + '_ {
		let p = &self.particles[i];
		self.particles
			.iter()
			.enumerate()
			.skip(i + 1)
			.filter_map(move |(j, q)| {
				link_opacity(p.distance_to(q), self.style.link_distance, self.style.link_alpha)
					.map(|opacity| Link { from: i, to: j, opacity })
			})
	}

	/// Every link for the current positions, each pair once.
	pub fn links(&self) -> Vec<Link> {
		(0..self.particles.len())
			.flat_map(|i| self.links_from(i))
			.collect()
	}

	/// Advance and draw one frame.
	///
	/// Each particle is moved and drawn, then linked to the particles after it,
	/// which have not moved yet this frame.
	pub fn frame<P: Painter + ?Sized>(&mut self, painter: &P, palette: &Palette) {
		let (w, h) = (self.width, self.height);
		painter.clear(w, h);

		for i in 0..self.particles.len() {
			self.particles[i].advance(w, h);
			let p = &self.particles[i];
			painter.fill_circle(p.x, p.y, p.size, palette.particle);

			for link in self.links_from(i) {
				let q = &self.particles[link.to];
				painter.stroke_line(
					(p.x, p.y),
					(q.x, q.y),
					1.0,
					palette.link.with_alpha(link.opacity),
				);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	use super::super::render::{DrawOp, RecordingPainter};
	use super::*;

	fn field(width: f64, height: f64, seed: u64) -> ParticleField {
		let mut rng = ChaCha8Rng::seed_from_u64(seed);
		ParticleField::new(&ParticleConfig::default(), width, height, &mut rng)
	}

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle { x, y, vx, vy, size: 1.0 }
	}

	#[test]
	fn generates_fixed_count_within_ranges() {
		let f = field(800.0, 600.0, 7);
		assert_eq!(f.particles.len(), 50);
		for p in &f.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
			assert!((1.0..3.0).contains(&p.size));
		}
	}

	#[test]
	fn regenerate_replaces_particles_for_new_bounds() {
		let mut f = field(800.0, 600.0, 1);
		let before = f.particles.clone();
		let mut rng = ChaCha8Rng::seed_from_u64(2);
		f.regenerate(200.0, 100.0, &mut rng);
		assert_eq!(f.size(), (200.0, 100.0));
		assert_eq!(f.particles.len(), before.len());
		assert_ne!(f.particles, before);
		assert!(f.particles.iter().all(|p| p.x < 200.0 && p.y < 100.0));
	}

	#[test]
	fn velocity_flips_only_past_an_edge() {
		let mut p = particle(0.1, 50.0, -0.2, 0.1);
		p.advance(100.0, 100.0);
		assert!(p.x < 0.0, "position is not clamped");
		assert_eq!(p.vx, 0.2);
		assert_eq!(p.vy, 0.1);

		p.advance(100.0, 100.0);
		assert!(p.x >= 0.0);
		assert_eq!(p.vx, 0.2);
	}

	#[test]
	fn particle_exactly_on_edge_keeps_velocity() {
		let mut p = particle(99.5, 99.5, 0.5, 0.5);
		p.advance(100.0, 100.0);
		assert_eq!((p.x, p.y), (100.0, 100.0));
		assert_eq!(p.vx, 0.5);
		assert_eq!(p.vy, 0.5);
	}

	#[test]
	fn link_opacity_is_linear_and_vanishes_at_threshold() {
		assert_eq!(link_opacity(0.0, 150.0, 0.1), Some(0.1));
		let mid = link_opacity(75.0, 150.0, 0.1).unwrap();
		assert!((mid - 0.05).abs() < 1e-12);
		assert!(link_opacity(149.9, 150.0, 0.1).unwrap() > 0.0);
		assert_eq!(link_opacity(150.0, 150.0, 0.1), None);
		assert_eq!(link_opacity(400.0, 150.0, 0.1), None);
	}

	#[test]
	fn links_cover_each_close_pair_once() {
		let mut f = field(10.0, 10.0, 3);
		f.particles = vec![
			particle(0.0, 0.0, 0.0, 0.0),
			particle(100.0, 0.0, 0.0, 0.0),
			particle(220.0, 0.0, 0.0, 0.0),
		];
		let links = f.links();
		assert_eq!(links.len(), 2);
		assert_eq!((links[0].from, links[0].to), (0, 1));
		assert_eq!((links[1].from, links[1].to), (1, 2));
		assert!(links[0].opacity > links[1].opacity);
	}

	#[test]
	fn frame_draws_every_particle_and_its_links() {
		let mut f = field(10.0, 10.0, 3);
		f.particles = vec![
			particle(1.0, 1.0, 0.0, 0.0),
			particle(4.0, 5.0, 0.0, 0.0),
		];
		let painter = RecordingPainter::default();
		f.frame(&painter, &Palette::DARK);

		let ops = painter.ops.borrow();
		assert_eq!(ops[0], DrawOp::Clear { width: 10.0, height: 10.0 });
		let circles = ops
			.iter()
			.filter(|op| matches!(op, DrawOp::Circle { .. }))
			.count();
		assert_eq!(circles, 2);
		let lines: Vec<_> = ops
			.iter()
			.filter_map(|op| match op {
				DrawOp::Line { color, width, .. } => Some((*color, *width)),
				_ => None,
			})
			.collect();
		assert_eq!(lines.len(), 1);
		let expected = 0.1 - 5.0 / 150.0 * 0.1;
		assert!((lines[0].0.a - expected).abs() < 1e-12);
		assert_eq!(lines[0].0.r, 34);
		assert_eq!(lines[0].1, 1.0);
	}

	#[test]
	fn frame_links_to_particles_not_yet_moved() {
		let mut f = field(1000.0, 1000.0, 3);
		f.particles = vec![
			particle(100.0, 100.0, 10.0, 0.0),
			particle(200.0, 100.0, 10.0, 0.0),
		];
		let painter = RecordingPainter::default();
		f.frame(&painter, &Palette::LIGHT);

		let line = painter
			.ops
			.borrow()
			.iter()
			.find_map(|op| match op {
				DrawOp::Line { from, to, .. } => Some((*from, *to)),
				_ => None,
			})
			.unwrap();
		assert_eq!(line, ((110.0, 100.0), (200.0, 100.0)));
		assert_eq!(f.particles[1].x, 210.0);
	}

	proptest! {
		#[test]
		fn particles_stay_within_one_step_of_canvas(
			width in 1.0f64..2000.0,
			height in 1.0f64..2000.0,
			steps in 0usize..600,
			seed in any::<u64>(),
		) {
			let mut f = field(width, height, seed);
			for _ in 0..steps {
				f.step();
			}
			for p in &f.particles {
				let (sx, sy) = (p.vx.abs() + 1e-9, p.vy.abs() + 1e-9);
				prop_assert!(p.x >= -sx && p.x <= width + sx);
				prop_assert!(p.y >= -sy && p.y <= height + sy);
			}
		}

		#[test]
		fn velocity_sign_flips_exactly_on_crossing(
			x in -1.0f64..101.0,
			vx in -0.25f64..0.25,
		) {
			let mut p = particle(x, 50.0, vx, 0.0);
			p.advance(100.0, 100.0);
			let crossed = p.x < 0.0 || p.x > 100.0;
			prop_assert_eq!(p.vx == -vx, crossed || vx == 0.0);
		}
	}
}
