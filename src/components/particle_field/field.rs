//! Particle model for the ambient backdrop.

use rand::Rng;

use super::theme::FieldStyle;

/// Most particles a field will hold. Linking is quadratic in the count.
pub const MAX_PARTICLES: usize = 400;

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in surface pixels.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Horizontal velocity in pixels per frame.
	pub vx: f64,
	/// Vertical velocity.
	pub vy: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Index into the style palette.
	pub tone: usize,
}

impl Particle {
	/// Move by one frame of velocity and bounce off the surface edges.
	///
	/// A component is inverted only while it still points outward, so a
	/// particle stranded outside after a resize heads back in instead of
	/// flipping every frame.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if (self.x < 0.0 && self.vx < 0.0) || (self.x > width && self.vx > 0.0) {
			self.vx = -self.vx;
		}
		if (self.y < 0.0 && self.vy < 0.0) || (self.y > height && self.vy > 0.0) {
			self.vy = -self.vy;
		}
	}

	/// Euclidean distance between centers.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Fixed-size particle set bounded by a drawing surface.
#[derive(Clone, Debug)]
pub struct ParticleField {
	/// Particles in creation order.
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Scatter `style.count` particles (at most [`MAX_PARTICLES`]) uniformly
	/// over a `width` x `height` surface.
	pub fn new<R: Rng>(style: &FieldStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let count = style.count.min(MAX_PARTICLES);
		if count < style.count {
			log::warn!(
				"portfolio-fx: particle count {} capped at {}",
				style.count,
				MAX_PARTICLES
			);
		}
		let tones = style.palette.len().max(1);
		let size_span = (style.size_max - style.size_min).max(0.0);

		let particles = (0..count)
			.map(|_| Particle {
				x: rng.random::<f64>() * width,
				y: rng.random::<f64>() * height,
				vx: (rng.random::<f64>() * 2.0 - 1.0) * style.speed,
				vy: (rng.random::<f64>() * 2.0 - 1.0) * style.speed,
				size: style.size_min + rng.random::<f64>() * size_span,
				tone: rng.random_range(0..tones),
			})
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Build a field from explicit particles.
	pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
		}
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			p.advance(w, h);
		}
	}

	/// Adopt new surface bounds. Particles keep their positions.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Call `f` for every unordered pair closer than `max_distance`, lower index first.
	pub fn visit_links(&self, max_distance: f64, mut f: impl FnMut(&Particle, &Particle)) {
		for (i, a) in self.particles.iter().enumerate() {
			for b in &self.particles[i + 1..] {
				if a.distance_to(b) < max_distance {
					f(a, b);
				}
			}
		}
	}

	/// Current surface width.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current surface height.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the field has no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			size: 1.0,
			tone: 0,
		}
	}

	#[test]
	fn new_field_respects_style_ranges() {
		let style = FieldStyle::default();
		let mut rng = SmallRng::seed_from_u64(42);
		let field = ParticleField::new(&style, 800.0, 600.0, &mut rng);

		assert_eq!(field.len(), 50);
		for p in &field.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
			assert!((1.0..3.0).contains(&p.size));
			assert!(p.tone < 2);
		}
	}

	#[test]
	fn oversized_count_is_capped() {
		let style = FieldStyle {
			count: 100_000,
			..FieldStyle::default()
		};
		let mut rng = SmallRng::seed_from_u64(3);
		let field = ParticleField::new(&style, 800.0, 600.0, &mut rng);
		assert_eq!(field.len(), MAX_PARTICLES);
	}

	#[test]
	fn both_palette_tones_are_used() {
		let style = FieldStyle::default();
		let mut rng = SmallRng::seed_from_u64(7);
		let field = ParticleField::new(&style, 100.0, 100.0, &mut rng);
		assert!(field.particles.iter().any(|p| p.tone == 0));
		assert!(field.particles.iter().any(|p| p.tone == 1));
	}

	#[test]
	fn zero_speed_style_does_not_panic() {
		let style = FieldStyle {
			speed: 0.0,
			size_min: 2.0,
			size_max: 2.0,
			palette: vec![],
			..FieldStyle::default()
		};
		let mut rng = SmallRng::seed_from_u64(1);
		let field = ParticleField::new(&style, 10.0, 10.0, &mut rng);
		assert!(field.particles.iter().all(|p| p.vx == 0.0 && p.size == 2.0));
	}

	#[test]
	fn crossing_right_edge_flips_vx_once() {
		let mut p = particle(99.9, 50.0, 0.25, 0.0);
		p.advance(100.0, 100.0);
		assert!(p.x > 100.0);
		assert_eq!(p.vx, -0.25);

		p.advance(100.0, 100.0);
		assert!(p.x < 100.0);
		assert_eq!(p.vx, -0.25, "velocity must not flip back on re-entry");
	}

	#[test]
	fn crossing_top_edge_flips_vy() {
		let mut p = particle(50.0, 0.1, 0.0, -0.2);
		p.advance(100.0, 100.0);
		assert!(p.y < 0.0);
		assert_eq!(p.vy, 0.2);
		assert_eq!(p.vx, 0.0);
	}

	#[test]
	fn corner_flips_both_axes() {
		let mut p = particle(0.1, 0.1, -0.2, -0.2);
		p.advance(100.0, 100.0);
		assert_eq!((p.vx, p.vy), (0.2, 0.2));
	}

	#[test]
	fn stranded_particle_drifts_back_after_shrink() {
		let mut field = ParticleField::from_particles(vec![particle(1000.0, 10.0, 0.2, 0.0)], 1200.0, 800.0);
		field.resize(800.0, 600.0);
		assert_eq!(field.particles[0].x, 1000.0, "resize must not move particles");

		field.step();
		assert_eq!(field.particles[0].vx, -0.2);
		let x_after_flip = field.particles[0].x;
		for _ in 0..10 {
			field.step();
		}
		assert_eq!(field.particles[0].vx, -0.2);
		assert!(field.particles[0].x < x_after_flip);
	}

	#[test]
	fn speed_is_preserved_over_many_frames() {
		let style = FieldStyle::default();
		let mut rng = SmallRng::seed_from_u64(99);
		let mut field = ParticleField::new(&style, 300.0, 200.0, &mut rng);
		let speeds: Vec<(f64, f64)> = field
			.particles
			.iter()
			.map(|p| (p.vx.abs(), p.vy.abs()))
			.collect();

		for _ in 0..5_000 {
			field.step();
		}

		assert_eq!(field.len(), 50);
		for (p, (sx, sy)) in field.particles.iter().zip(speeds) {
			assert!(p.x.is_finite() && p.y.is_finite());
			assert_eq!(p.vx.abs(), sx);
			assert_eq!(p.vy.abs(), sy);
		}
	}

	#[test]
	fn links_only_close_pairs() {
		let field = ParticleField::from_particles(
			vec![
				particle(0.0, 0.0, 0.0, 0.0),
				particle(60.0, 80.0, 0.0, 0.0), // exactly 100 away
				particle(30.0, 40.0, 0.0, 0.0),
			],
			500.0,
			500.0,
		);
		let mut pairs = Vec::new();
		field.visit_links(100.0, |a, b| pairs.push((a.x, b.x)));
		assert_eq!(pairs, vec![(0.0, 30.0), (60.0, 30.0)]);
	}
}
