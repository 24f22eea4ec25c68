//! Particle simulator driven through the public painter seam.

use portfolio_fx::components::particle_field::{Color, FieldStyle, Painter, ParticleSimulator};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Default)]
struct Counter {
	frames: usize,
	circles: usize,
	last_clear: (f64, f64),
}

impl Painter for Counter {
	fn clear(&mut self, width: f64, height: f64) {
		self.frames += 1;
		self.last_clear = (width, height);
	}

	fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: Color) {
		self.circles += 1;
	}

	fn stroke_line(&mut self, _from: (f64, f64), _to: (f64, f64), _color: Color) {}
}

fn simulator(count: usize) -> ParticleSimulator {
	let style = FieldStyle {
		count,
		..FieldStyle::default()
	};
	ParticleSimulator::new(style, 800.0, 600.0, &mut SmallRng::seed_from_u64(2024))
}

#[test]
fn long_run_stays_bounded_and_stable() {
	let mut sim = simulator(50);
	let mut painter = Counter::default();
	for _ in 0..2_000 {
		assert!(sim.frame(&mut painter));
	}
	assert_eq!(sim.field.len(), 50);
	assert_eq!(painter.circles, 50 * 2_000);
	for p in &sim.field.particles {
		assert!(p.x.is_finite() && p.y.is_finite());
		// One frame of overshoot at most.
		assert!(p.x >= -0.25 && p.x <= 800.25);
		assert!(p.y >= -0.25 && p.y <= 600.25);
	}
}

#[test]
fn resize_from_800x600_to_1200x800() {
	let mut sim = simulator(50);
	let mut painter = Counter::default();
	sim.frame(&mut painter);
	sim.resize(1200.0, 800.0);
	sim.frame(&mut painter);
	assert_eq!(painter.last_clear, (1200.0, 800.0));
	assert_eq!(sim.field.len(), 50);
}

#[test]
fn empty_field_runs_without_drawing() {
	let mut sim = simulator(0);
	let mut painter = Counter::default();
	assert!(sim.frame(&mut painter));
	assert_eq!(painter.circles, 0);
}

#[test]
fn stop_ends_the_loop() {
	let mut sim = simulator(5);
	let mut painter = Counter::default();
	sim.frame(&mut painter);
	sim.stop();
	assert!(!sim.frame(&mut painter));
	assert_eq!(painter.frames, 1);
}
