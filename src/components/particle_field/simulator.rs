//! Simulator state driving the particle backdrop.
//!
//! Owns one particle field plus an explicit running/stopped flag. The frame
//! loop asks [`ParticleSimulator::frame`] whether it should keep going, so
//! stopping the simulator also ends the animation-frame chain.

use rand::Rng;

use super::field::ParticleField;
use super::render::{self, Painter};
use super::theme::FieldStyle;

/// Whether frames are still being produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	/// Stepping and drawing every frame.
	Running,
	/// Terminal; a stopped simulator never draws again.
	Stopped,
}

/// One independent particle backdrop.
pub struct ParticleSimulator {
	/// Particles and surface bounds.
	pub field: ParticleField,
	/// Colors, link distance and the rest of the look.
	pub style: FieldStyle,
	state: LoopState,
	frames: u64,
}

impl ParticleSimulator {
	/// A running simulator over a freshly scattered field.
	pub fn new<R: Rng>(style: FieldStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let field = ParticleField::new(&style, width, height, rng);
		Self::with_field(style, field)
	}

	/// A running simulator over the given particles.
	pub fn with_field(style: FieldStyle, field: ParticleField) -> Self {
		Self {
			field,
			style,
			state: LoopState::Running,
			frames: 0,
		}
	}

	/// Step and draw one frame. Returns `true` while another frame is wanted.
	pub fn frame<P: Painter + ?Sized>(&mut self, painter: &mut P) -> bool {
		if self.state == LoopState::Stopped {
			return false;
		}
		self.field.step();
		render::render(&self.field, &self.style, painter);
		self.frames += 1;
		true
	}

	/// Adopt new surface bounds without moving particles.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.field.resize(width, height);
	}

	/// Stop for good. Later frames draw nothing.
	pub fn stop(&mut self) {
		if self.state == LoopState::Running {
			log::debug!("portfolio-fx: particle simulator stopped after {} frames", self.frames);
		}
		self.state = LoopState::Stopped;
	}

	/// Running or stopped.
	pub fn state(&self) -> LoopState {
		self.state
	}

	/// Frames drawn so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::render::tests::Recorder;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn simulator(count: usize, w: f64, h: f64) -> ParticleSimulator {
		let style = FieldStyle {
			count,
			..FieldStyle::default()
		};
		ParticleSimulator::new(style, w, h, &mut SmallRng::seed_from_u64(3))
	}

	#[test]
	fn running_frame_draws_every_particle() {
		let mut sim = simulator(50, 800.0, 600.0);
		let mut rec = Recorder::default();
		assert!(sim.frame(&mut rec));
		assert_eq!(rec.circles.len(), 50);
		assert_eq!(sim.frames(), 1);
	}

	#[test]
	fn zero_particles_is_a_valid_frame() {
		let mut sim = simulator(0, 800.0, 600.0);
		let mut rec = Recorder::default();
		for _ in 0..3 {
			assert!(sim.frame(&mut rec));
		}
		assert_eq!(rec.clears.len(), 3);
		assert!(rec.circles.is_empty() && rec.lines.is_empty());
	}

	#[test]
	fn stopped_simulator_draws_nothing() {
		let mut sim = simulator(10, 800.0, 600.0);
		sim.stop();
		let mut rec = Recorder::default();
		assert!(!sim.frame(&mut rec));
		assert_eq!(sim.state(), LoopState::Stopped);
		assert!(rec.clears.is_empty());
	}

	#[test]
	fn resize_keeps_particle_count() {
		let mut sim = simulator(50, 800.0, 600.0);
		sim.resize(1200.0, 800.0);
		let mut rec = Recorder::default();
		sim.frame(&mut rec);
		assert_eq!((sim.field.width(), sim.field.height()), (1200.0, 800.0));
		assert_eq!(rec.clears, vec![(1200.0, 800.0)]);
		assert_eq!(sim.field.len(), 50);
	}

	#[test]
	fn instances_do_not_share_particles() {
		let mut a = simulator(5, 100.0, 100.0);
		let b = simulator(5, 100.0, 100.0);
		a.field.particles.clear();
		assert_eq!(b.field.len(), 5);
	}
}
