//! Drawing for the particle backdrop.
//!
//! Rendering goes through the [`Painter`] trait so the frame logic does not
//! care whether it lands on a real canvas or a recording used in tests.
//! Each frame is two passes:
//! 1. Particles as filled circles
//! 2. Proximity links on top, tinted with the first particle's color

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::{Color, FieldStyle};

/// Minimal drawing surface used by the renderer.
pub trait Painter {
	/// Wipe the whole `width` x `height` surface.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill a circle centered on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Stroke a straight line segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color);
}

impl Painter for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&color.to_css());
		self.stroke();
	}
}

/// Renders one complete frame of the field.
pub fn render<P: Painter + ?Sized>(field: &ParticleField, style: &FieldStyle, painter: &mut P) {
	painter.clear(field.width(), field.height());

	for p in &field.particles {
		painter.fill_circle(p.x, p.y, p.size, style.color(p.tone));
	}

	field.visit_links(style.link_distance, |a, b| {
		let color = style.color(a.tone).with_alpha(style.link_alpha);
		painter.stroke_line((a.x, a.y), (b.x, b.y), color);
	});
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::particle_field::field::Particle;

	/// Painter that records calls instead of drawing.
	#[derive(Debug, Default)]
	pub(crate) struct Recorder {
		pub clears: Vec<(f64, f64)>,
		pub circles: Vec<(f64, f64, Color)>,
		pub lines: Vec<((f64, f64), (f64, f64), Color)>,
	}

	impl Painter for Recorder {
		fn clear(&mut self, width: f64, height: f64) {
			self.clears.push((width, height));
		}

		fn fill_circle(&mut self, x: f64, y: f64, _radius: f64, color: Color) {
			self.circles.push((x, y, color));
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
			self.lines.push((from, to, color));
		}
	}

	fn at(x: f64, tone: usize) -> Particle {
		Particle {
			x,
			y: 10.0,
			vx: 0.0,
			vy: 0.0,
			size: 2.0,
			tone,
		}
	}

	#[test]
	fn empty_field_only_clears() {
		let field = ParticleField::from_particles(Vec::new(), 800.0, 600.0);
		let mut rec = Recorder::default();
		render(&field, &FieldStyle::default(), &mut rec);
		assert_eq!(rec.clears, vec![(800.0, 600.0)]);
		assert!(rec.circles.is_empty());
		assert!(rec.lines.is_empty());
	}

	#[test]
	fn link_uses_first_particle_color_at_link_alpha() {
		let style = FieldStyle::default();
		let field = ParticleField::from_particles(vec![at(10.0, 1), at(50.0, 0), at(400.0, 0)], 500.0, 500.0);
		let mut rec = Recorder::default();
		render(&field, &style, &mut rec);

		assert_eq!(rec.circles.len(), 3);
		assert_eq!(rec.circles[0].2, style.palette[1]);
		assert_eq!(rec.lines.len(), 1);
		let (from, to, color) = rec.lines[0];
		assert_eq!(from, (10.0, 10.0));
		assert_eq!(to, (50.0, 10.0));
		assert_eq!(color, style.palette[1].with_alpha(0.1));
	}
}
