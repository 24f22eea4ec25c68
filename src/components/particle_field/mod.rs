//! Ambient particle backdrop.
//!
//! A fixed number of particles drift across a transparent full-viewport
//! canvas, bounce off its edges, and are linked by faint lines when close:
//! - [`ParticleField`] holds the particles and the per-frame physics
//! - [`ParticleSimulator`] adds the running/stopped state
//! - [`Painter`] abstracts the drawing surface
//! - [`ParticleOverlay`] mounts the canvas and runs the frame loop
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::components::particle_field::{FieldStyle, ParticleOverlay};
//!
//! view! { <ParticleOverlay field=FieldStyle { count: 80, ..Default::default() } /> }
//! ```

mod component;
mod field;
mod frame;
mod render;
mod simulator;
pub mod theme;

pub use component::ParticleOverlay;
pub use field::{MAX_PARTICLES, Particle, ParticleField};
pub use frame::FrameLoop;
pub use render::{Painter, render};
pub use simulator::{LoopState, ParticleSimulator};
pub use theme::{Color, FieldStyle};
