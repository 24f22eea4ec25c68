//! Page effects, each usable on its own.

pub mod dom;
pub mod effects;
pub mod particle_field;
pub mod reveal;
