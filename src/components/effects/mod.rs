//! Smaller page effects: typing, scroll progress, navigation highlighting,
//! hover glow, filtering, timing.
//!
//! Each installer returns a handle that keeps its listeners alive; dropping
//! the handle removes them.

pub mod filter;
pub mod hover;
pub mod nav;
pub mod perf;
pub mod scroll;
pub mod typewriter;

pub use filter::{FilterSpec, ProjectFilter, admits};
pub use hover::{HoverGlow, HoverSpec};
pub use nav::{NavHighlight, NavSpec, active_section, links_to};
pub use perf::PerfMonitor;
pub use scroll::{ScrollEffects, ScrollSpec, parallax_offset, scroll_percent};
pub use typewriter::{Typewriter, TypingSpec};
