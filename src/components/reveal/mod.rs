//! Scroll-triggered reveal animations.
//!
//! Elements start in a hidden state and run a one-shot transition the first
//! time enough of them scrolls into view. The sequencing lives in
//! [`RevealCollection`] and is independent of the browser; [`RevealObserver`]
//! connects it to `IntersectionObserver`.

mod engine;
mod observer;
mod transition;
pub mod words;

pub use engine::{Activation, RevealCollection, RevealTarget, Stage, TriggerState, Visibility};
pub use observer::{DomStage, RevealObserver};
pub use transition::{ACCENT_ANIMATION, Transition, grow_width};

use web_sys::Document;

use crate::config::RevealSpec;

/// Keyframes used by the staggered and word-by-word transitions.
pub const KEYFRAMES: &str = r#"
@keyframes slideInFromSide {
	from { transform: translateX(-50px); opacity: 0; }
	to { transform: translateX(0); opacity: 1; }
}

@keyframes wordReveal {
	from { opacity: 0; transform: translateY(10px); }
	to { opacity: 1; transform: translateY(0); }
}

.word-reveal {
	display: inline-block;
	animation: wordReveal 0.6s ease forwards;
	opacity: 0;
}
"#;

/// Install an observer per spec. A spec that fails is logged and skipped.
pub fn install_all(document: &Document, specs: &[RevealSpec]) -> Vec<RevealObserver> {
	specs
		.iter()
		.filter_map(|spec| match RevealObserver::install(document, spec) {
			Ok(observer) => observer,
			Err(e) => {
				log::warn!("portfolio-fx: reveal `{}` not installed: {}", spec.name, e);
				None
			}
		})
		.collect()
}
