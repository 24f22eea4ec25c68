//! Glow on hovered cards.

use serde::Deserialize;
use web_sys::Document;

use crate::components::dom::{self, Listener};
use crate::error::FxError;

/// Hover glow configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HoverSpec {
	/// Cards that glow while hovered
	pub selector: String,
	/// CSS `box-shadow` applied while the pointer is over a card
	pub shadow: String,
}

impl Default for HoverSpec {
	fn default() -> Self {
		Self {
			selector: ".skill-category, .project-card, .timeline-item".to_string(),
			shadow: "0 10px 40px rgba(0, 217, 255, 0.2), inset 0 1px 0 rgba(255, 255, 255, 0.1)".to_string(),
		}
	}
}

impl HoverSpec {
	/// Inline `box-shadow` for a card. Empty clears the inline value so the
	/// stylesheet's shadow applies again.
	pub fn shadow_for(&self, hovered: bool) -> &str {
		if hovered { &self.shadow } else { "" }
	}
}

/// Enter and leave listeners on every card.
pub struct HoverGlow {
	_listeners: Vec<Listener>,
}

impl HoverGlow {
	/// Returns `Ok(None)` when no card matches.
	pub fn install(document: &Document, spec: &HoverSpec) -> Result<Option<Self>, FxError> {
		let cards = dom::query_all(document, &spec.selector)?;
		if cards.is_empty() {
			return Ok(None);
		}

		let mut listeners = Vec::with_capacity(cards.len() * 2);
		for card in &cards {
			for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
				let (target, spec) = (card.clone(), spec.clone());
				listeners.push(Listener::new(card, event, move |_| {
					dom::set_style(&target, "box-shadow", spec.shadow_for(hovered));
				})?);
			}
		}

		log::debug!("portfolio-fx: hover glow on {} card(s)", cards.len());
		Ok(Some(Self { _listeners: listeners }))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn leaving_clears_the_shadow() {
		let spec = HoverSpec::default();
		assert!(spec.shadow_for(true).starts_with("0 10px 40px"));
		assert_eq!(spec.shadow_for(false), "");
	}

	#[test]
	fn default_covers_every_card_kind() {
		let selector = HoverSpec::default().selector;
		for card in [".skill-category", ".project-card", ".timeline-item"] {
			assert!(selector.contains(card));
		}
	}
}
