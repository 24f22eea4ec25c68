//! Project card filtering.
//!
//! Buttons carry a `data-filter` value, cards a `data-category`. Clicking a
//! button marks it active and shows only the matching cards.

use serde::Deserialize;
use web_sys::{Document, Element};

use crate::components::dom::{self, Listener};
use crate::error::FxError;

/// Filter value that admits every card.
pub const ALL: &str = "all";

/// Filtering configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
	/// Buttons carrying a `data-filter` value
	pub button_selector: String,
	/// Cards carrying a `data-category` value
	pub card_selector: String,
	/// Delay before a shown card gets its `visible` class
	pub show_delay_ms: u32,
	/// Delay before a hidden card is taken out of the layout
	pub hide_delay_ms: u32,
}

impl Default for FilterSpec {
	fn default() -> Self {
		Self {
			button_selector: ".filter-btn".to_string(),
			card_selector: ".project-card".to_string(),
			show_delay_ms: 100,
			hide_delay_ms: 300,
		}
	}
}

/// Whether a card of `category` stays visible under `filter`.
pub fn admits(filter: &str, category: Option<&str>) -> bool {
	filter == ALL || category == Some(filter)
}

/// Click listeners on every filter button.
pub struct ProjectFilter {
	_listeners: Vec<Listener>,
}

impl ProjectFilter {
	/// Returns `Ok(None)` when there are no filter buttons.
	pub fn install(document: &Document, spec: &FilterSpec) -> Result<Option<Self>, FxError> {
		let buttons = dom::query_all(document, &spec.button_selector)?;
		let cards = dom::query_all(document, &spec.card_selector)?;
		if buttons.is_empty() {
			return Ok(None);
		}

		let mut listeners = Vec::with_capacity(buttons.len());
		for button in &buttons {
			let (all_buttons, cards, spec) = (buttons.clone(), cards.clone(), spec.clone());
			let clicked = button.clone();
			listeners.push(Listener::new(button, "click", move |_| {
				for b in &all_buttons {
					let _ = b.class_list().remove_1("active");
				}
				let _ = clicked.class_list().add_1("active");

				let filter = clicked.get_attribute("data-filter").unwrap_or_else(|| ALL.to_string());
				for card in &cards {
					let category = card.get_attribute("data-category");
					if admits(&filter, category.as_deref()) {
						show(card, spec.show_delay_ms);
					} else {
						hide(card, spec.hide_delay_ms);
					}
				}
			})?);
		}

		log::info!(
			"portfolio-fx: filtering {} card(s) with {} button(s)",
			cards.len(),
			buttons.len()
		);
		Ok(Some(Self { _listeners: listeners }))
	}
}

/// Attribute recording the latest decision, so stale timers can tell they lost.
const STATE_ATTR: &str = "data-filter-state";

fn decided(card: &Element, state: &str) -> bool {
	card.is_connected() && card.get_attribute(STATE_ATTR).as_deref() == Some(state)
}

fn show(card: &Element, delay_ms: u32) {
	let _ = card.set_attribute(STATE_ATTR, "shown");
	dom::set_style(card, "display", "block");
	let card = card.clone();
	let _ = dom::defer(delay_ms, move || {
		if decided(&card, "shown") {
			let _ = card.class_list().add_1("visible");
		}
	});
}

fn hide(card: &Element, delay_ms: u32) {
	let _ = card.set_attribute(STATE_ATTR, "hidden");
	let _ = card.class_list().remove_1("visible");
	let card = card.clone();
	let _ = dom::defer(delay_ms, move || {
		if decided(&card, "hidden") {
			dom::set_style(&card, "display", "none");
		}
	});
}
