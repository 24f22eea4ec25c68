//! Navigation highlighting.
//!
//! While the page scrolls, the nav link pointing at the section currently
//! under the top of the viewport carries the active class.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::components::dom::{self, Listener};
use crate::error::FxError;

/// Navigation highlighting configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NavSpec {
	/// Links whose `href` is `#<section id>`
	pub link_selector: String,
	/// Sections the links point at, in document order
	pub section_selector: String,
	/// A section counts as current this many pixels before its top is reached
	pub offset_px: f64,
	/// Class carried by the current section's link
	pub active_class: String,
}

impl Default for NavSpec {
	fn default() -> Self {
		Self {
			link_selector: ".nav-link".to_string(),
			section_selector: "section".to_string(),
			offset_px: 200.0,
			active_class: "active".to_string(),
		}
	}
}

/// Id of the current section: the last one, in document order, whose top
/// minus `offset` has been scrolled past.
///
/// A current section without an id yields `None`, as does a page scrolled
/// above every section.
pub fn active_section(scroll_y: f64, sections: &[(Option<String>, f64)], offset: f64) -> Option<&str> {
	sections
		.iter()
		.filter(|(_, top)| scroll_y >= top - offset)
		.last()
		.and_then(|(id, _)| id.as_deref())
}

/// Whether a link's `href` targets section `current`.
pub fn links_to(href: Option<&str>, current: Option<&str>) -> bool {
	match (href.and_then(|h| h.strip_prefix('#')), current) {
		(Some(target), Some(current)) => target == current,
		_ => false,
	}
}

/// Keeps the scroll listener alive.
pub struct NavHighlight {
	_listener: Listener,
}

impl NavHighlight {
	/// Track the current section while scrolling.
	///
	/// Returns `Ok(None)` when there are no links or no sections.
	pub fn install(document: &Document, spec: &NavSpec) -> Result<Option<Self>, FxError> {
		let links = dom::query_all(document, &spec.link_selector)?;
		let sections: Vec<HtmlElement> = dom::query_all(document, &spec.section_selector)?
			.into_iter()
			.filter_map(|el| el.dyn_into::<HtmlElement>().ok())
			.collect();
		if links.is_empty() || sections.is_empty() {
			return Ok(None);
		}

		let window = dom::window()?;
		let (offset, class) = (spec.offset_px, spec.active_class.clone());
		let (link_count, section_count) = (links.len(), sections.len());
		let listener = dom::per_frame(&window, "scroll", move || {
			let scroll_y = web_sys::window()
				.and_then(|w| w.scroll_y().ok())
				.unwrap_or(0.0);
			// Offsets move with layout, so they are read on every update.
			let tops: Vec<(Option<String>, f64)> = sections
				.iter()
				.map(|s| (s.get_attribute("id"), s.offset_top() as f64))
				.collect();
			mark(&links, &class, active_section(scroll_y, &tops, offset));
		})?;

		log::info!(
			"portfolio-fx: highlighting {} nav link(s) across {} section(s)",
			link_count,
			section_count
		);
		Ok(Some(Self { _listener: listener }))
	}
}

fn mark(links: &[Element], class: &str, current: Option<&str>) {
	for link in links {
		let list = link.class_list();
		let _ = if links_to(link.get_attribute("href").as_deref(), current) {
			list.add_1(class)
		} else {
			list.remove_1(class)
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn page() -> Vec<(Option<String>, f64)> {
		vec![
			(Some("home".to_string()), 0.0),
			(Some("about".to_string()), 800.0),
			(Some("projects".to_string()), 1600.0),
		]
	}

	#[test]
	fn top_of_page_is_the_first_section() {
		assert_eq!(active_section(0.0, &page(), 200.0), Some("home"));
	}

	#[test]
	fn section_becomes_current_before_its_top() {
		let sections = page();
		assert_eq!(active_section(599.0, &sections, 200.0), Some("home"));
		assert_eq!(active_section(600.0, &sections, 200.0), Some("about"));
		assert_eq!(active_section(5000.0, &sections, 200.0), Some("projects"));
	}

	#[test]
	fn nothing_is_current_above_every_section() {
		let sections = vec![(Some("intro".to_string()), 900.0)];
		assert_eq!(active_section(100.0, &sections, 200.0), None);
		assert_eq!(active_section(100.0, &[], 200.0), None);
	}

	#[test]
	fn unnamed_current_section_clears_the_highlight() {
		let mut sections = page();
		sections.push((None, 2400.0));
		assert_eq!(active_section(2300.0, &sections, 200.0), None);
	}

	#[test]
	fn links_match_on_fragment() {
		assert!(links_to(Some("#about"), Some("about")));
		assert!(!links_to(Some("#about"), Some("projects")));
		assert!(!links_to(Some("about"), Some("about")));
		assert!(!links_to(None, Some("about")));
		assert!(!links_to(Some("#about"), None));
	}
}
