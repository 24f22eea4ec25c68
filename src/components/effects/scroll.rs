//! Scroll progress bar and hero parallax.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::components::dom::{self, Listener};
use crate::error::FxError;

const PROGRESS_ID: &str = "scroll-progress";

const PROGRESS_STYLE: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
	background: linear-gradient(90deg, #00d9ff, #ff6b35); z-index: 10000; transition: width 0.1s ease;";

/// Scroll effect configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ScrollSpec {
	/// Show the fixed progress bar at the top of the page
	pub progress_bar: bool,
	/// Element shifted against the scroll direction, if any
	pub parallax_selector: Option<String>,
	/// Parallax offset per scrolled pixel
	pub parallax_rate: f64,
}

impl Default for ScrollSpec {
	fn default() -> Self {
		Self {
			progress_bar: true,
			parallax_selector: Some(".hero".to_string()),
			parallax_rate: -0.5,
		}
	}
}

/// Percentage of the page scrolled, 0 to 100.
///
/// A page shorter than its viewport reports 0.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
	let range = scroll_height - client_height;
	if range <= 0.0 || !scroll_top.is_finite() {
		return 0.0;
	}
	(scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Vertical shift of the parallax element after `scroll_y` pixels.
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
	scroll_y * rate
}

/// Keeps the scroll listener alive.
pub struct ScrollEffects {
	_listener: Listener,
}

fn progress_bar(document: &Document) -> Result<Element, FxError> {
	if let Some(existing) = document.get_element_by_id(PROGRESS_ID) {
		return Ok(existing);
	}
	let bar = document.create_element("div")?;
	bar.set_id(PROGRESS_ID);
	bar.set_attribute("style", PROGRESS_STYLE)?;
	document.body().ok_or(FxError::NoDocument)?.append_child(&bar)?;
	Ok(bar)
}

impl ScrollEffects {
	/// Updates run at most once per animation frame. Returns `Ok(None)` when
	/// both effects are disabled or have no element.
	pub fn install(document: &Document, spec: &ScrollSpec) -> Result<Option<Self>, FxError> {
		let bar = if spec.progress_bar {
			Some(progress_bar(document)?)
		} else {
			None
		};
		let hero = match &spec.parallax_selector {
			Some(selector) => document
				.query_selector(selector)
				.map_err(|_| FxError::Selector(selector.clone()))?
				.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
			None => None,
		};
		if bar.is_none() && hero.is_none() {
			return Ok(None);
		}

		let window = dom::window()?;
		let rate = spec.parallax_rate;
		let listener = dom::per_frame(&window, "scroll", move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let scroll_y = win.scroll_y().unwrap_or(0.0);

			if let Some(ref bar) = bar {
				let root = win.document().and_then(|d| d.document_element());
				if let Some(root) = root {
					let pct = scroll_percent(scroll_y, root.scroll_height() as f64, root.client_height() as f64);
					dom::set_style(bar, "width", &format!("{pct}%"));
				}
			}
			if let Some(ref hero) = hero {
				let offset = parallax_offset(scroll_y, rate);
				let _ = hero.style().set_property("transform", &format!("translateY({offset}px)"));
			}
		})?;

		Ok(Some(Self { _listener: listener }))
	}
}
