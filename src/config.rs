//! Runtime configuration.
//!
//! The page may embed a JSON document in
//! `<script id="portfolio-fx-config" type="application/json">`. Every field is
//! optional; anything missing falls back to the defaults below, which match
//! the stock portfolio markup.

use serde::Deserialize;

use crate::components::effects::{FilterSpec, HoverSpec, NavSpec, ScrollSpec, TypingSpec};
use crate::components::particle_field::FieldStyle;
use crate::components::reveal::Transition;

/// Id of the script element holding the configuration.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-fx-config";

/// One reveal collection: which elements, how visible, what happens.
#[derive(Clone, Debug, Deserialize)]
pub struct RevealSpec {
	/// Name used in log messages
	pub name: String,
	/// CSS selector for the collection's elements
	pub selector: String,
	/// Visible fraction required before the transition fires
	pub threshold: f64,
	/// What happens to an element when it fires
	pub transition: Transition,
	/// Delay added to every target of the collection
	#[serde(default)]
	pub delay_ms: u32,
}

impl RevealSpec {
	fn new(name: &str, selector: &str, threshold: f64, transition: Transition) -> Self {
		Self {
			name: name.to_string(),
			selector: selector.to_string(),
			threshold,
			transition,
			delay_ms: 0,
		}
	}
}

/// The stock reveal collections.
pub fn default_reveals() -> Vec<RevealSpec> {
	vec![
		RevealSpec {
			delay_ms: 200,
			..RevealSpec::new(
				"hero",
				".hero h1, .hero p, .hero-btns",
				0.0,
				Transition::Fade {
					offset_px: 20.0,
					transition: Some("all 0.6s ease".to_string()),
				},
			)
		},
		RevealSpec::new(
			"progress",
			".progress",
			0.5,
			Transition::Grow {
				attribute: "data-width".to_string(),
			},
		),
		RevealSpec::new(
			"projects",
			".project-card",
			0.1,
			Transition::Fade {
				offset_px: 20.0,
				transition: None,
			},
		),
		RevealSpec::new(
			"cv",
			"#cv-download",
			0.3,
			Transition::ClassSwap {
				add: "visible".to_string(),
				remove: None,
			},
		),
		RevealSpec::new(
			"timeline",
			".timeline-item",
			0.3,
			Transition::Stagger {
				interval_ms: 200,
				offset_px: 50.0,
				transition: Some("all 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94)".to_string()),
				accent: Some(".timeline-content".to_string()),
			},
		),
		RevealSpec::new("text", ".timeline-content p", 0.5, Transition::Words { step_secs: 0.1 }),
		RevealSpec::new(
			"loading",
			".timeline-content",
			0.0,
			Transition::ClassSwap {
				add: "loaded".to_string(),
				remove: Some("skeleton".to_string()),
			},
		),
	]
}

/// Complete effect configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FxConfig {
	/// Particle backdrop
	pub particles: FieldStyle,
	/// Reveal collections, installed independently
	pub reveals: Vec<RevealSpec>,
	/// `None` disables the typing effect
	pub typing: Option<TypingSpec>,
	/// Progress bar and parallax
	pub scroll: ScrollSpec,
	/// `None` disables navigation highlighting
	pub nav: Option<NavSpec>,
	/// `None` disables the card hover glow
	pub hover: Option<HoverSpec>,
	/// `None` disables project filtering
	pub filter: Option<FilterSpec>,
	/// Log paint and input timing
	pub performance: bool,
}

impl Default for FxConfig {
	fn default() -> Self {
		Self {
			particles: FieldStyle::default(),
			reveals: default_reveals(),
			typing: Some(TypingSpec::default()),
			scroll: ScrollSpec::default(),
			nav: Some(NavSpec::default()),
			hover: Some(HoverSpec::default()),
			filter: Some(FilterSpec::default()),
			performance: true,
		}
	}
}

impl FxConfig {
	/// Parse a configuration document. Missing fields take their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}
