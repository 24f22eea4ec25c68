//! One-shot "appear" transitions applied by the reveal engine.

use serde::Deserialize;

/// What happens to an element the first time it becomes visible enough.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
	/// Fade in while sliding up from `offset_px` below.
	Fade {
		/// Starting distance below the resting position
		offset_px: f64,
		/// CSS `transition` value set on the element, if any
		#[serde(default)]
		transition: Option<String>,
	},
	/// Grow a bar's width from 0% to the percentage stored in `attribute`.
	Grow {
		/// Attribute holding the target percentage
		#[serde(default = "default_width_attribute")]
		attribute: String,
	},
	/// Like `Fade`, but elements firing together start `interval_ms` apart.
	Stagger {
		/// Gap between elements firing in the same batch
		interval_ms: u32,
		/// Starting distance below the resting position
		offset_px: f64,
		/// CSS `transition` value set on the element, if any
		#[serde(default)]
		transition: Option<String>,
		/// Child selector given the `slideInFromSide` animation
		#[serde(default)]
		accent: Option<String>,
	},
	/// Wrap each word in a span whose animation starts `step_secs` after the previous one.
	Words {
		/// Gap between consecutive words
		step_secs: f64,
	},
	/// Add a class, optionally swapping out a placeholder class.
	ClassSwap {
		/// Class added on reveal
		add: String,
		/// Class removed on reveal
		#[serde(default)]
		remove: Option<String>,
	},
}

fn default_width_attribute() -> String {
	"data-width".to_string()
}

/// Animation applied to a staggered element's accent child.
pub const ACCENT_ANIMATION: &str = "slideInFromSide 0.8s ease forwards";

impl Transition {
	/// Delay between consecutive elements of one notification batch.
	pub fn stagger_ms(&self) -> u32 {
		match self {
			Transition::Stagger { interval_ms, .. } => *interval_ms,
			_ => 0,
		}
	}

	/// Inline styles that put an element into its pre-reveal state.
	pub fn hidden_styles(&self) -> Vec<(&'static str, String)> {
		match self {
			Transition::Fade { offset_px, .. } | Transition::Stagger { offset_px, .. } => vec![
				("opacity", "0".to_string()),
				("transform", format!("translateY({offset_px}px)")),
			],
			Transition::Grow { .. } => vec![("width", "0%".to_string())],
			Transition::Words { .. } | Transition::ClassSwap { .. } => Vec::new(),
		}
	}

	/// Inline styles that reveal the element. `Grow` needs the target
	/// percentage, see [`grow_width`].
	pub fn revealed_styles(&self) -> Vec<(&'static str, String)> {
		match self {
			Transition::Fade { transition, .. } | Transition::Stagger { transition, .. } => {
				let mut styles = vec![
					("opacity", "1".to_string()),
					("transform", "translateY(0)".to_string()),
				];
				if let Some(t) = transition {
					styles.push(("transition", t.clone()));
				}
				styles
			}
			Transition::Grow { .. } | Transition::Words { .. } | Transition::ClassSwap { .. } => Vec::new(),
		}
	}
}

/// Width for a progress bar whose attribute holds `raw`.
///
/// Accepts an optional trailing `%`; the result is clamped to 0..=100.
pub fn grow_width(raw: &str) -> Option<String> {
	let value: f64 = raw.trim().trim_end_matches('%').trim().parse().ok()?;
	if !value.is_finite() {
		return None;
	}
	Some(format!("{}%", value.clamp(0.0, 100.0)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fade_round_trip_styles() {
		let fade = Transition::Fade {
			offset_px: 20.0,
			transition: Some("all 0.6s ease".into()),
		};
		assert_eq!(
			fade.hidden_styles(),
			vec![("opacity", "0".to_string()), ("transform", "translateY(20px)".to_string())]
		);
		let shown = fade.revealed_styles();
		assert!(shown.contains(&("opacity", "1".to_string())));
		assert!(shown.contains(&("transform", "translateY(0)".to_string())));
		assert!(shown.contains(&("transition", "all 0.6s ease".to_string())));
	}

	#[test]
	fn only_stagger_has_interval() {
		let stagger = Transition::Stagger {
			interval_ms: 200,
			offset_px: 50.0,
			transition: None,
			accent: None,
		};
		assert_eq!(stagger.stagger_ms(), 200);
		assert_eq!(Transition::Words { step_secs: 0.1 }.stagger_ms(), 0);
	}

	#[test]
	fn grow_width_parses_and_clamps() {
		assert_eq!(grow_width("85"), Some("85%".to_string()));
		assert_eq!(grow_width(" 62.5% "), Some("62.5%".to_string()));
		assert_eq!(grow_width("140"), Some("100%".to_string()));
		assert_eq!(grow_width("-3"), Some("0%".to_string()));
		assert_eq!(grow_width("wide"), None);
		assert_eq!(grow_width("NaN"), None);
	}

	#[test]
	fn deserializes_tagged_variants() {
		let t: Transition = serde_json::from_str(r#"{"kind": "grow"}"#).unwrap();
		assert_eq!(
			t,
			Transition::Grow {
				attribute: "data-width".into()
			}
		);
		let t: Transition =
			serde_json::from_str(r#"{"kind": "class_swap", "add": "loaded", "remove": "skeleton"}"#).unwrap();
		assert_eq!(
			t,
			Transition::ClassSwap {
				add: "loaded".into(),
				remove: Some("skeleton".into())
			}
		);
	}
}
