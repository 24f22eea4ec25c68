//! Word-by-word text reveal planning.

/// One word of a revealed text block and when its animation starts.
#[derive(Clone, Debug, PartialEq)]
pub struct WordSpan {
	/// The word itself, without surrounding whitespace.
	pub word: String,
	/// Seconds after the reveal fires.
	pub delay_secs: f64,
}

impl WordSpan {
	/// Inline style carried by the word's span.
	pub fn style(&self) -> String {
		format!("animation-delay: {}s", self.delay_secs)
	}
}

/// Class carried by every word span; the keyframes key off it.
pub const WORD_CLASS: &str = "word-reveal";

/// Split `text` on whitespace, giving word `i` a delay of `i * step_secs`.
pub fn split_words(text: &str, step_secs: f64) -> Vec<WordSpan> {
	text.split_whitespace()
		.enumerate()
		.map(|(i, word)| WordSpan {
			word: word.to_string(),
			// Rounded so 3 * 0.1 reads as 0.3 in the style attribute.
			delay_secs: ((i as f64 * step_secs) * 1000.0).round() / 1000.0,
		})
		.collect()
}
