//! Typing effect for the hero heading.

use serde::Deserialize;
use web_sys::{Document, Element};

use crate::components::dom;
use crate::error::FxError;

/// Typing effect configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TypingSpec {
	/// Element whose text is typed in
	pub selector: String,
	/// Pause before the first character appears
	pub start_delay_ms: u32,
	/// Pause between characters
	pub interval_ms: u32,
}

impl Default for TypingSpec {
	fn default() -> Self {
		Self {
			selector: ".hero h1".to_string(),
			start_delay_ms: 1000,
			interval_ms: 50,
		}
	}
}

/// Yields successively longer prefixes of a text, one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
	chars: Vec<char>,
	shown: usize,
}

impl Typewriter {
	/// Start with nothing shown.
	pub fn new(text: &str) -> Self {
		Self {
			chars: text.chars().collect(),
			shown: 0,
		}
	}

	/// Whether the full text has been yielded.
	pub fn is_done(&self) -> bool {
		self.shown >= self.chars.len()
	}
}

impl Iterator for Typewriter {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		if self.is_done() {
			return None;
		}
		self.shown += 1;
		Some(self.chars[..self.shown].iter().collect())
	}
}

/// Blank the heading and type its text back in.
///
/// Does nothing when the heading is absent or empty.
pub fn install(document: &Document, spec: &TypingSpec) -> Result<bool, FxError> {
	let Some(heading) = document
		.query_selector(&spec.selector)
		.map_err(|_| FxError::Selector(spec.selector.clone()))?
	else {
		return Ok(false);
	};
	let text = heading.text_content().unwrap_or_default();
	if text.is_empty() {
		return Ok(false);
	}

	let target = heading.clone();
	blank_while_starting(
		&text,
		|t| heading.set_text_content(Some(t)),
		|| type_next(target, Typewriter::new(&text), spec.start_delay_ms, spec.interval_ms),
	)?;
	Ok(true)
}

/// Blank the text through `set`, then `start` the typing. A failed start
/// puts `text` back so the heading is never left empty.
fn blank_while_starting<E>(
	text: &str,
	mut set: impl FnMut(&str),
	start: impl FnOnce() -> Result<(), E>,
) -> Result<(), E> {
	set("");
	start().inspect_err(|_| set(text))
}

fn type_next(heading: Element, mut writer: Typewriter, delay_ms: u32, interval_ms: u32) -> Result<(), FxError> {
	dom::defer(delay_ms, move || {
		if !heading.is_connected() {
			return;
		}
		let Some(prefix) = writer.next() else {
			return;
		};
		heading.set_text_content(Some(&prefix));
		if !writer.is_done() {
			if let Err(e) = type_next(heading, writer, interval_ms.max(1), interval_ms) {
				log::debug!("portfolio-fx: typing effect interrupted: {}", e);
			}
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn yields_each_prefix_once() {
		let prefixes: Vec<String> = Typewriter::new("Hi!").collect();
		assert_eq!(prefixes, vec!["H", "Hi", "Hi!"]);
	}

	#[test]
	fn handles_multibyte_characters() {
		let mut writer = Typewriter::new("né");
		assert_eq!(writer.next().as_deref(), Some("n"));
		assert_eq!(writer.next().as_deref(), Some("né"));
		assert!(writer.is_done());
		assert_eq!(writer.next(), None);
	}

	#[test]
	fn failed_start_restores_text() {
		let mut shown = "Hello, I'm Sam".to_string();
		let text = shown.clone();
		let result: Result<(), &str> = blank_while_starting(&text, |t| shown = t.to_string(), || Err("no timers"));
		assert!(result.is_err());
		assert_eq!(shown, "Hello, I'm Sam");
	}

	#[test]
	fn started_typing_leaves_text_blank() {
		let mut shown = "Hello".to_string();
		let text = shown.clone();
		let result: Result<(), &str> = blank_while_starting(&text, |t| shown = t.to_string(), || Ok(()));
		assert!(result.is_ok());
		assert_eq!(shown, "");
	}

	#[test]
	fn empty_text_is_done_immediately() {
		assert!(Typewriter::new("").is_done());
	}
}
