//! Browser binding of the reveal engine.
//!
//! Each configured collection gets its own `IntersectionObserver`. Entries of
//! one callback invocation become one notification batch; fired elements are
//! unobserved before their transition is staged on the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::engine::{Activation, RevealCollection, Stage, Visibility};
use super::transition::{ACCENT_ANIMATION, Transition, grow_width};
use super::words::{WORD_CLASS, split_words};
use crate::components::dom;
use crate::config::RevealSpec;
use crate::error::FxError;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Applies transitions to live DOM elements.
pub struct DomStage;

impl Stage<Element> for DomStage {
	fn prepare(&mut self, target: &Element, transition: &Transition) {
		for (property, value) in transition.hidden_styles() {
			dom::set_style(target, property, &value);
		}
		if let Transition::ClassSwap {
			remove: Some(placeholder),
			..
		} = transition
		{
			let _ = target.class_list().add_1(placeholder);
		}
	}

	fn activate(&mut self, activation: Activation<Element>) {
		let Activation {
			target,
			transition,
			delay_ms,
		} = activation;
		let scheduled = dom::defer(delay_ms, move || {
			// The element may have left the page while the timer was pending.
			if target.is_connected() {
				apply(&target, &transition);
			}
		});
		if let Err(e) = scheduled {
			log::debug!("portfolio-fx: could not schedule reveal: {}", e);
		}
	}
}

fn apply(target: &Element, transition: &Transition) {
	for (property, value) in transition.revealed_styles() {
		dom::set_style(target, property, &value);
	}

	match transition {
		Transition::Fade { .. } => {}
		Transition::Grow { attribute } => {
			match target.get_attribute(attribute).as_deref().and_then(grow_width) {
				Some(width) => dom::set_style(target, "width", &width),
				None => log::debug!("portfolio-fx: progress bar without a usable `{}`", attribute),
			}
		}
		Transition::Stagger { accent, .. } => {
			if let Some(selector) = accent {
				if let Ok(Some(child)) = target.query_selector(selector) {
					dom::set_style(&child, "animation", ACCENT_ANIMATION);
				}
			}
		}
		Transition::Words { step_secs } => {
			if let Err(e) = wrap_words(target, *step_secs) {
				log::debug!("portfolio-fx: word reveal skipped: {}", e);
			}
		}
		Transition::ClassSwap { add, remove } => {
			let classes = target.class_list();
			let _ = classes.add_1(add);
			if let Some(placeholder) = remove {
				let _ = classes.remove_1(placeholder);
			}
		}
	}
}

/// Replace the element's text with one span per word.
fn wrap_words(target: &Element, step_secs: f64) -> Result<(), FxError> {
	let document = target.owner_document().ok_or(FxError::NoDocument)?;
	let text = target.text_content().unwrap_or_default();
	let spans = split_words(&text, step_secs);

	target.set_text_content(None);
	for (i, span) in spans.iter().enumerate() {
		if i > 0 {
			target.append_child(&document.create_text_node(" "))?;
		}
		let el = document.create_element("span")?;
		el.set_class_name(WORD_CLASS);
		el.set_attribute("style", &span.style())?;
		el.set_text_content(Some(&span.word));
		target.append_child(&el)?;
	}
	Ok(())
}

/// A live observer for one collection. Disconnects when dropped.
pub struct RevealObserver {
	observer: IntersectionObserver,
	collection: Rc<RefCell<RevealCollection<Element>>>,
	_callback: ObserverCallback,
}

impl RevealObserver {
	/// Watch every element matching `spec.selector`.
	///
	/// Returns `Ok(None)` when nothing matches.
	pub fn install(document: &Document, spec: &RevealSpec) -> Result<Option<Self>, FxError> {
		let window = dom::window()?;
		dom::require_api(&window, "IntersectionObserver")?;

		let elements = dom::query_all(document, &spec.selector)?;
		if elements.is_empty() {
			log::debug!("portfolio-fx: reveal `{}` matched nothing", spec.name);
			return Ok(None);
		}

		let collection = Rc::new(RefCell::new(RevealCollection::new(
			spec.name.clone(),
			spec.threshold,
			spec.transition.clone(),
		)));

		let collection_cb = collection.clone();
		let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
			let batch: Vec<Visibility<Element>> = entries
				.iter()
				.filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
				.map(|e| Visibility {
					target: e.target(),
					ratio: e.intersection_ratio(),
					intersecting: e.is_intersecting(),
				})
				.collect();

			let fired = collection_cb.borrow_mut().notify(&batch);
			for activation in fired {
				observer.unobserve(&activation.target);
				DomStage.activate(activation);
			}
		});

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(collection.borrow().threshold()));
		let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

		{
			let mut c = collection.borrow_mut();
			for element in elements {
				if c.observe_on(element.clone(), spec.delay_ms, &mut DomStage) {
					observer.observe(&element);
				}
			}
			log::info!(
				"portfolio-fx: reveal `{}` watching {} element(s) at threshold {}",
				c.name(),
				c.len(),
				c.threshold()
			);
		}

		Ok(Some(Self {
			observer,
			collection,
			_callback: callback,
		}))
	}

	/// Elements still waiting to be revealed.
	pub fn pending(&self) -> usize {
		self.collection.borrow().pending()
	}
}

impl Drop for RevealObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
		let pending = self.pending();
		if pending > 0 {
			log::debug!(
				"portfolio-fx: reveal `{}` disconnected with {} element(s) never revealed",
				self.collection.borrow().name(),
				pending
			);
		}
	}
}
