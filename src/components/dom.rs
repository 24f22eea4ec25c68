//! Small DOM helpers shared by the effects.
//!
//! Everything here degrades to an [`FxError`] instead of panicking; callers
//! log and move on.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::FxError;

/// The global window, if running in a browser.
pub fn window() -> Result<Window, FxError> {
	web_sys::window().ok_or(FxError::NoWindow)
}

/// The window's document.
pub fn document() -> Result<Document, FxError> {
	window()?.document().ok_or(FxError::NoDocument)
}

/// All elements matching `selector`, in document order.
///
/// Zero matches is not an error.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, FxError> {
	let list = document
		.query_selector_all(selector)
		.map_err(|_| FxError::Selector(selector.to_string()))?;
	Ok((0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect())
}

/// Fails with [`FxError::Unsupported`] when `api` is not a global constructor.
pub fn require_api(window: &Window, api: &'static str) -> Result<(), FxError> {
	match js_sys::Reflect::has(window, &JsValue::from_str(api)) {
		Ok(true) => Ok(()),
		_ => Err(FxError::Unsupported(api)),
	}
}

/// Run `f` after `delay_ms`, or right away when the delay is zero.
///
/// Timers are never cancelled. `f` must re-check whatever element it touches.
pub fn defer(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<(), FxError> {
	if delay_ms == 0 {
		f();
		return Ok(());
	}
	let callback = Closure::once_into_js(f);
	window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
		callback.unchecked_ref(),
		delay_ms.min(i32::MAX as u32) as i32,
	)?;
	Ok(())
}

/// Set one inline style property. Non-HTML elements are left alone.
pub fn set_style(element: &Element, property: &str, value: &str) {
	if let Some(html) = element.dyn_ref::<HtmlElement>() {
		let _ = html.style().set_property(property, value);
	}
}

/// An event listener that is removed again when dropped.
pub struct Listener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
	/// Attach `handler` to `event` on `target`.
	pub fn new(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self, FxError> {
		let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
		target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		Ok(Self {
			target: target.clone(),
			event,
			callback,
		})
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

/// At most one queued frame: the first event claims it, the frame releases it.
#[derive(Clone, Debug, Default)]
pub struct FrameGate(Rc<Cell<bool>>);

impl FrameGate {
	/// `true` if nothing was queued yet; the caller should queue the frame.
	pub fn claim(&self) -> bool {
		!self.0.replace(true)
	}

	/// Let the next event queue a frame again.
	pub fn release(&self) {
		self.0.set(false);
	}

	/// Whether a frame is queued.
	pub fn is_queued(&self) -> bool {
		self.0.get()
	}
}

/// Like [`Listener::new`], but bursts of `event` run `handler` once, on the
/// next animation frame.
pub fn per_frame(
	target: &EventTarget,
	event: &'static str,
	handler: impl FnMut() + 'static,
) -> Result<Listener, FxError> {
	let handler = Rc::new(RefCell::new(handler));
	let gate = FrameGate::default();
	Listener::new(target, event, move |_| {
		if !gate.claim() {
			return;
		}
		let Some(win) = web_sys::window() else {
			gate.release();
			return;
		};
		let (handler, frame_gate) = (handler.clone(), gate.clone());
		let run = Closure::once_into_js(move || {
			frame_gate.release();
			(*handler.borrow_mut())();
		});
		if win.request_animation_frame(run.unchecked_ref()).is_err() {
			gate.release();
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn gate_admits_one_frame_per_burst() {
		let gate = FrameGate::default();
		assert!(gate.claim());
		assert!(!gate.claim());
		assert!(!gate.clone().claim(), "clones share the queued flag");
		assert!(gate.is_queued());

		gate.release();
		assert!(!gate.is_queued());
		assert!(gate.claim());
	}
}
