//! `requestAnimationFrame` chain with an explicit stop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::components::dom;
use crate::error::FxError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Calls `tick` once per display refresh until it returns `false` or the loop
/// is stopped. Dropping the loop stops it.
pub struct FrameLoop {
	callback: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	/// Request the first frame.
	pub fn start(mut tick: impl FnMut() -> bool + 'static) -> Result<Self, FxError> {
		let window = dom::window()?;
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));
		let (callback_inner, pending_inner) = (callback.clone(), pending.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			if !tick() {
				return;
			}
			// Re-request before returning or the chain silently ends.
			if let (Some(cb), Some(win)) = (callback_inner.borrow().as_ref(), web_sys::window()) {
				pending_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			pending.set(Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?));
		}

		Ok(Self { callback, pending })
	}

	/// Cancel the queued frame and release the callback.
	pub fn stop(&self) {
		if let Some(id) = self.pending.take() {
			if let Some(win) = web_sys::window() {
				let _ = win.cancel_animation_frame(id);
			}
		}
		// Breaks the callback's reference cycle on itself.
		self.callback.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
