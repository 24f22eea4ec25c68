//! Paint and input timing reported through the log.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{PerformanceEntry, PerformanceObserver, PerformanceObserverEntryList, PerformanceObserverInit};

use crate::components::dom;
use crate::error::FxError;

type EntryCallback = Closure<dyn FnMut(PerformanceObserverEntryList, PerformanceObserver)>;

/// Delay between an input event and the start of its handler, in ms.
pub fn input_delay(start_time: f64, processing_start: f64) -> f64 {
	(processing_start - start_time).max(0.0)
}

struct Watch {
	observer: PerformanceObserver,
	_callback: EntryCallback,
}

/// Observers for largest-contentful-paint and first-input timing.
pub struct PerfMonitor {
	watches: Vec<Watch>,
}

fn entries(list: &PerformanceObserverEntryList) -> Vec<PerformanceEntry> {
	let all: Array = list.get_entries();
	all.iter()
		.filter_map(|e| e.dyn_into::<PerformanceEntry>().ok())
		.collect()
}

fn watch(entry_type: &str, callback: EntryCallback) -> Result<Watch, FxError> {
	let observer = PerformanceObserver::new(callback.as_ref().unchecked_ref())?;
	let init = Object::new();
	Reflect::set(&init, &JsValue::from_str("type"), &JsValue::from_str(entry_type))?;
	Reflect::set(&init, &JsValue::from_str("buffered"), &JsValue::TRUE)?;
	// Unknown entry types are ignored by the browser, not thrown.
	observer.observe(init.unchecked_ref::<PerformanceObserverInit>());
	Ok(Watch {
		observer,
		_callback: callback,
	})
}

impl PerfMonitor {
	/// Fails with [`FxError::Unsupported`] where `PerformanceObserver` is missing.
	pub fn install() -> Result<Self, FxError> {
		let window = dom::window()?;
		dom::require_api(&window, "PerformanceObserver")?;

		let paint: EntryCallback = Closure::new(|list: PerformanceObserverEntryList, _: PerformanceObserver| {
			for entry in entries(&list) {
				log::info!("portfolio-fx: LCP candidate at {:.1}ms", entry.start_time());
			}
		});

		let reported = Rc::new(Cell::new(false));
		let input: EntryCallback = Closure::new(move |list: PerformanceObserverEntryList, _: PerformanceObserver| {
			for entry in entries(&list) {
				if reported.get() {
					return;
				}
				let processing = Reflect::get(&entry, &JsValue::from_str("processingStart"))
					.ok()
					.and_then(|v| v.as_f64());
				if let Some(processing) = processing {
					reported.set(true);
					log::info!(
						"portfolio-fx: first input delay {:.1}ms",
						input_delay(entry.start_time(), processing)
					);
				}
			}
		});

		Ok(Self {
			watches: vec![watch("largest-contentful-paint", paint)?, watch("first-input", input)?],
		})
	}
}

impl Drop for PerfMonitor {
	fn drop(&mut self) {
		for w in &self.watches {
			w.observer.disconnect();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn input_delay_is_never_negative() {
		assert_eq!(input_delay(100.0, 112.5), 12.5);
		assert_eq!(input_delay(100.0, 90.0), 0.0);
	}
}
