//! Leptos component mounting the particle overlay canvas.
//!
//! The component creates a fixed, pointer-transparent canvas covering the
//! viewport, keeps its size in step with the window, and drives the simulator
//! from a `requestAnimationFrame` loop. Everything is torn down on cleanup.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::frame::FrameLoop;
use super::simulator::ParticleSimulator;
use super::theme::FieldStyle;
use crate::components::dom::{self, Listener};
use crate::error::FxError;

/// Live resources of a mounted overlay.
struct Overlay {
	simulator: Rc<RefCell<ParticleSimulator>>,
	_frames: FrameLoop,
	_resize: Listener,
}

impl Drop for Overlay {
	fn drop(&mut self) {
		self.simulator.borrow_mut().stop();
	}
}

fn viewport(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

fn attach(canvas: HtmlCanvasElement, style: FieldStyle) -> Result<Overlay, FxError> {
	let window = dom::window()?;
	let (w, h) = viewport(&window);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let mut ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(FxError::NoContext)?
		.dyn_into()
		.map_err(|_| FxError::NoContext)?;

	let mut rng = SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64);
	let simulator = Rc::new(RefCell::new(ParticleSimulator::new(style, w, h, &mut rng)));

	let (sim_resize, canvas_resize) = (simulator.clone(), canvas.clone());
	let resize = Listener::new(&window, "resize", move |_| {
		let Some(win) = web_sys::window() else {
			return;
		};
		let (nw, nh) = viewport(&win);
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		sim_resize.borrow_mut().resize(nw, nh);
	})?;

	let sim_frame = simulator.clone();
	let frames = FrameLoop::start(move || sim_frame.borrow_mut().frame(&mut ctx))?;

	log::info!(
		"portfolio-fx: particle overlay {}x{} with {} particles",
		w,
		h,
		simulator.borrow().field.len()
	);

	Ok(Overlay {
		simulator,
		_frames: frames,
		_resize: resize,
	})
}

/// Renders the ambient particle backdrop behind the page content.
///
/// Mount once per page. If the 2d context is unavailable the canvas stays
/// blank and nothing else is affected.
#[component]
pub fn ParticleOverlay(#[prop(default = FieldStyle::default())] field: FieldStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let overlay = StoredValue::new_local(None::<Overlay>);
	let opacity = field.opacity;

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		match attach(canvas, field.clone()) {
			Ok(mounted) => overlay.set_value(Some(mounted)),
			Err(e) => log::warn!("portfolio-fx: particle overlay disabled: {}", e),
		}
	});

	on_cleanup(move || {
		overlay.try_update_value(|o| *o = None);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-overlay"
			aria-hidden="true"
			style=format!(
				"position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: -1; pointer-events: none; opacity: {opacity};"
			)
		/>
	}
}
