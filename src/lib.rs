//! portfolio-fx: decorative effects for a static portfolio page.
//!
//! This crate provides a WASM bundle that enhances existing page markup with
//! an ambient particle backdrop, scroll-triggered reveal animations, a typing
//! effect, a scroll progress bar, navigation highlighting, card hover glow and
//! project filtering.

use leptos::prelude::*;
use leptos_meta::{Style, provide_meta_context};
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod error;

pub use components::particle_field::{FieldStyle, ParticleOverlay, ParticleSimulator};
pub use components::reveal::{RevealCollection, Transition, Visibility};
pub use config::{FxConfig, RevealSpec};
pub use error::FxError;

use components::dom;
use components::effects::{HoverGlow, NavHighlight, PerfMonitor, ProjectFilter, ScrollEffects, typewriter};
use components::reveal::{self, KEYFRAMES, RevealObserver};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Load configuration from a script element with id="portfolio-fx-config".
/// Expected format: JSON matching [`FxConfig`], every field optional.
fn load_config() -> Option<FxConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(config::CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FxConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"portfolio-fx: loaded config with {} reveal collection(s)",
				config.reveals.len()
			);
			Some(config)
		}
		Err(e) => {
			warn!("portfolio-fx: failed to parse config: {}", e);
			None
		}
	}
}

/// Handles for everything installed on the page markup.
struct Installed {
	_reveals: Vec<RevealObserver>,
	_scroll: Option<ScrollEffects>,
	_nav: Option<NavHighlight>,
	_hover: Option<HoverGlow>,
	_filter: Option<ProjectFilter>,
	_perf: Option<PerfMonitor>,
}

/// Log a failed installer and carry on without it.
fn soft<T>(what: &str, result: Result<Option<T>, FxError>) -> Option<T> {
	result.unwrap_or_else(|e| {
		warn!("portfolio-fx: {} not installed: {}", what, e);
		None
	})
}

fn install(config: &FxConfig) -> Result<Installed, FxError> {
	let document = dom::document()?;

	let reveals = reveal::install_all(&document, &config.reveals);

	if let Some(typing) = &config.typing {
		if let Err(e) = typewriter::install(&document, typing) {
			warn!("portfolio-fx: typing effect not installed: {}", e);
		}
	}

	let scroll = soft("scroll effects", ScrollEffects::install(&document, &config.scroll));
	let nav = match &config.nav {
		Some(spec) => soft("nav highlighting", NavHighlight::install(&document, spec)),
		None => None,
	};
	let hover = match &config.hover {
		Some(spec) => soft("hover glow", HoverGlow::install(&document, spec)),
		None => None,
	};
	let filter = match &config.filter {
		Some(spec) => soft("project filter", ProjectFilter::install(&document, spec)),
		None => None,
	};
	let perf = if config.performance {
		// Missing support is expected on some browsers, not worth a warning.
		PerfMonitor::install()
			.inspect_err(|e| log::debug!("portfolio-fx: performance monitor skipped: {}", e))
			.ok()
	} else {
		None
	};

	info!(
		"portfolio-fx: {} reveal collection(s) active",
		reveals.len()
	);
	Ok(Installed {
		_reveals: reveals,
		_scroll: scroll,
		_nav: nav,
		_hover: hover,
		_filter: filter,
		_perf: perf,
	})
}

/// Main application component.
/// Loads configuration from the DOM, injects keyframes, mounts the particle
/// overlay and installs the effects on the existing markup.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let installed = StoredValue::new_local(None::<Installed>);

	let effects_config = config.clone();
	Effect::new(move |_| match install(&effects_config) {
		Ok(handles) => installed.set_value(Some(handles)),
		Err(e) => warn!("portfolio-fx: effects disabled: {}", e),
	});

	on_cleanup(move || {
		installed.try_update_value(|i| *i = None);
	});

	let field = config.particles;
	let enabled = field.enabled;
	let overlay = enabled.then(move || view! { <ParticleOverlay field=field /> });

	view! {
		<Style id="portfolio-fx-keyframes">{KEYFRAMES}</Style>
		{overlay}
	}
}
