//! Platform-independent reveal sequencing.
//!
//! A [`RevealCollection`] tracks which of its targets have already fired and
//! turns a batch of visibility notifications into [`Activation`]s. It knows
//! nothing about the DOM: targets are any comparable handle `K`, and effects
//! are applied through a [`Stage`]. Browser code feeds it intersection
//! observer entries; tests feed it hand-written batches.

use super::transition::Transition;

/// Whether a target's transition has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
	/// Waiting to become visible.
	Pending,
	/// Terminal.
	Fired,
}

/// One element watched by a collection.
#[derive(Clone, Debug)]
pub struct RevealTarget<K> {
	/// The element, or whatever stands in for it.
	pub handle: K,
	/// Extra delay before this target's transition starts.
	pub delay_ms: u32,
	state: TriggerState,
}

impl<K> RevealTarget<K> {
	/// Whether the target has fired.
	pub fn state(&self) -> TriggerState {
		self.state
	}
}

/// A single visibility notification entry.
#[derive(Clone, Debug)]
pub struct Visibility<K> {
	/// The element the entry is about.
	pub target: K,
	/// Fraction of the target inside the viewport, 0.0 to 1.0.
	pub ratio: f64,
	/// Whether any part of the target is inside the viewport.
	pub intersecting: bool,
}

/// A target that just fired, with the delay its transition should wait.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation<K> {
	/// The element that fired.
	pub target: K,
	/// Transition of its collection.
	pub transition: Transition,
	/// Per-target delay plus stagger.
	pub delay_ms: u32,
}

/// Applies transitions to targets.
pub trait Stage<K> {
	/// Put a newly registered target into its hidden state.
	fn prepare(&mut self, target: &K, transition: &Transition);
	/// Run (or schedule) a fired target's transition.
	fn activate(&mut self, activation: Activation<K>);
}

/// Targets sharing a threshold and a transition.
#[derive(Clone, Debug)]
pub struct RevealCollection<K> {
	name: String,
	threshold: f64,
	transition: Transition,
	targets: Vec<RevealTarget<K>>,
}

impl<K: Clone + PartialEq> RevealCollection<K> {
	/// `threshold` is clamped into 0.0..=1.0.
	pub fn new(name: impl Into<String>, threshold: f64, transition: Transition) -> Self {
		let name = name.into();
		let clamped = if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) };
		if clamped != threshold {
			log::warn!(
				"portfolio-fx: reveal `{}` threshold {} clamped to {}",
				name,
				threshold,
				clamped
			);
		}
		Self {
			name,
			threshold: clamped,
			transition,
			targets: Vec::new(),
		}
	}

	/// Register a target. Re-registering a known handle is a no-op.
	pub fn observe(&mut self, handle: K, delay_ms: u32) -> bool {
		if self.position(&handle).is_some() {
			return false;
		}
		self.targets.push(RevealTarget {
			handle,
			delay_ms,
			state: TriggerState::Pending,
		});
		true
	}

	/// Register a target and put it into its hidden state.
	pub fn observe_on<S: Stage<K> + ?Sized>(&mut self, handle: K, delay_ms: u32, stage: &mut S) -> bool {
		if !self.observe(handle.clone(), delay_ms) {
			return false;
		}
		stage.prepare(&handle, &self.transition);
		true
	}

	/// Fire every pending target in `batch` that is visible enough, in batch order.
	///
	/// Stagger offsets count only the targets firing in this batch.
	pub fn notify(&mut self, batch: &[Visibility<K>]) -> Vec<Activation<K>> {
		let interval = self.transition.stagger_ms();
		let mut fired = Vec::new();

		for entry in batch {
			if !entry.intersecting || entry.ratio < self.threshold {
				continue;
			}
			let Some(idx) = self.position(&entry.target) else {
				continue;
			};
			let target = &mut self.targets[idx];
			if target.state == TriggerState::Fired {
				continue;
			}
			target.state = TriggerState::Fired;

			let stagger = interval.saturating_mul(fired.len() as u32);
			fired.push(Activation {
				target: target.handle.clone(),
				transition: self.transition.clone(),
				delay_ms: target.delay_ms.saturating_add(stagger),
			});
		}

		if !fired.is_empty() {
			log::debug!(
				"portfolio-fx: reveal `{}` fired {} ({} pending)",
				self.name,
				fired.len(),
				self.pending()
			);
		}
		fired
	}

	/// [`notify`](Self::notify), handing each activation to `stage`. Returns how many fired.
	pub fn dispatch<S: Stage<K> + ?Sized>(&mut self, batch: &[Visibility<K>], stage: &mut S) -> usize {
		let fired = self.notify(batch);
		let count = fired.len();
		for activation in fired {
			stage.activate(activation);
		}
		count
	}

	fn position(&self, handle: &K) -> Option<usize> {
		self.targets.iter().position(|t| t.handle == *handle)
	}

	/// Collection name, for logging.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Clamped visibility threshold.
	pub fn threshold(&self) -> f64 {
		self.threshold
	}

	/// Transition applied to every target.
	pub fn transition(&self) -> &Transition {
		&self.transition
	}

	/// Registered targets in registration order.
	pub fn targets(&self) -> &[RevealTarget<K>] {
		&self.targets
	}

	/// Number of registered targets.
	pub fn len(&self) -> usize {
		self.targets.len()
	}

	/// Whether no target is registered.
	pub fn is_empty(&self) -> bool {
		self.targets.is_empty()
	}

	/// Targets that have not fired yet.
	pub fn pending(&self) -> usize {
		self.targets
			.iter()
			.filter(|t| t.state == TriggerState::Pending)
			.count()
	}

	/// Whether every target has fired.
	pub fn is_done(&self) -> bool {
		self.pending() == 0
	}
}
