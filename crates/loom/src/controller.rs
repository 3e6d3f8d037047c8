//! Event routing for the loom interception.
//!
//! The controller reacts to two host events:
//!
//! * **Content changed.** Picking up the finished banner from the output
//!   restores the output item immediately. Every other click schedules a
//!   check of the input slot `defer_ticks` turns later, once the host has
//!   recomputed the loom; the check hides overflow layers. A click that takes
//!   the banner out of the input slot additionally restores it right away,
//!   before the host moves it.
//! * **Interface closed.** Restores the input item if one is present.
//!
//! A check whose interface has closed by the time it runs does nothing.
//! A check that runs before the host finished recomputing simply misses; it is
//! not retried.

use tapestry_worker::DeferredQueue;
use tracing::{debug, trace};

use crate::config::LoomConfig;
use crate::event::{ContentChanged, InterfaceClosed, InterfaceId, InterfaceKind, LoomEvent, LoomSlot};
use crate::host::{LoomHost, LoomInventory, LoomListener};
use crate::overflow::{self, HideOutcome, RestoreOutcome};

/// Pending inspection of a loom's input slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InputCheck {
	interface: InterfaceId,
}

/// Drives hide/restore from host events.
#[derive(Debug)]
pub struct InterceptionController {
	config: LoomConfig,
	pending: DeferredQueue<InputCheck>,
}

impl InterceptionController {
	/// Creates a controller. The config is assumed to be validated.
	pub fn new(config: LoomConfig) -> Self {
		Self {
			config,
			pending: DeferredQueue::new(),
		}
	}

	pub fn config(&self) -> &LoomConfig {
		&self.config
	}

	/// Number of input checks waiting for a later tick.
	pub fn pending_checks(&self) -> usize {
		self.pending.len()
	}

	/// Drops every pending input check. Returns how many were dropped.
	pub fn discard_pending(&mut self) -> usize {
		self.pending.clear()
	}

	/// Routes one event. Returns the outcome of any immediate restoration.
	pub fn handle<H: LoomHost + ?Sized>(&mut self, host: &mut H, event: &LoomEvent) -> Option<RestoreOutcome> {
		match event {
			LoomEvent::ContentChanged(e) => self.content_changed(host, e),
			LoomEvent::InterfaceClosed(e) => self.interface_closed(host, e),
		}
	}

	/// Handles a click in an open view.
	pub fn content_changed<H: LoomHost + ?Sized>(&mut self, host: &mut H, event: &ContentChanged) -> Option<RestoreOutcome> {
		if event.top_kind != InterfaceKind::Loom {
			trace!(kind = ?event.top_kind, "loom.ignore.not_loom");
			return None;
		}

		let mut restored = None;
		if event.is_output_pickup() {
			restored = self.restore_slot(host, event.interface, LoomSlot::Output);
		} else {
			self.pending.schedule(
				self.config.defer_ticks,
				InputCheck {
					interface: event.interface,
				},
			);
		}

		if event.is_input_removal() {
			restored = self.restore_slot(host, event.interface, LoomSlot::Input);
		}
		restored
	}

	/// Handles a closing view.
	pub fn interface_closed<H: LoomHost + ?Sized>(&mut self, host: &mut H, event: &InterfaceClosed) -> Option<RestoreOutcome> {
		if event.top_kind != InterfaceKind::Loom {
			trace!(kind = ?event.top_kind, "loom.ignore.not_loom");
			return None;
		}
		self.restore_slot(host, event.interface, LoomSlot::Input)
	}

	/// Advances one tick and runs the input checks that are now due.
	///
	/// Returns one outcome per check that found a banner in an open loom.
	pub fn tick<H: LoomHost + ?Sized>(&mut self, host: &mut H) -> Vec<HideOutcome> {
		let due = self.pending.advance();
		let mut outcomes = Vec::with_capacity(due.len());
		for check in due {
			let Some(inventory) = host.inventory_mut(check.interface) else {
				trace!(interface = check.interface.0, "loom.check.stale");
				continue;
			};
			if inventory.kind() != InterfaceKind::Loom {
				continue;
			}
			let Some(item) = inventory.item_mut(LoomSlot::Input) else {
				continue;
			};

			let outcome = overflow::hide(item, &self.config);
			if let HideOutcome::Hidden { stored, visible } = outcome {
				debug!(interface = check.interface.0, stored, visible, "loom.hide");
			}
			outcomes.push(outcome);
		}
		outcomes
	}

	fn restore_slot<H: LoomHost + ?Sized>(&self, host: &mut H, interface: InterfaceId, slot: LoomSlot) -> Option<RestoreOutcome> {
		let inventory = host.inventory_mut(interface)?;
		if inventory.kind() != InterfaceKind::Loom {
			return None;
		}
		let item = inventory.item_mut(slot)?;

		let outcome = overflow::restore(item, &self.config);
		if let RestoreOutcome::Restored(summary) = &outcome {
			debug!(
				interface = interface.0,
				?slot,
				stored = summary.stored,
				appended = summary.appended,
				dropped = summary.dropped,
				layers = summary.layers,
				lore = summary.lore_lines,
				"loom.restore"
			);
		}
		Some(outcome)
	}
}

impl<H: LoomHost + ?Sized> LoomListener<H> for InterceptionController {
	fn on_content_changed(&mut self, host: &mut H, event: &ContentChanged) {
		self.content_changed(host, event);
	}

	fn on_interface_closed(&mut self, host: &mut H, event: &InterfaceClosed) {
		self.interface_closed(host, event);
	}

	fn on_tick(&mut self, host: &mut H) {
		self.tick(host);
	}
}

#[cfg(test)]
mod tests;
