//! Accessor contracts the embedding host implements.
//!
//! The interception never owns items. It reads and rewrites them through these
//! traits while a handler runs, and holds nothing across handlers except the
//! interface ids of pending checks.

use tapestry_primitives::Layer;

use crate::config::RecordKey;
use crate::event::{ContentChanged, InterfaceClosed, InterfaceId, InterfaceKind, LoomEvent, LoomSlot};

/// An item that can carry banner layers, lore and side-channel records.
///
/// Getters return owned snapshots; setters replace the whole value.
pub trait LayeredItem {
	/// Returns `true` for any banner item, whatever its base color.
	fn is_banner(&self) -> bool;

	/// The visible layers, bottom first.
	fn layers(&self) -> Vec<Layer>;

	/// Replaces the visible layers.
	fn set_layers(&mut self, layers: Vec<Layer>);

	/// Descriptive text lines, if any.
	fn lore(&self) -> Option<Vec<String>>;

	/// Replaces or clears the descriptive text.
	fn set_lore(&mut self, lore: Option<Vec<String>>);

	/// Reads a side-channel entry.
	fn record(&self, key: &RecordKey) -> Option<Vec<u8>>;

	/// Writes a side-channel entry, replacing any previous value.
	fn set_record(&mut self, key: &RecordKey, bytes: Vec<u8>);

	/// Deletes a side-channel entry. Returns `true` if it existed.
	fn remove_record(&mut self, key: &RecordKey) -> bool;
}

/// The top inventory of an open view.
pub trait LoomInventory {
	/// Item type stored in the slots.
	type Item: LayeredItem;

	/// Kind of this inventory.
	fn kind(&self) -> InterfaceKind;

	/// Mutable access to a slot's item; `None` for an empty slot.
	fn item_mut(&mut self, slot: LoomSlot) -> Option<&mut Self::Item>;
}

/// Lookup of open interfaces.
pub trait LoomHost {
	/// Inventory type of open interfaces.
	type Inventory: LoomInventory;

	/// Returns the interface if it is still open.
	fn inventory_mut(&mut self, id: InterfaceId) -> Option<&mut Self::Inventory>;
}

/// Subscriber to loom events.
///
/// The host calls the event methods before applying the action they describe
/// and calls [`on_tick`](Self::on_tick) once per run-loop turn.
pub trait LoomListener<H: ?Sized> {
	/// A click in an open view.
	fn on_content_changed(&mut self, host: &mut H, event: &ContentChanged);

	/// A view is closing.
	fn on_interface_closed(&mut self, host: &mut H, event: &InterfaceClosed);

	/// One run-loop turn elapsed.
	fn on_tick(&mut self, host: &mut H);

	/// Routes an event to the matching method.
	fn dispatch(&mut self, host: &mut H, event: &LoomEvent) {
		match event {
			LoomEvent::ContentChanged(e) => self.on_content_changed(host, e),
			LoomEvent::InterfaceClosed(e) => self.on_interface_closed(host, e),
		}
	}
}
