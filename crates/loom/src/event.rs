//! Event descriptors delivered by the host.
//!
//! Events are plain values. The host builds one per callback and hands it to a
//! [`LoomListener`](crate::host::LoomListener) before it applies the action
//! the event describes.

use serde::{Deserialize, Serialize};

/// Host-assigned identity of one open interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InterfaceId(pub u64);

/// Kind of the top inventory of an open view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceKind {
	Loom,
	Crafting,
	Anvil,
	Chest,
	Player,
	Other,
}

/// Slots of the loom's top inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoomSlot {
	/// The banner being decorated.
	Input,
	/// Dye for the next layer.
	Dye,
	/// Optional banner pattern item.
	Pattern,
	/// Preview of the decorated banner.
	Output,
}

impl LoomSlot {
	/// All slots in raw order.
	pub const ALL: [Self; 4] = [Self::Input, Self::Dye, Self::Pattern, Self::Output];

	/// Returns the raw slot index in the loom view.
	pub const fn raw(self) -> usize {
		match self {
			Self::Input => 0,
			Self::Dye => 1,
			Self::Pattern => 2,
			Self::Output => 3,
		}
	}

	/// Maps a raw view slot to a loom slot. Indices past the loom belong to
	/// the player's inventory.
	pub const fn from_raw(raw: usize) -> Option<Self> {
		match raw {
			0 => Some(Self::Input),
			1 => Some(Self::Dye),
			2 => Some(Self::Pattern),
			3 => Some(Self::Output),
			_ => None,
		}
	}
}

/// What a click is about to do to the clicked slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryAction {
	Nothing,
	PickupAll,
	PickupSome,
	PickupHalf,
	PickupOne,
	PlaceAll,
	PlaceSome,
	PlaceOne,
	SwapWithCursor,
	DropAllCursor,
	DropOneCursor,
	DropAllSlot,
	DropOneSlot,
	MoveToOtherInventory,
	HotbarMoveAndReadd,
	HotbarSwap,
	CloneStack,
	CollectToCursor,
	Unknown,
}

impl InventoryAction {
	/// Returns `true` if the action takes some or all of the clicked slot's
	/// item out of the slot.
	pub const fn is_slot_removal(self) -> bool {
		matches!(
			self,
			Self::PickupAll
				| Self::PickupHalf
				| Self::PickupOne
				| Self::PickupSome
				| Self::SwapWithCursor
				| Self::DropAllSlot
				| Self::DropOneSlot
				| Self::MoveToOtherInventory
		)
	}
}

/// A click changed, or is about to change, the contents of an open view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentChanged {
	/// The view's top interface.
	pub interface: InterfaceId,
	/// Kind of the top interface.
	pub top_kind: InterfaceKind,
	/// Raw slot index within the view.
	pub raw_slot: usize,
	/// What the click does.
	pub action: InventoryAction,
}

impl ContentChanged {
	/// The clicked loom slot, if the click landed inside the loom.
	pub const fn slot(&self) -> Option<LoomSlot> {
		LoomSlot::from_raw(self.raw_slot)
	}

	/// Returns `true` for taking the whole finished banner from the output.
	pub fn is_output_pickup(&self) -> bool {
		self.slot() == Some(LoomSlot::Output) && self.action == InventoryAction::PickupAll
	}

	/// Returns `true` for any action that takes the banner out of the input.
	pub fn is_input_removal(&self) -> bool {
		self.slot() == Some(LoomSlot::Input) && self.action.is_slot_removal()
	}
}

/// A view is closing; its slots still hold their items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceClosed {
	/// The view's top interface.
	pub interface: InterfaceId,
	/// Kind of the top interface.
	pub top_kind: InterfaceKind,
}

/// Any event the loom interception reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoomEvent {
	ContentChanged(ContentChanged),
	InterfaceClosed(InterfaceClosed),
}

impl LoomEvent {
	/// Returns the interface the event concerns.
	pub const fn interface(&self) -> InterfaceId {
		match self {
			Self::ContentChanged(e) => e.interface,
			Self::InterfaceClosed(e) => e.interface,
		}
	}

	/// Returns the kind of the event's top interface.
	pub const fn top_kind(&self) -> InterfaceKind {
		match self {
			Self::ContentChanged(e) => e.top_kind,
			Self::InterfaceClosed(e) => e.top_kind,
		}
	}
}

impl From<ContentChanged> for LoomEvent {
	fn from(event: ContentChanged) -> Self {
		Self::ContentChanged(event)
	}
}

impl From<InterfaceClosed> for LoomEvent {
	fn from(event: InterfaceClosed) -> Self {
		Self::InterfaceClosed(event)
	}
}
