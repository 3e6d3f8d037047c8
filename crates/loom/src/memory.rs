//! In-memory host.
//!
//! Imitates just enough of a game server's loom to exercise the interception:
//! a cursor, a player inventory, looms with four slots, and an output preview
//! recomputed from the input, dye and selected pattern. Events are delivered to
//! the listener before the click they describe is applied, and the preview is
//! recomputed after listeners have seen the tick.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tapestry_primitives::{DyeColor, Layer, PatternType};
use thiserror::Error;

use crate::config::RecordKey;
use crate::event::{ContentChanged, InterfaceClosed, InterfaceId, InterfaceKind, InventoryAction, LoomSlot};
use crate::host::{LayeredItem, LoomHost, LoomInventory, LoomListener};

/// Visible layers the loom accepts on its input before refusing to decorate.
pub const HOST_LAYER_LIMIT: usize = 6;

/// Errors from driving the in-memory host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostError {
	/// The interface is not open.
	#[error("interface {0:?} is not open")]
	UnknownInterface(InterfaceId),
}

/// Item material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
	/// A banner with the given base color.
	Banner(DyeColor),
	/// A dye.
	Dye(DyeColor),
	/// Anything else.
	Other(String),
}

/// An item stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryItem {
	kind: ItemKind,
	amount: u32,
	layers: Vec<Layer>,
	lore: Option<Vec<String>>,
	records: BTreeMap<String, Vec<u8>>,
}

impl MemoryItem {
	fn new(kind: ItemKind) -> Self {
		Self {
			kind,
			amount: 1,
			layers: Vec::new(),
			lore: None,
			records: BTreeMap::new(),
		}
	}

	/// A single banner carrying `layers`.
	pub fn banner(base: DyeColor, layers: impl IntoIterator<Item = Layer>) -> Self {
		let mut item = Self::new(ItemKind::Banner(base));
		item.layers = layers.into_iter().collect();
		item
	}

	/// A single dye.
	pub fn dye(color: DyeColor) -> Self {
		Self::new(ItemKind::Dye(color))
	}

	/// A single item of some other material.
	pub fn other(name: impl Into<String>) -> Self {
		Self::new(ItemKind::Other(name.into()))
	}

	/// Sets the stack size (at least one).
	pub fn with_amount(mut self, amount: u32) -> Self {
		self.amount = amount.max(1);
		self
	}

	/// Sets the lore.
	pub fn with_lore(mut self, lore: Vec<String>) -> Self {
		self.lore = Some(lore);
		self
	}

	pub fn kind(&self) -> &ItemKind {
		&self.kind
	}

	pub fn amount(&self) -> u32 {
		self.amount
	}

	/// Visible layers, borrowed.
	pub fn visible_layers(&self) -> &[Layer] {
		&self.layers
	}

	/// Lore, borrowed.
	pub fn lore_lines(&self) -> Option<&[String]> {
		self.lore.as_deref()
	}

	/// Raw side-channel entry, borrowed.
	pub fn record_bytes(&self, key: &RecordKey) -> Option<&[u8]> {
		self.records.get(&key.to_string()).map(Vec::as_slice)
	}

	pub fn has_record(&self, key: &RecordKey) -> bool {
		self.records.contains_key(&key.to_string())
	}

	/// Appends a layer the way the loom does when it decorates.
	pub fn push_layer(&mut self, layer: Layer) {
		self.layers.push(layer);
	}
}

impl LayeredItem for MemoryItem {
	fn is_banner(&self) -> bool {
		matches!(self.kind, ItemKind::Banner(_))
	}

	fn layers(&self) -> Vec<Layer> {
		self.layers.clone()
	}

	fn set_layers(&mut self, layers: Vec<Layer>) {
		self.layers = layers;
	}

	fn lore(&self) -> Option<Vec<String>> {
		self.lore.clone()
	}

	fn set_lore(&mut self, lore: Option<Vec<String>>) {
		self.lore = lore;
	}

	fn record(&self, key: &RecordKey) -> Option<Vec<u8>> {
		self.records.get(&key.to_string()).cloned()
	}

	fn set_record(&mut self, key: &RecordKey, bytes: Vec<u8>) {
		self.records.insert(key.to_string(), bytes);
	}

	fn remove_record(&mut self, key: &RecordKey) -> bool {
		self.records.remove(&key.to_string()).is_some()
	}
}

/// Splits `n` items off the stack in `slot`, emptying it when `n` covers the
/// whole stack.
fn split_stack(slot: &mut Option<MemoryItem>, n: u32) -> Option<MemoryItem> {
	let item = slot.as_mut()?;
	if n >= item.amount {
		return slot.take();
	}
	item.amount -= n;
	let mut part = item.clone();
	part.amount = n;
	Some(part)
}

/// One open view with four slots.
#[derive(Debug, Clone)]
pub struct MemoryLoom {
	kind: InterfaceKind,
	slots: [Option<MemoryItem>; 4],
	selected: Option<PatternType>,
	layer_limit: usize,
}

impl MemoryLoom {
	fn new(kind: InterfaceKind, layer_limit: usize) -> Self {
		Self {
			kind,
			slots: Default::default(),
			selected: None,
			layer_limit,
		}
	}

	/// Borrows a slot's item.
	pub fn item(&self, slot: LoomSlot) -> Option<&MemoryItem> {
		self.slots[slot.raw()].as_ref()
	}

	/// The pattern chosen in the loom's pattern list.
	pub fn selected(&self) -> Option<PatternType> {
		self.selected
	}

	fn preview(&self) -> Option<MemoryItem> {
		if self.kind != InterfaceKind::Loom {
			return None;
		}
		let input = self.item(LoomSlot::Input).filter(|i| i.is_banner())?;
		let &ItemKind::Dye(color) = &self.item(LoomSlot::Dye)?.kind else {
			return None;
		};
		let pattern = self.selected?;
		if input.layers.len() >= self.layer_limit {
			return None;
		}

		let mut output = input.clone();
		output.amount = 1;
		output.layers.push(Layer::new(color, pattern));
		Some(output)
	}

	fn refresh_output(&mut self) {
		self.slots[LoomSlot::Output.raw()] = self.preview();
	}

	fn take(&mut self, slot: LoomSlot, n: u32) -> Option<MemoryItem> {
		let taken = split_stack(&mut self.slots[slot.raw()], n)?;
		if slot == LoomSlot::Output {
			split_stack(&mut self.slots[LoomSlot::Input.raw()], 1);
			split_stack(&mut self.slots[LoomSlot::Dye.raw()], 1);
		}
		Some(taken)
	}
}

impl LoomInventory for MemoryLoom {
	type Item = MemoryItem;

	fn kind(&self) -> InterfaceKind {
		self.kind
	}

	fn item_mut(&mut self, slot: LoomSlot) -> Option<&mut MemoryItem> {
		self.slots[slot.raw()].as_mut()
	}
}

/// The in-memory host: open views, a cursor and a player inventory.
#[derive(Debug)]
pub struct MemoryHost {
	next_id: u64,
	layer_limit: usize,
	interfaces: BTreeMap<InterfaceId, MemoryLoom>,
	cursor: Option<MemoryItem>,
	inventory: Vec<MemoryItem>,
	dropped: Vec<MemoryItem>,
}

impl Default for MemoryHost {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryHost {
	/// Creates a host whose looms refuse inputs with [`HOST_LAYER_LIMIT`] or
	/// more visible layers.
	pub fn new() -> Self {
		Self::with_layer_limit(HOST_LAYER_LIMIT)
	}

	pub fn with_layer_limit(layer_limit: usize) -> Self {
		Self {
			next_id: 0,
			layer_limit,
			interfaces: BTreeMap::new(),
			cursor: None,
			inventory: Vec::new(),
			dropped: Vec::new(),
		}
	}

	/// Opens a view of the given kind.
	pub fn open(&mut self, kind: InterfaceKind) -> InterfaceId {
		self.next_id += 1;
		let id = InterfaceId(self.next_id);
		self.interfaces.insert(id, MemoryLoom::new(kind, self.layer_limit));
		id
	}

	/// Opens a loom.
	pub fn open_loom(&mut self) -> InterfaceId {
		self.open(InterfaceKind::Loom)
	}

	pub fn is_open(&self, id: InterfaceId) -> bool {
		self.interfaces.contains_key(&id)
	}

	pub fn loom(&self, id: InterfaceId) -> Option<&MemoryLoom> {
		self.interfaces.get(&id)
	}

	/// Borrows an item in an open view.
	pub fn item(&self, id: InterfaceId, slot: LoomSlot) -> Option<&MemoryItem> {
		self.loom(id)?.item(slot)
	}

	/// Mutably borrows an item in an open view, bypassing events.
	pub fn item_mut(&mut self, id: InterfaceId, slot: LoomSlot) -> Option<&mut MemoryItem> {
		self.interfaces.get_mut(&id)?.slots[slot.raw()].as_mut()
	}

	/// Puts an item straight into a slot without firing events. Returns the
	/// previous occupant.
	pub fn set_item(&mut self, id: InterfaceId, slot: LoomSlot, item: Option<MemoryItem>) -> Result<Option<MemoryItem>, HostError> {
		let loom = self.interfaces.get_mut(&id).ok_or(HostError::UnknownInterface(id))?;
		let previous = std::mem::replace(&mut loom.slots[slot.raw()], item);
		loom.refresh_output();
		Ok(previous)
	}

	/// Chooses a pattern in the loom's pattern list.
	pub fn select(&mut self, id: InterfaceId, pattern: Option<PatternType>) -> Result<(), HostError> {
		let loom = self.interfaces.get_mut(&id).ok_or(HostError::UnknownInterface(id))?;
		loom.selected = pattern;
		loom.refresh_output();
		Ok(())
	}

	pub fn cursor(&self) -> Option<&MemoryItem> {
		self.cursor.as_ref()
	}

	pub fn set_cursor(&mut self, item: Option<MemoryItem>) -> Option<MemoryItem> {
		std::mem::replace(&mut self.cursor, item)
	}

	/// Items moved or returned to the player's inventory, oldest first.
	pub fn inventory(&self) -> &[MemoryItem] {
		&self.inventory
	}

	/// Items dropped on the ground, oldest first.
	pub fn dropped(&self) -> &[MemoryItem] {
		&self.dropped
	}

	/// Fires a click event, then applies the click.
	pub fn click<L>(&mut self, listener: &mut L, id: InterfaceId, raw_slot: usize, action: InventoryAction) -> Result<(), HostError>
	where
		L: LoomListener<Self> + ?Sized,
	{
		let top_kind = self.loom(id).ok_or(HostError::UnknownInterface(id))?.kind;
		let event = ContentChanged {
			interface: id,
			top_kind,
			raw_slot,
			action,
		};
		listener.on_content_changed(self, &event);
		self.apply_click(id, raw_slot, action);
		Ok(())
	}

	/// Fires a close event, then returns the view's items to the inventory.
	pub fn close<L>(&mut self, listener: &mut L, id: InterfaceId) -> Result<(), HostError>
	where
		L: LoomListener<Self> + ?Sized,
	{
		let top_kind = self.loom(id).ok_or(HostError::UnknownInterface(id))?.kind;
		listener.on_interface_closed(self, &InterfaceClosed { interface: id, top_kind });

		let Some(mut loom) = self.interfaces.remove(&id) else {
			return Ok(());
		};
		for slot in [LoomSlot::Input, LoomSlot::Dye, LoomSlot::Pattern] {
			if let Some(item) = loom.slots[slot.raw()].take() {
				self.inventory.push(item);
			}
		}
		if let Some(item) = self.cursor.take() {
			self.inventory.push(item);
		}
		Ok(())
	}

	/// Ends one run-loop turn: listeners first, then every loom recomputes
	/// its output.
	pub fn tick<L>(&mut self, listener: &mut L)
	where
		L: LoomListener<Self> + ?Sized,
	{
		listener.on_tick(self);
		for loom in self.interfaces.values_mut() {
			loom.refresh_output();
		}
	}

	fn apply_click(&mut self, id: InterfaceId, raw_slot: usize, action: InventoryAction) {
		let Some(slot) = LoomSlot::from_raw(raw_slot) else {
			return;
		};
		let Some(loom) = self.interfaces.get_mut(&id) else {
			return;
		};
		let idx = slot.raw();
		let cursor_empty = self.cursor.is_none();

		match action {
			InventoryAction::PickupAll | InventoryAction::PickupSome if cursor_empty => {
				self.cursor = loom.take(slot, u32::MAX);
			}
			InventoryAction::PickupHalf if cursor_empty => {
				let half = loom.item(slot).map_or(0, |i| i.amount.div_ceil(2));
				self.cursor = loom.take(slot, half);
			}
			InventoryAction::PickupOne if cursor_empty => {
				self.cursor = loom.take(slot, 1);
			}
			InventoryAction::PlaceAll | InventoryAction::PlaceSome if slot != LoomSlot::Output && loom.slots[idx].is_none() => {
				loom.slots[idx] = self.cursor.take();
			}
			InventoryAction::PlaceOne if slot != LoomSlot::Output && loom.slots[idx].is_none() => {
				loom.slots[idx] = split_stack(&mut self.cursor, 1);
			}
			InventoryAction::SwapWithCursor if slot != LoomSlot::Output => {
				std::mem::swap(&mut loom.slots[idx], &mut self.cursor);
			}
			InventoryAction::DropAllSlot => {
				self.dropped.extend(loom.take(slot, u32::MAX));
			}
			InventoryAction::DropOneSlot => {
				self.dropped.extend(loom.take(slot, 1));
			}
			InventoryAction::MoveToOtherInventory => {
				self.inventory.extend(loom.take(slot, u32::MAX));
			}
			_ => {}
		}
		loom.refresh_output();
	}
}

impl LoomHost for MemoryHost {
	type Inventory = MemoryLoom;

	fn inventory_mut(&mut self, id: InterfaceId) -> Option<&mut MemoryLoom> {
		self.interfaces.get_mut(&id)
	}
}

#[cfg(test)]
mod tests;
