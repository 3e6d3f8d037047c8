//! End-to-end interception against the in-memory host.

use pretty_assertions::assert_eq;
use tapestry_loom::memory::{MemoryHost, MemoryItem};
use tapestry_loom::{DyeColor, InterfaceId, InterfaceKind, InventoryAction, Layer, LoomConfig, LoomPlugin, LoomSlot, PatternType};

const INPUT: usize = 0;
const DYE: usize = 1;
const OUTPUT: usize = 3;

fn base_layers(n: usize) -> Vec<Layer> {
	let colors = [DyeColor::Red, DyeColor::Orange, DyeColor::Yellow, DyeColor::Lime];
	(0..n).map(|i| Layer::new(colors[i % colors.len()], PatternType::Base)).collect()
}

struct Fixture {
	host: MemoryHost,
	plugin: LoomPlugin,
	loom: InterfaceId,
}

impl Fixture {
	fn new() -> Self {
		let mut host = MemoryHost::new();
		let loom = host.open_loom();
		Self {
			host,
			plugin: LoomPlugin::enable(LoomConfig::default()).unwrap(),
			loom,
		}
	}

	fn place(&mut self, raw_slot: usize, item: MemoryItem) {
		self.host.set_cursor(Some(item));
		self.click(raw_slot, InventoryAction::PlaceAll);
	}

	fn click(&mut self, raw_slot: usize, action: InventoryAction) {
		self.host.click(&mut self.plugin, self.loom, raw_slot, action).unwrap();
	}

	fn tick(&mut self) {
		self.host.tick(&mut self.plugin);
	}

	fn input(&self) -> &MemoryItem {
		self.host.item(self.loom, LoomSlot::Input).unwrap()
	}

	fn has_record(&self, item: &MemoryItem) -> bool {
		item.has_record(&self.plugin.config().record_key)
	}
}

#[test]
fn eight_layer_banner_gains_a_ninth() {
	let mut fx = Fixture::new();
	let original = base_layers(8);
	fx.place(INPUT, MemoryItem::banner(DyeColor::White, original.clone()));
	fx.place(DYE, MemoryItem::dye(DyeColor::Blue).with_amount(2));
	fx.tick();

	assert_eq!(fx.input().visible_layers(), &original[..5]);
	assert!(fx.has_record(fx.input()));

	fx.host.select(fx.loom, Some(PatternType::Cross)).unwrap();
	let output = fx.host.item(fx.loom, LoomSlot::Output).unwrap();
	assert_eq!(output.visible_layers().len(), 6);

	fx.click(OUTPUT, InventoryAction::PickupAll);
	let finished = fx.host.cursor().unwrap();
	let mut expected = original.clone();
	expected.push(Layer::new(DyeColor::Blue, PatternType::Cross));
	assert_eq!(finished.visible_layers(), expected.as_slice());
	assert_eq!(
		finished.lore_lines().unwrap(),
		["§7Yellow Base", "§7Lime Base", "§7Blue Saltire"]
	);
	assert!(!fx.has_record(finished));
	assert!(fx.host.item(fx.loom, LoomSlot::Input).is_none());
	assert_eq!(fx.host.item(fx.loom, LoomSlot::Dye).unwrap().amount(), 1);
}

#[test]
fn removed_input_keeps_appended_layer() {
	let mut fx = Fixture::new();
	fx.place(INPUT, MemoryItem::banner(DyeColor::White, base_layers(8)));
	fx.tick();
	fx.host
		.item_mut(fx.loom, LoomSlot::Input)
		.unwrap()
		.push_layer(Layer::new(DyeColor::Black, PatternType::Skull));

	fx.click(INPUT, InventoryAction::PickupAll);
	let banner = fx.host.cursor().unwrap();
	assert_eq!(banner.visible_layers().len(), 9);
	assert_eq!(banner.visible_layers()[8], Layer::new(DyeColor::Black, PatternType::Skull));
	assert_eq!(banner.lore_lines().unwrap().len(), 3);
	assert!(!fx.has_record(banner));
}

#[test]
fn small_banner_round_trips_untouched() {
	let mut fx = Fixture::new();
	let original = MemoryItem::banner(DyeColor::White, base_layers(3));
	fx.place(INPUT, original.clone());
	fx.tick();
	assert!(!fx.has_record(fx.input()));

	fx.click(INPUT, InventoryAction::PickupAll);
	assert_eq!(fx.host.cursor(), Some(&original));
}

#[test]
fn closing_restores_input() {
	let mut fx = Fixture::new();
	let original = MemoryItem::banner(DyeColor::White, base_layers(10));
	fx.place(INPUT, original.clone());
	fx.tick();
	assert_eq!(fx.input().visible_layers().len(), 5);

	fx.host.close(&mut fx.plugin, fx.loom).unwrap();
	let returned = &fx.host.inventory()[0];
	assert_eq!(returned.visible_layers(), original.visible_layers());
	assert_eq!(returned.lore_lines().unwrap().len(), 4);
	assert!(!fx.has_record(returned));
}

#[test]
fn check_after_close_is_ignored() {
	let mut fx = Fixture::new();
	fx.place(INPUT, MemoryItem::banner(DyeColor::White, base_layers(8)));
	fx.host.close(&mut fx.plugin, fx.loom).unwrap();
	assert_eq!(fx.plugin.controller().pending_checks(), 1);

	fx.tick();
	assert_eq!(fx.plugin.controller().pending_checks(), 0);
	assert_eq!(fx.host.inventory()[0].visible_layers().len(), 8);
}

#[test]
fn other_interfaces_are_not_touched() {
	let mut fx = Fixture::new();
	let anvil = fx.host.open(InterfaceKind::Anvil);
	let banner = MemoryItem::banner(DyeColor::White, base_layers(8));
	fx.host.set_item(anvil, LoomSlot::Input, Some(banner.clone())).unwrap();

	fx.host.click(&mut fx.plugin, anvil, INPUT, InventoryAction::SwapWithCursor).unwrap();
	fx.tick();
	assert_eq!(fx.plugin.controller().pending_checks(), 0);
	assert_eq!(fx.host.cursor(), Some(&banner));
}

#[test]
fn sixteen_layer_cap_holds_over_repeated_crafting() {
	let mut fx = Fixture::new();
	fx.place(INPUT, MemoryItem::banner(DyeColor::White, base_layers(14)));
	fx.place(DYE, MemoryItem::dye(DyeColor::Purple).with_amount(8));
	fx.host.select(fx.loom, Some(PatternType::Flower)).unwrap();

	for _ in 0..4 {
		fx.tick();
		fx.click(OUTPUT, InventoryAction::PickupAll);
		let crafted = fx.host.set_cursor(None).unwrap();
		fx.place(INPUT, crafted);
	}
	fx.click(INPUT, InventoryAction::PickupAll);

	let banner = fx.host.cursor().unwrap();
	assert_eq!(banner.visible_layers().len(), 16);
	assert_eq!(banner.lore_lines().unwrap().len(), 10);
	assert!(!fx.has_record(banner));
}
