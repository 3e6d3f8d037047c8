use super::*;

/// Records what the input slot looked like when each event arrived.
#[derive(Default)]
struct Probe {
	seen: Vec<(&'static str, Option<u32>)>,
	ticks: usize,
}

impl LoomListener<MemoryHost> for Probe {
	fn on_content_changed(&mut self, host: &mut MemoryHost, event: &ContentChanged) {
		let amount = host.item(event.interface, LoomSlot::Input).map(MemoryItem::amount);
		self.seen.push(("click", amount));
	}

	fn on_interface_closed(&mut self, host: &mut MemoryHost, event: &InterfaceClosed) {
		let amount = host.item(event.interface, LoomSlot::Input).map(MemoryItem::amount);
		self.seen.push(("close", amount));
	}

	fn on_tick(&mut self, _host: &mut MemoryHost) {
		self.ticks += 1;
	}
}

fn red(pattern: PatternType) -> Layer {
	Layer::new(DyeColor::Red, pattern)
}

fn ready_loom(host: &mut MemoryHost, layers: usize) -> InterfaceId {
	let id = host.open_loom();
	let banner = MemoryItem::banner(DyeColor::White, (0..layers).map(|_| red(PatternType::Base)));
	host.set_item(id, LoomSlot::Input, Some(banner)).unwrap();
	host.set_item(id, LoomSlot::Dye, Some(MemoryItem::dye(DyeColor::Blue).with_amount(4))).unwrap();
	host.select(id, Some(PatternType::Cross)).unwrap();
	id
}

#[test]
fn output_previews_input_plus_selected_layer() {
	let mut host = MemoryHost::new();
	let id = ready_loom(&mut host, 2);

	let output = host.item(id, LoomSlot::Output).unwrap();
	assert_eq!(output.visible_layers().len(), 3);
	assert_eq!(output.visible_layers()[2], Layer::new(DyeColor::Blue, PatternType::Cross));
	assert_eq!(output.amount(), 1);
}

#[test]
fn full_input_gets_no_output() {
	let mut host = MemoryHost::new();
	let id = ready_loom(&mut host, HOST_LAYER_LIMIT);
	assert!(host.item(id, LoomSlot::Output).is_none());
}

#[test]
fn events_fire_before_the_click_applies() {
	let mut host = MemoryHost::new();
	let mut probe = Probe::default();
	let id = ready_loom(&mut host, 1);

	host.click(&mut probe, id, 0, InventoryAction::PickupAll).unwrap();
	assert_eq!(probe.seen, [("click", Some(1))]);
	assert!(host.item(id, LoomSlot::Input).is_none());
	assert!(host.cursor().is_some());
}

#[test]
fn taking_output_consumes_inputs() {
	let mut host = MemoryHost::new();
	let mut probe = Probe::default();
	let id = ready_loom(&mut host, 1);

	host.click(&mut probe, id, 3, InventoryAction::PickupAll).unwrap();
	assert_eq!(host.cursor().unwrap().visible_layers().len(), 2);
	assert!(host.item(id, LoomSlot::Input).is_none());
	assert_eq!(host.item(id, LoomSlot::Dye).unwrap().amount(), 3);
	assert!(host.item(id, LoomSlot::Output).is_none());
}

#[test]
fn pickup_half_splits_stack() {
	let mut host = MemoryHost::new();
	let mut probe = Probe::default();
	let id = host.open_loom();
	host.set_item(id, LoomSlot::Input, Some(MemoryItem::banner(DyeColor::Black, []).with_amount(3))).unwrap();

	host.click(&mut probe, id, 0, InventoryAction::PickupHalf).unwrap();
	assert_eq!(host.cursor().unwrap().amount(), 2);
	assert_eq!(host.item(id, LoomSlot::Input).unwrap().amount(), 1);
}

#[test]
fn place_and_move_and_drop() {
	let mut host = MemoryHost::new();
	let mut probe = Probe::default();
	let id = host.open_loom();

	host.set_cursor(Some(MemoryItem::banner(DyeColor::Lime, [])));
	host.click(&mut probe, id, 0, InventoryAction::PlaceAll).unwrap();
	assert!(host.cursor().is_none());
	assert!(host.item(id, LoomSlot::Input).is_some());

	host.click(&mut probe, id, 0, InventoryAction::MoveToOtherInventory).unwrap();
	assert_eq!(host.inventory().len(), 1);

	host.set_item(id, LoomSlot::Dye, Some(MemoryItem::dye(DyeColor::Red).with_amount(2))).unwrap();
	host.click(&mut probe, id, 1, InventoryAction::DropOneSlot).unwrap();
	assert_eq!(host.dropped().len(), 1);
	assert_eq!(host.item(id, LoomSlot::Dye).unwrap().amount(), 1);
}

#[test]
fn clicks_outside_the_loom_change_nothing() {
	let mut host = MemoryHost::new();
	let mut probe = Probe::default();
	let id = ready_loom(&mut host, 1);

	host.click(&mut probe, id, 17, InventoryAction::PickupAll).unwrap();
	assert_eq!(probe.seen.len(), 1);
	assert!(host.item(id, LoomSlot::Input).is_some());
	assert!(host.cursor().is_none());
}

#[test]
fn close_returns_items_after_event() {
	let mut host = MemoryHost::new();
	let mut probe = Probe::default();
	let id = ready_loom(&mut host, 1);

	host.close(&mut probe, id).unwrap();
	assert_eq!(probe.seen, [("close", Some(1))]);
	assert!(!host.is_open(id));
	assert_eq!(host.inventory().len(), 2);
	assert_eq!(host.close(&mut probe, id), Err(HostError::UnknownInterface(id)));
}

#[test]
fn tick_reaches_listener() {
	let mut host = MemoryHost::new();
	let mut probe = Probe::default();
	host.tick(&mut probe);
	host.tick(&mut probe);
	assert_eq!(probe.ticks, 2);
}

#[test]
fn records_are_keyed() {
	let key = RecordKey::default();
	let other: RecordKey = "other:key".parse().unwrap();
	let mut item = MemoryItem::banner(DyeColor::White, []);

	item.set_record(&key, vec![1, 2]);
	assert!(item.has_record(&key));
	assert!(!item.has_record(&other));
	assert_eq!(item.record_bytes(&key), Some(&[1u8, 2][..]));
	assert!(item.remove_record(&key));
	assert!(!item.remove_record(&key));
}
