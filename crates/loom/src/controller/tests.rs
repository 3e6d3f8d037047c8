use rstest::rstest;
use tapestry_primitives::{DyeColor, Layer, PatternType};

use super::*;
use crate::event::InventoryAction;
use crate::memory::{MemoryHost, MemoryItem};

fn banner(n: usize) -> MemoryItem {
	MemoryItem::banner(DyeColor::White, (0..n).map(|_| Layer::new(DyeColor::Red, PatternType::Base)))
}

fn loom_with(host: &mut MemoryHost, n: usize) -> InterfaceId {
	let id = host.open_loom();
	host.set_item(id, LoomSlot::Input, Some(banner(n))).unwrap();
	id
}

fn click(id: InterfaceId, raw_slot: usize, action: InventoryAction) -> ContentChanged {
	ContentChanged {
		interface: id,
		top_kind: InterfaceKind::Loom,
		raw_slot,
		action,
	}
}

#[test]
fn click_defers_hide_to_next_tick() {
	let mut host = MemoryHost::new();
	let mut controller = InterceptionController::new(LoomConfig::default());
	let id = loom_with(&mut host, 8);

	controller.content_changed(&mut host, &click(id, 1, InventoryAction::PlaceAll));
	assert_eq!(controller.pending_checks(), 1);
	assert_eq!(host.item(id, LoomSlot::Input).unwrap().visible_layers().len(), 8);

	let outcomes = controller.tick(&mut host);
	assert_eq!(outcomes, [HideOutcome::Hidden { stored: 8, visible: 5 }]);
	assert_eq!(controller.pending_checks(), 0);
	assert_eq!(host.item(id, LoomSlot::Input).unwrap().visible_layers().len(), 5);
}

#[test]
fn defer_ticks_is_honoured() {
	let mut host = MemoryHost::new();
	let config = LoomConfig {
		defer_ticks: 3,
		..LoomConfig::default()
	};
	let mut controller = InterceptionController::new(config);
	let id = loom_with(&mut host, 8);

	controller.content_changed(&mut host, &click(id, 0, InventoryAction::PlaceAll));
	assert!(controller.tick(&mut host).is_empty());
	assert!(controller.tick(&mut host).is_empty());
	assert_eq!(controller.tick(&mut host).len(), 1);
}

#[rstest]
#[case::crafting(InterfaceKind::Crafting)]
#[case::anvil(InterfaceKind::Anvil)]
#[case::chest(InterfaceKind::Chest)]
fn other_interfaces_are_ignored(#[case] kind: InterfaceKind) {
	let mut host = MemoryHost::new();
	let mut controller = InterceptionController::new(LoomConfig::default());
	let id = host.open(kind);

	let event = ContentChanged {
		top_kind: kind,
		..click(id, 0, InventoryAction::PickupAll)
	};
	assert_eq!(controller.content_changed(&mut host, &event), None);
	assert_eq!(controller.pending_checks(), 0);
	let closed = InterfaceClosed { interface: id, top_kind: kind };
	assert_eq!(controller.interface_closed(&mut host, &closed), None);
}

#[test]
fn output_pickup_restores_output_without_scheduling() {
	let mut host = MemoryHost::new();
	let mut controller = InterceptionController::new(LoomConfig::default());
	let id = loom_with(&mut host, 8);
	host.set_item(id, LoomSlot::Dye, Some(MemoryItem::dye(DyeColor::Blue))).unwrap();
	host.select(id, Some(PatternType::Cross)).unwrap();
	controller.content_changed(&mut host, &click(id, 1, InventoryAction::PlaceAll));
	host.tick(&mut controller);

	let outcome = controller.content_changed(&mut host, &click(id, 3, InventoryAction::PickupAll));
	let Some(RestoreOutcome::Restored(summary)) = outcome else {
		panic!("expected restoration, got {outcome:?}");
	};
	assert_eq!(summary.layers, 9);
	assert_eq!(controller.pending_checks(), 0);
	let output = host.item(id, LoomSlot::Output).unwrap();
	assert!(!output.has_record(&controller.config().record_key));
}

#[test]
fn output_pickup_half_is_treated_as_other_click() {
	let mut host = MemoryHost::new();
	let mut controller = InterceptionController::new(LoomConfig::default());
	let id = loom_with(&mut host, 2);

	assert_eq!(controller.content_changed(&mut host, &click(id, 3, InventoryAction::PickupHalf)), None);
	assert_eq!(controller.pending_checks(), 1);
}

#[test]
fn input_removal_restores_immediately() {
	let mut host = MemoryHost::new();
	let mut controller = InterceptionController::new(LoomConfig::default());
	let id = loom_with(&mut host, 8);
	controller.content_changed(&mut host, &click(id, 0, InventoryAction::PlaceAll));
	controller.tick(&mut host);

	let outcome = controller.content_changed(&mut host, &click(id, 0, InventoryAction::PickupAll));
	assert!(matches!(outcome, Some(RestoreOutcome::Restored(_))));
	let input = host.item(id, LoomSlot::Input).unwrap();
	assert_eq!(input.visible_layers().len(), 8);
	assert!(!input.has_record(&controller.config().record_key));
}

#[test]
fn close_restores_input() {
	let mut host = MemoryHost::new();
	let mut controller = InterceptionController::new(LoomConfig::default());
	let id = loom_with(&mut host, 8);
	controller.content_changed(&mut host, &click(id, 0, InventoryAction::PlaceAll));
	controller.tick(&mut host);

	let closed = InterfaceClosed {
		interface: id,
		top_kind: InterfaceKind::Loom,
	};
	assert!(matches!(controller.interface_closed(&mut host, &closed), Some(RestoreOutcome::Restored(_))));
	assert_eq!(host.item(id, LoomSlot::Input).unwrap().visible_layers().len(), 8);
}

#[test]
fn close_with_empty_input_does_nothing() {
	let mut host = MemoryHost::new();
	let mut controller = InterceptionController::new(LoomConfig::default());
	let id = host.open_loom();
	let closed = InterfaceClosed {
		interface: id,
		top_kind: InterfaceKind::Loom,
	};
	assert_eq!(controller.interface_closed(&mut host, &closed), None);
}

#[test]
fn stale_check_is_a_noop() {
	let mut host = MemoryHost::new();
	let mut controller = InterceptionController::new(LoomConfig::default());
	let id = loom_with(&mut host, 8);

	controller.content_changed(&mut host, &click(id, 0, InventoryAction::PlaceAll));
	host.close(&mut controller, id).unwrap();
	assert_eq!(controller.pending_checks(), 1);

	assert!(controller.tick(&mut host).is_empty());
	assert_eq!(host.inventory()[0].visible_layers().len(), 8);
}

#[test]
fn small_banner_is_left_alone() {
	let mut host = MemoryHost::new();
	let mut controller = InterceptionController::new(LoomConfig::default());
	let id = loom_with(&mut host, 3);

	controller.content_changed(&mut host, &click(id, 0, InventoryAction::PlaceAll));
	assert_eq!(controller.tick(&mut host), [HideOutcome::WithinCapacity { visible: 3 }]);
	assert!(!host.item(id, LoomSlot::Input).unwrap().has_record(&controller.config().record_key));
}

#[test]
fn discard_pending_drops_checks() {
	let mut host = MemoryHost::new();
	let mut controller = InterceptionController::new(LoomConfig::default());
	let id = loom_with(&mut host, 8);
	controller.content_changed(&mut host, &click(id, 1, InventoryAction::PlaceAll));
	controller.content_changed(&mut host, &click(id, 2, InventoryAction::PlaceAll));

	assert_eq!(controller.discard_pending(), 2);
	assert!(controller.tick(&mut host).is_empty());
}
