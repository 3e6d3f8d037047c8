//! Hide and restore for a single item.
//!
//! An item is *overflowed* exactly while its side-channel store holds an
//! overflow record under the configured key; there is no other state.

use tapestry_primitives::{Layer, codec};
use tapestry_registry::describe_layer;
use tracing::warn;

use crate::config::LoomConfig;
use crate::host::LayeredItem;

/// Result of inspecting an item for hiding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideOutcome {
	/// The item is not a banner.
	NotBanner,
	/// The item fits the visible capacity; nothing was written.
	WithinCapacity {
		/// Visible layer count.
		visible: usize,
	},
	/// Layers past the visible capacity were moved into a record.
	Hidden {
		/// Layers written to the record.
		stored: usize,
		/// Layers left visible.
		visible: usize,
	},
}

/// Counters from one restoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreSummary {
	/// Layers recovered from the record.
	pub stored: usize,
	/// Layers the host appended past the visible capacity.
	pub appended: usize,
	/// Layers cut by the global cap.
	pub dropped: usize,
	/// Final layer count.
	pub layers: usize,
	/// Lore lines written.
	pub lore_lines: usize,
	/// The record was damaged and only partly decoded.
	pub partial: bool,
}

/// Result of restoring an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
	/// The item is not a banner.
	NotBanner,
	/// No record was present; the item was left untouched.
	NoRecord,
	/// The record was merged back and removed.
	Restored(RestoreSummary),
}

/// Layers produced by [`merge_layers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
	/// Stored layers followed by newly appended ones, capped.
	pub layers: Vec<Layer>,
	/// How many visible layers were appended before capping.
	pub appended: usize,
	/// How many layers the cap removed.
	pub dropped: usize,
}

/// Appends every visible layer at index `visible_capacity` or later to
/// `stored`, then truncates to `max_layers`.
pub fn merge_layers(stored: Vec<Layer>, visible: &[Layer], visible_capacity: usize, max_layers: usize) -> Merged {
	let fresh = visible.get(visible_capacity..).unwrap_or_default();
	let mut layers = stored;
	layers.extend_from_slice(fresh);
	let dropped = layers.len().saturating_sub(max_layers);
	layers.truncate(max_layers);
	Merged {
		layers,
		appended: fresh.len(),
		dropped,
	}
}

/// Lore describing every layer from `config.lore_start` on, or `None` when
/// there are no such layers.
pub fn lore_lines(layers: &[Layer], config: &LoomConfig) -> Option<Vec<String>> {
	let described = layers.get(config.lore_start..).filter(|rest| !rest.is_empty())?;
	Some(
		described
			.iter()
			.map(|layer| format!("{}{}", config.lore_prefix, describe_layer(layer)))
			.collect(),
	)
}

/// Moves layers past the visible capacity into an overflow record.
///
/// Any existing record is replaced wholesale.
pub fn hide<I>(item: &mut I, config: &LoomConfig) -> HideOutcome
where
	I: LayeredItem + ?Sized,
{
	if !item.is_banner() {
		return HideOutcome::NotBanner;
	}

	let mut layers = item.layers();
	if layers.len() <= config.visible_capacity {
		return HideOutcome::WithinCapacity { visible: layers.len() };
	}

	let stored = layers.len();
	item.set_record(&config.record_key, codec::encode(&layers));
	layers.truncate(config.visible_capacity);
	item.set_layers(layers);

	HideOutcome::Hidden {
		stored,
		visible: config.visible_capacity,
	}
}

/// Merges an item's overflow record back into its visible layers.
///
/// A damaged record contributes only the layers decoded before the damage.
/// Lore is rewritten to describe the layers past `lore_start` and cleared when
/// there are none. The record is removed. Items without a record are left
/// untouched.
pub fn restore<I>(item: &mut I, config: &LoomConfig) -> RestoreOutcome
where
	I: LayeredItem + ?Sized,
{
	if !item.is_banner() {
		return RestoreOutcome::NotBanner;
	}
	let Some(bytes) = item.record(&config.record_key) else {
		return RestoreOutcome::NoRecord;
	};

	let (stored, partial) = match codec::decode(&bytes) {
		Ok(layers) => (layers, false),
		Err(err) => {
			warn!(error = %err, recovered = err.partial().len(), key = %config.record_key, "loom.restore.partial_record");
			(err.into_partial(), true)
		}
	};
	let recovered = stored.len();
	let visible = item.layers();

	let merged = merge_layers(stored, &visible, config.visible_capacity, config.max_layers);
	let lore = lore_lines(&merged.layers, config);
	let summary = RestoreSummary {
		stored: recovered,
		appended: merged.appended,
		dropped: merged.dropped,
		layers: merged.layers.len(),
		lore_lines: lore.as_ref().map_or(0, Vec::len),
		partial,
	};

	item.set_layers(merged.layers);
	item.set_lore(lore);
	item.remove_record(&config.record_key);

	RestoreOutcome::Restored(summary)
}
