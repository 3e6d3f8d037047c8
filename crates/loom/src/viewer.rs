//! Read-only grid listing every layer of a banner.
//!
//! Disabled by default; see [`LoomConfig::layer_viewer`].

use tapestry_primitives::Layer;
use tapestry_registry::describe_layer;
use thiserror::Error;

use crate::config::LoomConfig;
use crate::host::LayeredItem;

/// Title shown above the grid.
pub const VIEWER_TITLE: &str = "Banner Layers";

/// Cells in the grid; enough for the default layer cap.
pub const VIEWER_SLOTS: usize = 18;

/// Errors from opening the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewerError {
	/// Only banners have layers to show.
	#[error("item is not a banner")]
	NotBanner,
}

/// One occupied cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerCell {
	/// Position of the layer, bottom first.
	pub index: usize,
	pub layer: Layer,
	/// Display text, e.g. `"Light Blue Bend"`.
	pub label: String,
}

/// A rendered grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerGrid {
	pub title: &'static str,
	/// Occupied cells in layer order. Never more than [`VIEWER_SLOTS`].
	pub cells: Vec<LayerCell>,
	/// Layers that did not fit.
	pub hidden: usize,
}

/// Builds [`LayerGrid`]s for items.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerViewer;

impl LayerViewer {
	/// Returns a viewer when `config` enables it.
	pub fn from_config(config: &LoomConfig) -> Option<Self> {
		config.layer_viewer.then_some(Self)
	}

	/// Lists the item's visible layers.
	pub fn open<I: LayeredItem + ?Sized>(&self, item: &I) -> Result<LayerGrid, ViewerError> {
		if !item.is_banner() {
			return Err(ViewerError::NotBanner);
		}
		let layers = item.layers();
		let hidden = layers.len().saturating_sub(VIEWER_SLOTS);
		let cells = layers
			.into_iter()
			.take(VIEWER_SLOTS)
			.enumerate()
			.map(|(index, layer)| LayerCell {
				index,
				label: describe_layer(&layer),
				layer,
			})
			.collect();
		Ok(LayerGrid {
			title: VIEWER_TITLE,
			cells,
			hidden,
		})
	}
}

#[cfg(test)]
mod tests {
	use tapestry_primitives::{DyeColor, PatternType};

	use super::*;
	use crate::memory::MemoryItem;

	#[test]
	fn viewer_follows_config() {
		assert!(LayerViewer::from_config(&LoomConfig::default()).is_none());
		let config = LoomConfig {
			layer_viewer: true,
			..LoomConfig::default()
		};
		assert!(LayerViewer::from_config(&config).is_some());
	}

	#[test]
	fn lists_layers_in_order() {
		let item = MemoryItem::banner(
			DyeColor::White,
			[
				Layer::new(DyeColor::LightBlue, PatternType::StripeDownright),
				Layer::new(DyeColor::Black, PatternType::Creeper),
			],
		);
		let grid = LayerViewer.open(&item).unwrap();
		assert_eq!(grid.title, "Banner Layers");
		assert_eq!(grid.hidden, 0);
		let labels: Vec<_> = grid.cells.iter().map(|c| (c.index, c.label.as_str())).collect();
		assert_eq!(labels, [(0, "Light Blue Bend"), (1, "Black Creeper Charge")]);
	}

	#[test]
	fn excess_layers_are_counted() {
		let item = MemoryItem::banner(DyeColor::White, (0..20).map(|_| Layer::new(DyeColor::Red, PatternType::Base)));
		let grid = LayerViewer.open(&item).unwrap();
		assert_eq!(grid.cells.len(), VIEWER_SLOTS);
		assert_eq!(grid.hidden, 2);
	}

	#[test]
	fn rejects_non_banners() {
		assert_eq!(LayerViewer.open(&MemoryItem::dye(DyeColor::Red)), Err(ViewerError::NotBanner));
	}
}
