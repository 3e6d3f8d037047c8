use serde::{Deserialize, Serialize};

use crate::{DyeColor, PatternType};

/// One decoration unit applied to a banner.
///
/// Layers are plain values; a banner's appearance is the ordered list of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layer {
	color: DyeColor,
	pattern: PatternType,
}

impl Layer {
	/// Creates a layer.
	pub const fn new(color: DyeColor, pattern: PatternType) -> Self {
		Self { color, pattern }
	}

	/// Returns the dye color.
	pub const fn color(&self) -> DyeColor {
		self.color
	}

	/// Returns the pattern type.
	pub const fn pattern(&self) -> PatternType {
		self.pattern
	}
}

impl From<(DyeColor, PatternType)> for Layer {
	fn from((color, pattern): (DyeColor, PatternType)) -> Self {
		Self::new(color, pattern)
	}
}
