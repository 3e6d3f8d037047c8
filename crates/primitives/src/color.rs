use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Dye color of a banner layer.
///
/// Declaration order is the wire ordinal; do not reorder.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCount, EnumIter, FromRepr, IntoStaticStr, Serialize, Deserialize,
)]
#[repr(u8)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DyeColor {
	White,
	Orange,
	Magenta,
	LightBlue,
	Yellow,
	Lime,
	Pink,
	Gray,
	LightGray,
	Cyan,
	Purple,
	Blue,
	Brown,
	Green,
	Red,
	Black,
}

impl DyeColor {
	/// Returns the wire ordinal.
	pub const fn ordinal(self) -> u8 {
		self as u8
	}

	/// Looks up a color by wire ordinal.
	pub fn from_ordinal(ordinal: u8) -> Option<Self> {
		Self::from_repr(ordinal)
	}

	/// Returns the raw enum name, e.g. `LIGHT_BLUE`.
	pub fn as_raw_name(self) -> &'static str {
		self.into()
	}
}

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::*;

	#[test]
	fn ordinals_are_dense() {
		for (i, color) in DyeColor::iter().enumerate() {
			assert_eq!(color.ordinal() as usize, i);
			assert_eq!(DyeColor::from_ordinal(color.ordinal()), Some(color));
		}
		assert_eq!(DyeColor::from_ordinal(DyeColor::COUNT as u8), None);
	}

	#[test]
	fn raw_names_are_screaming_snake() {
		assert_eq!(DyeColor::LightBlue.as_raw_name(), "LIGHT_BLUE");
		assert_eq!(DyeColor::White.as_raw_name(), "WHITE");
		assert_eq!(DyeColor::LightGray.as_raw_name(), "LIGHT_GRAY");
	}
}
