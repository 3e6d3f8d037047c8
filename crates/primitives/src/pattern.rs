use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Banner pattern type.
///
/// Declaration order is the wire ordinal; new patterns are appended at the end.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCount, EnumIter, FromRepr, IntoStaticStr, Serialize, Deserialize,
)]
#[repr(u16)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternType {
	Base,
	SquareBottomLeft,
	SquareBottomRight,
	SquareTopLeft,
	SquareTopRight,
	StripeBottom,
	StripeTop,
	StripeLeft,
	StripeRight,
	StripeCenter,
	StripeMiddle,
	StripeDownright,
	StripeDownleft,
	SmallStripes,
	Cross,
	StraightCross,
	TriangleBottom,
	TriangleTop,
	TrianglesBottom,
	TrianglesTop,
	DiagonalLeft,
	DiagonalUpRight,
	DiagonalUpLeft,
	DiagonalRight,
	Circle,
	Rhombus,
	HalfVertical,
	HalfHorizontal,
	HalfVerticalRight,
	HalfHorizontalBottom,
	Border,
	CurlyBorder,
	Creeper,
	Gradient,
	GradientUp,
	Bricks,
	Skull,
	Flower,
	Mojang,
	Globe,
	Piglin,
	Flow,
	Guster,
}

impl PatternType {
	/// Returns the wire ordinal.
	pub const fn ordinal(self) -> u16 {
		self as u16
	}

	/// Looks up a pattern by wire ordinal.
	pub fn from_ordinal(ordinal: u16) -> Option<Self> {
		Self::from_repr(ordinal)
	}

	/// Returns the raw enum name, e.g. `STRIPE_DOWNRIGHT`.
	pub fn as_raw_name(self) -> &'static str {
		self.into()
	}
}
