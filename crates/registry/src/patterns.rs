//! Pattern display-name table.

use tapestry_primitives::PatternType;

/// Label used for patterns without a catalog entry.
pub const UNKNOWN_PATTERN: &str = "Unknown Pattern";

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternName {
	/// The pattern this entry names.
	pub pattern: PatternType,
	/// Heraldic display name.
	pub name: &'static str,
}

const fn entry(pattern: PatternType, name: &'static str) -> PatternName {
	PatternName { pattern, name }
}

static PATTERN_NAMES: &[PatternName] = &[
	entry(PatternType::Base, "Base"),
	entry(PatternType::StripeDownright, "Bend"),
	entry(PatternType::StripeDownleft, "Bend Sinister"),
	entry(PatternType::GradientUp, "Base Gradient"),
	entry(PatternType::SquareBottomLeft, "Base Dexter Canton"),
	entry(PatternType::SquareBottomRight, "Base Sinister Canton"),
	entry(PatternType::Border, "Bordure"),
	entry(PatternType::CurlyBorder, "Bordure Indented"),
	entry(PatternType::TrianglesBottom, "Base Indented"),
	entry(PatternType::StripeTop, "Chief"),
	entry(PatternType::StraightCross, "Cross"),
	entry(PatternType::SquareTopLeft, "Chief Dexter Canton"),
	entry(PatternType::SquareTopRight, "Chief Sinister Canton"),
	entry(PatternType::TriangleBottom, "Chevron"),
	entry(PatternType::Creeper, "Creeper Charge"),
	entry(PatternType::Bricks, "Field Masoned"),
	entry(PatternType::Flower, "Flower Charge"),
	entry(PatternType::StripeMiddle, "Fess"),
	entry(PatternType::Gradient, "Gradient"),
	entry(PatternType::Globe, "Globe"),
	entry(PatternType::TriangleTop, "Inverted Chevron"),
	entry(PatternType::StripeLeft, "Pale Dexter"),
	entry(PatternType::StripeRight, "Pale Sinister"),
	entry(PatternType::StripeCenter, "Pale"),
	entry(PatternType::DiagonalLeft, "Per Bend Inverted"),
	entry(PatternType::DiagonalRight, "Per Bend Sinister Inverted"),
	entry(PatternType::HalfVertical, "Per Pale"),
	entry(PatternType::HalfHorizontal, "Per Fess"),
	entry(PatternType::Skull, "Skull Charge"),
	entry(PatternType::Cross, "Saltire"),
	entry(PatternType::Piglin, "Snout"),
	entry(PatternType::Mojang, "Thing"),
	entry(PatternType::TrianglesTop, "Chief Indented"),
	entry(PatternType::DiagonalUpRight, "Per Bend Sinister"),
	entry(PatternType::DiagonalUpLeft, "Per Bend"),
	entry(PatternType::Circle, "Roundel"),
	entry(PatternType::Rhombus, "Lozenge"),
	entry(PatternType::HalfVerticalRight, "Per Pale Inverted"),
	entry(PatternType::HalfHorizontalBottom, "Per Fess Inverted"),
];

/// Returns the display name for `pattern`, or [`UNKNOWN_PATTERN`].
pub fn display_name(pattern: PatternType) -> &'static str {
	PATTERN_NAMES
		.iter()
		.find(|e| e.pattern == pattern)
		.map_or(UNKNOWN_PATTERN, |e| e.name)
}

/// Like [`display_name`], treating `None` as an unspecified pattern.
pub fn display_name_or_unknown(pattern: Option<PatternType>) -> &'static str {
	pattern.map_or(UNKNOWN_PATTERN, display_name)
}

/// Iterates the catalog in declaration order.
pub fn entries() -> impl Iterator<Item = &'static PatternName> {
	PATTERN_NAMES.iter()
}
