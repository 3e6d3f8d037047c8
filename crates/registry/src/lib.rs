//! Static catalog for banner layers.
//!
//! Maps [`PatternType`]s to their heraldic display names and formats raw dye
//! color names for item lore. Everything here is pure and allocation-light;
//! the table is declared once in [`patterns`].

pub mod names;
pub mod patterns;

pub use names::{describe_layer, format_color_name};
pub use patterns::{PatternName, UNKNOWN_PATTERN, display_name, display_name_or_unknown, entries};
pub use tapestry_primitives::PatternType;
