//! Core value types for banner decoration: dye colors, pattern types, layers,
//! and the byte codec used to stash overflow layers on an item.

/// Byte codec for ordered layer lists.
pub mod codec;
/// Dye color enumeration.
pub mod color;
/// A single (color, pattern) decoration unit.
pub mod layer;
/// Banner pattern type enumeration.
pub mod pattern;

pub use codec::{DecodeError, decode, encode, encoded_len};
pub use color::DyeColor;
pub use layer::Layer;
pub use pattern::PatternType;
