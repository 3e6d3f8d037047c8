//! Byte codec for ordered layer lists.
//!
//! Layout (all integers big-endian):
//!
//! ```text
//! u32 count
//! count × { u8 color ordinal, u16 pattern ordinal }
//! ```
//!
//! Decoding is lenient about length: a buffer shorter than the header decodes
//! to an empty list, and records missing from the tail of the buffer are
//! dropped. Unknown ordinals are the only decode failure.

use thiserror::Error;

use crate::{DyeColor, Layer, PatternType};

/// Size of the count header in bytes.
pub const HEADER_LEN: usize = 4;

/// Size of one encoded layer record in bytes.
pub const RECORD_LEN: usize = 3;

/// Errors produced while decoding a layer record buffer.
///
/// Every variant carries the layers decoded before the failing record so
/// callers can carry on with a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
	/// A record referenced a dye color ordinal outside [`DyeColor`].
	#[error("layer record {index}: unknown dye color ordinal {ordinal}")]
	UnknownColor {
		/// Position of the failing record.
		index: usize,
		/// The raw ordinal read from the buffer.
		ordinal: u8,
		/// Layers decoded before the failure.
		partial: Vec<Layer>,
	},

	/// A record referenced a pattern ordinal outside [`PatternType`].
	#[error("layer record {index}: unknown pattern ordinal {ordinal}")]
	UnknownPattern {
		/// Position of the failing record.
		index: usize,
		/// The raw ordinal read from the buffer.
		ordinal: u16,
		/// Layers decoded before the failure.
		partial: Vec<Layer>,
	},
}

impl DecodeError {
	/// Index of the record that failed to decode.
	pub fn index(&self) -> usize {
		match self {
			Self::UnknownColor { index, .. } | Self::UnknownPattern { index, .. } => *index,
		}
	}

	/// Layers decoded before the failure.
	pub fn partial(&self) -> &[Layer] {
		match self {
			Self::UnknownColor { partial, .. } | Self::UnknownPattern { partial, .. } => partial,
		}
	}

	/// Consumes the error, returning the layers decoded before the failure.
	pub fn into_partial(self) -> Vec<Layer> {
		match self {
			Self::UnknownColor { partial, .. } | Self::UnknownPattern { partial, .. } => partial,
		}
	}
}

/// Returns the encoded size of `count` layers.
pub const fn encoded_len(count: usize) -> usize {
	HEADER_LEN + RECORD_LEN * count
}

/// Encodes `layers` in order.
///
/// Lists longer than `u32::MAX` are truncated to what the header can describe.
pub fn encode(layers: &[Layer]) -> Vec<u8> {
	let count = u32::try_from(layers.len()).unwrap_or(u32::MAX);
	let layers = &layers[..count as usize];

	let mut out = Vec::with_capacity(encoded_len(layers.len()));
	out.extend_from_slice(&count.to_be_bytes());
	for layer in layers {
		out.push(layer.color().ordinal());
		out.extend_from_slice(&layer.pattern().ordinal().to_be_bytes());
	}
	out
}

/// Decodes a buffer produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<Vec<Layer>, DecodeError> {
	let Some((header, body)) = bytes.split_first_chunk::<HEADER_LEN>() else {
		return Ok(Vec::new());
	};
	let declared = u32::from_be_bytes(*header) as usize;
	let mut layers = Vec::with_capacity(declared.min(body.len() / RECORD_LEN));

	for (index, record) in body.chunks_exact(RECORD_LEN).take(declared).enumerate() {
		let &[color, hi, lo] = record else {
			break;
		};
		let Some(color) = DyeColor::from_ordinal(color) else {
			return Err(DecodeError::UnknownColor {
				index,
				ordinal: color,
				partial: layers,
			});
		};
		let ordinal = u16::from_be_bytes([hi, lo]);
		let Some(pattern) = PatternType::from_ordinal(ordinal) else {
			return Err(DecodeError::UnknownPattern {
				index,
				ordinal,
				partial: layers,
			});
		};
		layers.push(Layer::new(color, pattern));
	}

	Ok(layers)
}
