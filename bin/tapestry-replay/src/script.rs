//! Replay scripts.
//!
//! ```toml
//! [[step]]
//! do = "open"
//! name = "loom"
//!
//! [[step]]
//! do = "place"
//! name = "loom"
//! slot = 0
//! item = { type = "banner", base = "WHITE", layers = [{ color = "RED", pattern = "BASE" }] }
//!
//! [[step]]
//! do = "tick"
//!
//! [[step]]
//! do = "print"
//! name = "loom"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tapestry_loom::memory::MemoryItem;
use tapestry_loom::{DyeColor, InterfaceKind, InventoryAction, Layer, PatternType};
use thiserror::Error;

/// Errors from loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("I/O error reading {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },
}

/// A parsed script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
	#[serde(rename = "step", default)]
	pub steps: Vec<Step>,
}

impl Script {
	pub fn from_toml_str(input: &str) -> Result<Self, ScriptError> {
		Ok(toml::from_str(input)?)
	}

	pub fn load(path: &Path) -> Result<Self, ScriptError> {
		let input = std::fs::read_to_string(path).map_err(|error| ScriptError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}
}

fn one() -> u32 {
	1
}

/// One scripted action. Interfaces are referred to by the name given when
/// they were opened.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "do", rename_all = "snake_case")]
pub enum Step {
	/// Opens a view; a loom unless `kind` says otherwise.
	Open { name: String, kind: Option<InterfaceKind> },
	/// Puts an item on the cursor and places it into a slot.
	Place { name: String, slot: usize, item: ItemSpec },
	/// Chooses a pattern in the loom's list, or clears the choice.
	Select { name: String, pattern: Option<PatternType> },
	/// Clicks a slot.
	Click { name: String, slot: usize, action: InventoryAction },
	/// Lets run-loop turns pass.
	Tick {
		#[serde(default = "one")]
		count: u32,
	},
	/// Closes a view.
	Close { name: String },
	/// Prints a slot, every slot of a view, or the cursor and inventory.
	Print { name: Option<String>, slot: Option<usize> },
}

/// An item to create.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemSpec {
	Banner {
		base: DyeColor,
		#[serde(default)]
		layers: Vec<Layer>,
		#[serde(default = "one")]
		amount: u32,
	},
	Dye {
		color: DyeColor,
		#[serde(default = "one")]
		amount: u32,
	},
	Other {
		name: String,
		#[serde(default = "one")]
		amount: u32,
	},
}

impl ItemSpec {
	pub fn build(&self) -> MemoryItem {
		match self {
			Self::Banner { base, layers, amount } => MemoryItem::banner(*base, layers.iter().copied()).with_amount(*amount),
			Self::Dye { color, amount } => MemoryItem::dye(*color).with_amount(*amount),
			Self::Other { name, amount } => MemoryItem::other(name.as_str()).with_amount(*amount),
		}
	}
}
