//! Loom interception configuration.
//!
//! ```toml
//! visible_capacity = 5
//! max_layers = 16
//! lore_start = 6
//! defer_ticks = 1
//! record_key = "tapestry:extended_patterns"
//! lore_prefix = "§7"
//! layer_viewer = false
//! ```
//!
//! Every field is optional; missing fields take the defaults above.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or field types.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The record key is malformed.
	#[error(transparent)]
	RecordKey(#[from] RecordKeyError),

	/// Capacities contradict each other.
	#[error("invalid capacity: {0}")]
	InvalidCapacity(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Malformed `namespace:key` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid record key '{key}': {reason}")]
pub struct RecordKeyError {
	/// The rejected input.
	pub key: String,
	/// What was wrong with it.
	pub reason: &'static str,
}

/// Namespaced key of the overflow record in an item's side-channel store.
///
/// Namespaces allow `[a-z0-9._-]`; keys additionally allow `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordKey {
	namespace: String,
	key: String,
}

impl RecordKey {
	/// Default key used by the loom interception.
	pub const DEFAULT: &'static str = "tapestry:extended_patterns";

	/// Builds a key from its two halves.
	pub fn new(namespace: &str, key: &str) -> std::result::Result<Self, RecordKeyError> {
		let err = |reason| RecordKeyError {
			key: format!("{namespace}:{key}"),
			reason,
		};
		if namespace.is_empty() {
			return Err(err("empty namespace"));
		}
		if key.is_empty() {
			return Err(err("empty key"));
		}
		if !namespace.chars().all(|c| is_key_char(c, false)) {
			return Err(err("namespace may only contain [a-z0-9._-]"));
		}
		if !key.chars().all(|c| is_key_char(c, true)) {
			return Err(err("key may only contain [a-z0-9._-/]"));
		}
		Ok(Self {
			namespace: namespace.to_owned(),
			key: key.to_owned(),
		})
	}

	/// Returns the namespace half.
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// Returns the key half.
	pub fn key(&self) -> &str {
		&self.key
	}
}

fn is_key_char(c: char, allow_slash: bool) -> bool {
	matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-') || (allow_slash && c == '/')
}

impl Default for RecordKey {
	fn default() -> Self {
		Self {
			namespace: "tapestry".to_owned(),
			key: "extended_patterns".to_owned(),
		}
	}
}

impl FromStr for RecordKey {
	type Err = RecordKeyError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let Some((namespace, key)) = s.split_once(':') else {
			return Err(RecordKeyError {
				key: s.to_owned(),
				reason: "expected 'namespace:key'",
			});
		};
		Self::new(namespace, key)
	}
}

impl TryFrom<String> for RecordKey {
	type Error = RecordKeyError;

	fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<RecordKey> for String {
	fn from(key: RecordKey) -> Self {
		key.to_string()
	}
}

impl fmt::Display for RecordKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.namespace, self.key)
	}
}

/// Capacities and presentation settings for the loom interception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoomConfig {
	/// Layers the loom is allowed to see while a banner is inside it.
	pub visible_capacity: usize,
	/// Hard cap on a banner's layer count after restoration.
	pub max_layers: usize,
	/// First layer index described in lore; lore exists only past this index.
	pub lore_start: usize,
	/// Run-loop turns to wait before inspecting the input slot.
	pub defer_ticks: u64,
	/// Side-channel key holding the overflow record.
	pub record_key: RecordKey,
	/// Formatting prefix prepended to every lore line.
	pub lore_prefix: String,
	/// Whether the layer viewer is exposed.
	pub layer_viewer: bool,
}

impl Default for LoomConfig {
	fn default() -> Self {
		Self {
			visible_capacity: 5,
			max_layers: 16,
			lore_start: 6,
			defer_ticks: 1,
			record_key: RecordKey::default(),
			lore_prefix: "§7".to_owned(),
			layer_viewer: false,
		}
	}
}

impl LoomConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}

	/// Checks that capacities are consistent.
	pub fn validate(&self) -> Result<()> {
		if self.visible_capacity == 0 {
			return Err(ConfigError::InvalidCapacity("visible_capacity must be at least 1".into()));
		}
		if self.max_layers < self.visible_capacity {
			return Err(ConfigError::InvalidCapacity(format!(
				"max_layers ({}) is below visible_capacity ({})",
				self.max_layers, self.visible_capacity
			)));
		}
		if u32::try_from(self.max_layers).is_err() {
			return Err(ConfigError::InvalidCapacity(format!("max_layers ({}) does not fit a record header", self.max_layers)));
		}
		Ok(())
	}
}
