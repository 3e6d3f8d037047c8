//! Lets banners carry more layers than the loom can show.
//!
//! The loom only accepts banners with fewer than six visible layers. While a
//! banner sits in the loom, layers past the visible capacity are encoded into
//! an overflow record in the item's side-channel store and stripped from the
//! visible list. When the banner (or the loom's output) leaves the loom, the
//! record is decoded, merged with whatever the loom appended, capped, and
//! cleared.
//!
//! # Layout
//!
//! * [`host`]: accessor traits the embedding host implements.
//! * [`event`]: immutable event descriptors delivered by the host.
//! * [`overflow`]: the hide/restore operations on a single item.
//! * [`controller`]: routes events to hide/restore, deferring hides by a tick.
//! * [`plugin`]: enable/disable lifecycle around the controller.
//! * [`session`]: drives a plugin from the ordered event pump.
//! * [`viewer`]: read-only grid view of an item's layers (off by default).
//! * [`memory`]: an in-memory host used by tests and the replay CLI.

pub mod config;
pub mod controller;
pub mod event;
pub mod host;
pub mod memory;
pub mod overflow;
pub mod plugin;
pub mod session;
pub mod viewer;

pub use config::{ConfigError, LoomConfig, RecordKey, RecordKeyError};
pub use controller::InterceptionController;
pub use event::{ContentChanged, InterfaceClosed, InterfaceId, InterfaceKind, InventoryAction, LoomEvent, LoomSlot};
pub use host::{LayeredItem, LoomHost, LoomInventory, LoomListener};
pub use overflow::{HideOutcome, RestoreOutcome, RestoreSummary};
pub use plugin::LoomPlugin;
pub use session::LoomSession;
pub use tapestry_primitives::{DyeColor, Layer, PatternType};
pub use viewer::{LayerCell, LayerGrid, LayerViewer, ViewerError};
