//! Feeds a script through the event pump into an in-memory host.

use std::collections::BTreeMap;

use tapestry_loom::memory::{HostError, ItemKind, MemoryHost, MemoryItem};
use tapestry_loom::{ConfigError, InterfaceId, InterfaceKind, InventoryAction, LayerViewer, LoomConfig, LoomPlugin, LoomSession, LoomSlot, RecordKey};
use tapestry_registry::describe_layer;
use tapestry_worker::{LoopClosed, LoopHandler, channel, run_loop};
use thiserror::Error;
use tracing::{debug, warn};

use crate::script::{Script, Step};

/// Errors that stop a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("step {step}: no interface named '{name}'")]
	UnknownName { step: usize, name: String },

	#[error("step {step}: interface name '{name}' is already in use")]
	DuplicateName { step: usize, name: String },

	#[error("step {step}: {source}")]
	Host { step: usize, source: HostError },

	#[error("event pump closed early")]
	Closed(#[from] LoopClosed),
}

/// Runs `script` and returns the printed lines.
pub async fn run(script: Script, config: LoomConfig) -> Result<Vec<String>, ReplayError> {
	let plugin = LoomPlugin::enable(config)?;
	let mut session = ReplaySession::new(plugin);

	let (port, inbox) = channel();
	for step in script.steps {
		match step {
			Step::Tick { count } => {
				for _ in 0..count {
					port.tick()?;
				}
			}
			step => port.send(step)?,
		}
	}
	port.shutdown()?;

	let report = run_loop(inbox, &mut session).await;
	debug!(events = report.events, ticks = report.ticks, "replay.done");
	session.finish()
}

/// Applies script steps to a loom session over the in-memory host.
#[derive(Debug)]
pub struct ReplaySession {
	session: LoomSession<MemoryHost>,
	names: BTreeMap<String, InterfaceId>,
	output: Vec<String>,
	step: usize,
	failure: Option<ReplayError>,
}

impl ReplaySession {
	pub fn new(plugin: LoomPlugin) -> Self {
		Self {
			session: LoomSession::new(MemoryHost::new(), plugin),
			names: BTreeMap::new(),
			output: Vec::new(),
			step: 0,
			failure: None,
		}
	}

	/// Disables the plugin and returns the printed lines, or the first error.
	pub fn finish(self) -> Result<Vec<String>, ReplayError> {
		let (_, dropped) = self.session.end();
		debug!(dropped, "replay.session.end");
		match self.failure {
			Some(err) => Err(err),
			None => Ok(self.output),
		}
	}

	fn lookup(&self, name: &str) -> Result<InterfaceId, ReplayError> {
		self.names.get(name).copied().ok_or_else(|| ReplayError::UnknownName {
			step: self.step,
			name: name.to_owned(),
		})
	}

	fn host_err(&self, source: HostError) -> ReplayError {
		ReplayError::Host { step: self.step, source }
	}

	fn apply(&mut self, step: Step) -> Result<(), ReplayError> {
		match step {
			Step::Open { name, kind } => {
				if self.names.contains_key(&name) {
					return Err(ReplayError::DuplicateName { step: self.step, name });
				}
				let (host, _) = self.session.parts_mut();
				let id = host.open(kind.unwrap_or(InterfaceKind::Loom));
				self.names.insert(name, id);
			}
			Step::Place { name, slot, item } => {
				let id = self.lookup(&name)?;
				let (host, plugin) = self.session.parts_mut();
				host.set_cursor(Some(item.build()));
				let placed = host.click(plugin, id, slot, InventoryAction::PlaceAll);
				placed.map_err(|e| self.host_err(e))?;
			}
			Step::Select { name, pattern } => {
				let id = self.lookup(&name)?;
				let (host, _) = self.session.parts_mut();
				let selected = host.select(id, pattern);
				selected.map_err(|e| self.host_err(e))?;
			}
			Step::Click { name, slot, action } => {
				let id = self.lookup(&name)?;
				let (host, plugin) = self.session.parts_mut();
				let clicked = host.click(plugin, id, slot, action);
				clicked.map_err(|e| self.host_err(e))?;
			}
			Step::Tick { count } => {
				for _ in 0..count {
					self.on_tick();
				}
			}
			Step::Close { name } => {
				let id = self.lookup(&name)?;
				let (host, plugin) = self.session.parts_mut();
				let closed = host.close(plugin, id);
				closed.map_err(|e| self.host_err(e))?;
				self.names.remove(&name);
			}
			Step::Print { name: None, .. } => {
				let cursor = self.session.host().cursor().cloned();
				self.print("cursor", cursor.as_ref());
				let inventory = self.session.host().inventory().to_vec();
				for (i, item) in inventory.iter().enumerate() {
					self.print(&format!("inventory[{i}]"), Some(item));
				}
			}
			Step::Print { name: Some(name), slot } => {
				let id = self.lookup(&name)?;
				let slots = match slot.map(LoomSlot::from_raw) {
					Some(Some(slot)) => vec![slot],
					Some(None) => Vec::new(),
					None => LoomSlot::ALL.to_vec(),
				};
				for slot in slots {
					let item = self.session.host().item(id, slot).cloned();
					self.print(&format!("{name}.{}", slot_name(slot)), item.as_ref());
				}
			}
		}
		Ok(())
	}

	fn print(&mut self, label: &str, item: Option<&MemoryItem>) {
		let viewer = self.session.plugin().layer_viewer().copied();
		let key = self.session.plugin().config().record_key.clone();
		self.output.extend(render(label, item, viewer.as_ref(), &key));
	}
}

impl LoopHandler<Step> for ReplaySession {
	fn on_event(&mut self, step: Step) {
		self.step += 1;
		if self.failure.is_some() {
			return;
		}
		if let Err(err) = self.apply(step) {
			warn!(error = %err, "replay.step_failed");
			self.failure = Some(err);
		}
	}

	fn on_tick(&mut self) {
		if self.failure.is_none() {
			let (host, plugin) = self.session.parts_mut();
			host.tick(plugin);
		}
	}
}

fn slot_name(slot: LoomSlot) -> &'static str {
	match slot {
		LoomSlot::Input => "input",
		LoomSlot::Dye => "dye",
		LoomSlot::Pattern => "pattern",
		LoomSlot::Output => "output",
	}
}

/// Renders one item as indented text lines.
fn render(label: &str, item: Option<&MemoryItem>, viewer: Option<&LayerViewer>, key: &RecordKey) -> Vec<String> {
	let Some(item) = item else {
		return vec![format!("{label}: empty")];
	};

	let kind = match item.kind() {
		ItemKind::Banner(base) => format!("{} banner", base.as_raw_name()),
		ItemKind::Dye(color) => format!("{} dye", color.as_raw_name()),
		ItemKind::Other(name) => name.clone(),
	};
	let mut lines = vec![format!("{label}: {kind} x{}", item.amount())];
	if !matches!(item.kind(), ItemKind::Banner(_)) {
		return lines;
	}

	match viewer.map(|v| v.open(item)) {
		Some(Ok(grid)) => {
			lines.push(format!("  {}:", grid.title));
			lines.extend(grid.cells.iter().map(|cell| format!("    [{}] {}", cell.index, cell.label)));
		}
		_ => {
			let names: Vec<_> = item.visible_layers().iter().map(describe_layer).collect();
			lines.push(format!("  layers ({}): {}", names.len(), names.join(", ")));
		}
	}
	if let Some(lore) = item.lore_lines() {
		lines.extend(lore.iter().map(|line| format!("  lore: {line}")));
	}
	if let Some(bytes) = item.record_bytes(key) {
		lines.push(format!("  record: {} bytes", bytes.len()));
	}
	lines
}
