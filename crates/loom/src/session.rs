//! Pump-driven session: a host and a plugin fed by [`tapestry_worker::run_loop`].
//!
//! Events and ticks reach the session one at a time in the order they were
//! posted, so a deferred check never overlaps a click.

use tapestry_worker::LoopHandler;
use tracing::trace;

use crate::event::LoomEvent;
use crate::host::LoomHost;
use crate::plugin::LoomPlugin;

/// Owns a host and the plugin listening to it.
#[derive(Debug)]
pub struct LoomSession<H> {
	host: H,
	plugin: LoomPlugin,
}

impl<H: LoomHost> LoomSession<H> {
	pub fn new(host: H, plugin: LoomPlugin) -> Self {
		Self { host, plugin }
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn plugin(&self) -> &LoomPlugin {
		&self.plugin
	}

	/// Borrows the host and the plugin together, so the host can deliver
	/// events with the plugin as its listener.
	pub fn parts_mut(&mut self) -> (&mut H, &mut LoomPlugin) {
		(&mut self.host, &mut self.plugin)
	}

	/// Disables the plugin and hands back the host with the number of
	/// pending checks that were dropped.
	pub fn end(self) -> (H, usize) {
		let dropped = self.plugin.disable();
		(self.host, dropped)
	}
}

impl<H: LoomHost> LoopHandler<LoomEvent> for LoomSession<H> {
	fn on_event(&mut self, event: LoomEvent) {
		trace!(interface = event.interface().0, "loom.session.event");
		self.plugin.handle(&mut self.host, &event);
	}

	fn on_tick(&mut self) {
		self.plugin.tick(&mut self.host);
	}
}
