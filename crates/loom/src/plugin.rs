//! Enable/disable lifecycle around the interception.

use tracing::info;

use crate::config::{self, LoomConfig};
use crate::controller::InterceptionController;
use crate::event::{ContentChanged, InterfaceClosed, LoomEvent};
use crate::host::{LoomHost, LoomListener};
use crate::overflow::{HideOutcome, RestoreOutcome};
use crate::viewer::LayerViewer;

/// An enabled loom interception.
#[derive(Debug)]
pub struct LoomPlugin {
	controller: InterceptionController,
	viewer: Option<LayerViewer>,
}

impl LoomPlugin {
	/// Validates `config` and starts intercepting.
	pub fn enable(config: LoomConfig) -> config::Result<Self> {
		config.validate()?;
		info!(
			max_layers = config.max_layers,
			visible = config.visible_capacity,
			key = %config.record_key,
			"enabled, allowing up to {} banner patterns",
			config.max_layers
		);
		let viewer = LayerViewer::from_config(&config);
		Ok(Self {
			controller: InterceptionController::new(config),
			viewer,
		})
	}

	pub fn config(&self) -> &LoomConfig {
		self.controller.config()
	}

	pub fn controller(&self) -> &InterceptionController {
		&self.controller
	}

	/// The layer viewer, if enabled.
	pub fn layer_viewer(&self) -> Option<&LayerViewer> {
		self.viewer.as_ref()
	}

	/// Routes a host event.
	pub fn handle<H: LoomHost + ?Sized>(&mut self, host: &mut H, event: &LoomEvent) -> Option<RestoreOutcome> {
		self.controller.handle(host, event)
	}

	/// Runs the checks due this tick.
	pub fn tick<H: LoomHost + ?Sized>(&mut self, host: &mut H) -> Vec<HideOutcome> {
		self.controller.tick(host)
	}

	/// Stops intercepting. Returns how many pending checks were dropped.
	pub fn disable(mut self) -> usize {
		let dropped = self.controller.discard_pending();
		info!(dropped, "disabled");
		dropped
	}
}

impl<H: LoomHost + ?Sized> LoomListener<H> for LoomPlugin {
	fn on_content_changed(&mut self, host: &mut H, event: &ContentChanged) {
		self.controller.content_changed(host, event);
	}

	fn on_interface_closed(&mut self, host: &mut H, event: &InterfaceClosed) {
		self.controller.interface_closed(host, event);
	}

	fn on_tick(&mut self, host: &mut H) {
		self.controller.tick(host);
	}
}
