//! Ordered event pump.
//!
//! Host callbacks become [`LoopMessage`]s on an unbounded channel and are
//! handled one at a time by [`run_loop`]. Each message is handled to
//! completion before the next is received, so a handler never observes a
//! half-applied mutation from another message. The channel is unbounded
//! because host events must never be dropped.

use thiserror::Error;
use tokio::sync::mpsc;

/// One unit of work for the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopMessage<E> {
	/// A host event.
	Event(E),
	/// One run-loop turn has elapsed.
	Tick,
	/// Stop after handling everything received before this message.
	Shutdown,
}

/// Receiver side of the loop.
pub trait LoopHandler<E> {
	/// Handles one host event.
	fn on_event(&mut self, event: E);

	/// Handles the end of a run-loop turn.
	fn on_tick(&mut self);

	/// Called once when the loop stops, for any reason.
	fn on_shutdown(&mut self) {}
}

/// Error returned when sending to a loop that has stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("event loop is closed")]
pub struct LoopClosed;

/// Cloneable sender half.
#[derive(Debug)]
pub struct LoopPort<E> {
	tx: mpsc::UnboundedSender<LoopMessage<E>>,
}

impl<E> Clone for LoopPort<E> {
	fn clone(&self) -> Self {
		Self { tx: self.tx.clone() }
	}
}

impl<E> LoopPort<E> {
	/// Enqueues a host event.
	pub fn send(&self, event: E) -> Result<(), LoopClosed> {
		self.post(LoopMessage::Event(event))
	}

	/// Enqueues a tick.
	pub fn tick(&self) -> Result<(), LoopClosed> {
		self.post(LoopMessage::Tick)
	}

	/// Enqueues a shutdown request.
	pub fn shutdown(&self) -> Result<(), LoopClosed> {
		self.post(LoopMessage::Shutdown)
	}

	fn post(&self, msg: LoopMessage<E>) -> Result<(), LoopClosed> {
		self.tx.send(msg).map_err(|_| LoopClosed)
	}
}

/// Receiver half, consumed by [`run_loop`].
#[derive(Debug)]
pub struct LoopInbox<E> {
	rx: mpsc::UnboundedReceiver<LoopMessage<E>>,
}

/// Creates a connected port/inbox pair.
pub fn channel<E>() -> (LoopPort<E>, LoopInbox<E>) {
	let (tx, rx) = mpsc::unbounded_channel();
	(LoopPort { tx }, LoopInbox { rx })
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
	/// A [`LoopMessage::Shutdown`] was received.
	Shutdown,
	/// Every [`LoopPort`] was dropped and the queue drained.
	PortsDropped,
}

/// Counters from one loop run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopReport {
	/// Events dispatched.
	pub events: u64,
	/// Ticks dispatched.
	pub ticks: u64,
	/// Exit reason.
	pub exit: LoopExit,
}

/// Dispatches messages from `inbox` to `handler` until shutdown.
pub async fn run_loop<E, H>(mut inbox: LoopInbox<E>, handler: &mut H) -> LoopReport
where
	H: LoopHandler<E> + ?Sized,
{
	let mut events = 0u64;
	let mut ticks = 0u64;

	let exit = loop {
		match inbox.rx.recv().await {
			Some(LoopMessage::Event(event)) => {
				events += 1;
				handler.on_event(event);
			}
			Some(LoopMessage::Tick) => {
				ticks += 1;
				handler.on_tick();
			}
			Some(LoopMessage::Shutdown) => break LoopExit::Shutdown,
			None => break LoopExit::PortsDropped,
		}
	};

	inbox.rx.close();
	handler.on_shutdown();
	tracing::debug!(events, ticks, ?exit, "worker.loop.exit");
	LoopReport { events, ticks, exit }
}
