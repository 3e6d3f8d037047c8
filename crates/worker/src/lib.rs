//! Run-loop primitives for single-threaded hosts.
//!
//! * [`DeferredQueue`] holds tasks that must run once on a later tick, which
//!   lets a handler observe host state after the host has finished its own
//!   recomputation for the current tick.
//! * [`pump`] turns host callbacks into explicit messages and dispatches them,
//!   strictly in arrival order, to one [`LoopHandler`].

pub mod pump;
mod tick;

pub use pump::{LoopClosed, LoopExit, LoopHandler, LoopInbox, LoopMessage, LoopPort, LoopReport, channel, run_loop};
pub use tick::DeferredQueue;
