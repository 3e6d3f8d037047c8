/// Monotonic run-loop tick counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Tick(u64);

impl Tick {
	const fn after(self, delay: u64) -> Self {
		Self(self.0.saturating_add(delay))
	}
}

#[derive(Debug)]
struct Deferred<T> {
	due: Tick,
	task: T,
}

/// Queue of tasks that run exactly once on a later tick.
///
/// The queue never runs anything itself. The owner calls [`advance`] once per
/// run-loop turn and executes whatever it returns. Tasks due on the same tick
/// come back in scheduling order.
///
/// [`advance`]: DeferredQueue::advance
#[derive(Debug)]
pub struct DeferredQueue<T> {
	now: Tick,
	pending: Vec<Deferred<T>>,
}

impl<T> Default for DeferredQueue<T> {
	fn default() -> Self {
		Self {
			now: Tick::default(),
			pending: Vec::new(),
		}
	}
}

impl<T> DeferredQueue<T> {
	/// Creates an empty queue at tick 0.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of pending tasks.
	pub fn len(&self) -> usize {
		self.pending.len()
	}

	/// Returns `true` if nothing is pending.
	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	/// Schedules `task` to run `delay` ticks from now.
	///
	/// A delay of zero is treated as one: nothing runs on the tick that
	/// scheduled it.
	pub fn schedule(&mut self, delay: u64, task: T) {
		let due = self.now.after(delay.max(1));
		tracing::trace!(now = self.now.0, due = due.0, pending = self.pending.len(), "worker.defer");
		self.pending.push(Deferred { due, task });
	}

	/// Moves to the next tick and returns every task now due.
	pub fn advance(&mut self) -> Vec<T> {
		self.now = self.now.after(1);
		let now = self.now;
		if self.pending.iter().all(|d| d.due > now) {
			return Vec::new();
		}

		let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending).into_iter().partition(|d| d.due <= now);
		self.pending = pending;
		tracing::trace!(now = now.0, due = due.len(), pending = self.pending.len(), "worker.defer.due");
		due.into_iter().map(|d| d.task).collect()
	}

	/// Drops every pending task. Returns how many were dropped.
	pub fn clear(&mut self) -> usize {
		let dropped = self.pending.len();
		self.pending.clear();
		dropped
	}
}
