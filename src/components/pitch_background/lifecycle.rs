//! Frame scheduling bookkeeping for the animation loop.
//!
//! Kept free of DOM types so the teardown rules can be tested natively. The
//! component feeds it the ids returned by `requestAnimationFrame` and applies
//! the [`Teardown`] it hands back.

/// What the caller has to undo when the loop stops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Teardown {
	/// Pending frame request to cancel.
	pub cancel_frame: Option<i32>,
	/// Whether the resize listener is still registered.
	pub detach_resize: bool,
}

impl Teardown {
	pub fn is_noop(&self) -> bool {
		self.cancel_frame.is_none() && !self.detach_resize
	}
}

#[derive(Debug, Default)]
pub struct LoopLifecycle {
	pending_frame: Option<i32>,
	resize_attached: bool,
	stopped: bool,
	frames: u64,
}

impl LoopLifecycle {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn should_schedule(&self) -> bool {
		!self.stopped
	}

	/// Frames rendered so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Record a frame request. Returns false if the loop stopped in the
	/// meantime, in which case the caller must cancel `id` itself.
	pub fn frame_requested(&mut self, id: i32) -> bool {
		if self.stopped {
			return false;
		}
		self.pending_frame = Some(id);
		true
	}

	/// The pending frame fired. Returns whether it should be drawn.
	pub fn frame_started(&mut self) -> bool {
		self.pending_frame = None;
		if self.stopped {
			return false;
		}
		self.frames += 1;
		true
	}

	pub fn listener_attached(&mut self) {
		if !self.stopped {
			self.resize_attached = true;
		}
	}

	/// Stop the loop. Calling it again is a no-op.
	pub fn stop(&mut self) -> Teardown {
		self.stopped = true;
		Teardown {
			cancel_frame: self.pending_frame.take(),
			detach_resize: std::mem::take(&mut self.resize_attached),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stop_cancels_pending_frame_and_listener() {
		let mut lc = LoopLifecycle::new();
		lc.listener_attached();
		assert!(lc.frame_requested(3));
		assert!(lc.frame_started());
		assert!(lc.frame_requested(4));

		let td = lc.stop();
		assert_eq!(td.cancel_frame, Some(4));
		assert!(td.detach_resize);
		assert!(!lc.should_schedule());
	}

	#[test]
	fn stop_is_idempotent() {
		let mut lc = LoopLifecycle::new();
		lc.listener_attached();
		lc.frame_requested(1);
		let _ = lc.stop();
		assert!(lc.stop().is_noop());
		assert!(lc.stop().is_noop());
	}

	#[test]
	fn nothing_runs_after_stop() {
		let mut lc = LoopLifecycle::new();
		lc.frame_requested(1);
		let _ = lc.stop();
		// A frame that was already queued by the browser still fires once.
		assert!(!lc.frame_started());
		assert!(!lc.frame_requested(2));
		lc.listener_attached();
		assert!(lc.stop().is_noop());
		assert_eq!(lc.frames(), 0);
	}

	#[test]
	fn stop_before_start_has_nothing_to_undo() {
		let mut lc = LoopLifecycle::new();
		assert!(lc.stop().is_noop());
	}
}
