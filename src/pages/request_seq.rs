//! Generation counter for discarding stale responses.
//!
//! Every load takes a [`Ticket`] before it starts and checks it when the
//! response arrives. Starting a newer load, or invalidating, makes every
//! older ticket stale, so a slow response can never overwrite a newer one.

use leptos::prelude::*;

/// Identifies one in-flight request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct RequestSeq {
	latest: u64,
}

impl RequestSeq {
	pub fn next(&mut self) -> Ticket {
		self.latest += 1;
		Ticket(self.latest)
	}

	/// True only for the most recently issued ticket.
	pub fn is_current(&self, ticket: Ticket) -> bool {
		ticket.0 != 0 && ticket.0 == self.latest
	}

	/// Make every outstanding ticket stale.
	pub fn invalidate(&mut self) {
		self.latest += 1;
	}
}

/// Reactive-owner-scoped [`RequestSeq`] handle for components.
#[derive(Clone, Copy)]
pub struct Latest(StoredValue<RequestSeq>);

impl Latest {
	pub fn new() -> Self {
		Self(StoredValue::new(RequestSeq::default()))
	}

	pub fn begin(&self) -> Ticket {
		self.0.try_update_value(RequestSeq::next).unwrap_or_default()
	}

	/// False once the owning component is gone.
	pub fn is_current(&self, ticket: Ticket) -> bool {
		self.0
			.try_with_value(|seq| seq.is_current(ticket))
			.unwrap_or(false)
	}

	pub fn invalidate(&self) {
		self.0.try_update_value(RequestSeq::invalidate);
	}
}

impl Default for Latest {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_latest_ticket_is_current() {
		let mut seq = RequestSeq::default();
		let first = seq.next();
		assert!(seq.is_current(first));
		let second = seq.next();
		assert!(!seq.is_current(first));
		assert!(seq.is_current(second));
	}

	#[test]
	fn invalidate_drops_in_flight_ticket() {
		let mut seq = RequestSeq::default();
		let t = seq.next();
		seq.invalidate();
		assert!(!seq.is_current(t));
		let t2 = seq.next();
		assert!(seq.is_current(t2));
	}

	#[test]
	fn default_ticket_is_never_current() {
		let seq = RequestSeq::default();
		assert!(!seq.is_current(Ticket::default()));
	}
}
