//! Outside-click dismissal shared by every dropdown.
//!
//! A [`DismissListener`] watches `mousedown` and `touchstart` on the document
//! and fires its handler when the event lands outside a boundary element.
//! The listeners live exactly as long as the value.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Node};

const EVENTS: [&str; 2] = ["mousedown", "touchstart"];

/// Whether an event should dismiss, given whether the boundary contains its target.
/// Events without a target never dismiss.
pub fn is_outside(target_inside: Option<bool>) -> bool {
	matches!(target_inside, Some(false))
}

/// Document-level listener that calls `on_dismiss` for events outside `boundary`.
pub struct DismissListener {
	document: Document,
	handler: Closure<dyn FnMut(Event)>,
}

impl DismissListener {
	pub fn attach(boundary: Element, on_dismiss: impl Fn() + 'static) -> Option<Self> {
		let document = web_sys::window()?.document()?;
		let handler = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
			let inside = ev
				.target()
				.and_then(|t| t.dyn_into::<Node>().ok())
				.map(|node| boundary.contains(Some(&node)));
			if is_outside(inside) {
				on_dismiss();
			}
		});
		for name in EVENTS {
			let _ = document
				.add_event_listener_with_callback(name, handler.as_ref().unchecked_ref());
		}
		Some(Self { document, handler })
	}
}

impl Drop for DismissListener {
	fn drop(&mut self) {
		for name in EVENTS {
			let _ = self
				.document
				.remove_event_listener_with_callback(name, self.handler.as_ref().unchecked_ref());
		}
	}
}

/// Attach a [`DismissListener`] to `boundary` while `open` is true.
///
/// The listener is dropped when `open` turns false and when the owning
/// component unmounts.
pub fn use_outside_dismiss(
	boundary: NodeRef<Div>,
	open: Signal<bool>,
	on_dismiss: impl Fn() + Clone + 'static,
) {
	let guard = StoredValue::new_local(None::<DismissListener>);

	Effect::new(move |_| {
		if !open.get() {
			guard.set_value(None);
			return;
		}
		let Some(el) = boundary.get() else {
			return;
		};
		let Ok(el) = el.dyn_into::<Element>() else {
			return;
		};
		guard.set_value(DismissListener::attach(el, on_dismiss.clone()));
	});

	on_cleanup(move || {
		guard.try_update_value(|g| *g = None);
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_outside_targets_dismiss() {
		assert!(is_outside(Some(false)));
		assert!(!is_outside(Some(true)));
		assert!(!is_outside(None));
	}
}
