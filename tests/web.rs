#![cfg(target_arch = "wasm32")]
#![allow(unused_crate_dependencies)]

use std::cell::Cell;
use std::rc::Rc;

use football_intel::components::dismiss::DismissListener;
use football_intel::components::pitch_background::{LOOP_STATE_ATTR, PitchBackground};
use leptos::prelude::*;
use leptos::task::Executor;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn attached_div(doc: &Document) -> Element {
	let el = doc.create_element("div").unwrap();
	doc.body().unwrap().append_child(&el).unwrap();
	el
}

fn press(target: &Element) {
	let ev = document().create_event("Event").unwrap();
	ev.init_event_with_bubbles("mousedown", true);
	target.dispatch_event(&ev).unwrap();
}

#[wasm_bindgen_test]
fn outside_press_dismisses_until_dropped() {
	let doc = document();
	let boundary = attached_div(&doc);
	let inner = doc.create_element("span").unwrap();
	boundary.append_child(&inner).unwrap();
	let outside = attached_div(&doc);

	let hits = Rc::new(Cell::new(0));
	let counter = hits.clone();
	let listener = DismissListener::attach(boundary.clone(), move || counter.set(counter.get() + 1))
		.expect("document available");

	press(&inner);
	assert_eq!(hits.get(), 0);
	press(&outside);
	assert_eq!(hits.get(), 1);

	drop(listener);
	press(&outside);
	assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
async fn background_loop_stops_on_unmount() {
	let doc = document();
	let host = attached_div(&doc);
	let host: web_sys::HtmlElement = wasm_bindgen::JsCast::unchecked_into(host);

	let handle = leptos::mount::mount_to(host.clone(), || view! { <PitchBackground /> });

	let canvas = host
		.query_selector("canvas.pitch-background")
		.unwrap()
		.expect("canvas rendered");
	assert_eq!(canvas.get_attribute("aria-hidden").as_deref(), Some("true"));

	// The loop starts from an effect, which runs once the executor gets a turn.
	for _ in 0..3 {
		Executor::tick().await;
	}
	assert_eq!(canvas.get_attribute(LOOP_STATE_ATTR).as_deref(), Some("running"));

	drop(handle);
	assert!(host.query_selector("canvas").unwrap().is_none());
	assert_eq!(canvas.get_attribute(LOOP_STATE_ATTR).as_deref(), Some("stopped"));
}
