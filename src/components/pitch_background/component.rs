//! Leptos component wrapping the pitch background canvas.
//!
//! The component owns a full-viewport canvas and a [`BackgroundLoop`]. The
//! loop drives `requestAnimationFrame`, re-seeds the scene on window resize,
//! and tears itself down on unmount or when dropped. The canvas carries a
//! `data-loop` attribute reading `running` or `stopped`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::lifecycle::LoopLifecycle;
use super::render;
use super::scene::Scene;
use super::theme::Theme;
use super::viewport::Viewport;

/// Fixed simulation step per frame, in seconds.
const FRAME_DT: f64 = 0.016;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Attribute on the canvas reflecting the loop state.
pub const LOOP_STATE_ATTR: &str = "data-loop";

/// Scene plus the canvas and context it draws into.
struct Surface {
	scene: Scene,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl Surface {
	fn apply_viewport(&self, vp: Viewport) {
		let (bw, bh) = vp.backing_size();
		self.canvas.set_width(bw);
		self.canvas.set_height(bh);
		let style = web_sys::HtmlElement::style(&self.canvas);
		let _ = style.set_property("width", &format!("{}px", vp.css_width));
		let _ = style.set_property("height", &format!("{}px", vp.css_height));
		let _ = self.ctx.set_transform(vp.dpr, 0.0, 0.0, vp.dpr, 0.0, 0.0);
	}
}

/// A running animation loop. Dropping it stops the loop.
struct BackgroundLoop {
	canvas: HtmlCanvasElement,
	lifecycle: Rc<RefCell<LoopLifecycle>>,
	frame_cb: FrameCallback,
	resize_cb: Option<Closure<dyn FnMut()>>,
}

impl BackgroundLoop {
	/// Size the canvas, seed the scene and schedule the first frame.
	/// Fails with the reason when there is no window, no 2D context or no
	/// measurable viewport.
	fn start(canvas: HtmlCanvasElement, theme: Theme, seed: u64) -> Result<Self, &'static str> {
		let window: Window = web_sys::window().ok_or("no window")?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
			.ok_or("no 2d context")?;
		let viewport = Viewport::measure(&window).ok_or("viewport size unavailable")?;

		let surface = Surface {
			scene: Scene::new(&theme, viewport, seed),
			canvas: canvas.clone(),
			ctx,
		};
		surface.apply_viewport(viewport);
		info!(
			"football-intel: {} background seeded with {} particles, {} drops",
			surface.scene.theme().name,
			surface.scene.particles.len(),
			surface.scene.drops.len()
		);

		let surface = Rc::new(RefCell::new(surface));
		let lifecycle = Rc::new(RefCell::new(LoopLifecycle::new()));
		let frame_cb: FrameCallback = Rc::new(RefCell::new(None));

		let surface_resize = surface.clone();
		let resize_cb = Closure::<dyn FnMut()>::new(move || {
			let Some(vp) = web_sys::window().as_ref().and_then(Viewport::measure) else {
				return;
			};
			let mut s = surface_resize.borrow_mut();
			s.apply_viewport(vp);
			s.scene.resize(vp);
		});
		if window
			.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
			.is_ok()
		{
			lifecycle.borrow_mut().listener_attached();
		}

		let (surface_anim, lifecycle_anim, frame_inner) =
			(surface.clone(), lifecycle.clone(), frame_cb.clone());
		*frame_cb.borrow_mut() = Some(Closure::new(move || {
			if !lifecycle_anim.borrow_mut().frame_started() {
				return;
			}
			{
				let mut s = surface_anim.borrow_mut();
				s.scene.tick(FRAME_DT);
				let s = &*s;
				render::render(&s.scene, &s.ctx, s.scene.theme());
			}
			request_frame(&frame_inner, &lifecycle_anim);
		}));
		request_frame(&frame_cb, &lifecycle);
		let _ = canvas.set_attribute(LOOP_STATE_ATTR, "running");

		Ok(Self {
			canvas,
			lifecycle,
			frame_cb,
			resize_cb: Some(resize_cb),
		})
	}

	/// Cancel the pending frame and detach the resize listener. Idempotent.
	fn stop(&mut self) {
		let teardown = self.lifecycle.borrow_mut().stop();
		if let Some(window) = web_sys::window() {
			if let Some(id) = teardown.cancel_frame {
				let _ = window.cancel_animation_frame(id);
			}
			if teardown.detach_resize {
				if let Some(cb) = &self.resize_cb {
					let _ = window
						.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
				}
			}
		}
		self.resize_cb = None;
		// Breaks the closure's reference to itself.
		self.frame_cb.borrow_mut().take();
		let _ = self.canvas.set_attribute(LOOP_STATE_ATTR, "stopped");
	}
}

impl Drop for BackgroundLoop {
	fn drop(&mut self) {
		self.stop();
	}
}

fn request_frame(cb: &FrameCallback, lifecycle: &Rc<RefCell<LoopLifecycle>>) {
	if !lifecycle.borrow().should_schedule() {
		return;
	}
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(ref cb) = *cb.borrow() {
		if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			if !lifecycle.borrow_mut().frame_requested(id) {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}
}

fn prefers_reduced_motion() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
		.is_some_and(|mq| mq.matches())
}

/// Full-viewport animated pitch drawn behind page content.
///
/// Without an explicit `theme` the calm variant is used when the browser
/// reports `prefers-reduced-motion`.
///
/// When the loop cannot start the canvas stays blank and the reason is
/// logged; nothing propagates to the host page.
#[component]
pub fn PitchBackground(#[prop(optional)] theme: Option<Theme>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running = StoredValue::new_local(None::<BackgroundLoop>);
	let theme = theme.unwrap_or_else(|| Theme::for_motion(prefers_reduced_motion()));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if running.with_value(|r| r.is_some()) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let seed = js_sys::Date::now() as u64;
		match BackgroundLoop::start(canvas, theme.clone(), seed) {
			Ok(bg) => running.set_value(Some(bg)),
			Err(reason) => warn!("football-intel: background left blank: {reason}"),
		}
	});

	on_cleanup(move || {
		running.try_update_value(|r| {
			if let Some(mut bg) = r.take() {
				bg.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="pitch-background"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -10; display: block; pointer-events: none;"
		/>
	}
}
