//! Canvas rendering for the pitch background.
//!
//! One frame is composed of ordered passes, back to front:
//! 1. Background fill and the static pitch outline
//! 2. Aurora bands (function of elapsed time)
//! 3. Rain streaks
//! 4. Particles and their proximity links
//! 5. Pulse rings
//! 6. Scanline sweep
//!
//! All coordinates are CSS pixels; the device pixel ratio is applied once by
//! the component through the context transform.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::scene::{Scene, particle_alpha};
use super::theme::{Color, Theme};

fn rgba(color: Color, alpha: f64) -> String {
	color.with_alpha(alpha.clamp(0.0, 1.0)).to_css()
}

/// Renders the complete scene to the canvas.
pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let vp = scene.viewport();
	if vp.css_width <= 0.0 || vp.css_height <= 0.0 {
		return;
	}

	draw_background(scene, ctx, theme);
	draw_pitch(scene, ctx, theme);
	draw_aurora(scene, ctx, theme);
	draw_rain(scene, ctx, theme);
	draw_particles(scene, ctx, theme);
	draw_pulses(scene, ctx, theme);

	if theme.scanline.enabled {
		draw_scanline(scene, ctx, theme);
	}
}

fn draw_background(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let vp = scene.viewport();
	ctx.set_fill_style_str(&theme.background.color.to_css());
	ctx.fill_rect(0.0, 0.0, vp.css_width, vp.css_height);
}

fn draw_pitch(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let vp = scene.viewport();
	let (w, h) = (vp.css_width, vp.css_height);
	let style = &theme.pitch;

	ctx.set_stroke_style_str(&style.line.to_css());
	ctx.set_line_width(style.line_width);

	ctx.stroke_rect(0.0, 0.0, w, h);

	ctx.begin_path();
	ctx.move_to(w / 2.0, 0.0);
	ctx.line_to(w / 2.0, h);
	ctx.stroke();

	ctx.begin_path();
	let _ = ctx.arc(w / 2.0, h / 2.0, h * style.centre_circle, 0.0, TAU);
	ctx.stroke();

	let (box_w, box_h) = (w * style.box_width, h * style.box_height);
	ctx.stroke_rect(0.0, h / 2.0 - box_h / 2.0, box_w, box_h);
	ctx.stroke_rect(w - box_w, h / 2.0 - box_h / 2.0, box_w, box_h);
}

fn draw_aurora(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let vp = scene.viewport();
	let style = &theme.aurora;
	let spread = style.amplitude * 2.0;

	for i in 0..style.bands {
		let y = scene.aurora_y(i);
		let gradient = ctx.create_linear_gradient(0.0, y - spread, 0.0, y + spread);
		let _ = gradient.add_color_stop(0.0, &rgba(style.color, 0.0));
		let _ = gradient.add_color_stop(0.4, &rgba(style.color, style.intensity));
		let _ = gradient.add_color_stop(0.6, &rgba(style.color, style.intensity));
		let _ = gradient.add_color_stop(1.0, &rgba(style.color, 0.0));

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill_rect(0.0, y - spread, vp.css_width, spread * 2.0);
	}
}

fn draw_rain(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.rain;
	ctx.set_line_width(style.line_width);

	for drop in &scene.drops {
		let gradient = ctx.create_linear_gradient(drop.x, drop.y, drop.x, drop.y + drop.length);
		let _ = gradient.add_color_stop(0.0, &rgba(style.color, drop.alpha));
		let _ = gradient.add_color_stop(0.5, &rgba(style.color, drop.alpha * 0.5));
		let _ = gradient.add_color_stop(1.0, &rgba(style.color, 0.0));

		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.begin_path();
		ctx.move_to(drop.x, drop.y);
		ctx.line_to(drop.x, drop.y + drop.length);
		ctx.stroke();
	}
}

fn draw_particles(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let color = theme.particles.color;

	for p in &scene.particles {
		ctx.set_fill_style_str(&rgba(color, particle_alpha(p) * 0.6));
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, TAU);
		ctx.fill();
	}

	ctx.set_line_width(0.5);
	for link in &scene.links {
		let (a, b) = (&scene.particles[link.from], &scene.particles[link.to]);
		let pulse = particle_alpha(a) / a.alpha.max(f64::EPSILON);
		ctx.set_stroke_style_str(&rgba(color, link.strength * 0.15 * pulse));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_pulses(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.pulses;
	ctx.set_line_width(style.line_width);

	for pulse in &scene.pulses {
		ctx.set_stroke_style_str(&rgba(style.color, pulse.alpha));
		ctx.begin_path();
		let _ = ctx.arc(pulse.x, pulse.y, pulse.radius, 0.0, TAU);
		ctx.stroke();
	}
}

fn draw_scanline(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let vp = scene.viewport();
	let style = &theme.scanline;
	let y = scene.scanline_y();

	let gradient =
		ctx.create_linear_gradient(0.0, y - style.half_height, 0.0, y + style.half_height);
	let _ = gradient.add_color_stop(0.0, &rgba(style.color, 0.0));
	let _ = gradient.add_color_stop(0.5, &rgba(style.color, style.intensity));
	let _ = gradient.add_color_stop(1.0, &rgba(style.color, 0.0));

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, y - style.half_height, vp.css_width, style.half_height * 2.0);
}
