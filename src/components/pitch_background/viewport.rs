//! Viewport measurement and device-pixel-ratio scaling.

/// CSS size of the canvas plus the device pixel ratio it is drawn at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub css_width: f64,
	pub css_height: f64,
	pub dpr: f64,
}

impl Viewport {
	/// Non-finite or non-positive inputs collapse to an empty viewport with dpr 1.
	pub fn new(css_width: f64, css_height: f64, dpr: f64) -> Self {
		let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
		let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
		Self {
			css_width: clean(css_width),
			css_height: clean(css_height),
			dpr,
		}
	}

	/// Backing store size in device pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.css_width * self.dpr).round() as u32,
			(self.css_height * self.dpr).round() as u32,
		)
	}

	pub fn area(&self) -> f64 {
		self.css_width * self.css_height
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..=self.css_width).contains(&x) && (0.0..=self.css_height).contains(&y)
	}

	/// Read the current window size and pixel ratio.
	pub fn measure(window: &web_sys::Window) -> Option<Self> {
		let w = window.inner_width().ok()?.as_f64()?;
		let h = window.inner_height().ok()?.as_f64()?;
		Some(Self::new(w, h, window.device_pixel_ratio()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn backing_store_scales_with_dpr() {
		let vp = Viewport::new(1280.0, 720.0, 2.0);
		assert_eq!(vp.backing_size(), (2560, 1440));
		assert_eq!(vp.area(), 1280.0 * 720.0);
	}

	#[test]
	fn bad_inputs_are_sanitized() {
		let vp = Viewport::new(f64::NAN, -5.0, 0.0);
		assert_eq!(vp.css_width, 0.0);
		assert_eq!(vp.css_height, 0.0);
		assert_eq!(vp.dpr, 1.0);
		assert_eq!(vp.backing_size(), (0, 0));
	}
}
