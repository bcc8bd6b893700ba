//! Visual theming for the pitch background.
//!
//! Colours and tuning values for every draw pass. The numbers are visual
//! tuning only: density scales with viewport area and transient rings fade
//! out within a few seconds, the exact constants are free to change.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Flat fill behind everything else.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
}

/// Static pitch outline: touchlines, halfway line, centre circle, penalty boxes.
#[derive(Clone, Debug)]
pub struct PitchStyle {
	pub line: Color,
	pub line_width: f64,
	/// Centre circle radius as a fraction of pitch height.
	pub centre_circle: f64,
	/// Penalty box width as a fraction of pitch width.
	pub box_width: f64,
	/// Penalty box height as a fraction of pitch height.
	pub box_height: f64,
}

/// Slow horizontal light bands drifting up and down.
#[derive(Clone, Debug)]
pub struct AuroraStyle {
	pub color: Color,
	pub bands: usize,
	/// Peak alpha in the middle of a band.
	pub intensity: f64,
	/// Vertical swing in CSS pixels.
	pub amplitude: f64,
	/// Angular speed of the swing (radians per second).
	pub speed: f64,
}

/// Ambient drifting particles.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	pub color: Color,
	/// One particle per this many square CSS pixels.
	pub area_per_particle: f64,
	pub size_min: f64,
	pub size_max: f64,
	/// Max velocity per axis, CSS pixels per 60Hz frame.
	pub speed: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Phase advance per second for the opacity pulse.
	pub pulse_rate: f64,
	/// Links are drawn between particles closer than this.
	pub link_distance: f64,
	/// Random partners probed per particle per frame.
	pub link_probes: usize,
}

/// Falling rain streaks.
#[derive(Clone, Debug)]
pub struct RainStyle {
	pub color: Color,
	/// One drop per this many CSS pixels of viewport width.
	pub spacing: f64,
	/// Fall speed range, CSS pixels per 60Hz frame.
	pub speed_min: f64,
	pub speed_max: f64,
	pub length_min: f64,
	pub length_max: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	pub line_width: f64,
}

/// Expanding rings spawned at random spots.
#[derive(Clone, Debug)]
pub struct PulseStyle {
	pub enabled: bool,
	pub color: Color,
	/// Seconds between spawns.
	pub interval: f64,
	pub start_alpha: f64,
	/// Radius growth in CSS pixels per second.
	pub growth: f64,
	/// Alpha lost per second.
	pub decay: f64,
	/// Rings at or below this alpha are dropped.
	pub cutoff: f64,
	pub line_width: f64,
}

/// A soft band sweeping down the screen.
#[derive(Clone, Debug)]
pub struct ScanlineStyle {
	pub enabled: bool,
	pub color: Color,
	pub intensity: f64,
	/// CSS pixels per second.
	pub speed: f64,
	/// Half height of the band.
	pub half_height: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub pitch: PitchStyle,
	pub aurora: AuroraStyle,
	pub particles: ParticleStyle,
	pub rain: RainStyle,
	pub pulses: PulseStyle,
	pub scanline: ScanlineStyle,
}

impl Theme {
	/// Dark green "matrix" look used across the site.
	pub fn matrix() -> Self {
		let matrix_green = Color::rgb(0, 169, 21);
		Self {
			name: "matrix",
			background: BackgroundStyle {
				color: Color::rgb(0, 7, 0),
			},
			pitch: PitchStyle {
				line: matrix_green.with_alpha(0.35),
				line_width: 1.0,
				centre_circle: 0.15,
				box_width: 0.18,
				box_height: 0.32,
			},
			aurora: AuroraStyle {
				color: Color::rgb(0, 101, 29),
				bands: 4,
				intensity: 0.06,
				amplitude: 120.0,
				speed: 0.4,
			},
			particles: ParticleStyle {
				color: matrix_green,
				area_per_particle: 15_000.0,
				size_min: 1.0,
				size_max: 3.0,
				speed: 0.25,
				opacity_min: 0.3,
				opacity_max: 0.8,
				pulse_rate: 3.0,
				link_distance: 120.0,
				link_probes: 6,
			},
			rain: RainStyle {
				color: matrix_green,
				spacing: 80.0,
				speed_min: 0.5,
				speed_max: 2.0,
				length_min: 40.0,
				length_max: 120.0,
				opacity_min: 0.1,
				opacity_max: 0.4,
				line_width: 1.5,
			},
			pulses: PulseStyle {
				enabled: true,
				color: matrix_green,
				interval: 1.5,
				start_alpha: 0.35,
				growth: 60.0,
				decay: 0.12,
				cutoff: 0.005,
				line_width: 1.0,
			},
			scanline: ScanlineStyle {
				enabled: true,
				color: matrix_green,
				intensity: 0.03,
				speed: 50.0,
				half_height: 100.0,
			},
		}
	}

	/// Same layout without the moving overlays, for reduced-motion contexts.
	pub fn calm() -> Self {
		let mut theme = Self::matrix();
		theme.name = "calm";
		theme.pulses.enabled = false;
		theme.scanline.enabled = false;
		theme.rain.speed_min = 0.2;
		theme.rain.speed_max = 0.6;
		theme
	}

	/// [`Theme::calm`] when the user asked for reduced motion, else [`Theme::matrix`].
	pub fn for_motion(reduced: bool) -> Self {
		if reduced { Self::calm() } else { Self::matrix() }
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::matrix()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(0, 169, 21).to_css(), "#00a915");
		assert_eq!(
			Color::rgb(0, 169, 21).with_alpha(0.5).to_css(),
			"rgba(0, 169, 21, 0.5)"
		);
	}

	#[test]
	fn calm_theme_turns_off_overlays() {
		let calm = Theme::calm();
		assert!(!calm.pulses.enabled);
		assert!(!calm.scanline.enabled);
		assert_eq!(calm.particles.area_per_particle, Theme::matrix().particles.area_per_particle);
	}

	#[test]
	fn reduced_motion_picks_calm() {
		assert_eq!(Theme::for_motion(true).name, "calm");
		assert_eq!(Theme::for_motion(false).name, "matrix");
	}

	#[test]
	fn rain_speed_ranges_are_ordered() {
		for theme in [Theme::matrix(), Theme::calm()] {
			assert!(theme.rain.speed_min > 0.0, "{}", theme.name);
			assert!(theme.rain.speed_min <= theme.rain.speed_max, "{}", theme.name);
		}
	}
}
