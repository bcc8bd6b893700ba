//! Entity pools for the animated background.
//!
//! Particles and rain drops are fixed-size pools sized from the viewport at
//! the last (re)size. Pulses are transient and pruned every tick.

use std::f64::consts::TAU;

use super::theme::Theme;
use super::viewport::Viewport;

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub alpha: f64,
	pub phase: f64, // drives the opacity pulse
}

/// A falling rain streak. Recycled in place once it leaves the bottom edge.
#[derive(Clone, Debug)]
pub struct RainDrop {
	pub x: f64,
	pub y: f64,
	pub speed: f64,
	pub length: f64,
	pub alpha: f64,
}

/// An expanding, fading ring.
#[derive(Clone, Debug)]
pub struct Pulse {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub alpha: f64,
}

/// A faint line between two nearby particles, recomputed each tick.
#[derive(Clone, Copy, Debug)]
pub struct Link {
	pub from: usize,
	pub to: usize,
	/// 0.0 at the link distance, 1.0 when overlapping.
	pub strength: f64,
}

/// Number of particles for a viewport, proportional to its area.
pub fn particle_count(theme: &Theme, viewport: &Viewport) -> usize {
	if theme.particles.area_per_particle <= 0.0 {
		return 0;
	}
	(viewport.area() / theme.particles.area_per_particle).floor() as usize
}

/// Number of rain drops for a viewport, proportional to its width.
pub fn drop_count(theme: &Theme, viewport: &Viewport) -> usize {
	if theme.rain.spacing <= 0.0 {
		return 0;
	}
	(viewport.css_width / theme.rain.spacing).floor() as usize
}

/// Opacity of a particle after applying its pulse.
pub fn particle_alpha(p: &Particle) -> f64 {
	p.alpha * (p.phase.sin() * 0.3 + 0.7)
}

/// All simulated state for one background canvas.
pub struct Scene {
	pub particles: Vec<Particle>,
	pub drops: Vec<RainDrop>,
	pub pulses: Vec<Pulse>,
	pub links: Vec<Link>,
	/// Seconds since the scene was created. Survives resizes.
	pub time: f64,
	viewport: Viewport,
	theme: Theme,
	rng: fastrand::Rng,
	pulse_timer: f64,
}

impl Scene {
	pub fn new(theme: &Theme, viewport: Viewport, seed: u64) -> Self {
		let mut scene = Self {
			particles: Vec::new(),
			drops: Vec::new(),
			pulses: Vec::new(),
			links: Vec::new(),
			time: 0.0,
			viewport,
			theme: theme.clone(),
			rng: fastrand::Rng::with_seed(seed),
			pulse_timer: 0.0,
		};
		scene.seed_pools();
		scene
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	/// Throw away every entity and rebuild the pools for the new bounds.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.seed_pools();
	}

	fn seed_pools(&mut self) {
		let (w, h) = (self.viewport.css_width, self.viewport.css_height);
		let ps = &self.theme.particles;
		let rs = &self.theme.rain;
		let rng = &mut self.rng;

		self.particles = (0..particle_count(&self.theme, &self.viewport))
			.map(|_| Particle {
				x: rng.f64() * w,
				y: rng.f64() * h,
				vx: (rng.f64() - 0.5) * 2.0 * ps.speed,
				vy: (rng.f64() - 0.5) * 2.0 * ps.speed,
				size: ps.size_min + rng.f64() * (ps.size_max - ps.size_min),
				alpha: ps.opacity_min + rng.f64() * (ps.opacity_max - ps.opacity_min),
				phase: rng.f64() * TAU,
			})
			.collect();

		// Drops start above the viewport and fall in.
		self.drops = (0..drop_count(&self.theme, &self.viewport))
			.map(|_| RainDrop {
				x: rng.f64() * w,
				y: rng.f64() * h - h,
				speed: rs.speed_min + rng.f64() * (rs.speed_max - rs.speed_min),
				length: rs.length_min + rng.f64() * (rs.length_max - rs.length_min),
				alpha: rs.opacity_min + rng.f64() * (rs.opacity_max - rs.opacity_min),
			})
			.collect();

		self.pulses.clear();
		self.links.clear();
		self.pulse_timer = 0.0;
	}

	/// Advance every entity by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		self.time += dt;
		self.update_particles(dt);
		self.update_links();
		self.update_drops(dt);
		self.update_pulses(dt);
	}

	fn update_particles(&mut self, dt: f64) {
		let (w, h) = (self.viewport.css_width, self.viewport.css_height);
		let rate = self.theme.particles.pulse_rate;
		for p in &mut self.particles {
			p.x += p.vx * dt * 60.0;
			p.y += p.vy * dt * 60.0;
			p.phase = (p.phase + dt * rate) % TAU;

			// Wrap around screen edges
			if p.x < 0.0 {
				p.x = w;
			} else if p.x > w {
				p.x = 0.0;
			}
			if p.y < 0.0 {
				p.y = h;
			} else if p.y > h {
				p.y = 0.0;
			}
		}
	}

	fn update_links(&mut self) {
		self.links.clear();
		let n = self.particles.len();
		if n < 2 {
			return;
		}
		let max = self.theme.particles.link_distance;
		for from in 0..n {
			for _ in 0..self.theme.particles.link_probes {
				let to = self.rng.usize(0..n);
				let (a, b) = (&self.particles[from], &self.particles[to]);
				let dist = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
				if dist > 0.0 && dist < max {
					self.links.push(Link {
						from,
						to,
						strength: 1.0 - dist / max,
					});
				}
			}
		}
	}

	fn update_drops(&mut self, dt: f64) {
		let (w, h) = (self.viewport.css_width, self.viewport.css_height);
		for drop in &mut self.drops {
			drop.y += drop.speed * dt * 60.0;
			if drop.y > h + drop.length {
				drop.y = -drop.length;
				drop.x = self.rng.f64() * w;
			}
		}
	}

	fn update_pulses(&mut self, dt: f64) {
		let style = &self.theme.pulses;

		for pulse in &mut self.pulses {
			pulse.radius += style.growth * dt;
			pulse.alpha -= style.decay * dt;
		}
		let cutoff = style.cutoff;
		self.pulses.retain(|p| p.alpha > cutoff);

		if !style.enabled || style.interval <= 0.0 {
			return;
		}
		self.pulse_timer += dt;
		while self.pulse_timer >= self.theme.pulses.interval {
			self.pulse_timer -= self.theme.pulses.interval;
			let x = self.rng.f64() * self.viewport.css_width;
			let y = self.rng.f64() * self.viewport.css_height;
			self.spawn_pulse(x, y);
		}
	}

	/// Start a ring at the given CSS position.
	pub fn spawn_pulse(&mut self, x: f64, y: f64) {
		self.pulses.push(Pulse {
			x,
			y,
			radius: 0.0,
			alpha: self.theme.pulses.start_alpha,
		});
	}

	/// Vertical centre of the scanline band at the current time.
	pub fn scanline_y(&self) -> f64 {
		let s = &self.theme.scanline;
		let span = self.viewport.css_height + s.half_height * 2.0;
		if span <= 0.0 {
			return 0.0;
		}
		(self.time * s.speed) % span - s.half_height
	}

	/// Vertical centre of aurora band `i` at the current time.
	pub fn aurora_y(&self, i: usize) -> f64 {
		let a = &self.theme.aurora;
		let h = self.viewport.css_height;
		let base = h * 0.2 + i as f64 * (h / a.bands.max(1) as f64);
		base + (self.time * a.speed + i as f64 * 2.0).sin() * a.amplitude
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DT: f64 = 0.016;

	fn scene(w: f64, h: f64) -> Scene {
		Scene::new(&Theme::matrix(), Viewport::new(w, h, 1.0), 7)
	}

	#[test]
	fn pool_sizes_follow_viewport() {
		let s = scene(1500.0, 1000.0);
		assert_eq!(s.particles.len(), 100);
		assert_eq!(s.drops.len(), 18);
	}

	#[test]
	fn empty_viewport_has_no_entities() {
		let mut s = scene(0.0, 0.0);
		s.tick(DT);
		assert!(s.particles.is_empty());
		assert!(s.drops.is_empty());
		assert!(s.links.is_empty());
	}

	#[test]
	fn resize_reseeds_within_new_bounds() {
		let mut s = scene(1920.0, 1080.0);
		for _ in 0..30 {
			s.tick(DT);
		}
		let small = Viewport::new(600.0, 400.0, 2.0);
		s.resize(small);
		assert_eq!(s.particles.len(), particle_count(s.theme(), &small));
		assert_eq!(s.drops.len(), 7);
		assert!(s.pulses.is_empty());
		for p in &s.particles {
			assert!(small.contains(p.x, p.y), "stale particle at {}, {}", p.x, p.y);
		}
		for d in &s.drops {
			assert!((0.0..=600.0).contains(&d.x));
		}
	}

	#[test]
	fn particles_stay_inside_after_many_frames() {
		let mut s = scene(800.0, 600.0);
		for _ in 0..2_000 {
			s.tick(DT);
		}
		for p in &s.particles {
			assert!(s.viewport().contains(p.x, p.y));
		}
	}

	#[test]
	fn every_drop_falls_at_least_the_minimum_speed() {
		for seed in [0, 42, 7_777] {
			let theme = Theme::matrix();
			let s = Scene::new(&theme, Viewport::new(1920.0, 1080.0, 1.0), seed);
			for d in &s.drops {
				assert!(d.speed >= theme.rain.speed_min, "seed {seed}: {}", d.speed);
				assert!(d.speed <= theme.rain.speed_max);
			}
		}
	}

	#[test]
	fn drops_recycle_to_the_top() {
		let mut s = scene(800.0, 600.0);
		s.drops[0].y = 600.0 + s.drops[0].length + 1.0;
		s.drops[0].speed = 0.0;
		s.tick(DT);
		assert_eq!(s.drops[0].y, -s.drops[0].length);
		assert!((0.0..=800.0).contains(&s.drops[0].x));
	}

	#[test]
	fn pulses_are_pruned_and_bounded() {
		let mut s = scene(800.0, 600.0);
		s.spawn_pulse(10.0, 10.0);
		let mut peak = 0;
		// Ten simulated minutes.
		for _ in 0..(600.0 / DT) as usize {
			s.tick(DT);
			peak = peak.max(s.pulses.len());
			assert!(s.pulses.iter().all(|p| p.alpha > s.theme().pulses.cutoff));
		}
		let style = &s.theme().pulses;
		let lifetime = style.start_alpha / style.decay;
		assert!(peak <= (lifetime / style.interval).ceil() as usize + 1);
	}

	#[test]
	fn pulse_radius_grows_while_alpha_decays() {
		let mut theme = Theme::matrix();
		theme.pulses.enabled = false;
		let mut s = Scene::new(&theme, Viewport::new(400.0, 400.0, 1.0), 1);
		s.spawn_pulse(200.0, 200.0);
		s.tick(0.5);
		let (r1, a1) = (s.pulses[0].radius, s.pulses[0].alpha);
		s.tick(0.5);
		assert!(s.pulses[0].radius > r1);
		assert!(s.pulses[0].alpha < a1);
		for _ in 0..10 {
			s.tick(0.5);
		}
		assert!(s.pulses.is_empty());
	}

	#[test]
	fn links_respect_distance() {
		let mut s = scene(1200.0, 900.0);
		s.tick(DT);
		let max = s.theme().particles.link_distance;
		for link in &s.links {
			let (a, b) = (&s.particles[link.from], &s.particles[link.to]);
			let dist = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
			assert!(dist < max);
			assert!(link.strength > 0.0 && link.strength <= 1.0);
		}
	}

	#[test]
	fn pulse_alpha_stays_in_range() {
		let s = scene(800.0, 600.0);
		for p in &s.particles {
			let a = particle_alpha(p);
			assert!(a >= p.alpha * 0.4 - 1e-9 && a <= p.alpha + 1e-9);
		}
	}
}
