//! Particle state and per-frame simulation.

use fastrand::Rng;

use super::config::ParticleFieldConfig;

/// Layout area at which the configured particle count applies unscaled.
pub const REFERENCE_AREA: f64 = 1280.0 * 720.0;
/// Minimum number of particles regardless of surface size.
pub const MIN_PARTICLES: usize = 12;
/// Distance past an edge a particle travels before wrapping.
pub const WRAP_MARGIN: f64 = 10.0;
/// Longest frame delta (ms) fed to the simulation.
pub const MAX_FRAME_DELTA: f64 = 60.0;
/// Converts millisecond deltas into layout units per frame-ish.
const SPEED_SCALE: f64 = 0.06;
const MIN_AREA_FACTOR: f64 = 0.6;
const MAX_AREA_FACTOR: f64 = 2.2;
const MIN_RADIUS: f64 = 0.4;

/// A single glowing particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub r: f64,
	pub vx: f64,
	pub vy: f64,
	/// Not used for colour; the field draws with one base colour.
	pub hue: f64,
	/// Static opacity multiplier in [0.6, 1).
	pub life: f64,
	/// Pulse frequency in radians per millisecond, 0 for steady particles.
	pub blink: f64,
}

impl Particle {
	/// Brightness pulse in [0, 1], driven by wall-clock time.
	pub fn pulse(&self, wall_ms: f64) -> f64 {
		if self.blink == 0.0 {
			1.0
		} else {
			(wall_ms * self.blink).sin() * 0.5 + 0.5
		}
	}

	/// Effective alpha in [0, opacity].
	pub fn alpha(&self, opacity: f64, wall_ms: f64) -> f64 {
		opacity * self.life * self.pulse(wall_ms)
	}
}

/// Number of particles for a surface of the given layout size.
pub fn particle_count(base: usize, width: f64, height: f64) -> usize {
	let area_factor = (width * height) / REFERENCE_AREA;
	let scaled = (base as f64 * area_factor.clamp(MIN_AREA_FACTOR, MAX_AREA_FACTOR)).round();
	MIN_PARTICLES.max(scaled as usize)
}

fn uniform(rng: &mut Rng, min: f64, max: f64) -> f64 {
	rng.f64() * (max - min) + min
}

/// The full particle set for one surface size.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Generates a fresh particle set sized to the layout area.
	pub fn new(config: &ParticleFieldConfig, width: f64, height: f64, rng: &mut Rng) -> Self {
		let count = particle_count(config.particle_count, width, height);
		let mut particles = Vec::with_capacity(count);

		for _ in 0..count {
			particles.push(Particle {
				x: uniform(rng, 0.0, width),
				y: uniform(rng, 0.0, height),
				r: uniform(rng, MIN_RADIUS, config.max_size),
				vx: uniform(rng, -config.speed, config.speed),
				vy: uniform(rng, -config.speed, config.speed),
				hue: uniform(rng, 0.0, 360.0),
				life: uniform(rng, 0.6, 1.0),
				blink: if rng.f64() > 0.8 {
					uniform(rng, 0.05, 0.2)
				} else {
					0.0
				},
			});
		}

		Self {
			particles,
			width,
			height,
		}
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Advance every particle by `delta_ms` and wrap around the edges.
	pub fn step(&mut self, delta_ms: f64) {
		let scale = delta_ms * SPEED_SCALE;
		for p in &mut self.particles {
			p.x += p.vx * scale;
			p.y += p.vy * scale;

			// Wrap around screen edges
			if p.x < -WRAP_MARGIN {
				p.x = self.width + WRAP_MARGIN;
			}
			if p.x > self.width + WRAP_MARGIN {
				p.x = -WRAP_MARGIN;
			}
			if p.y < -WRAP_MARGIN {
				p.y = self.height + WRAP_MARGIN;
			}
			if p.y > self.height + WRAP_MARGIN {
				p.y = -WRAP_MARGIN;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(width: f64, height: f64, seed: u64) -> ParticleField {
		let mut rng = Rng::with_seed(seed);
		ParticleField::new(&ParticleFieldConfig::default(), width, height, &mut rng)
	}

	#[test]
	fn test_count_at_reference_area() {
		assert_eq!(particle_count(80, 1280.0, 720.0), 80);
	}

	#[test]
	fn test_count_clamped_low() {
		// 640x360 is a quarter of the reference area, clamped to 0.6
		assert_eq!(particle_count(80, 640.0, 360.0), 48);
	}

	#[test]
	fn test_count_clamped_high() {
		assert_eq!(particle_count(80, 3840.0, 2160.0), 176);
	}

	#[test]
	fn test_count_never_below_floor() {
		assert_eq!(particle_count(5, 1280.0, 720.0), MIN_PARTICLES);
		assert_eq!(particle_count(0, 0.0, 0.0), MIN_PARTICLES);
		for &(w, h) in &[(1.0, 1.0), (320.0, 480.0), (1920.0, 1080.0), (5000.0, 5000.0)] {
			let count = particle_count(80, w, h);
			assert!(count >= MIN_PARTICLES);
			let expected = (80.0 * ((w * h) / REFERENCE_AREA).clamp(0.6, 2.2)).round() as usize;
			assert_eq!(count, expected.max(MIN_PARTICLES));
		}
	}

	#[test]
	fn test_new_particles_within_ranges() {
		let f = field(800.0, 600.0, 7);
		assert_eq!(f.len(), particle_count(80, 800.0, 600.0));
		for p in &f.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((0.4..2.6).contains(&p.r));
			assert!((-0.6..0.6).contains(&p.vx));
			assert!((-0.6..0.6).contains(&p.vy));
			assert!((0.0..360.0).contains(&p.hue));
			assert!((0.6..1.0).contains(&p.life));
			assert!(p.blink == 0.0 || (0.05..0.2).contains(&p.blink));
		}
	}

	#[test]
	fn test_some_particles_blink() {
		let f = field(1280.0, 720.0, 42);
		let blinking = f.particles.iter().filter(|p| p.blink > 0.0).count();
		assert!(blinking > 0);
		assert!(blinking < f.len());
	}

	#[test]
	fn test_step_moves_by_scaled_velocity() {
		let mut f = field(1000.0, 1000.0, 1);
		f.particles.truncate(1);
		f.particles[0] = Particle {
			x: 500.0,
			y: 500.0,
			r: 1.0,
			vx: 0.5,
			vy: -0.25,
			hue: 0.0,
			life: 1.0,
			blink: 0.0,
		};
		f.step(16.0);
		assert!((f.particles[0].x - (500.0 + 0.5 * 16.0 * 0.06)).abs() < 1e-9);
		assert!((f.particles[0].y - (500.0 - 0.25 * 16.0 * 0.06)).abs() < 1e-9);
	}

	#[test]
	fn test_wrap_to_opposite_edge() {
		let mut f = field(100.0, 50.0, 3);
		f.particles.truncate(2);
		f.particles[0].x = -10.5;
		f.particles[0].vx = 0.0;
		f.particles[0].y = 20.0;
		f.particles[0].vy = 0.0;
		f.particles[1].x = 20.0;
		f.particles[1].vx = 0.0;
		f.particles[1].y = 60.5;
		f.particles[1].vy = 0.0;
		f.step(0.0);
		assert_eq!(f.particles[0].x, 110.0);
		assert_eq!(f.particles[1].y, -10.0);
	}

	#[test]
	fn test_positions_stay_within_margin() {
		let mut f = field(300.0, 200.0, 11);
		for p in &mut f.particles {
			p.vx *= 50.0;
			p.vy *= 50.0;
		}
		for delta in [0.0, 1.0, 16.7, 33.0, MAX_FRAME_DELTA] {
			for _ in 0..200 {
				f.step(delta);
				for p in &f.particles {
					assert!(p.x >= -WRAP_MARGIN && p.x <= 300.0 + WRAP_MARGIN);
					assert!(p.y >= -WRAP_MARGIN && p.y <= 200.0 + WRAP_MARGIN);
				}
			}
		}
	}

	#[test]
	fn test_pulse_and_alpha_bounds() {
		let f = field(1280.0, 720.0, 99);
		for p in &f.particles {
			for t in [0.0, 1.0, 123.456, 1.7e12, 9_999_999.0] {
				let pulse = p.pulse(t);
				assert!((0.0..=1.0).contains(&pulse));
				let alpha = p.alpha(0.9, t);
				assert!(alpha >= 0.0 && alpha <= 0.9);
			}
		}
	}

	#[test]
	fn test_steady_particle_pulse_is_one() {
		let p = Particle {
			x: 0.0,
			y: 0.0,
			r: 1.0,
			vx: 0.0,
			vy: 0.0,
			hue: 0.0,
			life: 0.8,
			blink: 0.0,
		};
		assert_eq!(p.pulse(12345.0), 1.0);
		assert!((p.alpha(0.5, 12345.0) - 0.4).abs() < 1e-12);
	}
}
