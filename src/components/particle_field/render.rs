//! Glow rendering for the particle field.
//!
//! Each particle is drawn as three concentric flat circles with growing
//! radius and blur and shrinking alpha, composited additively so that
//! overlapping particles brighten each other.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::Color;
use super::particles::{Particle, ParticleField};

/// Radius multiples of the three glow rings.
const RING_FACTORS: [f64; 3] = [1.0, 2.8, 4.6];
const RING_ALPHA: f64 = 0.18;
const SHADOW_BLUR: f64 = 12.0;
const SHADOW_ALPHA: f64 = 0.8;

/// One filled, blurred circle.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowRing {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub fill_alpha: f64,
	pub blur: f64,
	pub shadow_alpha: f64,
}

/// Drawing operations the field needs from its target.
pub trait Surface {
	/// Clear the visible region, in layout units.
	fn clear(&mut self, width: f64, height: f64);
	/// Enter additive blending for the glow pass.
	fn begin_glow(&mut self);
	/// Fill one ring with the base colour.
	fn fill_ring(&mut self, color: Color, ring: &GlowRing);
	/// Restore the state saved by `begin_glow`.
	fn end_glow(&mut self);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn begin_glow(&mut self) {
		self.save();
		let _ = self.set_global_composite_operation("lighter");
	}

	fn fill_ring(&mut self, color: Color, ring: &GlowRing) {
		self.begin_path();
		self.set_fill_style_str(&color.to_css_rgba(ring.fill_alpha));
		self.set_shadow_blur(ring.blur);
		self.set_shadow_color(&color.to_css_rgba(ring.shadow_alpha));
		let _ = self.arc(ring.x, ring.y, ring.radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn end_glow(&mut self) {
		self.restore();
	}
}

/// The three glow rings for a particle at the given effective alpha.
pub fn glow_rings(p: &Particle, alpha: f64) -> [GlowRing; 3] {
	let mut i = 0;
	RING_FACTORS.map(|factor| {
		i += 1;
		GlowRing {
			x: p.x,
			y: p.y,
			radius: p.r * factor,
			fill_alpha: alpha * (RING_ALPHA / i as f64),
			blur: SHADOW_BLUR * factor,
			shadow_alpha: alpha * SHADOW_ALPHA,
		}
	})
}

/// Draws every particle of the field at its current position.
pub fn render<S: Surface + ?Sized>(
	surface: &mut S,
	field: &ParticleField,
	color: Color,
	opacity: f64,
	wall_ms: f64,
) {
	surface.clear(field.width(), field.height());
	surface.begin_glow();
	for p in &field.particles {
		let alpha = p.alpha(opacity, wall_ms);
		for ring in &glow_rings(p, alpha) {
			surface.fill_ring(color, ring);
		}
	}
	surface.end_glow();
}
