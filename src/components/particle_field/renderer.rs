//! Renderer lifecycle: owns the particle field between mount and teardown.
//!
//! The renderer is driven from outside: the browser frame loop feeds it
//! display-refresh timestamps and window resizes. Keeping the state machine
//! free of browser calls lets it run under native tests.

use fastrand::Rng;

use super::config::ParticleFieldConfig;
use super::particles::{MAX_FRAME_DELTA, ParticleField};
use super::render::{self, Surface};

/// Lifecycle states of a [`ParticleRenderer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererState {
	/// Created but not mounted, or mounted without a drawing surface.
	Uninitialized,
	/// Animating.
	Active,
	/// Released; no further work is done.
	TornDown,
}

/// Layout size of the surface and the display density it is shown at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Layout (CSS pixel) width.
	pub width: f64,
	/// Layout (CSS pixel) height.
	pub height: f64,
	/// Device pixels per layout pixel.
	pub device_pixel_ratio: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
		Self {
			width,
			height,
			device_pixel_ratio,
		}
	}

	/// Pixel ratio used for the backing store, never below 1.
	pub fn scale(&self) -> f64 {
		self.device_pixel_ratio.max(1.0)
	}

	/// Backing store size in device pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		let scale = self.scale();
		(
			(self.width * scale).round().max(0.0) as u32,
			(self.height * scale).round().max(0.0) as u32,
		)
	}
}

/// Simulation and draw state for one mounted particle field.
pub struct ParticleRenderer {
	config: ParticleFieldConfig,
	state: RendererState,
	field: Option<ParticleField>,
	viewport: Option<Viewport>,
	last_tick: Option<f64>,
	rng: Rng,
}

impl ParticleRenderer {
	pub fn new(config: ParticleFieldConfig, rng: Rng) -> Self {
		Self {
			config,
			state: RendererState::Uninitialized,
			field: None,
			viewport: None,
			last_tick: None,
			rng,
		}
	}

	pub fn state(&self) -> RendererState {
		self.state
	}

	pub fn config(&self) -> &ParticleFieldConfig {
		&self.config
	}

	pub fn field(&self) -> Option<&ParticleField> {
		self.field.as_ref()
	}

	pub fn viewport(&self) -> Option<Viewport> {
		self.viewport
	}

	/// Mounts onto a surface of the given size. With no surface the renderer
	/// stays inert. Returns whether it became active.
	pub fn mount(&mut self, viewport: Option<Viewport>) -> bool {
		if self.state != RendererState::Uninitialized {
			return self.state == RendererState::Active;
		}
		let Some(viewport) = viewport else {
			log::debug!("exmade-site: no drawing surface, particle field stays inert");
			return false;
		};
		self.state = RendererState::Active;
		self.resize(viewport);
		true
	}

	/// Replaces the particle set for a new surface size. Ignored unless active.
	pub fn resize(&mut self, viewport: Viewport) -> bool {
		if self.state != RendererState::Active {
			return false;
		}
		let field = ParticleField::new(&self.config, viewport.width, viewport.height, &mut self.rng);
		log::debug!(
			"exmade-site: particle field {}x{} @{}x, {} particles",
			viewport.width,
			viewport.height,
			viewport.scale(),
			field.len()
		);
		self.field = Some(field);
		self.viewport = Some(viewport);
		true
	}

	/// Frame delta in milliseconds, clamped to [`MAX_FRAME_DELTA`].
	fn delta(&mut self, tick_ms: f64) -> f64 {
		let last = self.last_tick.unwrap_or(tick_ms);
		self.last_tick = Some(tick_ms);
		(tick_ms - last).min(MAX_FRAME_DELTA)
	}

	/// Advances and draws one frame. Returns whether anything was drawn.
	pub fn frame<S: Surface + ?Sized>(&mut self, tick_ms: f64, wall_ms: f64, surface: &mut S) -> bool {
		if self.state != RendererState::Active {
			return false;
		}
		let delta = self.delta(tick_ms);
		let Some(field) = self.field.as_mut() else {
			return false;
		};
		field.step(delta);
		render::render(surface, field, self.config.color, self.config.opacity, wall_ms);
		true
	}

	/// Releases the particle set. Later frames and resizes are no-ops.
	pub fn teardown(&mut self) {
		if self.state == RendererState::TornDown {
			return;
		}
		self.state = RendererState::TornDown;
		self.field = None;
		self.last_tick = None;
		log::debug!("exmade-site: particle field torn down");
	}
}
