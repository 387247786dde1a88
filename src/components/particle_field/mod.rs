//! Ambient neon particle field.
//!
//! Draws a drifting, glowing particle field on an HTML canvas with:
//! - Particle density scaled to the visible area
//! - Crisp output on high-density displays
//! - Toroidal edge wrapping and optional per-particle pulsing
//! - Additive blending for the glow
//!
//! # Example
//!
//! ```ignore
//! use exmade_site::components::particle_field::{Color, ParticleFieldCanvas, ParticleFieldConfig};
//!
//! let config = ParticleFieldConfig::default().with_color(Color::GLASS);
//! view! { <ParticleFieldCanvas config=config /> }
//! ```

mod component;
pub mod config;
mod frame_loop;
pub mod particles;
pub mod render;
pub mod renderer;

pub use component::ParticleFieldCanvas;
pub use config::{Color, ParticleFieldConfig};
pub use frame_loop::FrameLoop;
pub use renderer::{ParticleRenderer, RendererState, Viewport};
