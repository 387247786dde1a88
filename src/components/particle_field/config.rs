//! Render configuration for the particle field.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Base colour of the field as three numeric channels.
///
/// Channels are not range-checked; out-of-range values are handed to the
/// canvas as-is, which clamps them when parsing the CSS colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: f64,
	pub g: f64,
	pub b: f64,
}

impl Color {
	pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
		Self { r, g, b }
	}

	/// Neon red, the default glow colour.
	pub const NEON: Color = Color::rgb(255.0, 0.0, 0.0);

	/// Neutral grey used by the glass theme.
	pub const GLASS: Color = Color::rgb(160.0, 160.0, 160.0);

	/// CSS `rgba()` string with the given alpha.
	pub fn to_css_rgba(self, alpha: f64) -> String {
		format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::NEON
	}
}

/// Formats as the comma-separated channel list, e.g. `255,0,0`.
impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{},{},{}", self.r, self.g, self.b)
	}
}

impl FromStr for Color {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let parts: Vec<&str> = s.split(',').map(str::trim).collect();
		if parts.len() != 3 {
			return Err(ParseError::ChannelCount(parts.len()));
		}
		Ok(Self {
			r: parts[0].parse()?,
			g: parts[1].parse()?,
			b: parts[2].parse()?,
		})
	}
}

/// Configuration supplied by the host page. Immutable for one mount.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleFieldConfig {
	/// Base glow colour.
	pub color: Color,
	/// Particle count at the reference area (1280x720).
	pub particle_count: usize,
	/// Upper bound for particle radius.
	pub max_size: f64,
	/// Maximum per-axis velocity.
	pub speed: f64,
	/// Base opacity, multiplied by each particle's life and pulse.
	pub opacity: f64,
}

impl Default for ParticleFieldConfig {
	fn default() -> Self {
		Self {
			color: Color::default(),
			particle_count: 80,
			max_size: 2.6,
			speed: 0.6,
			opacity: 0.9,
		}
	}
}

impl ParticleFieldConfig {
	pub fn with_color(self, color: Color) -> Self {
		Self { color, ..self }
	}

	/// Parses a `"r,g,b"` colour, keeping the current colour if it is malformed.
	pub fn with_color_str(self, color: &str) -> Self {
		match color.parse() {
			Ok(color) => Self { color, ..self },
			Err(e) => {
				log::warn!("exmade-site: ignoring particle color '{}': {}", color, e);
				self
			}
		}
	}

	pub fn with_particle_count(self, particle_count: usize) -> Self {
		Self {
			particle_count,
			..self
		}
	}

	pub fn with_max_size(self, max_size: f64) -> Self {
		Self { max_size, ..self }
	}

	pub fn with_speed(self, speed: f64) -> Self {
		Self { speed, ..self }
	}

	pub fn with_opacity(self, opacity: f64) -> Self {
		Self { opacity, ..self }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = ParticleFieldConfig::default();
		assert_eq!(config.color.to_string(), "255,0,0");
		assert_eq!(config.particle_count, 80);
		assert!((config.max_size - 2.6).abs() < 1e-9);
		assert!((config.speed - 0.6).abs() < 1e-9);
		assert!((config.opacity - 0.9).abs() < 1e-9);
	}

	#[test]
	fn test_parse_color_with_spaces() {
		let color: Color = " 160, 160 ,160".parse().unwrap();
		assert_eq!(color, Color::GLASS);
	}

	#[test]
	fn test_parse_color_rejects_wrong_arity() {
		assert_eq!("1,2".parse::<Color>(), Err(ParseError::ChannelCount(2)));
		assert!(matches!("1,x,3".parse::<Color>(), Err(ParseError::Channel(_))));
	}

	#[test]
	fn test_malformed_color_keeps_previous() {
		let config = ParticleFieldConfig::default().with_color_str("not a colour");
		assert_eq!(config.color, Color::NEON);
		let config = config.with_color_str("160,160,160");
		assert_eq!(config.color, Color::GLASS);
	}

	#[test]
	fn test_css_rgba() {
		assert_eq!(Color::NEON.to_css_rgba(0.5), "rgba(255,0,0,0.5)");
	}
}
