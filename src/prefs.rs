//! Persisted user preferences: colour theme and page brightness.
//!
//! Values are stored as strings under fixed keys in a [`KeyValueStore`]. In
//! the browser that is `window.localStorage`; [`MemoryStore`] backs tests and
//! hosts without storage. Missing or invalid values fall back to defaults.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;
use web_sys::Storage;

use crate::components::particle_field::Color;
use crate::error::ParseError;

/// Storage key for the theme.
pub const THEME_KEY: &str = "exmade_theme";
/// Storage key for the brightness percentage.
pub const BRIGHTNESS_KEY: &str = "exmade_brightness";

/// Visual theme of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Red neon glow.
	#[default]
	Neon,
	/// Frosted glass with a neutral glow.
	Glass,
}

impl Theme {
	pub const ALL: [Theme; 2] = [Theme::Neon, Theme::Glass];

	/// Value used in storage and as the CSS class on the page root.
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Neon => "neon",
			Theme::Glass => "glass",
		}
	}

	/// Label shown in the theme picker.
	pub fn label(self) -> &'static str {
		match self {
			Theme::Neon => "Neon (default)",
			Theme::Glass => "Glass",
		}
	}

	/// Particle glow colour for this theme.
	pub fn particle_color(self) -> Color {
		match self {
			Theme::Neon => Color::NEON,
			Theme::Glass => Color::GLASS,
		}
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Theme {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"neon" => Ok(Theme::Neon),
			"glass" => Ok(Theme::Glass),
			other => Err(ParseError::UnknownTheme(other.to_string())),
		}
	}
}

/// Page brightness as a percentage in [`Brightness::MIN`, `Brightness::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Brightness(u16);

impl Brightness {
	pub const MIN: u16 = 50;
	pub const MAX: u16 = 150;

	/// Clamps `percent` into the supported range.
	pub fn new(percent: i64) -> Self {
		Self(percent.clamp(Self::MIN as i64, Self::MAX as i64) as u16)
	}

	pub fn percent(self) -> u16 {
		self.0
	}

	/// CSS `filter` value for the page root.
	pub fn css_filter(self) -> String {
		format!("brightness({}%)", self.0)
	}
}

impl Default for Brightness {
	fn default() -> Self {
		Self(100)
	}
}

impl fmt::Display for Brightness {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for Brightness {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::new(s.trim().parse::<i64>()?))
	}
}

/// String key/value persistence.
pub trait KeyValueStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Inert when storage is unavailable (e.g. blocked
/// by privacy settings).
#[derive(Clone, Debug, Default)]
pub struct LocalStorage {
	storage: Option<Storage>,
}

impl LocalStorage {
	pub fn new() -> Self {
		let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
		if storage.is_none() {
			debug!("exmade-site: localStorage unavailable, preferences will not persist");
		}
		Self { storage }
	}
}

impl KeyValueStore for LocalStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.storage.as_ref()?.get_item(key).ok().flatten()
	}

	fn set(&self, key: &str, value: &str) {
		if let Some(storage) = &self.storage {
			let _ = storage.set_item(key, value);
		}
	}
}

/// In-process store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
	values: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.values.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.values.borrow_mut().insert(key.to_string(), value.to_string());
	}
}

/// Typed access to the persisted preferences.
#[derive(Clone)]
pub struct PreferenceStore {
	backend: Rc<dyn KeyValueStore>,
}

impl PreferenceStore {
	pub fn new(backend: impl KeyValueStore + 'static) -> Self {
		Self {
			backend: Rc::new(backend),
		}
	}

	/// Store backed by `window.localStorage`.
	pub fn browser() -> Self {
		Self::new(LocalStorage::new())
	}

	fn read<T: FromStr<Err = ParseError> + Default>(&self, key: &str) -> T {
		match self.backend.get(key).map(|raw| raw.parse::<T>()) {
			Some(Ok(value)) => value,
			Some(Err(e)) => {
				debug!("exmade-site: ignoring stored {}: {}", key, e);
				T::default()
			}
			None => T::default(),
		}
	}

	pub fn theme(&self) -> Theme {
		self.read(THEME_KEY)
	}

	pub fn set_theme(&self, theme: Theme) {
		self.backend.set(THEME_KEY, theme.as_str());
	}

	pub fn brightness(&self) -> Brightness {
		self.read(BRIGHTNESS_KEY)
	}

	pub fn set_brightness(&self, brightness: Brightness) {
		self.backend.set(BRIGHTNESS_KEY, &brightness.to_string());
	}
}

impl fmt::Debug for PreferenceStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PreferenceStore")
			.field("theme", &self.theme())
			.field("brightness", &self.brightness())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn store() -> (MemoryStore, PreferenceStore) {
		let backend = MemoryStore::default();
		(backend.clone(), PreferenceStore::new(backend))
	}

	#[test]
	fn test_defaults_when_empty() {
		let (_, prefs) = store();
		assert_eq!(prefs.theme(), Theme::Neon);
		assert_eq!(prefs.brightness().percent(), 100);
	}

	#[test]
	fn test_round_trip_through_backend() {
		let (backend, prefs) = store();
		prefs.set_theme(Theme::Glass);
		prefs.set_brightness(Brightness::new(135));
		assert_eq!(backend.get(THEME_KEY).as_deref(), Some("glass"));
		assert_eq!(backend.get(BRIGHTNESS_KEY).as_deref(), Some("135"));
		assert_eq!(prefs.theme(), Theme::Glass);
		assert_eq!(prefs.brightness(), Brightness::new(135));
	}

	#[test]
	fn test_invalid_values_fall_back() {
		let (backend, prefs) = store();
		backend.set(THEME_KEY, "sepia");
		backend.set(BRIGHTNESS_KEY, "bright");
		assert_eq!(prefs.theme(), Theme::Neon);
		assert_eq!(prefs.brightness(), Brightness::default());
	}

	#[test]
	fn test_brightness_clamped() {
		assert_eq!("20".parse::<Brightness>().unwrap().percent(), 50);
		assert_eq!("400".parse::<Brightness>().unwrap().percent(), 150);
		assert_eq!(Brightness::new(120).css_filter(), "brightness(120%)");
	}

	#[test]
	fn test_theme_switch_changes_particle_color() {
		let (backend, prefs) = store();
		let theme = prefs.theme();
		assert_eq!(theme.particle_color().to_string(), "255,0,0");

		prefs.set_theme(Theme::Glass);
		assert_eq!(prefs.theme().particle_color().to_string(), "160,160,160");
		assert_eq!(backend.get(THEME_KEY).as_deref(), Some("glass"));
	}

	#[test]
	fn test_theme_parse() {
		assert_eq!(" glass ".parse::<Theme>(), Ok(Theme::Glass));
		assert_eq!(
			"dark".parse::<Theme>(),
			Err(ParseError::UnknownTheme("dark".into()))
		);
		for theme in Theme::ALL {
			assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
		}
	}
}
