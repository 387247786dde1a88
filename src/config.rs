//! Site configuration embedded in the host page.
//!
//! Deployments may ship a `<script id="site-config" type="application/json">`
//! element overriding the brand title and the link list. Every field is
//! optional; anything missing keeps its built-in default.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// An external link shown on the methods page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LinkEntry {
	/// Button text.
	pub label: String,
	/// Absolute destination URL, opened in a new tab.
	pub url: String,
}

impl LinkEntry {
	fn new(label: &str, url: &str) -> Self {
		Self {
			label: label.to_string(),
			url: url.to_string(),
		}
	}
}

/// Built-in link list used when the page supplies none.
pub fn default_links() -> Vec<LinkEntry> {
	vec![
		LinkEntry::new("Docs", "https://example.com/docs"),
		LinkEntry::new("Source", "https://example.com/source"),
		LinkEntry::new("Status", "https://example.com/status"),
		LinkEntry::new("Contact", "https://example.com/contact"),
	]
}

/// Site-wide settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Brand shown in the home page header.
	pub title: String,
	/// Entries on the methods page.
	pub links: Vec<LinkEntry>,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			title: "exmadeW".to_string(),
			links: default_links(),
		}
	}
}

impl SiteConfig {
	/// Parses configuration JSON, falling back to defaults when malformed.
	pub fn from_json(json: &str) -> Self {
		match serde_json::from_str::<SiteConfig>(json) {
			Ok(config) => {
				info!(
					"exmade-site: loaded site config with {} links",
					config.links.len()
				);
				config
			}
			Err(e) => {
				warn!("exmade-site: failed to parse site config: {}", e);
				Self::default()
			}
		}
	}

	/// Loads the configuration from the host page, if present.
	pub fn load() -> Self {
		Self::read_element().map_or_else(Self::default, |json| Self::from_json(&json))
	}

	fn read_element() -> Option<String> {
		let window: Window = web_sys::window()?;
		let document = window.document()?;
		let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
		let script: HtmlScriptElement = element.dyn_into().ok()?;
		script.text().ok()
	}
}
