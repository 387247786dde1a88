//! exmade-site: link-hub landing site with an ambient neon particle field.
//!
//! This crate provides the client-side rendered pages of the site: a landing
//! page with theme and brightness controls and a page of external links, both
//! drawn over an animated canvas particle field.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod prefs;
pub mod route;

pub use components::particle_field::{ParticleFieldCanvas, ParticleFieldConfig};
pub use config::{LinkEntry, SiteConfig};
pub use prefs::{Brightness, PreferenceStore, Theme};
pub use route::Route;

use pages::{HomePage, MethodsPage};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("exmade-site: logging initialized");
}

/// Main application component.
/// Resolves the page from the location and injects configuration and the
/// preference store into it.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let site = SiteConfig::load();
	let prefs = PreferenceStore::browser();
	let route = Route::current();
	info!("exmade-site: rendering {:?}", route);

	let page = match route {
		Route::Home => view! { <HomePage prefs=prefs title=site.title.clone() /> }.into_any(),
		Route::Methods => view! { <MethodsPage prefs=prefs links=site.links /> }.into_any(),
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=site.title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{page}
	}
}
