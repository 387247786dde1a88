//! Link page: a grid of external links over the particle field.

use leptos::prelude::*;

use crate::components::particle_field::{ParticleFieldCanvas, ParticleFieldConfig};
use crate::config::LinkEntry;
use crate::prefs::{PreferenceStore, Theme};
use crate::route::Route;

/// Particle preset for the methods page.
pub fn methods_particles(theme: Theme) -> ParticleFieldConfig {
	ParticleFieldConfig::default()
		.with_color(theme.particle_color())
		.with_particle_count(90)
		.with_max_size(3.0)
		.with_speed(0.7)
		.with_opacity(0.9)
}

/// The link page. Reads the theme once; brightness is not applied here.
#[component]
pub fn MethodsPage(prefs: PreferenceStore, links: Vec<LinkEntry>) -> impl IntoView {
	let theme = prefs.theme();

	let buttons = links
		.into_iter()
		.map(|link| {
			view! {
				<a
					href=link.url
					target="_blank"
					rel="noopener noreferrer"
					class="method-btn"
				>
					{link.label}
				</a>
			}
		})
		.collect_view();

	view! {
		<div class=format!("app-root {}", theme) style="filter: brightness(100%);">
			<ParticleFieldCanvas config=Signal::derive(move || methods_particles(theme)) />
			<main class="methods-main">
				<a class="back-link" href=Route::Home.path()>
					"← Home"
				</a>

				<h2 class="methods-title">"Methods"</h2>

				<div class="methods-grid">{buttons}</div>

				<footer class="methods-footer">"External links open in a new tab."</footer>
			</main>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_methods_particles() {
		let config = methods_particles(Theme::Glass);
		assert_eq!(config.color.to_string(), "160,160,160");
		assert_eq!(config.particle_count, 90);
		assert!((config.max_size - 3.0).abs() < 1e-9);
		assert!((config.speed - 0.7).abs() < 1e-9);
		assert!((config.opacity - 0.9).abs() < 1e-9);
	}
}
