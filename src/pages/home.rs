//! Landing page: brand header, theme picker and brightness slider over the
//! particle field.

use leptos::ev;
use leptos::prelude::*;

use crate::components::particle_field::{ParticleFieldCanvas, ParticleFieldConfig};
use crate::prefs::{Brightness, PreferenceStore, Theme};
use crate::route::Route;

/// Particle preset for the landing page.
pub fn home_particles(theme: Theme) -> ParticleFieldConfig {
	ParticleFieldConfig::default()
		.with_color(theme.particle_color())
		.with_particle_count(100)
		.with_max_size(2.8)
		.with_speed(0.8)
		.with_opacity(0.95)
}

/// The landing page. Theme and brightness are read from `prefs` once and
/// written back on every change.
#[component]
pub fn HomePage(prefs: PreferenceStore, #[prop(into)] title: String) -> impl IntoView {
	let theme = RwSignal::new(prefs.theme());
	let brightness = RwSignal::new(prefs.brightness());

	let prefs_theme = prefs.clone();
	Effect::new(move |_| prefs_theme.set_theme(theme.get()));
	Effect::new(move |_| prefs.set_brightness(brightness.get()));

	let particles = Signal::derive(move || home_particles(theme.get()));

	let on_theme = move |ev: ev::Event| match event_target_value(&ev).parse::<Theme>() {
		Ok(t) => theme.set(t),
		Err(e) => log::warn!("exmade-site: {}", e),
	};
	let on_brightness = move |ev: ev::Event| {
		if let Ok(b) = event_target_value(&ev).parse::<Brightness>() {
			brightness.set(b);
		}
	};

	let theme_options = Theme::ALL
		.into_iter()
		.map(|t| {
			view! {
				<option value=t.as_str() selected=move || theme.get() == t>
					{t.label()}
				</option>
			}
		})
		.collect_view();

	view! {
		<div
			class=move || format!("app-root {}", theme.get())
			style=move || format!("filter: {};", brightness.get().css_filter())
		>
			<div class="background-layer" />
			<ParticleFieldCanvas config=particles />
			<main class="main">
				<header class="header">
					<h1 class="logo">{title.clone()}</h1>
					<div class="controls">
						<label class="control-row">
							<span>"Theme"</span>
							<select
								on:change=on_theme
								prop:value=move || theme.get().as_str()
							>
								{theme_options}
							</select>
						</label>

						<label class="control-row brightness">
							<span>"Brightness"</span>
							<input
								type="range"
								min=Brightness::MIN.to_string()
								max=Brightness::MAX.to_string()
								prop:value=move || brightness.get().to_string()
								on:input=on_brightness
								aria-label="Brightness slider"
							/>
						</label>
					</div>
				</header>

				<section class="content">
					<a class="primary-btn" href=Route::Methods.path()>
						"Methods"
					</a>
					<p class="hint">"Click Methods to view the link collection"</p>
				</section>

				<footer class="footer">{format!("{} · neon theme", title)}</footer>
			</main>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_home_particles_follow_theme() {
		let neon = home_particles(Theme::Neon);
		assert_eq!(neon.color.to_string(), "255,0,0");
		assert_eq!(neon.particle_count, 100);
		assert!((neon.max_size - 2.8).abs() < 1e-9);
		assert!((neon.speed - 0.8).abs() < 1e-9);
		assert!((neon.opacity - 0.95).abs() < 1e-9);

		let glass = home_particles(Theme::Glass);
		assert_eq!(glass.color.to_string(), "160,160,160");
		assert_eq!(ParticleFieldConfig { color: neon.color, ..glass }, neon);
	}
}
