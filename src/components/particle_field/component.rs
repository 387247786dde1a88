//! Leptos component wrapping the particle field canvas.
//!
//! The canvas fills its positioned parent and never takes pointer input, so
//! page controls layered above it stay clickable. A [`FrameLoop`] is started
//! once the canvas is in the DOM and restarted whenever the configuration
//! changes; it is dropped, and therefore stopped, when the component unmounts.

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::config::ParticleFieldConfig;
use super::frame_loop::FrameLoop;

/// Renders the ambient particle field behind page content.
#[component]
pub fn ParticleFieldCanvas(#[prop(into)] config: Signal<ParticleFieldConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop = StoredValue::new_local(None::<FrameLoop>);

	Effect::new(move |_| {
		let config = config.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		frame_loop.update_value(|slot| {
			// Stop the previous loop before its replacement touches the canvas
			*slot = None;
			*slot = FrameLoop::start(canvas, config);
		});
	});

	on_cleanup(move || {
		let _ = frame_loop.try_update_value(|slot| slot.take());
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field"
			aria-hidden="true"
			style="position: absolute; inset: 0; width: 100%; height: 100%; z-index: 0; pointer-events: none;"
		/>
	}
}
