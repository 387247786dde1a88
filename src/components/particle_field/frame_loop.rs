//! Browser frame loop driving a [`ParticleRenderer`].
//!
//! `FrameLoop` is the scoped owner of the two browser resources the field
//! needs: one `requestAnimationFrame` subscription and one window `resize`
//! listener. Both are released in [`FrameLoop::stop`], which also runs on drop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fastrand::Rng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::ParticleFieldConfig;
use super::renderer::{ParticleRenderer, RendererState, Viewport};

type AnimateCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Running animation for one canvas.
pub struct FrameLoop {
	window: Window,
	renderer: Rc<RefCell<ParticleRenderer>>,
	animate: AnimateCallback,
	resize_cb: Option<Closure<dyn FnMut()>>,
	frame_handle: Rc<Cell<Option<i32>>>,
}

/// Measures the canvas layout box and the current display density.
fn measure(window: &Window, canvas: &HtmlCanvasElement) -> Viewport {
	let rect = canvas.get_bounding_client_rect();
	Viewport::new(rect.width(), rect.height(), window.device_pixel_ratio())
}

/// Sizes the backing store and scales drawing back to layout units.
fn apply_viewport(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, viewport: &Viewport) {
	let (w, h) = viewport.backing_size();
	canvas.set_width(w);
	canvas.set_height(h);
	let scale = viewport.scale();
	let _ = ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

impl FrameLoop {
	/// Mounts a renderer on `canvas` and starts animating it.
	///
	/// Returns `None`, doing nothing, when no window or 2D context is available.
	pub fn start(canvas: HtmlCanvasElement, config: ParticleFieldConfig) -> Option<Self> {
		let window = web_sys::window()?;
		let rng = Rng::with_seed(js_sys::Math::random().to_bits());
		let mut renderer = ParticleRenderer::new(config, rng);

		let Some(ctx) = context_2d(&canvas) else {
			renderer.mount(None);
			return None;
		};

		let viewport = measure(&window, &canvas);
		apply_viewport(&canvas, &ctx, &viewport);
		renderer.mount(Some(viewport));
		let renderer = Rc::new(RefCell::new(renderer));

		let (renderer_resize, ctx_resize) = (renderer.clone(), ctx.clone());
		let resize_cb: Closure<dyn FnMut()> = Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let mut r = renderer_resize.borrow_mut();
			if r.state() != RendererState::Active {
				return;
			}
			let viewport = measure(&win, &canvas);
			apply_viewport(&canvas, &ctx_resize, &viewport);
			r.resize(viewport);
		});
		let _ = window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());

		let animate: AnimateCallback = Rc::new(RefCell::new(None));
		let frame_handle = Rc::new(Cell::new(None));
		let (renderer_anim, animate_inner, handle_inner) =
			(renderer.clone(), animate.clone(), frame_handle.clone());
		let mut ctx_anim = ctx;
		*animate.borrow_mut() = Some(Closure::new(move |t: f64| {
			handle_inner.set(None);
			{
				let mut r = renderer_anim.borrow_mut();
				if r.state() != RendererState::Active {
					return;
				}
				r.frame(t, js_sys::Date::now(), &mut ctx_anim);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				handle_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			frame_handle.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}

		Some(Self {
			window,
			renderer,
			animate,
			resize_cb: Some(resize_cb),
			frame_handle,
		})
	}

	/// Current lifecycle state of the underlying renderer.
	pub fn state(&self) -> RendererState {
		self.renderer.borrow().state()
	}

	/// Removes the resize listener, cancels the pending frame and tears the
	/// renderer down. No callback runs after this returns.
	pub fn stop(&mut self) {
		if let Some(cb) = self.resize_cb.take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		if let Some(handle) = self.frame_handle.take() {
			let _ = self.window.cancel_animation_frame(handle);
		}
		self.renderer.borrow_mut().teardown();
		// Drops the closure and with it the cycle through `animate_inner`.
		self.animate.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
